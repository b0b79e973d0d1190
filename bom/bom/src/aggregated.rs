use rust_decimal::Decimal;

use crate::part_type::PartType;

/// One summary row per distinct part (and, for glass, per distinct pane size).
///
/// Values that are only meaningful for some part types are left empty/zero for the others, and `None` is used
/// where "not applicable" must be distinguished from zero.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AggregatedBomItem {
    pub part_number: String,
    pub part_name: String,
    pub part_type: PartType,
    pub total_quantity: u32,
    pub unit: String,
    pub stock_length: Option<f64>,

    /// One entry per physical cut.
    pub cut_lengths: Vec<f64>,
    pub total_cut_length: f64,

    /// One entry per unit of hardware billed by length.
    pub calculated_lengths: Vec<f64>,
    pub total_calculated_length: f64,

    /// One entry per contributing line item, regardless of its quantity.
    pub glass_dimensions: Vec<GlassDimensions>,
    pub total_area: f64,
    pub glass_width: Option<f64>,
    pub glass_height: Option<f64>,

    pub stock_pieces_needed: Option<u32>,
    pub waste_percent: Option<f64>,

    /// `None` if no contributing line item has a unit cost.
    pub total_cost: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlassDimensions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub area: Option<f64>,
}
