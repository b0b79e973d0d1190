use rust_decimal::Decimal;

use crate::part_type::PartType;

/// One raw required part instance.
///
/// Lengths are in the same unit as the stock length, typically inches.  Formula-driven values (cut length,
/// calculated length, glass area) have already been resolved upstream.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BomLineItem {
    pub part_number: String,
    pub part_name: String,
    pub part_type: PartType,
    /// `None` means 1.
    pub quantity: Option<u32>,
    pub unit: String,
    /// Nominal length of the raw material that can be purchased, e.g. a 288" extrusion bar.
    pub stock_length: Option<f64>,
    /// Length consumed per unit, for extrusions.
    pub cut_length: Option<f64>,
    /// Length consumed per unit, for hardware billed by length.
    pub calculated_length: Option<f64>,
    pub glass_width: Option<f64>,
    pub glass_height: Option<f64>,
    pub glass_area: Option<f64>,
    pub unit_cost: Option<Decimal>,
}

impl BomLineItem {
    pub fn new(part_number: String, part_name: String, part_type: PartType, unit: String) -> Self {
        Self {
            part_number,
            part_name,
            part_type,
            quantity: None,
            unit,
            stock_length: None,
            cut_length: None,
            calculated_length: None,
            glass_width: None,
            glass_height: None,
            glass_area: None,
            unit_cost: None,
        }
    }

    pub fn quantity_or_default(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_stock_length(mut self, stock_length: f64) -> Self {
        self.stock_length = Some(stock_length);
        self
    }

    pub fn with_cut_length(mut self, cut_length: f64) -> Self {
        self.cut_length = Some(cut_length);
        self
    }

    pub fn with_calculated_length(mut self, calculated_length: f64) -> Self {
        self.calculated_length = Some(calculated_length);
        self
    }

    /// Sets the glass dimensions, area is in square feet.
    pub fn with_glass(mut self, width: f64, height: f64, area: f64) -> Self {
        self.glass_width = Some(width);
        self.glass_height = Some(height);
        self.glass_area = Some(area);
        self
    }

    pub fn with_unit_cost(mut self, unit_cost: Decimal) -> Self {
        self.unit_cost = Some(unit_cost);
        self
    }
}

#[cfg(feature = "testing")]
impl Default for BomLineItem {
    fn default() -> Self {
        Self::new(
            "Default Part Number".to_string(),
            "Default Part Name".to_string(),
            PartType::Hardware,
            "EA".to_string(),
        )
    }
}
