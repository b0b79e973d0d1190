use std::cmp::Ordering;
use std::iter;

use bom::aggregated::{AggregatedBomItem, GlassDimensions};
use bom::line_item::BomLineItem;
use bom::part_type::PartType;
use bom::unit::is_linear_unit;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use tracing::{debug, trace, warn, Level};
use util::format::normalize_zero;

use crate::stock_cutting::{calculate_optimized_stock_pieces_with_kerf, StockCuttingConfig};

/// Identifies the line items that are summarized together.
///
/// Line items group by part number, glass is additionally grouped by pane size since each size is ordered
/// separately.  Glass without dimensions forms a single group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    pub part_number: String,
    pub glass_size: Option<GlassSize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlassSize {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

/// A length that can be used as a key.
///
/// Equality and ordering follow `f64::total_cmp`, after `-0.0` is normalized to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension(u64);

impl Dimension {
    pub fn new(value: f64) -> Self {
        Self(normalize_zero(value).to_bits())
    }

    pub fn value(&self) -> f64 {
        f64::from_bits(self.0)
    }
}

impl PartialOrd for Dimension {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dimension {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().total_cmp(&other.value())
    }
}

impl GroupKey {
    pub fn for_item(item: &BomLineItem) -> Self {
        let glass_size = match item.part_type {
            PartType::Glass => Some(GlassSize {
                width: item.glass_width.map(Dimension::new),
                height: item.glass_height.map(Dimension::new),
            }),
            _ => None,
        };

        Self {
            part_number: item.part_number.clone(),
            glass_size,
        }
    }
}

/// Aggregates with the default stock cutting configuration.
pub fn aggregate_bom_items(items: &[BomLineItem]) -> Vec<AggregatedBomItem> {
    aggregate_bom_items_with(items, &StockCuttingConfig::default())
}

/// Collapses line items into one row per `GroupKey`.
///
/// Unit, stock length, part name and part type are taken from the first line item of each group.
///
/// Rows are ordered by part type (extrusions, hardware, glass, options, then everything else) and then by part
/// number.
#[tracing::instrument(level = Level::DEBUG, skip(items), fields(items = items.len()))]
pub fn aggregate_bom_items_with(items: &[BomLineItem], config: &StockCuttingConfig) -> Vec<AggregatedBomItem> {
    let mut groups: IndexMap<GroupKey, AggregatedBomItem> = IndexMap::new();

    for item in items {
        let aggregated_item = groups
            .entry(GroupKey::for_item(item))
            .or_insert_with(|| start_group(item));

        accumulate(aggregated_item, item);
    }

    let mut aggregated_items = groups
        .into_values()
        .map(|aggregated_item| finish_group(aggregated_item, config))
        .collect::<Vec<_>>();

    aggregated_items.sort_by(compare_for_presentation);

    debug!(
        "Aggregated line items. items: {}, groups: {}",
        items.len(),
        aggregated_items.len()
    );

    aggregated_items
}

/// The sum of the row costs, rows without a cost count as zero.
pub fn bom_total_cost(items: &[AggregatedBomItem]) -> Decimal {
    items
        .iter()
        .filter_map(|item| item.total_cost)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

fn compare_for_presentation(a: &AggregatedBomItem, b: &AggregatedBomItem) -> Ordering {
    a.part_type
        .rank()
        .cmp(&b.part_type.rank())
        .then_with(|| a.part_number.cmp(&b.part_number))
}

fn start_group(item: &BomLineItem) -> AggregatedBomItem {
    let (glass_width, glass_height) = match item.part_type {
        PartType::Glass => (item.glass_width, item.glass_height),
        _ => (None, None),
    };

    AggregatedBomItem {
        part_number: item.part_number.clone(),
        part_name: item.part_name.clone(),
        part_type: item.part_type.clone(),
        total_quantity: 0,
        unit: item.unit.clone(),
        stock_length: item.stock_length,
        cut_lengths: vec![],
        total_cut_length: 0.0,
        calculated_lengths: vec![],
        total_calculated_length: 0.0,
        glass_dimensions: vec![],
        total_area: 0.0,
        glass_width,
        glass_height,
        stock_pieces_needed: None,
        waste_percent: None,
        total_cost: None,
    }
}

fn accumulate(aggregated_item: &mut AggregatedBomItem, item: &BomLineItem) {
    trace!("Accumulating line item. item: {:?}", item);

    if item.unit != aggregated_item.unit {
        warn!(
            "Inconsistent unit in group, keeping the first. part_number: {}, unit: '{}', ignored: '{}'",
            aggregated_item.part_number, aggregated_item.unit, item.unit
        );
    }

    let quantity = item.quantity_or_default();
    aggregated_item.total_quantity = aggregated_item
        .total_quantity
        .saturating_add(quantity);

    match aggregated_item.part_type {
        PartType::Extrusion => {
            if let Some(cut_length) = item.cut_length {
                aggregated_item
                    .cut_lengths
                    .extend(iter::repeat(cut_length).take(quantity as usize));
            }
        }
        PartType::Glass => {
            aggregated_item
                .glass_dimensions
                .push(GlassDimensions {
                    width: item.glass_width,
                    height: item.glass_height,
                    area: item.glass_area,
                });
            aggregated_item.total_area += item.glass_area.unwrap_or_default();
        }
        ref part_type if part_type.is_length_billable() && is_linear_unit(&aggregated_item.unit) => {
            if let Some(calculated_length) = item.calculated_length {
                aggregated_item
                    .calculated_lengths
                    .extend(iter::repeat(calculated_length).take(quantity as usize));
            }
        }
        _ => {}
    }

    if let Some(unit_cost) = item.unit_cost {
        let cost = unit_cost.saturating_mul(Decimal::from(quantity));
        aggregated_item.total_cost = Some(
            aggregated_item
                .total_cost
                .unwrap_or_default()
                .saturating_add(cost),
        );
    }
}

fn finish_group(mut aggregated_item: AggregatedBomItem, config: &StockCuttingConfig) -> AggregatedBomItem {
    aggregated_item.total_cut_length = aggregated_item.cut_lengths.iter().sum();
    aggregated_item.total_calculated_length = aggregated_item
        .calculated_lengths
        .iter()
        .sum();

    if let (PartType::Extrusion, Some(stock_length)) = (&aggregated_item.part_type, aggregated_item.stock_length) {
        if !aggregated_item.cut_lengths.is_empty() && stock_length > 0.0 {
            let result = calculate_optimized_stock_pieces_with_kerf(
                &aggregated_item.cut_lengths,
                stock_length,
                config.kerf_width,
            );
            aggregated_item.stock_pieces_needed = Some(result.stock_pieces_needed);
            aggregated_item.waste_percent = Some(result.waste_percent);
        }
    }

    aggregated_item
}
