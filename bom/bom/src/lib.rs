//! Bill-of-materials domain types.
//!
//! A `BomLineItem` is one raw required part instance, as produced by the product/option configuration.
//! An `AggregatedBomItem` is one summary row per part, as produced by the aggregation in `bom_utils`.

pub mod aggregated;
pub mod line_item;
pub mod part_type;
pub mod unit;
