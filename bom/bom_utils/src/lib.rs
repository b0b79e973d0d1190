//! Estimation of material requirements from a bill of materials.
//!
//! * `stock_cutting` - how many stock lengths must be purchased for a set of cuts.
//! * `aggregate` - collapses raw line items into one summary row per part.
//! * `summary` - CSV export of the summary rows.
//! * `report` - JSON export of the summary rows, with totals.
//!
//! All operations are total; degenerate input yields empty/zero/`None` output rather than an error.

pub mod aggregate;
pub mod report;
pub mod stock_cutting;
pub mod summary;

#[cfg(test)]
mod tests;
