use bom::aggregated::AggregatedBomItem;
use heck::ToKebabCase;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::bom_total_cost;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomReport {
    pub name: String,
    pub item_count: usize,
    pub total_quantity: u64,
    /// Sum over the rows that have been packed.
    pub total_stock_pieces: u64,
    pub total_cost: Decimal,
    pub items: Vec<AggregatedBomItem>,
}

impl BomReport {
    pub fn build(project_name: &str, items: Vec<AggregatedBomItem>) -> Self {
        let total_quantity = items
            .iter()
            .map(|item| u64::from(item.total_quantity))
            .sum();
        let total_stock_pieces = items
            .iter()
            .filter_map(|item| item.stock_pieces_needed)
            .map(u64::from)
            .sum();

        Self {
            name: project_name.to_string(),
            item_count: items.len(),
            total_quantity,
            total_stock_pieces,
            total_cost: bom_total_cost(&items),
            items,
        }
    }

    /// Pretty JSON with four-space indentation, terminated with a newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buffer, formatter);

        self.serialize(&mut ser)?;

        // serde_json only ever writes valid UTF-8
        let mut content = String::from_utf8_lossy(&buffer).into_owned();
        content.push('\n');

        Ok(content)
    }
}

/// e.g. 'Smith Residence' -> 'smith-residence-bom-report.json'
pub fn report_file_name(project_name: &str) -> String {
    let project_name = project_name.to_kebab_case();
    match project_name.is_empty() {
        true => "bom-report.json".to_string(),
        false => format!("{}-bom-report.json", project_name),
    }
}
