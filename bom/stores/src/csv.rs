use bom::line_item::BomLineItem;
use bom::part_type::PartType;
use rust_decimal::Decimal;
use serde_with::serde_as;
use serde_with::DisplayFromStr;
use thiserror::Error;

/// A line item, as exported from the quoting application.
///
/// Empty cells are `None`.
#[serde_as]
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineItemRecord {
    pub part_number: String,
    pub part_name: String,
    pub part_type: String,
    pub quantity: Option<u32>,
    pub unit: String,
    pub stock_length: Option<f64>,
    pub cut_length: Option<f64>,
    pub calculated_length: Option<f64>,
    pub glass_width: Option<f64>,
    pub glass_height: Option<f64>,
    pub glass_area: Option<f64>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub unit_cost: Option<Decimal>,
}

#[derive(Error, Debug)]
pub enum LineItemRecordError {
    #[error("Missing part number")]
    MissingPartNumber,
    #[error("Quantity must be greater than zero. part_number: {part_number}")]
    ZeroQuantity { part_number: String },
}

impl LineItemRecord {
    pub fn build_line_item(&self) -> Result<BomLineItem, LineItemRecordError> {
        if self.part_number.is_empty() {
            return Err(LineItemRecordError::MissingPartNumber);
        }
        if self.quantity == Some(0) {
            return Err(LineItemRecordError::ZeroQuantity {
                part_number: self.part_number.clone(),
            });
        }

        Ok(BomLineItem {
            part_number: self.part_number.clone(),
            part_name: self.part_name.clone(),
            part_type: PartType::from(self.part_type.as_str()),
            quantity: self.quantity,
            unit: self.unit.clone(),
            stock_length: self.stock_length,
            cut_length: self.cut_length,
            calculated_length: self.calculated_length,
            glass_width: self.glass_width,
            glass_height: self.glass_height,
            glass_area: self.glass_area,
            unit_cost: self.unit_cost,
        })
    }
}

impl From<&BomLineItem> for LineItemRecord {
    fn from(item: &BomLineItem) -> Self {
        Self {
            part_number: item.part_number.clone(),
            part_name: item.part_name.clone(),
            part_type: item.part_type.to_string(),
            quantity: item.quantity,
            unit: item.unit.clone(),
            stock_length: item.stock_length,
            cut_length: item.cut_length,
            calculated_length: item.calculated_length,
            glass_width: item.glass_width,
            glass_height: item.glass_height,
            glass_area: item.glass_area,
            unit_cost: item.unit_cost,
        }
    }
}
