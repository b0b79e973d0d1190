use std::path::Path;

use anyhow::{Context, Error};
use bom::line_item::BomLineItem;
use csv::QuoteStyle;
use tracing::{info, trace, Level};
use util::source::Source;

use crate::csv::LineItemRecord;

pub type LineItemsSource = Source;

#[tracing::instrument(level = Level::DEBUG)]
pub fn load_line_items(source: &LineItemsSource) -> Result<Vec<BomLineItem>, Error> {
    info!("Loading line items. source: {}", source);

    let path = source.path();

    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Error reading line items. file: {}", path.display()))?;

    let mut line_items: Vec<BomLineItem> = vec![];

    for result in csv_reader.deserialize() {
        let record: LineItemRecord = result.with_context(|| "Deserializing line item record".to_string())?;

        trace!("{:?}", record);

        let line_item = record
            .build_line_item()
            .with_context(|| format!("Building line item from record. record: {:?}", record))?;

        line_items.push(line_item);
    }

    info!("Loaded line items. count: {}", line_items.len());

    Ok(line_items)
}

pub fn store_line_items(path: &Path, line_items: &[BomLineItem]) -> Result<(), Error> {
    info!("Storing line items. path: {}", path.display());

    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)
        .with_context(|| format!("Error writing line items. file: {}", path.display()))?;

    for line_item in line_items {
        writer.serialize(LineItemRecord::from(line_item))?;
    }

    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use bom::part_type::PartType;
    use indoc::indoc;
    use rust_decimal_macros::dec;
    use tempfile::tempdir;
    use util::test::build_temp_file;

    use super::*;
    use crate::test::line_items_builder::{LineItemsCSVBuilder, TestLineItemRecord};

    #[test]
    fn load_with_empty_cells() {
        // given
        let temp_dir = tempdir().unwrap();
        let (path, _file_name) = build_temp_file(&temp_dir, "line_items", "csv");

        let content = LineItemsCSVBuilder::new()
            .with_items(&[
                TestLineItemRecord {
                    part_number: "EX-100".to_string(),
                    part_name: "Sill".to_string(),
                    part_type: "Extrusion".to_string(),
                    quantity: Some(2),
                    unit: "EA".to_string(),
                    stock_length: Some(288.0),
                    cut_length: Some(42.5),
                    ..TestLineItemRecord::default()
                },
                TestLineItemRecord {
                    part_number: "GL-1".to_string(),
                    part_name: "Tempered".to_string(),
                    part_type: "Glass".to_string(),
                    unit: "SQ FT".to_string(),
                    glass_width: Some(40.0),
                    glass_height: Some(106.0),
                    glass_area: Some(29.44),
                    unit_cost: Some("12.50".to_string()),
                    ..TestLineItemRecord::default()
                },
            ])
            .as_string();
        fs::write(&path, content).unwrap();

        let source = LineItemsSource::try_from_existing_file(path).unwrap();

        // when
        let line_items = load_line_items(&source).unwrap();

        // then
        assert_eq!(line_items, vec![
            BomLineItem::new(
                "EX-100".to_string(),
                "Sill".to_string(),
                PartType::Extrusion,
                "EA".to_string()
            )
            .with_quantity(2)
            .with_stock_length(288.0)
            .with_cut_length(42.5),
            BomLineItem::new(
                "GL-1".to_string(),
                "Tempered".to_string(),
                PartType::Glass,
                "SQ FT".to_string()
            )
            .with_glass(40.0, 106.0, 29.44)
            .with_unit_cost(dec!(12.50)),
        ]);
    }

    #[test]
    fn load_without_unit_cost_column() {
        // given
        let temp_dir = tempdir().unwrap();
        let (path, _file_name) = build_temp_file(&temp_dir, "line_items", "csv");

        let content = indoc! {r#"
            PartNumber,PartName,PartType,Quantity,Unit,StockLength,CutLength,CalculatedLength,GlassWidth,GlassHeight,GlassArea
            WS-10,Weatherstrip,Hardware,2,LF,,,8.5,,,
            SC-1,Screen,Screen,,EA,,,,,,
        "#};
        fs::write(&path, content).unwrap();

        let source = LineItemsSource::try_from_existing_file(path).unwrap();

        // when
        let line_items = load_line_items(&source).unwrap();

        // then
        assert_eq!(line_items.len(), 2);
        assert_eq!(line_items[0].calculated_length, Some(8.5));
        assert_eq!(line_items[0].unit_cost, None);
        assert_eq!(line_items[1].part_type, PartType::Other("Screen".to_string()));
        assert_eq!(line_items[1].quantity, None);
    }

    #[test]
    fn load_unquoted_unit_cost() {
        // given
        let temp_dir = tempdir().unwrap();
        let (path, _file_name) = build_temp_file(&temp_dir, "line_items", "csv");

        let content = indoc! {r#"
            PartNumber,PartName,PartType,Quantity,Unit,StockLength,CutLength,CalculatedLength,GlassWidth,GlassHeight,GlassArea,UnitCost
            HW-1,Hinge,Hardware,3,EA,,,,,,,2.50
            HW-2,Latch,Hardware,1,EA,,,,,,,
        "#};
        fs::write(&path, content).unwrap();

        let source = LineItemsSource::try_from_existing_file(path).unwrap();

        // when
        let line_items = load_line_items(&source).unwrap();

        // then
        assert_eq!(line_items[0].unit_cost, Some(dec!(2.50)));
        assert_eq!(
            line_items[0]
                .unit_cost
                .map(|unit_cost| unit_cost.scale()),
            Some(2)
        );
        assert_eq!(line_items[1].unit_cost, None);
    }

    #[test]
    fn zero_quantity_is_rejected() {
        // given
        let temp_dir = tempdir().unwrap();
        let (path, _file_name) = build_temp_file(&temp_dir, "line_items", "csv");

        let content = LineItemsCSVBuilder::new()
            .with_items(&[TestLineItemRecord {
                part_number: "HW-1".to_string(),
                part_name: "Hinge".to_string(),
                part_type: "Hardware".to_string(),
                quantity: Some(0),
                unit: "EA".to_string(),
                ..TestLineItemRecord::default()
            }])
            .as_string();
        fs::write(&path, content).unwrap();

        let source = LineItemsSource::try_from_existing_file(path).unwrap();

        // when
        let result = load_line_items(&source);

        // then
        let error = result.unwrap_err();
        assert!(format!("{:#}", error).contains("Quantity must be greater than zero. part_number: HW-1"));
    }

    #[test]
    fn store_then_load() {
        // given
        let temp_dir = tempdir().unwrap();
        let (path, _file_name) = build_temp_file(&temp_dir, "line_items", "csv");

        let line_items = vec![
            BomLineItem::new(
                "HW-1".to_string(),
                "Hinge, \"Heavy\"".to_string(),
                PartType::Hardware,
                "EA".to_string(),
            )
            .with_quantity(3)
            .with_unit_cost(dec!(4.75)),
        ];

        // when
        store_line_items(&path, &line_items).unwrap();
        let source = LineItemsSource::try_from_existing_file(path).unwrap();
        let loaded = load_line_items(&source).unwrap();

        // then
        assert_eq!(loaded, line_items);
    }
}
