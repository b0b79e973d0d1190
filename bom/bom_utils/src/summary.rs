//! CSV export of aggregated BOM rows, for spreadsheet import.

use bom::aggregated::AggregatedBomItem;
use bom::part_type::PartType;
use bom::unit::is_linear_unit;
use csv::{QuoteStyle, Terminator};
use heck::ToKebabCase;
use itertools::Itertools;
use thiserror::Error;
use tracing::{error, info, Level};
use util::format::{format_number, normalize_zero, to_fixed};

pub const SUMMARY_HEADERS: [&str; 10] = [
    "Part Number",
    "Part Name",
    "Type",
    "Size (WxH)",
    "Pieces",
    "Unit",
    "Stock Length",
    "Stock Pieces to Order",
    "Waste %",
    "Area (SQ FT)",
];

#[derive(Error, Debug)]
enum SummaryError {
    #[error("CSV error. cause: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error. cause: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid UTF-8. cause: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders the rows as CSV, every field is quoted and rows are separated by `\n` without a trailing newline.
///
/// The header row is always present, even when there are no rows.
#[tracing::instrument(level = Level::DEBUG, skip(items), fields(items = items.len()))]
pub fn generate_summary_csv(project_name: &str, items: &[AggregatedBomItem]) -> String {
    match write_summary_csv(items) {
        Ok(content) => {
            info!("Generated BOM summary. project: '{}', rows: {}", project_name, items.len());
            content
        }
        Err(error) => {
            // unreachable in practice, the writer only writes to memory
            error!("Unable to generate BOM summary. project: '{}', error: {}", project_name, error);
            String::new()
        }
    }
}

/// e.g. 'Smith Residence' -> 'smith-residence-bom-summary.csv'
pub fn summary_file_name(project_name: &str) -> String {
    let project_name = project_name.to_kebab_case();
    match project_name.is_empty() {
        true => "bom-summary.csv".to_string(),
        false => format!("{}-bom-summary.csv", project_name),
    }
}

fn write_summary_csv(items: &[AggregatedBomItem]) -> Result<String, SummaryError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(vec![]);

    writer.write_record(SUMMARY_HEADERS)?;
    for item in items {
        writer.write_record(summary_row(item))?;
    }

    let buffer = writer
        .into_inner()
        .map_err(|error| error.into_error())?;
    let mut content = String::from_utf8(buffer)?;

    // the writer terminates every record
    if content.ends_with('\n') {
        content.pop();
    }

    Ok(content)
}

fn summary_row(item: &AggregatedBomItem) -> [String; 10] {
    [
        item.part_number.clone(),
        item.part_name.clone(),
        item.part_type.to_string(),
        size_column(item),
        item.total_quantity.to_string(),
        item.unit.clone(),
        item.stock_length
            .map(format_number)
            .unwrap_or_default(),
        item.stock_pieces_needed
            .map(|pieces| pieces.to_string())
            .unwrap_or_default(),
        item.waste_percent
            .map(|waste_percent| format!("{}%", format_number(waste_percent)))
            .unwrap_or_default(),
        area_column(item),
    ]
}

fn size_column(item: &AggregatedBomItem) -> String {
    match &item.part_type {
        PartType::Extrusion => item
            .cut_lengths
            .iter()
            .unique_by(|cut_length| normalize_zero(**cut_length).to_bits())
            .map(|cut_length| to_fixed(*cut_length, 2))
            .join(", "),
        PartType::Glass => match (item.glass_width, item.glass_height) {
            (Some(width), Some(height)) => format!("{} x {}", to_fixed(width, 2), to_fixed(height, 2)),
            _ => String::new(),
        },
        part_type if part_type.is_length_billable() && is_linear_unit(&item.unit) => {
            format!("{} {}", to_fixed(item.total_calculated_length, 2), item.unit)
        }
        _ => String::new(),
    }
}

fn area_column(item: &AggregatedBomItem) -> String {
    match item.part_type {
        PartType::Glass if item.total_area > 0.0 => to_fixed(item.total_area, 2),
        _ => String::new(),
    }
}
