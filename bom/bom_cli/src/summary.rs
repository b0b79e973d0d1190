use bom_utils::aggregate::aggregate_bom_items_with;
use bom_utils::report::{report_file_name, BomReport};
use bom_utils::stock_cutting::StockCuttingConfig;
use bom_utils::summary::{generate_summary_csv, summary_file_name};
use stores::line_items::{load_line_items, LineItemsSource};
use stores::summary::store_summary;
use tracing::info;

use crate::opts::{OutputFormatArg, SummaryArgs};

pub(crate) fn run(args: SummaryArgs) -> anyhow::Result<()> {
    let source = LineItemsSource::try_from_path(&args.path, &args.items)?;
    let line_items = load_line_items(&source)?;

    let config = StockCuttingConfig::new().with_kerf_width(args.kerf);
    let items = aggregate_bom_items_with(&line_items, &config);

    let report = BomReport::build(&args.project, items);

    let (content, default_file_name) = match args.format {
        OutputFormatArg::Csv => (
            generate_summary_csv(&args.project, &report.items),
            summary_file_name(&args.project),
        ),
        OutputFormatArg::Json => (report.to_json()?, report_file_name(&args.project)),
    };

    let output_path = match args.output {
        Some(output) => args.path.join(output),
        None => args.path.join(default_file_name),
    };
    store_summary(&output_path, &content)?;

    info!(
        "Summary complete. project: '{}', line_items: {}, rows: {}, stock_pieces: {}, total_cost: {}, output: {}",
        args.project,
        line_items.len(),
        report.item_count,
        report.total_stock_pieces,
        report.total_cost,
        output_path.display(),
    );

    Ok(())
}
