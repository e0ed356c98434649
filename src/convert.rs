use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::dataset::{ConversionResult, Dataset};
use crate::{extract, pages, records, utils};

/// Convert every page under `scrap_dir` into the aggregate dataset at
/// `output_path`.
///
/// One sequential pass in sorted-filename order; the output file is only
/// written once every page has parsed.
pub fn convert_scrap(scrap_dir: &Path, output_path: &Path) -> Result<ConversionResult> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "conversion",
        scrap_dir = ?scrap_dir,
        "Starting scrap conversion"
    );

    let pages = pages::scan_pages(scrap_dir)?;

    let mut dataset = Dataset::new();
    let mut record_total = 0usize;
    for page in &pages {
        let html = pages::read_page(page)?;
        let raw_records = extract::list_item_texts(&html)?;
        let records = raw_records
            .iter()
            .map(|raw| records::parse_record(raw))
            .collect::<Result<Vec<_>>>()?;

        info!(
            action = "parse",
            component = "conversion",
            page = page.file_name.as_str(),
            date = page.date.as_str(),
            test_index = page.test_index,
            record_count = records.len(),
            "Page parsed"
        );

        record_total += records.len();
        dataset.push_page(&page.date, records);
    }

    dataset.write_json(output_path)?;

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "conversion",
        page_count = pages.len(),
        record_count = record_total,
        date_count = dataset.date_count(),
        duration_ms = total_time.as_millis(),
        "Conversion completed successfully"
    );

    Ok(ConversionResult {
        pages: pages.len(),
        records: record_total,
        dates: dataset.date_count(),
        output_path: output_path.to_path_buf(),
    })
}

pub fn print_summary(result: &ConversionResult) {
    println!("\n--- Scrap conversion ---");
    println!(
        "Pages converted: {}",
        utils::format_number(result.pages as u32)
    );
    println!(
        "Records parsed: {}",
        utils::format_number(result.records as u32)
    );
    println!(
        "Dates covered: {}",
        utils::format_number(result.dates as u32)
    );
    println!("Dataset written to {}", result.output_path.display());
}
