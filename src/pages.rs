use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// One entry of the scrap directory: a saved standings page for a single
/// (date, test) pair.
#[derive(Debug, Clone)]
pub struct Page {
    pub file_name: String,
    pub path: PathBuf,
    pub date: String,
    pub test_index: u32,
}

/// Derive the (date, test index) pair encoded in a page's filename.
///
/// Filenames look like `<8-char-date><test-digit>.html`: the date is the
/// stem's first 8 characters, the test index its last character.
pub fn split_file_name(file_name: &str) -> Result<(String, u32)> {
    let stem = file_name
        .strip_suffix(".html")
        .with_context(|| format!("Page '{file_name}' does not end in .html"))?;

    if stem.len() < 9 {
        bail!(
            "Page '{}' has a {}-character stem, expected at least 9",
            file_name,
            stem.len()
        );
    }

    let date = stem
        .get(..8)
        .with_context(|| format!("Page '{file_name}' has a non-ASCII date prefix"))?;
    let test_index = stem
        .chars()
        .last()
        .and_then(|c| c.to_digit(10))
        .with_context(|| format!("Page '{file_name}' does not end in a test digit"))?;

    Ok((date.to_string(), test_index))
}

/// List the scrap directory in lexically ascending filename order.
///
/// Every entry must match the expected filename shape; one that doesn't is
/// fatal for the whole run.
pub fn scan_pages(dir: &Path) -> Result<Vec<Page>> {
    let start_time = Instant::now();
    info!(action = "start", component = "page_scan", directory = ?dir, "Scanning page directory");

    if !dir.is_dir() {
        bail!("Page directory not found at {:?}", dir);
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list {:?}", dir))? {
        let entry = entry.with_context(|| format!("Failed to list {:?}", dir))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();

    let mut pages = Vec::with_capacity(names.len());
    for file_name in names {
        let (date, test_index) = split_file_name(&file_name)?;
        pages.push(Page {
            path: dir.join(&file_name),
            file_name,
            date,
            test_index,
        });
    }

    let scan_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "page_scan",
        page_count = pages.len(),
        duration_ms = scan_time.as_millis(),
        "Page directory scanned"
    );

    Ok(pages)
}

pub fn read_page(page: &Page) -> Result<String> {
    fs::read_to_string(&page.path).with_context(|| format!("Failed to read page {:?}", page.path))
}
