use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::records::Record;

/// Aggregate dataset: date key to one record list per page of that date, in
/// sorted-filename order.
///
/// A BTreeMap keeps serialized key order deterministic; it matches the scan
/// order because pages are processed in sorted-filename order and the date
/// is a filename prefix.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    by_date: BTreeMap<String, Vec<Vec<Record>>>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page's records under its date, creating the date on first
    /// sight.
    pub fn push_page(&mut self, date: &str, records: Vec<Record>) {
        self.by_date.entry(date.to_string()).or_default().push(records);
    }

    pub fn date_count(&self) -> usize {
        self.by_date.len()
    }

    pub fn record_count(&self) -> usize {
        self.by_date.values().flatten().map(Vec::len).sum()
    }

    pub fn tests_for(&self, date: &str) -> Option<&[Vec<Record>]> {
        self.by_date.get(date).map(Vec::as_slice)
    }

    /// Serialize compactly and overwrite `path`, creating the parent
    /// directory if missing. An empty dataset writes `{}`.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {:?}", parent))?;
            }
        }

        let json = serde_json::to_string(self).context("Failed to serialize dataset")?;
        fs::write(path, json).with_context(|| format!("Failed to write {:?}", path))?;

        info!(action = "write", component = "dataset", path = ?path, "Dataset written");
        Ok(())
    }
}

/// Counters for the end-of-run summary.
#[derive(Debug)]
pub struct ConversionResult {
    pub pages: usize,
    pub records: usize,
    pub dates: usize,
    pub output_path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(team: &str, time: i64, commit: &str) -> Record {
        Record {
            team: team.to_string(),
            time,
            commit: commit.to_string(),
        }
    }

    #[test]
    fn groups_pages_under_their_date_in_push_order() {
        let mut dataset = Dataset::new();
        dataset.push_page("24_01_15", vec![record("teamA", 20, "abcdef")]);
        dataset.push_page("24_01_15", vec![record("teamB", 31, "012345")]);
        dataset.push_page("24_01_16", vec![]);

        assert_eq!(dataset.date_count(), 2);
        assert_eq!(dataset.record_count(), 2);

        let tests = dataset.tests_for("24_01_15").unwrap();
        assert_eq!(tests.len(), 2);
        assert_eq!(tests[0][0].team, "teamA");
        assert_eq!(tests[1][0].team, "teamB");
    }

    #[test]
    fn empty_dataset_serializes_to_an_empty_object() {
        assert_eq!(serde_json::to_string(&Dataset::new()).unwrap(), "{}");
    }

    #[test]
    fn serializes_dates_to_arrays_of_record_arrays() {
        let mut dataset = Dataset::new();
        dataset.push_page(
            "24_01_15",
            vec![record("teamA", 20, "abcdef"), record("teamB", 31, "012345")],
        );
        dataset.push_page("24_01_15", vec![record("teamA", 18, "abcdef")]);

        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(
            value,
            json!({
                "24_01_15": [
                    [["teamA", 20, "abcdef"], ["teamB", 31, "012345"]],
                    [["teamA", 18, "abcdef"]],
                ],
            })
        );
    }

    #[test]
    fn write_json_creates_the_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("public").join("data.json");

        Dataset::new().write_json(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn write_json_overwrites_a_previous_dataset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        let mut dataset = Dataset::new();
        dataset.push_page("24_01_15", vec![record("teamA", 20, "abcdef")]);
        dataset.write_json(&path).unwrap();

        Dataset::new().write_json(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
