//! Row labels for subject tables. Each registered table needs a
//! `<labels-dir>/<TABLE>.csv` with a `line_no,label` header; adding a table to
//! the registry without its label file fails the run before any request.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::AcsError;

#[derive(Debug, Deserialize)]
struct LabelRow {
    line_no: String,
    label: String,
}

/// Mapping from 3-digit line number to descriptive label for one table.
#[derive(Debug, Default)]
pub struct LabelMap {
    labels: HashMap<String, String>,
}

impl LabelMap {
    pub fn get(&self, line_no: &str) -> Option<&str> {
        self.labels.get(line_no).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[cfg(test)]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        LabelMap {
            labels: pairs.into_iter().collect(),
        }
    }
}

/// Load the label file for one table. Line numbers are zero-padded to three
/// digits to match the API's variable naming; rows with a blank line_no are
/// skipped. Spreadsheet exports often carry a UTF-8 BOM, so strip it first.
pub fn load(labels_dir: &Path, table: &str) -> Result<LabelMap, AcsError> {
    let path = labels_dir.join(format!("{}.csv", table));
    if !path.is_file() {
        return Err(AcsError::MissingLabels {
            table: table.to_string(),
            path,
        });
    }

    let raw = fs::read_to_string(&path).map_err(|source| AcsError::LabelRead {
        path: path.clone(),
        source,
    })?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);

    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let mut labels = HashMap::new();
    for row in reader.deserialize::<LabelRow>() {
        let row = row.map_err(|source| AcsError::LabelParse {
            path: path.clone(),
            source,
        })?;
        let line_no = row.line_no.trim();
        if line_no.is_empty() {
            continue;
        }
        labels.insert(format!("{:0>3}", line_no), row.label.trim().to_string());
    }

    Ok(LabelMap { labels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_and_zero_pads_line_numbers() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("S0101.csv"),
            "line_no,label\n1,Total population\n019,Median age (years)\n",
        )
        .unwrap();

        let map = load(dir.path(), "S0101").unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("001"), Some("Total population"));
        assert_eq!(map.get("019"), Some("Median age (years)"));
        assert_eq!(map.get("1"), None);
    }

    #[test]
    fn strips_utf8_bom() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("S1701.csv"),
            "\u{feff}line_no,label\n001,Population for whom poverty status is determined\n",
        )
        .unwrap();

        let map = load(dir.path(), "S1701").unwrap();
        assert_eq!(
            map.get("001"),
            Some("Population for whom poverty status is determined")
        );
    }

    #[test]
    fn blank_line_numbers_are_skipped() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("S0101.csv"),
            "line_no,label\n,orphan label\n2,Under 5 years\n",
        )
        .unwrap();

        let map = load(dir.path(), "S0101").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("002"), Some("Under 5 years"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load(dir.path(), "S0101").unwrap_err();
        match err {
            AcsError::MissingLabels { table, path } => {
                assert_eq!(table, "S0101");
                assert!(path.ends_with("S0101.csv"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
