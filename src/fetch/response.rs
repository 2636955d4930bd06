use regex::Regex;
use std::collections::HashMap;

use crate::error::AcsError;
use crate::schema::Measure;

/// Decoded response for one (table, tract) request: the header row plus the
/// data rows, cells still raw.
#[derive(Debug)]
pub struct TableValues {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl TableValues {
    /// Split the raw array-of-arrays payload into headers and data rows. An
    /// empty payload or a header row with null cells is malformed.
    pub fn from_payload(
        table: &str,
        tract: &str,
        mut payload: Vec<Vec<Option<String>>>,
    ) -> Result<Self, AcsError> {
        if payload.is_empty() {
            return Err(AcsError::BadPayload {
                table: table.to_string(),
                tract: tract.to_string(),
                detail: "empty response array".to_string(),
            });
        }
        let rows = payload.split_off(1);
        let headers = payload
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .collect::<Option<Vec<String>>>()
            .ok_or_else(|| AcsError::BadPayload {
                table: table.to_string(),
                tract: tract.to_string(),
                detail: "null cell in header row".to_string(),
            })?;
        if headers.is_empty() {
            return Err(AcsError::BadPayload {
                table: table.to_string(),
                tract: tract.to_string(),
                detail: "empty header row".to_string(),
            });
        }
        Ok(TableValues { headers, rows })
    }
}

/// Index of subject-table variables in a header row, keyed by
/// (group, line_no, measure). Variables are named `{TABLE}_C{gg}_{lll}{E|M}`.
#[derive(Debug)]
pub struct VariableMap {
    columns: HashMap<(String, String, Measure), usize>,
}

impl VariableMap {
    pub fn parse(table: &str, headers: &[String]) -> Self {
        let pat = Regex::new(&format!(
            r"^{}_C(\d{{2}})_(\d{{3}})([EM])$",
            regex::escape(table)
        ))
        .expect("variable name pattern should be well formed");

        let mut columns = HashMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if let Some(caps) = pat.captures(header) {
                let group = caps[1].to_string();
                let line_no = caps[2].to_string();
                let measure = Measure::from_code(caps[3].chars().next().unwrap_or('E'));
                if let Some(measure) = measure {
                    columns.insert((group, line_no, measure), idx);
                }
            }
        }
        VariableMap { columns }
    }

    /// Line numbers present in the header, sorted and deduplicated.
    pub fn line_numbers(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .columns
            .keys()
            .map(|(_, line_no, _)| line_no.clone())
            .collect();
        lines.sort();
        lines.dedup();
        lines
    }

    /// Column index for one (group, line_no, measure), if the API returned it.
    pub fn column(&self, group: &str, line_no: &str, measure: Measure) -> Option<usize> {
        self.columns
            .get(&(group.to_string(), line_no.to_string(), measure))
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Locate a named column like `GEO_ID` or `NAME` in the header row.
pub fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}
