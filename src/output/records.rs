use tracing::warn;

use crate::fetch::{find_column, TableValues, VariableMap};
use crate::labels::LabelMap;
use crate::schema::{clean_cell, TableSchema};

/// One tidy output row: a fetch result for a single line number joined with
/// its label and the request's identity columns.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRecord {
    pub geo_id: Option<String>,
    pub name: Option<String>,
    pub line_no: String,
    pub label: String,
    /// Cleaned values, parallel to the schema's value columns.
    pub values: Vec<Option<f64>>,
}

/// Join one fetch result with the table's labels. Produces one record per
/// (data row, line number), drops rows carrying no value in any schema
/// column, and sorts by (GEO_ID, line_no).
pub fn build_records(
    table: &str,
    schema: &TableSchema,
    values: &TableValues,
    labels: &LabelMap,
) -> Vec<OutputRecord> {
    let varmap = VariableMap::parse(table, &values.headers);
    if varmap.is_empty() {
        warn!(table = %table, "no variables for table in response headers");
    }
    let geo_idx = find_column(&values.headers, "GEO_ID");
    let name_idx = find_column(&values.headers, "NAME");
    let line_nos = varmap.line_numbers();

    let cell = |row: &[Option<String>], idx: Option<usize>| -> Option<String> {
        idx.and_then(|i| row.get(i)).and_then(|c| c.clone())
    };

    let mut records = Vec::new();
    for row in &values.rows {
        for line_no in &line_nos {
            let row_values: Vec<Option<f64>> = schema
                .columns
                .iter()
                .map(|col| {
                    varmap
                        .column(col.group, line_no, col.measure)
                        .and_then(|i| row.get(i))
                        .and_then(|c| c.as_deref())
                        .and_then(clean_cell)
                })
                .collect();

            // keep rows with at least one meaningful value
            if row_values.iter().all(Option::is_none) {
                continue;
            }

            let label = match labels.get(line_no) {
                Some(l) => l.to_string(),
                None => {
                    warn!(table = %table, line_no = %line_no, "no label for line number");
                    String::new()
                }
            };

            records.push(OutputRecord {
                geo_id: cell(row, geo_idx),
                name: cell(row, name_idx),
                line_no: line_no.clone(),
                label,
                values: row_values,
            });
        }
    }

    records.sort_by(|a, b| {
        let ka = (a.geo_id.as_deref().unwrap_or(""), a.line_no.as_str());
        let kb = (b.geo_id.as_deref().unwrap_or(""), b.line_no.as_str());
        ka.cmp(&kb)
    });
    records
}
