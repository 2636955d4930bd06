use std::path::Path;

use super::records::OutputRecord;
use crate::error::AcsError;
use crate::schema::{format_value, TableSchema, ID_FIELDS};

/// Write records as a tidy CSV: identity fields then the schema's value
/// columns, missing values as empty cells.
pub fn write_records(
    path: &Path,
    schema: &TableSchema,
    records: &[OutputRecord],
) -> Result<(), AcsError> {
    let io_err = |source| AcsError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(io_err)?;
    writer.write_record(schema.field_names()).map_err(io_err)?;

    for rec in records {
        let mut row: Vec<String> = Vec::with_capacity(ID_FIELDS.len() + rec.values.len());
        row.push(rec.geo_id.clone().unwrap_or_default());
        row.push(rec.name.clone().unwrap_or_default());
        row.push(rec.line_no.clone());
        row.push(rec.label.clone());
        for value in &rec.values {
            row.push(value.map(format_value).unwrap_or_default());
        }
        writer.write_record(&row).map_err(io_err)?;
    }

    writer.flush().map_err(|e| AcsError::OutputWrite {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    Ok(())
}

/// Read a tidy CSV back into records. Empty identity cells come back as
/// `None`, empty value cells as missing values.
pub fn read_records(path: &Path, schema: &TableSchema) -> Result<Vec<OutputRecord>, AcsError> {
    let io_err = |source| AcsError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(io_err)?;
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(io_err)?;
        let field = |i: usize| row.get(i).unwrap_or("").to_string();
        let opt_field = |i: usize| {
            let s = field(i);
            if s.is_empty() {
                None
            } else {
                Some(s)
            }
        };
        let values = (0..schema.columns.len())
            .map(|i| {
                let s = field(ID_FIELDS.len() + i);
                if s.is_empty() {
                    None
                } else {
                    s.parse::<f64>().ok()
                }
            })
            .collect();
        records.push(OutputRecord {
            geo_id: opt_field(0),
            name: opt_field(1),
            line_no: field(2),
            label: field(3),
            values,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use std::fs;
    use tempfile::tempdir;

    fn sample_records() -> Vec<OutputRecord> {
        vec![
            OutputRecord {
                geo_id: Some("1400000US48021950801".to_string()),
                name: Some("Census Tract 9508.01, Bastrop County, Texas".to_string()),
                line_no: "001".to_string(),
                label: "Population for whom poverty status is determined".to_string(),
                values: vec![
                    Some(4521.0),
                    Some(612.0),
                    Some(703.0),
                    Some(241.0),
                    Some(15.5),
                    Some(5.1),
                ],
            },
            OutputRecord {
                geo_id: Some("1400000US48021950801".to_string()),
                name: None,
                line_no: "002".to_string(),
                label: String::new(),
                values: vec![Some(100.0), None, None, None, None, None],
            },
        ]
    }

    #[test]
    fn round_trip_preserves_records() {
        let schema = schema::lookup("S1701").unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("48021950801_S1701.csv");

        let records = sample_records();
        write_records(&path, schema, &records).unwrap();
        let back = read_records(&path, schema).unwrap();
        assert_eq!(back, records);
    }

    #[test]
    fn header_matches_schema_field_names() {
        let schema = schema::lookup("S1701").unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_records(&path, schema, &sample_records()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header, schema.field_names().join(","));
    }

    #[test]
    fn integral_values_write_without_fraction() {
        let schema = schema::lookup("S1701").unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_records(&path, schema, &sample_records()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let first_row = text.lines().nth(1).unwrap();
        assert!(first_row.contains(",4521,"));
        assert!(first_row.contains(",15.5,"));
        assert!(!first_row.contains("4521.0"));
    }

    #[test]
    fn empty_record_set_still_writes_a_header() {
        let schema = schema::lookup("S0101").unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_records(&path, schema, &[]).unwrap();
        let back = read_records(&path, schema).unwrap();
        assert!(back.is_empty());
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("GEO_ID,NAME,line_no,label,total,"));
    }
}
