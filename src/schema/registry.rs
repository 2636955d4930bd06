use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::{est, moe, TableSchema, ValueColumn};
use crate::error::AcsError;

/// Standard subject-table convention:
/// C01=total, C02=total %, C03=male, C04=male %, C05=female, C06=female %.
static DEFAULT_COLUMNS: &[ValueColumn] = &[
    est("total", "01"),
    moe("total_moe", "01"),
    est("total_pct", "02"),
    moe("total_pct_moe", "02"),
    est("male", "03"),
    moe("male_moe", "03"),
    est("male_pct", "04"),
    moe("male_pct_moe", "04"),
    est("female", "05"),
    moe("female_moe", "05"),
    est("female_pct", "06"),
    moe("female_pct_moe", "06"),
];

/// S1701 Poverty Status.
static S1701_COLUMNS: &[ValueColumn] = &[
    est("total", "01"),
    moe("total_moe", "01"),
    est("below_pl", "02"),
    moe("below_pl_moe", "02"),
    est("below_pl_pct", "03"),
    moe("below_pl_pct_moe", "03"),
];

/// S1901 Income in the Past 12 Months.
static S1901_COLUMNS: &[ValueColumn] = &[
    est("households", "01"),
    moe("households_moe", "01"),
    est("families", "02"),
    moe("families_moe", "02"),
    est("mc_families", "03"),
    moe("mc_families_moe", "03"),
    est("nf_households", "04"),
    moe("nf_households_moe", "04"),
];

/// S2301 Employment Status.
static S2301_COLUMNS: &[ValueColumn] = &[
    est("total", "01"),
    moe("total_moe", "01"),
    est("lfp_rate", "02"),
    moe("lfp_rate_moe", "02"),
    est("ep_ratio", "03"),
    moe("ep_ratio_moe", "03"),
    est("unemployment_rate", "04"),
    moe("unemployment_rate_moe", "04"),
];

/// S2502 Demographic Characteristics for Occupied Housing Units.
static S2502_COLUMNS: &[ValueColumn] = &[
    est("oc_units", "01"),
    moe("oc_units_moe", "01"),
    est("oc_units_pct", "02"),
    moe("oc_units_pct_moe", "02"),
    est("ooh_units", "03"),
    moe("ooh_units_moe", "03"),
    est("ooh_units_pct", "04"),
    moe("ooh_units_pct_moe", "04"),
    est("roh_units", "05"),
    moe("roh_units_moe", "05"),
    est("roh_units_pct", "06"),
    moe("roh_units_pct_moe", "06"),
];

/// S2701 Health Insurance Coverage.
static S2701_COLUMNS: &[ValueColumn] = &[
    est("total", "01"),
    moe("total_moe", "01"),
    est("insured", "02"),
    moe("insured_moe", "02"),
    est("insured_pct", "03"),
    moe("insured_pct_moe", "03"),
    est("uninsured", "04"),
    moe("uninsured_moe", "04"),
    est("uninsured_pct", "05"),
    moe("uninsured_pct_moe", "05"),
];

/// S2801 Types of Computers and Internet Subscriptions.
static S2801_COLUMNS: &[ValueColumn] = &[
    est("total", "01"),
    moe("total_moe", "01"),
    est("total_pct", "02"),
    moe("total_pct_moe", "02"),
];

/// Tables following the standard total/male/female convention.
static DEFAULT_LAYOUT_TABLES: &[&str] = &["S0101", "S1501"];

// New tables are registered here, either against DEFAULT_COLUMNS or with
// their own column list, and need a matching labels/<TABLE>.csv file.
static REGISTRY: Lazy<HashMap<&'static str, TableSchema>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for &table in DEFAULT_LAYOUT_TABLES {
        m.insert(
            table,
            TableSchema {
                columns: DEFAULT_COLUMNS,
            },
        );
    }
    m.insert(
        "S1701",
        TableSchema {
            columns: S1701_COLUMNS,
        },
    );
    m.insert(
        "S1901",
        TableSchema {
            columns: S1901_COLUMNS,
        },
    );
    m.insert(
        "S2301",
        TableSchema {
            columns: S2301_COLUMNS,
        },
    );
    m.insert(
        "S2502",
        TableSchema {
            columns: S2502_COLUMNS,
        },
    );
    m.insert(
        "S2701",
        TableSchema {
            columns: S2701_COLUMNS,
        },
    );
    m.insert(
        "S2801",
        TableSchema {
            columns: S2801_COLUMNS,
        },
    );
    m
});

/// Look up the output layout for a table, failing before any remote call if
/// the table was never registered.
pub fn lookup(table: &str) -> Result<&'static TableSchema, AcsError> {
    REGISTRY
        .get(table)
        .ok_or_else(|| AcsError::UnknownTable(table.to_string()))
}

pub fn registered_tables() -> impl Iterator<Item = &'static str> {
    REGISTRY.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Measure;

    #[test]
    fn every_registered_table_has_a_nonempty_schema() {
        for table in registered_tables() {
            let schema = lookup(table).unwrap();
            assert!(
                !schema.columns.is_empty(),
                "{} registered with no columns",
                table
            );
        }
    }

    #[test]
    fn unregistered_table_is_an_error() {
        let err = lookup("S9999").unwrap_err();
        assert!(matches!(err, AcsError::UnknownTable(ref t) if t == "S9999"));
    }

    #[test]
    fn default_layout_tables_share_the_standard_convention() {
        let s0101 = lookup("S0101").unwrap();
        let s1501 = lookup("S1501").unwrap();
        assert_eq!(s0101.columns, s1501.columns);
        assert_eq!(s0101.columns.len(), 12);
        assert_eq!(s0101.columns[0].name, "total");
        assert_eq!(s0101.columns[0].measure, Measure::Estimate);
    }

    #[test]
    fn estimate_and_moe_columns_alternate() {
        for table in registered_tables() {
            let schema = lookup(table).unwrap();
            for pair in schema.columns.chunks(2) {
                assert_eq!(pair[0].group, pair[1].group);
                assert_eq!(pair[0].measure, Measure::Estimate);
                assert_eq!(pair[1].measure, Measure::MarginOfError);
            }
        }
    }

    #[test]
    fn field_names_start_with_identity_fields() {
        let schema = lookup("S1701").unwrap();
        let names = schema.field_names();
        assert_eq!(&names[..4], &["GEO_ID", "NAME", "line_no", "label"]);
        assert_eq!(names.len(), 4 + schema.columns.len());
    }
}
