use clap::Parser;
use std::path::PathBuf;

use crate::fetch::Product;

/// Fetch ACS Subject tables for census tracts and merge row labels into tidy
/// CSVs, one file per (tract, table) pair.
#[derive(Parser, Debug)]
#[command(name = "acsfetch", version)]
pub struct Cli {
    /// ACS year, e.g. 2019 or 2023
    #[arg(long, default_value_t = 2019)]
    pub year: u16,

    /// ACS product family
    #[arg(long, value_enum, default_value_t = Product::Acs5)]
    pub product: Product,

    /// Subject table IDs, e.g. S0101 S1501
    #[arg(long, required = true, num_args = 1.., value_parser = parse_table_id)]
    pub tables: Vec<String>,

    /// 11-digit tract GEOIDs, e.g. 48021950801
    #[arg(long, required = true, num_args = 1.., value_parser = parse_tract_id)]
    pub tracts: Vec<String>,

    /// Directory holding <TABLE>.csv label files
    #[arg(long, default_value = "labels")]
    pub labels_dir: PathBuf,

    /// Directory for output CSVs
    #[arg(long, default_value = "output")]
    pub out_dir: PathBuf,

    /// Census API key, sent as the `key` query parameter
    #[arg(long, env = "CENSUS_API_KEY")]
    pub api_key: Option<String>,
}

fn parse_table_id(s: &str) -> Result<String, String> {
    let id = s.trim().to_ascii_uppercase();
    let well_formed = id.len() == 5
        && id.starts_with('S')
        && id[1..].chars().all(|c| c.is_ascii_digit());
    if well_formed {
        Ok(id)
    } else {
        Err(format!(
            "`{}` is not a subject table ID (expected `S` followed by 4 digits)",
            s
        ))
    }
}

fn parse_tract_id(s: &str) -> Result<String, String> {
    let id = s.trim();
    if id.len() == 11 && id.chars().all(|c| c.is_ascii_digit()) {
        Ok(id.to_string())
    } else {
        Err(format!("`{}` is not an 11-digit tract GEOID", s))
    }
}
