pub mod api;
pub mod response;

pub use api::{fetch_table, request_url, API_BASE};
pub use response::{find_column, TableValues, VariableMap};

use clap::ValueEnum;
use std::fmt;

/// ACS release cadence / sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Product {
    Acs1,
    Acs3,
    Acs5,
}

impl Product {
    pub fn as_str(self) -> &'static str {
        match self {
            Product::Acs1 => "acs1",
            Product::Acs3 => "acs3",
            Product::Acs5 => "acs5",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of work against the API: a single (table, tract) retrieval.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub year: u16,
    pub product: Product,
    pub table: String,
    pub tract: String,
}
