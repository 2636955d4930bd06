pub mod registry;
pub mod types;
pub mod values;

pub use registry::{lookup, registered_tables};
pub use types::{Measure, TableSchema, ValueColumn, ID_FIELDS};
pub use values::{clean_cell, format_value};
