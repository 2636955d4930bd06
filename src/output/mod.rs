pub mod records;
pub mod write;

pub use records::{build_records, OutputRecord};
pub use write::{read_records, write_records};
