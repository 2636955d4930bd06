pub mod cli;
pub mod error;
pub mod fetch;
pub mod labels;
pub mod output;
pub mod schema;
