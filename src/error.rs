use std::path::PathBuf;
use thiserror::Error;

/// Failures a fetch run can hit. Each carries enough context (table, tract,
/// path) to name the unit of work that broke.
#[derive(Debug, Error)]
pub enum AcsError {
    #[error("unknown table `{0}`: register it in the schema registry before fetching")]
    UnknownTable(String),

    #[error("no label file for `{table}`: expected {}", .path.display())]
    MissingLabels { table: String, path: PathBuf },

    #[error("reading label file {}", .path.display())]
    LabelRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing label file {}", .path.display())]
    LabelParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("fetching {table} for tract {tract}")]
    Fetch {
        table: String,
        tract: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected payload for {table} tract {tract}: {detail}")]
    BadPayload {
        table: String,
        tract: String,
        detail: String,
    },

    #[error("writing {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
