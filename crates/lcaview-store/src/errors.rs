use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("input file '{}' is missing or unreadable: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV header from '{}': {source}", path.display())]
    Header {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("input file '{}' has an empty header row", path.display())]
    EmptyHeader { path: PathBuf },

    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}
