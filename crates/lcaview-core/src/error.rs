// crates/lcaview-core/src/error.rs

use polars::error::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to load records: {0}")]
    Load(#[from] lcaview_store::StoreError),

    #[error("column '{column}' not found in dataset")]
    MissingColumn { column: String },

    #[error("year {requested} is outside the selectable range {min}..={max}")]
    InvalidYear { requested: i32, min: i32, max: i32 },

    #[error("no record has a parseable received date")]
    EmptyYearRange,

    #[error("Polars operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
