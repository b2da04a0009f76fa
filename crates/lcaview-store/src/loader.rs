use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::*;
use tracing::debug;

use crate::errors::StoreError;
use crate::schema::{CODE_COLUMNS, COUNTER_COLUMNS, DATE_COLUMNS, WAGE_COLUMNS};

/// Loads the disclosure CSV into a DataFrame with one row per LCA case.
///
/// A missing or unreadable file is fatal. A malformed individual field is
/// not: the reader runs with `ignore_errors`, and the typed casts below are
/// non-strict, so a bad wage or counter value becomes a null in that record
/// rather than aborting the load.
pub fn load_records(path: &Path) -> Result<DataFrame, StoreError> {
    let header = probe_header(path)?;
    debug!(columns = header.len(), path = %path.display(), "detected header row");

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_ignore_errors(true)
        .with_infer_schema_length(Some(1024))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?
        .finish()
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    apply_column_types(df).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the header row with the csv crate before handing the file to
/// polars, so an empty or headerless file fails with a clear error instead
/// of a schema-inference one.
fn probe_header(path: &Path) -> Result<Vec<String>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    let headers = reader.headers().map_err(|source| StoreError::Header {
        path: path.to_path_buf(),
        source,
    })?;

    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(StoreError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }

    Ok(headers.iter().map(|h| h.to_string()).collect())
}

/// Pins the dtypes the pipeline relies on. Inference can land a wage column
/// on Int64 for an all-integer sample, or a NAICS code on Int64; downstream
/// code expects Float64 wages, Int64 counters, and string codes and dates.
fn apply_column_types(mut df: DataFrame) -> PolarsResult<DataFrame> {
    for name in WAGE_COLUMNS {
        if df.column(name).is_ok() {
            let cast = df.column(name)?.cast(&DataType::Float64)?;
            df.with_column(cast)?;
        }
    }

    for name in COUNTER_COLUMNS {
        if df.column(name).is_ok() {
            let cast = df.column(name)?.cast(&DataType::Int64)?;
            df.with_column(cast)?;
        }
    }

    for name in DATE_COLUMNS.iter().chain(CODE_COLUMNS.iter()) {
        if df.column(name).is_ok() {
            let cast = df.column(name)?.cast(&DataType::String)?;
            df.with_column(cast)?;
        }
    }

    Ok(df)
}
