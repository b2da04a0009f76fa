use chrono::{Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;

use lcaview_store::schema::{BEGIN_DATE, END_DATE, RECEIVED_DATE};

use crate::error::{DashboardError, Result};

pub const RECEIVED_YEAR: &str = "received_year";
pub const BEGIN_YEAR: &str = "begin_year";
pub const DURATION_YEARS: &str = "duration_years";

/// Parses a disclosure date string. Returns None for anything that does not
/// match one of the formats seen in the exports.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    None
}

/// Adds the derived columns the dashboard groups on: `received_year`,
/// `begin_year`, and `duration_years` (floor of the employment span in
/// 365-day years, null when either endpoint date is missing or malformed).
///
/// The base frame is never mutated; a widened clone is returned.
pub fn normalize(df: &DataFrame) -> Result<DataFrame> {
    let received = parse_date_column(df, RECEIVED_DATE)?;
    let begin = parse_date_column(df, BEGIN_DATE)?;
    let end = parse_date_column(df, END_DATE)?;

    let received_year: Vec<Option<i32>> =
        received.iter().map(|date| date.map(|d| d.year())).collect();
    let begin_year: Vec<Option<i32>> = begin.iter().map(|date| date.map(|d| d.year())).collect();
    let duration_years: Vec<Option<i32>> = begin
        .iter()
        .zip(end.iter())
        .map(|(begin, end)| match (begin, end) {
            (Some(begin), Some(end)) => {
                let days = end.signed_duration_since(*begin).num_days();
                Some(days.div_euclid(365) as i32)
            }
            _ => None,
        })
        .collect();

    let mut out = df.clone();
    let mut columns = [
        Series::new(RECEIVED_YEAR.into(), received_year).into(),
        Series::new(BEGIN_YEAR.into(), begin_year).into(),
        Series::new(DURATION_YEARS.into(), duration_years).into(),
    ];
    out.hstack_mut(columns.as_mut_slice())?;
    Ok(out)
}

fn parse_date_column(df: &DataFrame, name: &str) -> Result<Vec<Option<NaiveDate>>> {
    let column = df
        .column(name)
        .map_err(|_| DashboardError::MissingColumn {
            column: name.to_string(),
        })?;
    let cast = column.cast(&DataType::String)?;
    let values = cast.str()?;
    Ok(values
        .iter()
        .map(|value| value.and_then(parse_date))
        .collect())
}
