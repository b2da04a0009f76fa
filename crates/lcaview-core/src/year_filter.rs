use std::fmt;

use polars::prelude::*;

use crate::error::{DashboardError, Result};
use crate::normalize::RECEIVED_YEAR;

/// Years before this are excluded from the selector even when stray records
/// carry earlier received dates.
pub const FLOOR_YEAR: i32 = 2019;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearSelector {
    /// Identity transform over every record with a parseable received year.
    All,
    Year(i32),
}

impl fmt::Display for YearSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSelector::All => write!(f, "All Years"),
            YearSelector::Year(year) => write!(f, "{year}"),
        }
    }
}

/// Inclusive selector range: `[max(FLOOR_YEAR, min_year), max_year]` over
/// the non-null received years.
pub fn year_range(df: &DataFrame) -> Result<(i32, i32)> {
    let years = year_values(df)?;
    let min = years.min().ok_or(DashboardError::EmptyYearRange)?;
    let max = years.max().ok_or(DashboardError::EmptyYearRange)?;
    Ok((min.max(FLOOR_YEAR), max))
}

/// The concrete years a selector UI may offer, in ascending order.
pub fn valid_years(df: &DataFrame) -> Result<Vec<i32>> {
    let (min, max) = year_range(df)?;
    Ok((min..=max).collect())
}

/// Restricts the record set to the selected year. `All` keeps every record
/// with a non-null `received_year`; records whose received date failed to
/// parse never enter year-scoped analyses.
pub fn filter_by_year(df: &DataFrame, selector: YearSelector) -> Result<DataFrame> {
    let (min, max) = year_range(df)?;
    if let YearSelector::Year(requested) = selector {
        if requested < min || requested > max {
            return Err(DashboardError::InvalidYear {
                requested,
                min,
                max,
            });
        }
    }

    let years = year_values(df)?;
    let keep: Vec<bool> = match selector {
        YearSelector::All => years.iter().map(|year| year.is_some()).collect(),
        YearSelector::Year(requested) => {
            years.iter().map(|year| year == Some(requested)).collect()
        }
    };
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

fn year_values(df: &DataFrame) -> Result<&Int32Chunked> {
    let column = df
        .column(RECEIVED_YEAR)
        .map_err(|_| DashboardError::MissingColumn {
            column: RECEIVED_YEAR.to_string(),
        })?;
    Ok(column.i32()?)
}
