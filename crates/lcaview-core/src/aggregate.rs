//! Aggregation recipes behind every dashboard chart.
//!
//! Each function is pure: it takes the (already filtered) record set and
//! returns a fresh summary DataFrame. Null grouping keys are dropped before
//! counting, grouping preserves first-encounter order, and descending sorts
//! are stable, so ties keep that encounter order.

use std::collections::HashMap;

use polars::prelude::*;

use lcaview_store::schema::{EMPLOYER_NAME, EMPLOYMENT_TYPE_COLUMNS, NEW_EMPLOYMENT};

use crate::error::{DashboardError, Result};
use crate::labels::EMPLOYMENT_TYPE_LABELS;

pub const COUNT: &str = "count";
pub const CATEGORY: &str = "category";
pub const EMPLOYMENT_TYPE: &str = "employment_type";
pub const TOTAL: &str = "total";

/// How a label remap treats keys absent from the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmapped {
    Keep,
    Null,
}

#[derive(Debug, Clone, Copy)]
enum GroupAgg {
    Sum,
    Mean,
    Max,
}

/// Fails with `MissingColumn` for the first requested column the frame does
/// not carry. Callers treat this as a per-chart soft failure.
pub fn ensure_columns(df: &DataFrame, columns: &[&str]) -> Result<()> {
    for name in columns {
        if df.column(name).is_err() {
            return Err(DashboardError::MissingColumn {
                column: (*name).to_string(),
            });
        }
    }
    Ok(())
}

/// Count of records per distinct value of `key`, in first-encounter order.
pub fn frequency(df: &DataFrame, key: &str) -> Result<DataFrame> {
    ensure_columns(df, &[key])?;
    let out = df
        .clone()
        .lazy()
        .filter(col(key).is_not_null())
        .group_by_stable([col(key)])
        .agg([len().alias(COUNT)])
        .with_columns([col(COUNT).cast(DataType::Int64)])
        .collect()?;
    Ok(out)
}

/// Frequency table in ascending key order (chronological charts).
pub fn frequency_sorted_by_key(df: &DataFrame, key: &str) -> Result<DataFrame> {
    let freq = frequency(df, key)?;
    Ok(freq.sort([key], SortMultipleOptions::default())?)
}

/// Frequency table in descending count order, untruncated.
pub fn frequency_sorted_by_count(df: &DataFrame, key: &str) -> Result<DataFrame> {
    let freq = frequency(df, key)?;
    sort_desc(freq, COUNT)
}

/// Frequency table truncated to the `n` most common keys.
pub fn top_n_by_count(df: &DataFrame, key: &str, n: usize) -> Result<DataFrame> {
    Ok(frequency_sorted_by_count(df, key)?.head(Some(n)))
}

pub fn group_sum(df: &DataFrame, key: &str, value: &str) -> Result<DataFrame> {
    grouped(df, &[key], value, GroupAgg::Sum)
}

pub fn group_mean(df: &DataFrame, key: &str, value: &str) -> Result<DataFrame> {
    grouped(df, &[key], value, GroupAgg::Mean)
}

pub fn top_n_by_sum(df: &DataFrame, key: &str, value: &str, n: usize) -> Result<DataFrame> {
    let sums = grouped(df, &[key], value, GroupAgg::Sum)?;
    Ok(sort_desc(sums, value)?.head(Some(n)))
}

pub fn top_n_by_mean(df: &DataFrame, key: &str, value: &str, n: usize) -> Result<DataFrame> {
    let means = grouped(df, &[key], value, GroupAgg::Mean)?;
    Ok(sort_desc(means, value)?.head(Some(n)))
}

/// Top `n` groups (over one or more keys) by the maximum of `value`.
pub fn top_n_by_max(df: &DataFrame, keys: &[&str], value: &str, n: usize) -> Result<DataFrame> {
    let maxima = grouped(df, keys, value, GroupAgg::Max)?;
    Ok(sort_desc(maxima, value)?.head(Some(n)))
}

/// Count of records per (key1, key2) pair, first-encounter order, no
/// truncation.
pub fn cross_tab(df: &DataFrame, key1: &str, key2: &str) -> Result<DataFrame> {
    ensure_columns(df, &[key1, key2])?;
    let out = df
        .clone()
        .lazy()
        .filter(not_null_mask(&[key1, key2]))
        .group_by_stable([col(key1), col(key2)])
        .agg([len().alias(COUNT)])
        .with_columns([col(COUNT).cast(DataType::Int64)])
        .collect()?;
    Ok(out)
}

/// Cross-tab restricted to the top `n` key1 values by total record count.
pub fn cross_tab_top_keys(
    df: &DataFrame,
    key1: &str,
    key2: &str,
    n: usize,
) -> Result<DataFrame> {
    let top = top_n_by_count(df, key1, n)?;
    let pairs = cross_tab(df, key1, key2)?;
    let out = pairs
        .lazy()
        .join(
            top.lazy().select([col(key1)]),
            [col(key1)],
            [col(key1)],
            JoinArgs::new(JoinType::Semi),
        )
        .collect()?;
    Ok(out)
}

/// Swaps abbreviated keys in `column` for human-readable labels after
/// aggregation. Row count and every other column are untouched.
pub fn remap_labels(
    df: &DataFrame,
    column: &str,
    map: &HashMap<&'static str, &'static str>,
    unmapped: Unmapped,
) -> Result<DataFrame> {
    ensure_columns(df, &[column])?;
    let cast = df.column(column)?.cast(&DataType::String)?;
    let values = cast.str()?;
    let mapped: Vec<Option<String>> = values
        .iter()
        .map(|value| match value {
            Some(key) => match map.get(key) {
                Some(label) => Some((*label).to_string()),
                None => match unmapped {
                    Unmapped::Keep => Some(key.to_string()),
                    Unmapped::Null => None,
                },
            },
            None => None,
        })
        .collect();

    let mut out = df.clone();
    out.with_column(Series::new(column.into(), mapped))?;
    Ok(out)
}

/// Appends a label column mapped from `source` without replacing the source
/// column; keys absent from the lookup label as null.
pub fn with_label_column(
    df: &DataFrame,
    source: &str,
    label: &str,
    map: &HashMap<&'static str, &'static str>,
) -> Result<DataFrame> {
    ensure_columns(df, &[source])?;
    let cast = df.column(source)?.cast(&DataType::String)?;
    let values = cast.str()?;
    let mapped: Vec<Option<&str>> = values
        .iter()
        .map(|value| value.and_then(|key| map.get(key).copied()))
        .collect();

    let mut out = df.clone();
    out.with_column(Series::new(label.into(), mapped))?;
    Ok(out)
}

/// Drops records whose `column` equals a placeholder value such as
/// `"No Agent"`. Nulls survive the filter; the counting recipes drop them.
pub fn exclude_value(df: &DataFrame, column: &str, sentinel: &str) -> Result<DataFrame> {
    ensure_columns(df, &[column])?;
    let cast = df.column(column)?.cast(&DataType::String)?;
    let values = cast.str()?;
    let keep: Vec<bool> = values
        .iter()
        .map(|value| value.map_or(true, |v| v != sentinel))
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// One row per listed column: `(label, sum of the column)`. Used for the
/// employment-type counters, which are summed, never averaged.
pub fn sum_columns(df: &DataFrame, columns: &[(&str, &str)]) -> Result<DataFrame> {
    let names: Vec<&str> = columns.iter().map(|(name, _)| *name).collect();
    ensure_columns(df, &names)?;

    let mut labels: Vec<&str> = Vec::with_capacity(columns.len());
    let mut totals: Vec<i64> = Vec::with_capacity(columns.len());
    for (name, label) in columns.iter().copied() {
        let cast = df.column(name)?.cast(&DataType::Int64)?;
        labels.push(label);
        totals.push(cast.i64()?.sum().unwrap_or(0));
    }

    Ok(DataFrame::new(vec![
        Series::new(CATEGORY.into(), labels).into(),
        Series::new(TOTAL.into(), totals).into(),
    ])?)
}

/// Long-format `[employer, employment_type, total]` table for the top `n`
/// employers ranked by summed new-employment positions.
pub fn employment_breakdown_by_employer(df: &DataFrame, n: usize) -> Result<DataFrame> {
    let mut wanted: Vec<&str> = vec![EMPLOYER_NAME];
    wanted.extend(EMPLOYMENT_TYPE_COLUMNS);
    ensure_columns(df, &wanted)?;

    let agg_exprs: Vec<Expr> = EMPLOYMENT_TYPE_COLUMNS
        .iter()
        .map(|name| col(*name).sum())
        .collect();
    let grouped = df
        .clone()
        .lazy()
        .filter(col(EMPLOYER_NAME).is_not_null())
        .group_by_stable([col(EMPLOYER_NAME)])
        .agg(agg_exprs)
        .collect()?;
    let grouped = sort_desc(grouped, NEW_EMPLOYMENT)?.head(Some(n));

    let mut totals_by_type: Vec<Int64Chunked> = Vec::with_capacity(EMPLOYMENT_TYPE_COLUMNS.len());
    for name in EMPLOYMENT_TYPE_COLUMNS {
        totals_by_type.push(grouped.column(name)?.cast(&DataType::Int64)?.i64()?.clone());
    }

    let employers = grouped.column(EMPLOYER_NAME)?.str()?;
    let mut out_employers: Vec<&str> = Vec::new();
    let mut out_types: Vec<&str> = Vec::new();
    let mut out_totals: Vec<i64> = Vec::new();
    for idx in 0..grouped.height() {
        let Some(employer) = employers.get(idx) else {
            continue;
        };
        for (values, label) in totals_by_type.iter().zip(EMPLOYMENT_TYPE_LABELS) {
            out_employers.push(employer);
            out_types.push(label);
            out_totals.push(values.get(idx).unwrap_or(0));
        }
    }

    Ok(DataFrame::new(vec![
        Series::new(EMPLOYER_NAME.into(), out_employers).into(),
        Series::new(EMPLOYMENT_TYPE.into(), out_types).into(),
        Series::new(TOTAL.into(), out_totals).into(),
    ])?)
}

/// Rounds a float column in place, for display tables.
pub fn round_column(df: &DataFrame, column: &str, decimals: u32) -> Result<DataFrame> {
    ensure_columns(df, &[column])?;
    let factor = 10f64.powi(decimals as i32);
    let values = df.column(column)?.f64()?;
    let rounded: Vec<Option<f64>> = values
        .iter()
        .map(|value| value.map(|v| (v * factor).round() / factor))
        .collect();

    let mut out = df.clone();
    out.with_column(Series::new(column.into(), rounded))?;
    Ok(out)
}

fn grouped(df: &DataFrame, keys: &[&str], value: &str, agg: GroupAgg) -> Result<DataFrame> {
    let mut wanted: Vec<&str> = keys.to_vec();
    wanted.push(value);
    ensure_columns(df, &wanted)?;

    let key_exprs: Vec<Expr> = keys.iter().map(|key| col(*key)).collect();
    let agg_expr = match agg {
        GroupAgg::Sum => col(value).sum(),
        GroupAgg::Mean => col(value).mean(),
        GroupAgg::Max => col(value).max(),
    };

    let mut lf = df
        .clone()
        .lazy()
        .filter(not_null_mask(keys))
        .group_by_stable(key_exprs)
        .agg([agg_expr]);
    // Groups with no non-null value have nothing to report for mean/max.
    if matches!(agg, GroupAgg::Mean | GroupAgg::Max) {
        lf = lf.filter(col(value).is_not_null());
    }
    Ok(lf.collect()?)
}

fn sort_desc(df: DataFrame, measure: &str) -> Result<DataFrame> {
    Ok(df.sort(
        [measure],
        SortMultipleOptions::default()
            .with_order_descending(true)
            .with_maintain_order(true),
    )?)
}

fn not_null_mask(keys: &[&str]) -> Expr {
    let mut mask = col(keys[0]).is_not_null();
    for key in &keys[1..] {
        mask = mask.and(col(*key).is_not_null());
    }
    mask
}
