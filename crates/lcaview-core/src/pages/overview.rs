use polars::prelude::*;

use lcaview_store::schema::{CASE_STATUS, QUARTER_DECISION, VISA_CLASS};

use super::{PageBuilder, PageId, PageReport};
use crate::aggregate::{
    cross_tab, frequency_sorted_by_count, frequency_sorted_by_key, COUNT,
};
use crate::charts::{ChartKind, ChartSpec};
use crate::error::Result;
use crate::normalize::RECEIVED_YEAR;

pub(super) fn build(df: &DataFrame) -> PageReport {
    let mut page = PageBuilder::new(PageId::Overview);

    page.push(
        ChartSpec::new(
            "Frequency of Received Dates by Year",
            ChartKind::Bar,
            RECEIVED_YEAR,
            COUNT,
        ),
        applications_per_year(df),
    );
    page.push(
        ChartSpec::new(
            "Number of Applications per Visa Type",
            ChartKind::Bar,
            VISA_CLASS,
            COUNT,
        ),
        frequency_sorted_by_key(df, VISA_CLASS),
    );
    page.push(
        ChartSpec::new(
            "Distribution of Quarter Decision",
            ChartKind::Histogram,
            QUARTER_DECISION,
            COUNT,
        ),
        frequency_sorted_by_count(df, QUARTER_DECISION),
    );
    page.push(
        ChartSpec::new(
            "Number of Approved and Denied Applications per Year",
            ChartKind::GroupedBar,
            RECEIVED_YEAR,
            COUNT,
        )
        .with_color(CASE_STATUS),
        status_by_year(df),
    );

    page.finish()
}

/// Chronological application counts; stray pre-2019 records are dropped
/// from the chart rather than widening its axis.
fn applications_per_year(df: &DataFrame) -> Result<DataFrame> {
    let freq = frequency_sorted_by_key(df, RECEIVED_YEAR)?;
    Ok(freq
        .lazy()
        .filter(col(RECEIVED_YEAR).gt(lit(2018)))
        .collect()?)
}

fn status_by_year(df: &DataFrame) -> Result<DataFrame> {
    let pairs = cross_tab(df, RECEIVED_YEAR, CASE_STATUS)?;
    Ok(pairs.sort([RECEIVED_YEAR], SortMultipleOptions::default())?)
}
