use polars::prelude::DataFrame;

use lcaview_store::schema::{CASE_STATUS, NO_AGENT, STATE_OF_HIGHEST_COURT};

use super::{PageBuilder, PageId, PageReport};
use crate::aggregate::{
    cross_tab_top_keys, exclude_value, remap_labels, top_n_by_count, Unmapped, COUNT,
};
use crate::charts::{ChartKind, ChartSpec};
use crate::error::Result;
use crate::labels::COURT_STATES;

pub(super) fn build(df: &DataFrame) -> PageReport {
    let mut page = PageBuilder::new(PageId::Court);

    page.push(
        ChartSpec::new(
            "Top 5 States with Most Cases in Highest Court",
            ChartKind::Bar,
            STATE_OF_HIGHEST_COURT,
            COUNT,
        ),
        top_court_states(df),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Courts with Most Cases by Case Status",
            ChartKind::GroupedBar,
            STATE_OF_HIGHEST_COURT,
            COUNT,
        )
        .with_color(CASE_STATUS),
        status_by_top_courts(df),
    );

    page.finish()
}

fn court_cases(df: &DataFrame) -> Result<DataFrame> {
    exclude_value(df, STATE_OF_HIGHEST_COURT, NO_AGENT)
}

fn top_court_states(df: &DataFrame) -> Result<DataFrame> {
    let cases = court_cases(df)?;
    let top = top_n_by_count(&cases, STATE_OF_HIGHEST_COURT, 5)?;
    remap_labels(&top, STATE_OF_HIGHEST_COURT, &COURT_STATES, Unmapped::Null)
}

fn status_by_top_courts(df: &DataFrame) -> Result<DataFrame> {
    let cases = court_cases(df)?;
    let pairs = cross_tab_top_keys(&cases, STATE_OF_HIGHEST_COURT, CASE_STATUS, 5)?;
    remap_labels(&pairs, STATE_OF_HIGHEST_COURT, &COURT_STATES, Unmapped::Null)
}
