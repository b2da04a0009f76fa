use polars::prelude::DataFrame;

use lcaview_store::schema::{WORKSITE_CITY, WORKSITE_STATE};

use super::{PageBuilder, PageId, PageReport};
use crate::aggregate::{remap_labels, top_n_by_count, Unmapped, COUNT};
use crate::charts::{ChartKind, ChartSpec};
use crate::error::Result;
use crate::labels::WORKSITE_STATES;

pub(super) fn build(df: &DataFrame) -> PageReport {
    let mut page = PageBuilder::new(PageId::Worksite);

    page.push(
        ChartSpec::new(
            "Top 5 Worksite States",
            ChartKind::Histogram,
            WORKSITE_STATE,
            COUNT,
        ),
        top_worksite_states(df),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Worksite Cities",
            ChartKind::Histogram,
            WORKSITE_CITY,
            COUNT,
        ),
        top_n_by_count(df, WORKSITE_CITY, 5),
    );

    page.finish()
}

fn top_worksite_states(df: &DataFrame) -> Result<DataFrame> {
    let top = top_n_by_count(df, WORKSITE_STATE, 5)?;
    remap_labels(&top, WORKSITE_STATE, &WORKSITE_STATES, Unmapped::Null)
}
