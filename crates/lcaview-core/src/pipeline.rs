// crates/lcaview-core/src/pipeline.rs

use polars::prelude::DataFrame;
use tracing::info;

use crate::error::Result;
use crate::normalize::normalize;
use crate::pages::{build_page, PageId, PageReport};
use crate::year_filter::{filter_by_year, year_range, YearSelector};

/// Everything the presentation layer needs for one render pass.
#[derive(Debug)]
pub struct DashboardReport {
    pub selector: YearSelector,
    pub min_year: i32,
    pub max_year: i32,
    pub pages: Vec<PageReport>,
}

/// Recomputes the whole dashboard for one selector value. The pipeline is
/// stateless; the presentation layer calls this again on every selector
/// change, against the same immutable record set.
pub fn build_dashboard(records: &DataFrame, selector: YearSelector) -> Result<DashboardReport> {
    let normalized = normalize(records)?;
    let (min_year, max_year) = year_range(&normalized)?;
    let filtered = filter_by_year(&normalized, selector)?;
    info!(%selector, rows = filtered.height(), "building dashboard pages");

    let pages = PageId::ALL
        .iter()
        .map(|page| build_page(*page, &filtered))
        .collect();

    Ok(DashboardReport {
        selector,
        min_year,
        max_year,
        pages,
    })
}
