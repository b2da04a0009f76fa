use polars::prelude::DataFrame;

use lcaview_store::schema::{
    AGENT_ATTORNEY_CITY, AGENT_ATTORNEY_FIRST_NAME, AGENT_ATTORNEY_STATE,
    AGENT_REPRESENTING_EMPLOYER, CASE_STATUS, LAWFIRM_NAME_BUSINESS_NAME, NO_AGENT,
};

use super::{PageBuilder, PageId, PageReport};
use crate::aggregate::{
    cross_tab, exclude_value, frequency_sorted_by_count, remap_labels, top_n_by_count, Unmapped,
    COUNT,
};
use crate::charts::{ChartKind, ChartSpec};
use crate::error::Result;
use crate::labels::ATTORNEY_STATES;

pub(super) fn build(df: &DataFrame) -> PageReport {
    let mut page = PageBuilder::new(PageId::Agent);

    page.push(
        ChartSpec::new(
            "Distribution of Employers Represented by Agent",
            ChartKind::Pie,
            AGENT_REPRESENTING_EMPLOYER,
            COUNT,
        ),
        frequency_sorted_by_count(df, AGENT_REPRESENTING_EMPLOYER),
    );
    page.push(
        ChartSpec::new(
            "Case Status by Agent Representing Employer",
            ChartKind::Bar,
            AGENT_REPRESENTING_EMPLOYER,
            COUNT,
        )
        .with_color(CASE_STATUS),
        cross_tab(df, AGENT_REPRESENTING_EMPLOYER, CASE_STATUS),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Most Common First Names of Attorneys",
            ChartKind::Bar,
            AGENT_ATTORNEY_FIRST_NAME,
            COUNT,
        ),
        top_attorney_first_names(df),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Most Common Attorney Cities",
            ChartKind::Bar,
            AGENT_ATTORNEY_CITY,
            COUNT,
        ),
        top_attorney_cities(df),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Most Common Attorney States",
            ChartKind::Bar,
            AGENT_ATTORNEY_STATE,
            COUNT,
        ),
        top_attorney_states(df),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Most Common Law Firms",
            ChartKind::Bar,
            LAWFIRM_NAME_BUSINESS_NAME,
            COUNT,
        ),
        top_law_firms(df),
    );

    page.finish()
}

fn top_attorney_first_names(df: &DataFrame) -> Result<DataFrame> {
    let represented = exclude_value(df, AGENT_ATTORNEY_FIRST_NAME, NO_AGENT)?;
    top_n_by_count(&represented, AGENT_ATTORNEY_FIRST_NAME, 5)
}

/// Location charts share one exclusion: a record counts only when both the
/// attorney city and state carry real values.
fn attorney_locations(df: &DataFrame) -> Result<DataFrame> {
    let city_known = exclude_value(df, AGENT_ATTORNEY_CITY, NO_AGENT)?;
    exclude_value(&city_known, AGENT_ATTORNEY_STATE, NO_AGENT)
}

fn top_attorney_cities(df: &DataFrame) -> Result<DataFrame> {
    let locations = attorney_locations(df)?;
    top_n_by_count(&locations, AGENT_ATTORNEY_CITY, 5)
}

fn top_attorney_states(df: &DataFrame) -> Result<DataFrame> {
    let locations = attorney_locations(df)?;
    let top = top_n_by_count(&locations, AGENT_ATTORNEY_STATE, 5)?;
    remap_labels(&top, AGENT_ATTORNEY_STATE, &ATTORNEY_STATES, Unmapped::Keep)
}

fn top_law_firms(df: &DataFrame) -> Result<DataFrame> {
    let represented = exclude_value(df, LAWFIRM_NAME_BUSINESS_NAME, NO_AGENT)?;
    top_n_by_count(&represented, LAWFIRM_NAME_BUSINESS_NAME, 5)
}
