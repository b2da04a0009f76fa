use polars::prelude::DataFrame;

use lcaview_store::schema::{
    EMPLOYER_NAME, EMPLOYER_POC_CITY, EMPLOYER_STATE, EMPLOYMENT_TYPE_COLUMNS, NAICS_CODE,
    TOTAL_WORKER_POSITIONS,
};

use super::{PageBuilder, PageId, PageReport};
use crate::aggregate::{
    employment_breakdown_by_employer, sum_columns, top_n_by_count, top_n_by_sum,
    with_label_column, CATEGORY, COUNT, EMPLOYMENT_TYPE, TOTAL,
};
use crate::charts::{ChartKind, ChartSpec};
use crate::error::Result;
use crate::labels::{EMPLOYMENT_TYPE_LABELS, NAICS_DESCRIPTIONS};

const NAICS_DESCRIPTION: &str = "naics_description";

pub(super) fn build(df: &DataFrame) -> PageReport {
    let mut page = PageBuilder::new(PageId::Employer);

    page.push(
        ChartSpec::new(
            "Top 5 NAICS Codes with Descriptions",
            ChartKind::Histogram,
            COUNT,
            NAICS_DESCRIPTION,
        ),
        top_naics_codes(df),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Employer States",
            ChartKind::Bar,
            EMPLOYER_STATE,
            COUNT,
        ),
        top_n_by_count(df, EMPLOYER_STATE, 5),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Employers",
            ChartKind::HorizontalBar,
            COUNT,
            EMPLOYER_NAME,
        ),
        top_n_by_count(df, EMPLOYER_NAME, 5),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Employer Cities",
            ChartKind::Bar,
            EMPLOYER_POC_CITY,
            COUNT,
        ),
        top_n_by_count(df, EMPLOYER_POC_CITY, 5),
    );
    page.push(
        ChartSpec::new(
            "Distribution of Employment Types",
            ChartKind::Pie,
            CATEGORY,
            TOTAL,
        ),
        employment_type_totals(df),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Employers by Total Worker Positions",
            ChartKind::HorizontalBar,
            TOTAL_WORKER_POSITIONS,
            EMPLOYER_NAME,
        ),
        top_n_by_sum(df, EMPLOYER_NAME, TOTAL_WORKER_POSITIONS, 5),
    );
    page.push(
        ChartSpec::new(
            "Employment Types Breakdown for Top Employers",
            ChartKind::GroupedBar,
            EMPLOYER_NAME,
            TOTAL,
        )
        .with_color(EMPLOYMENT_TYPE),
        employment_breakdown_by_employer(df, 5),
    );

    page.finish()
}

fn top_naics_codes(df: &DataFrame) -> Result<DataFrame> {
    let top = top_n_by_count(df, NAICS_CODE, 5)?;
    with_label_column(&top, NAICS_CODE, NAICS_DESCRIPTION, &NAICS_DESCRIPTIONS)
}

fn employment_type_totals(df: &DataFrame) -> Result<DataFrame> {
    let columns: Vec<(&str, &str)> = EMPLOYMENT_TYPE_COLUMNS
        .iter()
        .copied()
        .zip(EMPLOYMENT_TYPE_LABELS.iter().copied())
        .collect();
    sum_columns(df, &columns)
}
