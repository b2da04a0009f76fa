use polars::prelude::*;

use lcaview_store::schema::{
    FULL_TIME_POSITION, JOB_TITLE, PREVAILING_WAGE, PW_UNIT_OF_PAY, PW_WAGE_LEVEL, SOC_TITLE,
    TOTAL_WORKER_POSITIONS, WAGE_UNIT_OF_PAY,
};

use super::{PageBuilder, PageId, PageReport};
use crate::aggregate::{
    frequency_sorted_by_count, frequency_sorted_by_key, group_mean, group_sum, round_column,
    top_n_by_count, top_n_by_max, top_n_by_mean, COUNT,
};
use crate::charts::{ChartKind, ChartSpec};
use crate::error::Result;
use crate::normalize::{BEGIN_YEAR, DURATION_YEARS};

pub(super) fn build(df: &DataFrame) -> PageReport {
    let mut page = PageBuilder::new(PageId::Job);

    page.push(
        ChartSpec::new(
            "Distribution of Employment Duration",
            ChartKind::Bar,
            DURATION_YEARS,
            COUNT,
        ),
        frequency_sorted_by_key(df, DURATION_YEARS),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Job Titles by Frequency",
            ChartKind::HorizontalBar,
            COUNT,
            JOB_TITLE,
        ),
        top_n_by_count(df, JOB_TITLE, 5),
    );
    page.push(
        ChartSpec::new(
            "Distribution of Full-Time vs Part-Time Positions",
            ChartKind::Pie,
            FULL_TIME_POSITION,
            COUNT,
        ),
        frequency_sorted_by_count(df, FULL_TIME_POSITION),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Most Frequent SOC Titles",
            ChartKind::HorizontalBar,
            COUNT,
            SOC_TITLE,
        ),
        top_n_by_count(df, SOC_TITLE, 5),
    );
    page.push(
        ChartSpec::new(
            "Top 5 Jobs with Highest Average Wages",
            ChartKind::HorizontalBar,
            PREVAILING_WAGE,
            JOB_TITLE,
        ),
        top_n_by_mean(df, JOB_TITLE, PREVAILING_WAGE, 5),
    );
    page.push(
        ChartSpec::new(
            "Average Prevailing Wage per Unit of Pay",
            ChartKind::Table,
            PW_UNIT_OF_PAY,
            PREVAILING_WAGE,
        ),
        mean_wage_by_unit(df),
    );
    // WAGE_UNIT_OF_PAY is absent from some dataset variants; this one chart
    // soft-fails there while the rest of the page renders.
    page.push(
        ChartSpec::new(
            "Top Prevailing Wage by Job Title and Wage Unit",
            ChartKind::GroupedBar,
            JOB_TITLE,
            PREVAILING_WAGE,
        )
        .with_color(WAGE_UNIT_OF_PAY),
        top_n_by_max(df, &[JOB_TITLE, WAGE_UNIT_OF_PAY], PREVAILING_WAGE, 10),
    );
    page.push(
        ChartSpec::new(
            "Total Employees by Year",
            ChartKind::Line,
            BEGIN_YEAR,
            TOTAL_WORKER_POSITIONS,
        ),
        total_positions_by_begin_year(df),
    );
    page.push(
        ChartSpec::new(
            "Distribution of Wage Levels",
            ChartKind::Histogram,
            COUNT,
            PW_WAGE_LEVEL,
        ),
        frequency_sorted_by_count(df, PW_WAGE_LEVEL),
    );
    page.push(
        ChartSpec::new(
            "Distribution of Units of Pay",
            ChartKind::Pie,
            PW_UNIT_OF_PAY,
            COUNT,
        ),
        frequency_sorted_by_count(df, PW_UNIT_OF_PAY),
    );

    page.finish()
}

fn mean_wage_by_unit(df: &DataFrame) -> Result<DataFrame> {
    let means = group_mean(df, PW_UNIT_OF_PAY, PREVAILING_WAGE)?;
    round_column(&means, PREVAILING_WAGE, 2)
}

fn total_positions_by_begin_year(df: &DataFrame) -> Result<DataFrame> {
    let sums = group_sum(df, BEGIN_YEAR, TOTAL_WORKER_POSITIONS)?;
    Ok(sums.sort([BEGIN_YEAR], SortMultipleOptions::default())?)
}
