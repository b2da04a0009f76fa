//! Page builders: each produces the summary tables behind one dashboard
//! page from the filtered record set. A chart that fails to compute is
//! logged and reported as skipped; the rest of the page still renders.

mod agent;
mod court;
mod employer;
mod job;
mod overview;
mod worksite;

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::warn;

use crate::charts::{Chart, ChartSpec, SkippedChart};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageId {
    Overview,
    Job,
    Worksite,
    Employer,
    Agent,
    Court,
}

impl PageId {
    pub const ALL: [PageId; 6] = [
        PageId::Overview,
        PageId::Job,
        PageId::Worksite,
        PageId::Employer,
        PageId::Agent,
        PageId::Court,
    ];

    pub fn title(self) -> &'static str {
        match self {
            PageId::Overview => "H1B Overview",
            PageId::Job => "Job Analysis",
            PageId::Worksite => "WorkSite Analysis",
            PageId::Employer => "Employer Analysis",
            PageId::Agent => "Agent Analysis",
            PageId::Court => "Court Analysis",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "overview" => Some(PageId::Overview),
            "job" => Some(PageId::Job),
            "worksite" => Some(PageId::Worksite),
            "employer" => Some(PageId::Employer),
            "agent" => Some(PageId::Agent),
            "court" => Some(PageId::Court),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageReport {
    pub page: PageId,
    pub charts: Vec<Chart>,
    pub skipped: Vec<SkippedChart>,
}

pub fn build_page(page: PageId, df: &DataFrame) -> PageReport {
    match page {
        PageId::Overview => overview::build(df),
        PageId::Job => job::build(df),
        PageId::Worksite => worksite::build(df),
        PageId::Employer => employer::build(df),
        PageId::Agent => agent::build(df),
        PageId::Court => court::build(df),
    }
}

pub(crate) struct PageBuilder {
    page: PageId,
    charts: Vec<Chart>,
    skipped: Vec<SkippedChart>,
}

impl PageBuilder {
    pub(crate) fn new(page: PageId) -> Self {
        Self {
            page,
            charts: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, spec: ChartSpec, table: Result<DataFrame>) {
        match table {
            Ok(table) => self.charts.push(Chart { spec, table }),
            Err(err) => {
                warn!(
                    page = self.page.title(),
                    chart = %spec.title,
                    error = %err,
                    "skipping chart"
                );
                self.skipped.push(SkippedChart {
                    title: spec.title,
                    reason: err.to_string(),
                });
            }
        }
    }

    pub(crate) fn finish(self) -> PageReport {
        PageReport {
            page: self.page,
            charts: self.charts,
            skipped: self.skipped,
        }
    }
}
