use polars::prelude::DataFrame;
use serde::Serialize;

/// Render shape requested from the presentation adapter. The adapter owns
/// the drawing; the pipeline only names the shape and the axis mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    GroupedBar,
    Pie,
    Histogram,
    Line,
    Table,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub kind: ChartKind,
    /// Column plotted along x (or the slice-name column for pies).
    pub x: String,
    /// Column plotted along y (or the slice-value column for pies).
    pub y: String,
    /// Column that splits the measure into colored series, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartSpec {
    pub fn new(title: &str, kind: ChartKind, x: &str, y: &str) -> Self {
        Self {
            title: title.to_string(),
            kind,
            x: x.to_string(),
            y: y.to_string(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

/// A computed summary table plus the spec the renderer needs to draw it.
#[derive(Debug, Clone)]
pub struct Chart {
    pub spec: ChartSpec,
    pub table: DataFrame,
}

/// A chart that could not be computed, typically because an optional column
/// is absent from this dataset variant.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedChart {
    pub title: String,
    pub reason: String,
}
