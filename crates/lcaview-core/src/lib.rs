pub mod aggregate;
pub mod charts;
pub mod config;
pub mod error;
pub mod labels;
pub mod normalize;
pub mod pages;
pub mod pipeline;
pub mod year_filter;

pub use error::{DashboardError, Result};
