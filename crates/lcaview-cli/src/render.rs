//! Terminal and JSON rendering of page reports. This is the stand-in
//! presentation adapter: it receives summary tables plus chart specs and
//! never reaches back into the pipeline.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};
use serde_json::{json, Map, Value};

use lcaview_core::pages::PageReport;
use lcaview_core::pipeline::DashboardReport;

pub fn print_page(page: &PageReport) {
    println!("\n== {} ==", page.page.title());
    for chart in &page.charts {
        println!("\n{} [{:?}]", chart.spec.title, chart.spec.kind);
        println!("{}", render_table(&chart.table));
    }
    for skipped in &page.skipped {
        println!("\n(skipped: {}: {})", skipped.title, skipped.reason);
    }
}

fn render_table(df: &DataFrame) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(df.get_column_names().iter().map(|name| name.to_string()));
    for idx in 0..df.height() {
        if let Some(row) = df.get(idx) {
            table.add_row(row.iter().map(format_value));
        }
    }
    table
}

fn format_value(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(text) => (*text).to_string(),
        AnyValue::StringOwned(text) => text.to_string(),
        other => other.to_string(),
    }
}

pub fn report_to_json(report: &DashboardReport) -> Value {
    let pages: Vec<Value> = report
        .pages
        .iter()
        .map(|page| {
            let charts: Vec<Value> = page
                .charts
                .iter()
                .map(|chart| {
                    json!({
                        "spec": &chart.spec,
                        "rows": rows_to_json(&chart.table),
                    })
                })
                .collect();
            json!({
                "page": page.page,
                "title": page.page.title(),
                "charts": charts,
                "skipped": &page.skipped,
            })
        })
        .collect();

    json!({
        "selector": report.selector.to_string(),
        "min_year": report.min_year,
        "max_year": report.max_year,
        "pages": pages,
    })
}

fn rows_to_json(df: &DataFrame) -> Vec<Value> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let Some(values) = df.get(idx) else {
            continue;
        };
        let mut row = Map::new();
        for (name, value) in names.iter().zip(values.iter()) {
            row.insert(name.clone(), value_to_json(value));
        }
        rows.push(Value::Object(row));
    }
    rows
}

fn value_to_json(value: &AnyValue) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => json!(*v),
        AnyValue::String(v) => json!(*v),
        AnyValue::StringOwned(v) => json!(v.as_str()),
        AnyValue::Int8(v) => json!(*v),
        AnyValue::Int16(v) => json!(*v),
        AnyValue::Int32(v) => json!(*v),
        AnyValue::Int64(v) => json!(*v),
        AnyValue::UInt8(v) => json!(*v),
        AnyValue::UInt16(v) => json!(*v),
        AnyValue::UInt32(v) => json!(*v),
        AnyValue::UInt64(v) => json!(*v),
        AnyValue::Float32(v) => json!(*v),
        AnyValue::Float64(v) => json!(*v),
        other => json!(other.to_string()),
    }
}
