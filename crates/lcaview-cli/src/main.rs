use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use polars::prelude::DataFrame;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod render;

use lcaview_core::config::AppConfig;
use lcaview_core::normalize::normalize;
use lcaview_core::pages::PageId;
use lcaview_core::pipeline::build_dashboard;
use lcaview_core::year_filter::{valid_years, YearSelector};

#[derive(Parser, Debug)]
#[command(author, version, about = "H1B LCA disclosure analytics", long_about = None)]
struct Cli {
    /// Path to the disclosure CSV (overrides env and config file)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the dashboard pages as terminal tables
    Report(ReportArgs),
    /// Print the selectable year range
    Years,
    /// Write every page's charts as a JSON document
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
struct ReportArgs {
    /// Year to filter on, or "all"
    #[arg(long, default_value = "all")]
    year: String,

    /// Restrict output to a single page (overview, job, worksite,
    /// employer, agent, court)
    #[arg(long)]
    page: Option<String>,
}

#[derive(Args, Debug, Default)]
struct ExportArgs {
    /// Year to filter on, or "all"
    #[arg(long, default_value = "all")]
    year: String,

    /// Output file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.data.clone(), cli.config.as_deref())?;
    let records = lcaview_store::load_records(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    info!(rows = records.height(), "loaded disclosure records");

    match cli.command {
        Command::Report(args) => handle_report(&records, args),
        Command::Years => handle_years(&records),
        Command::Export(args) => handle_export(&records, args),
    }
}

fn handle_report(records: &DataFrame, args: ReportArgs) -> Result<()> {
    let selector = parse_selector(&args.year)?;
    let page_filter = match args.page.as_deref() {
        Some(name) => Some(
            PageId::parse(name).with_context(|| format!("unknown page '{name}'"))?,
        ),
        None => None,
    };

    let report = build_dashboard(records, selector)?;
    println!(
        "H1B LCA Disclosure Data: {} (years {}..={})",
        report.selector, report.min_year, report.max_year
    );
    for page in &report.pages {
        if page_filter.is_some_and(|wanted| wanted != page.page) {
            continue;
        }
        render::print_page(page);
    }
    Ok(())
}

fn handle_years(records: &DataFrame) -> Result<()> {
    let normalized = normalize(records)?;
    let years = valid_years(&normalized)?;
    for year in years {
        println!("{year}");
    }
    println!("all");
    Ok(())
}

fn handle_export(records: &DataFrame, args: ExportArgs) -> Result<()> {
    let selector = parse_selector(&args.year)?;
    let report = build_dashboard(records, selector)?;
    let doc = render::report_to_json(&report);
    let text = serde_json::to_string_pretty(&doc)?;
    match args.output {
        Some(path) => std::fs::write(&path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{text}"),
    }
    Ok(())
}

fn parse_selector(raw: &str) -> Result<YearSelector> {
    if raw.eq_ignore_ascii_case("all") || raw.eq_ignore_ascii_case("all years") {
        return Ok(YearSelector::All);
    }
    let year = raw
        .parse::<i32>()
        .with_context(|| format!("invalid year selector '{raw}'"))?;
    Ok(YearSelector::Year(year))
}
