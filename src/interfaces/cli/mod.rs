// ============================================================
// CLI DRIVER
// ============================================================
// Terminal shell that plays the navigation layer between the screens

use crate::application::{ChartRenderUseCase, CsvSummarizer};
use crate::domain::chart::ChartType;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::RenderConfig;
use crate::infrastructure::file_source::LocalFileSource;
use crate::infrastructure::render::HttpRenderClient;
use crate::interfaces::screens::{ResultScreen, ResultView, SelectionScreen};
use std::sync::Arc;
use tracing::info;

const USAGE: &str = "Usage: statviz <csv-file> [chart-type]

Dynamic statistics visualization generator: parses a CSV file, prints
per-column summary statistics, and asks the rendering service for a chart.
Chart types: bar (default), line, hist, area, box.";

pub struct CliArgs {
    pub path: String,
    pub chart_type: ChartType,
}

/// Parse command-line arguments: a CSV path and an optional chart type
pub fn parse_args<I>(mut args: I) -> Result<CliArgs>
where
    I: Iterator<Item = String>,
{
    let path = args.next().ok_or_else(|| {
        AppError::ValidationError(format!("Missing CSV file argument.\n\n{}", USAGE))
    })?;

    let chart_type = match args.next() {
        Some(raw) => raw.parse::<ChartType>()?,
        None => ChartType::default(),
    };

    if args.next().is_some() {
        return Err(AppError::ValidationError(format!(
            "Too many arguments.\n\n{}",
            USAGE
        )));
    }

    Ok(CliArgs { path, chart_type })
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{}", value),
        None => "n/a".to_string(),
    }
}

/// Render the result view for the terminal
pub fn format_result(view: &ResultView) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "File: {} ({} rows)\n",
        view.file_name,
        view.dataset.len()
    ));

    for (column, stats) in view.summary.iter() {
        out.push_str(&format!("\n{}\n", column));
        out.push_str(&format!("  Mean: {}\n", format_stat(stats.mean)));
        out.push_str(&format!("  Median: {}\n", format_stat(stats.median)));
        out.push_str(&format!("  Mode: {}\n", format_stat(stats.mode)));
    }

    if let Some(image_url) = &view.image_url {
        out.push_str(&format!("\nChart image: {}\n", image_url));
    } else if let Some(warning) = &view.warning {
        out.push_str(&format!("\nWarning: {}\n", warning));
    }

    out
}

/// Drive the full screen flow once: pick, submit, load, print.
pub async fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    let config = RenderConfig::load()?;
    info!(base_url = %config.base_url, "using render service");

    let mut selection = SelectionScreen::new();
    let source = LocalFileSource::new(&args.path);
    if !selection.pick_file(&source).await? {
        println!("No file selected.");
        return Ok(());
    }
    selection.set_chart_type(args.chart_type);
    let payload = selection.submit()?;

    println!(
        "Generating {} for {}...",
        payload.chart_type.label(),
        payload.file_name
    );

    let summarizer = CsvSummarizer::new();
    let renderer = ChartRenderUseCase::new(Arc::new(HttpRenderClient::new(&config)));
    let mut result_screen = ResultScreen::new();
    let view = result_screen.load(&payload, &summarizer, &renderer).await?;

    print!("{}", format_result(&view));
    Ok(())
}
