//! CLI entry point for the flight network analyzer.
//!
//! Provides subcommands for analyzing a route table, printing a summary
//! report, and exporting route segments for a map renderer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flight_network::analyzers::analyzer::analyze_with_percentile;
use flight_network::analyzers::segments::route_segments;
use flight_network::analyzers::types::AnalysisSummary;
use flight_network::{
    config::AnalysisConfig,
    loader::load_records,
    network::build,
    output::{print_json, print_pretty, write_json, write_segments_csv},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "flight_network")]
#[command(about = "A tool to analyze flight route networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the route network and log the full analysis as JSON
    Analyze {
        /// Route CSV file (optionally .gz)
        #[arg(value_name = "FILE")]
        source: String,

        /// JSON file with analysis settings
        #[arg(short, long)]
        config: Option<String>,

        /// Percentile of total degree a hub must exceed
        #[arg(long)]
        hub_percentile: Option<f64>,

        /// Optional: write the analysis result to this JSON file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print a text report of the network's key figures
    Summary {
        /// Route CSV file (optionally .gz)
        #[arg(value_name = "FILE")]
        source: String,

        /// JSON file with analysis settings
        #[arg(short, long)]
        config: Option<String>,

        /// Number of routes in each ranking
        #[arg(short = 'n', long)]
        top: Option<usize>,

        /// Optional: write the summary to this JSON file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Export per-route coordinates and passenger totals as CSV
    Segments {
        /// Route CSV file (optionally .gz)
        #[arg(value_name = "FILE")]
        source: String,

        /// CSV file to write segments to
        #[arg(short, long, default_value = "route_segments.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/flight_network.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("flight_network.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            source,
            config,
            hub_percentile,
            output,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(p) = hub_percentile {
                config.hub_percentile = p;
            }

            let records = load_records(&source).with_context(|| format!("loading {source}"))?;
            let (network, records) = build(records);
            let result = analyze_with_percentile(&network, &records, config.hub_percentile)?;

            print_pretty(&result);
            print_json(&result)?;
            if let Some(path) = output {
                write_json(&path, &result)?;
            }
        }
        Commands::Summary {
            source,
            config,
            top,
            output,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(n) = top {
                config.top_routes = n;
            }

            let records = load_records(&source).with_context(|| format!("loading {source}"))?;
            let (network, records) = build(records);
            let result = analyze_with_percentile(&network, &records, config.hub_percentile)?;
            let summary = AnalysisSummary::from_result(&result, config.top_routes);

            println!("{summary}");
            if let Some(path) = output {
                write_json(&path, &summary)?;
            }
        }
        Commands::Segments { source, output } => {
            let records = load_records(&source).with_context(|| format!("loading {source}"))?;
            let segments = route_segments(&records);
            info!(segments = segments.len(), "Route segments prepared");
            write_segments_csv(&output, &segments)?;
        }
    }

    Ok(())
}

/// Loads settings from `path`, or the defaults when no file is given.
fn load_config(path: Option<&str>) -> Result<AnalysisConfig> {
    match path {
        Some(path) => {
            let config =
                AnalysisConfig::load(path).with_context(|| format!("loading config {path}"))?;
            info!(path, ?config, "Analysis config loaded");
            Ok(config)
        }
        None => Ok(AnalysisConfig::default()),
    }
}
