//! Avocado Analytics
//!
//! Loads the avocado CSV and serves the dashboard.
//!
//! Run with: cargo run -- serve --data ./avocado.csv

use anyhow::Context;
use avocado_analytics::api::{serve, AppState};
use avocado_analytics::config::{generate_default_config, Config, LoggingConfig};
use avocado_analytics::dataset::{load_path, Dataset};
use avocado_analytics::layout::build_layout;
use clap::{Parser, Subcommand};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "avocado-analytics")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Avocado Analytics: Understand your Avocados!")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset CSV path
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Host to bind to
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, global = true)]
    pub port: Option<u16>,

    /// Development mode: debug logging
    #[arg(long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard (default)
    Serve,

    /// Load the dataset and print what the dashboard would offer
    Inspect {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        return write_default_config(output.as_ref());
    }

    let resolved = Config::resolve(cli.config.as_deref())?;
    let mut config = resolved.config;
    apply_cli_overrides(&mut config, &cli);
    init_logging(&config.logging, config.server.debug);

    tracing::info!("Avocado Analytics v{}", env!("CARGO_PKG_VERSION"));
    for error in &resolved.skipped {
        tracing::warn!("Ignoring config file: {}", error);
    }
    match &resolved.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config"),
    }

    let dataset = load_path(&config.dataset.path)
        .with_context(|| format!("loading dataset {:?}", config.dataset.path))?;

    match cli.command {
        Some(Commands::Inspect { format }) => {
            let mut stdout = std::io::stdout().lock();
            write_summary(&summarize(&dataset), &format, &mut stdout)
        }
        _ => {
            let state = AppState::new(dataset, config.server.clone());
            serve(state, &config.server).await?;
            Ok(())
        }
    }
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(data) = &cli.data {
        config.dataset.path = data.clone();
    }
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if cli.debug {
        config.server.debug = true;
    }
}

/// `RUST_LOG` wins; otherwise the configured level, or debug in dev mode.
/// Logs go to stderr so stdout carries only command output.
fn init_logging(logging: &LoggingConfig, debug: bool) {
    let default_filter = if debug {
        "avocado_analytics=debug,tower_http=debug".to_string()
    } else {
        format!("avocado_analytics={},tower_http=info", logging.level)
    };

    let (pretty, json) = if logging.format == "json" {
        (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            ),
        )
    } else {
        (
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(pretty)
        .with(json)
        .init();
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content).with_context(|| format!("writing {:?}", path))?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct DatasetSummary {
    rows: usize,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    regions: Vec<String>,
    types: Vec<String>,
    default_region: Option<String>,
    default_type: Option<String>,
}

fn summarize(dataset: &Dataset) -> DatasetSummary {
    let initial = build_layout(dataset).initial_selection();
    let bounds = dataset.date_bounds();

    DatasetSummary {
        rows: dataset.len(),
        start_date: bounds.map(|(min, _)| min),
        end_date: bounds.map(|(_, max)| max),
        regions: dataset.regions(),
        types: dataset.types(),
        default_region: initial.as_ref().map(|s| s.region.clone()),
        default_type: initial.as_ref().map(|s| s.avocado_type.clone()),
    }
}

fn write_summary(
    summary: &DatasetSummary,
    format: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match format {
        "json" => {
            serde_json::to_writer_pretty(&mut *out, summary)?;
            writeln!(out)?;
        }
        _ => {
            let or_dash = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
            writeln!(out, "Rows:        {}", summary.rows)?;
            writeln!(
                out,
                "Date range:  {} .. {}",
                or_dash(summary.start_date.map(|d| d.to_string())),
                or_dash(summary.end_date.map(|d| d.to_string()))
            )?;
            writeln!(out, "Types:       {}", summary.types.join(", "))?;
            writeln!(
                out,
                "Defaults:    {} / {}",
                or_dash(summary.default_region.clone()),
                or_dash(summary.default_type.clone())
            )?;
            writeln!(out, "Regions ({}):", summary.regions.len())?;
            for region in &summary.regions {
                writeln!(out, "  {}", region)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use avocado_analytics::dataset::Row;

    fn dataset() -> Dataset {
        let day = |d: u32| NaiveDate::from_ymd_opt(2015, 1, d).unwrap();
        Dataset::from_rows(vec![
            Row::new(day(11), "Albany", "organic", 1.77, 1182.56),
            Row::new(day(4), "Boise", "conventional", 1.0, 500.0),
            Row::new(day(4), "Albany", "organic", 1.79, 1373.95),
        ])
    }

    #[test]
    fn test_json_summary_is_a_single_document() {
        let mut out = Vec::new();
        write_summary(&summarize(&dataset()), "json", &mut out).unwrap();

        let summary: DatasetSummary = serde_json::from_slice(&out).unwrap();
        assert_eq!(summary.rows, 3);
        assert_eq!(summary.start_date, NaiveDate::from_ymd_opt(2015, 1, 4));
        assert_eq!(summary.end_date, NaiveDate::from_ymd_opt(2015, 1, 11));
        assert_eq!(summary.regions, vec!["Albany", "Boise"]);
        assert_eq!(summary.types, vec!["conventional", "organic"]);
        assert_eq!(summary.default_region.as_deref(), Some("Albany"));
        assert_eq!(summary.default_type.as_deref(), Some("organic"));
    }

    #[test]
    fn test_table_summary() {
        let mut out = Vec::new();
        write_summary(&summarize(&dataset()), "table", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Rows:        3"));
        assert!(text.contains("Date range:  2015-01-04 .. 2015-01-11"));
        assert!(text.contains("Regions (2):\n  Albany\n  Boise\n"));
    }

    #[test]
    fn test_empty_dataset_summary() {
        let mut out = Vec::new();
        write_summary(&summarize(&Dataset::default()), "table", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Date range:  - .. -"));
        assert!(text.contains("Defaults:    - / -"));
    }
}
