use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sharpside::config::{AppConfig, OutputFormat};
use sharpside::data::slate::load_slate;
use sharpside::monitoring::logger;
use sharpside::{AnalysisEngine, SlateReport};

#[derive(Debug, Parser)]
#[command(name = "sharpside", version, about = "Confidence-rated NBA picks and parlays")]
struct Cli {
    /// Config file (defaults to $SHARPSIDE_CONFIG, then config/default.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a slate file (JSON array of game records) and print the report.
    Analyze {
        slate: PathBuf,
        /// Overrides `output.format` from the config.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    logger::init_logging(&config.monitoring)?;

    tracing::info!(
        confidence_threshold = config.engine.confidence_threshold,
        parlay_confidence_threshold = config.engine.parlay_confidence_threshold,
        "Sharpside starting"
    );

    match cli.command {
        Command::Analyze { slate, format } => {
            let format = format.unwrap_or(config.output.format);
            run_analyze(&config, &slate, format)
        }
    }
}

fn run_analyze(config: &AppConfig, slate: &std::path::Path, format: OutputFormat) -> Result<()> {
    let records = load_slate(slate)?;
    tracing::info!(path = %slate.display(), games = records.len(), "Slate loaded");

    let engine = AnalysisEngine::new(config.engine, config.parlay.clone());
    let report = engine.analyze_slate(records);

    print_report(&report, format, config.output.pretty)
}

fn print_report(report: &SlateReport, format: OutputFormat, pretty: bool) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = if pretty {
                serde_json::to_string_pretty(report)
            } else {
                serde_json::to_string(report)
            }
            .context("Failed to serialize slate report")?;
            println!("{json}");
        }
        OutputFormat::Text => println!("{report}"),
    }
    Ok(())
}
