// Sector Galaxy surveyor: CLI entry point.
//
// Usage:
//   galaxy-survey system <X> <Y>            full detail for one sector
//   galaxy-survey peek <X> <Y>              star presence only
//   galaxy-survey scan [--x X] [--y Y] [--width W] [--height H]
//
// Global options: `--config FILE` (JSON, see `config.rs`) and
// `--format text|json`. Set `RUST_LOG=debug` for diagnostics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use galaxy_gen::{Coordinate, GenerationMode};
use galaxy_survey::survey::{survey_region, survey_sector};
use galaxy_survey::{OutputFormat, SurveyConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "galaxy-survey")]
#[command(version)]
#[command(about = "Survey the procedurally generated galaxy, one sector or one window at a time")]
struct Cli {
    /// JSON config file with scan defaults and output format.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (overrides the config file).
    #[arg(long = "format", value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a sector in full: star, planets, moons, resources.
    System { x: u32, y: u32 },
    /// Check whether a sector holds a star.
    Peek { x: u32, y: u32 },
    /// List occupied sectors in a window.
    Scan {
        #[arg(long)]
        x: Option<u32>,
        #[arg(long)]
        y: Option<u32>,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SurveyConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SurveyConfig::default(),
    };
    let format = config.resolve_format(cli.format);

    let output = match cli.command {
        Command::System { x, y } => {
            survey_sector(Coordinate::new(x, y), GenerationMode::Full, format)?
        }
        Command::Peek { x, y } => {
            survey_sector(Coordinate::new(x, y), GenerationMode::ExistenceOnly, format)?
        }
        Command::Scan {
            x,
            y,
            width,
            height,
        } => {
            let region = config.resolve_region(x, y, width, height);
            survey_region(&region, config.max_scan_cells, format)?
        }
    };

    println!("{output}");
    Ok(())
}
