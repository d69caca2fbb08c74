//! Run a traveler through a maze and print the headings it takes, or `LOOP`.

use anyhow::{Context, Result};
use clap::Parser;
use mazerunner::{
    config::Config,
    input::{parse_grid, parse_grid_reader},
    maze::{CycleDetection, Traversal},
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "mazerunner",
    version,
    about = "Simulate a directional traveler through a modifier maze"
)]
struct Cli {
    /// Grid file: a "<rows> <cols>" header followed by the rows. Reads stdin if omitted.
    input: Option<PathBuf>,

    /// Configuration file; defaults to the platform config directory.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cycle detection strategy; overrides the configuration file.
    #[arg(short, long, value_enum)]
    detector: Option<CycleDetection>,

    /// Log the grid before traversal.
    #[arg(long)]
    dump_grid: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    if let Some(detector) = cli.detector {
        config.cycle_detection = detector;
    }
    config.dump_grid |= cli.dump_grid;

    mazerunner::logging::init(config.dump_grid);

    let grid = match &cli.input {
        Some(path) => parse_grid(path).with_context(|| format!("reading {}", path.display()))?,
        None => parse_grid_reader(std::io::stdin().lock()).context("reading stdin")?,
    };

    let traversal = Traversal::with_detection(grid, config.cycle_detection)?;
    if config.dump_grid {
        info!("grid:\n{}", traversal);
    }

    println!("{}", traversal.run());
    Ok(())
}
