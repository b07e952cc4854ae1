//! Terminal frontend for LifeCell.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simple_logger::SimpleLogger;

use lifecell_core::io::create_board;
use lifecell_core::prelude::Simulation;

mod cli;
mod config;
mod frame;
mod render;

fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()
        .context("Unable to initialize logger")?;
    info!("Starting LifeCell v{} ...", env!("CARGO_PKG_VERSION"));

    let args = cli::Args::parse();
    let config = args.config();
    let source = args.board_source();
    debug!("{:?}", source);

    let mut rng = match config.sim.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let grid = create_board(&source, &mut rng).with_context(|| match &source.file {
        Some(path) => format!("Unable to load board from {}", path.display()),
        None => "Unable to create board".to_owned(),
    })?;

    let mut sim = Simulation::new(grid, config.sim.rule, rng);
    let stdout = std::io::stdout();
    frame::run(&mut sim, &config, &mut stdout.lock())
}
