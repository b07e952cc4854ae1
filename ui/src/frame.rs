//! Terminal frame loop.

use anyhow::Result;
use log::{debug, info};
use rand::RngCore;
use std::io::Write;

use crate::config::Config;
use crate::render::{apply_pattern_colors, render};
use lifecell_core::prelude::*;

/// ANSI sequence that clears the screen and moves the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Draws the simulation to `out` once per generation until
/// `max_generations` is reached, or forever if there is no limit.
pub fn run<R: RngCore, W: Write>(
    sim: &mut Simulation<R>,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    info!(
        "Running {} on {}x{} board",
        sim.rule().label(),
        sim.grid().width(),
        sim.grid().height(),
    );
    loop {
        draw_frame(sim, config, out)?;

        if let Some(max) = config.sim.max_generations {
            if sim.generation() >= max {
                info!("Stopped after {} generations", sim.generation());
                return Ok(());
            }
        }

        sim.step();
        if !config.sim.interval.is_zero() {
            std::thread::sleep(config.sim.interval);
        }
    }
}

fn draw_frame<R: RngCore, W: Write>(
    sim: &Simulation<R>,
    config: &Config,
    out: &mut W,
) -> Result<()> {
    if config.gfx.clear_screen {
        write!(out, "{}", CLEAR_SCREEN)?;
    }

    let mut frame = render(sim.grid(), &config.gfx);
    let patterns = if config.sim.show_patterns {
        let patterns = sim.patterns();
        frame = apply_pattern_colors(&frame, &patterns, &config.gfx);
        Some(patterns)
    } else {
        None
    };
    writeln!(out, "{}", frame)?;
    writeln!(out, "{}", status_line(sim, patterns.as_deref()))?;
    out.flush()?;

    debug!("Drew generation {}", sim.generation());
    Ok(())
}

/// Returns a one-line summary of the simulation.
pub fn status_line<R: RngCore>(sim: &Simulation<R>, patterns: Option<&[Pattern]>) -> String {
    let mut ret = format!(
        "Generation {} | Population {} | Rule {}",
        sim.generation(),
        sim.population(),
        sim.rule().label(),
    );
    if let Some(patterns) = patterns {
        ret.push_str(&format!(" | Patterns {}", patterns.len()));
    }
    ret
}
