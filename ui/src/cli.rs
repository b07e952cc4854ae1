//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{Config, Speed};
use lifecell_core::io::BoardSource;
use lifecell_core::prelude::{Fill, Placement, Rule};

/// Run a cellular automaton in the terminal.
#[derive(Parser, Debug)]
#[command(name = "lifecell", version, about)]
pub struct Args {
    /// Board width in cells (default: 50, or the width of --file).
    #[arg(long)]
    pub width: Option<usize>,

    /// Board height in cells (default: 40, or the height of --file).
    #[arg(long)]
    pub height: Option<usize>,

    /// JSON board file to load.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Seconds between generations.
    #[arg(long, value_parser = parse_interval, conflicts_with = "speed")]
    pub interval: Option<Duration>,

    /// Named speed: fast, medium, or slow.
    #[arg(long)]
    pub speed: Option<Speed>,

    /// Canvas around a loaded pattern: dead or random.
    #[arg(long, default_value = "dead")]
    pub fill_mode: Fill,

    /// Location of a loaded pattern: topleft or center.
    #[arg(long, default_value = "topleft")]
    pub placement: Placement,

    /// Transition rule: classic, respawn, zombie, or neumann.
    #[arg(long, default_value = "classic")]
    pub rules: Rule,

    /// Highlight blocks and blinkers.
    #[arg(long)]
    pub patterns: bool,

    /// Stop after this many generations.
    #[arg(long)]
    pub generations: Option<u64>,

    /// Seed for the random source.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Args {
    /// Returns the configuration selected by the arguments.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(interval) = self.interval {
            config.sim.interval = interval;
        } else if let Some(speed) = self.speed {
            config.sim.interval = speed.interval();
        }
        config.sim.rule = self.rules;
        config.sim.show_patterns = self.patterns;
        config.sim.max_generations = self.generations;
        config.sim.seed = self.seed;
        config
    }

    /// Returns where to get the starting board.
    pub fn board_source(&self) -> BoardSource {
        BoardSource {
            file: self.file.clone(),
            width: self.width,
            height: self.height,
            fill: self.fill_mode,
            placement: self.placement,
        }
    }
}

fn parse_interval(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.trim().parse().map_err(|e| format!("{}", e))?;
    if secs.is_finite() && secs >= 0.0 {
        Duration::try_from_secs_f64(secs).map_err(|e| format!("Invalid interval {}: {}", s, e))
    } else {
        Err(format!("Interval must be a non-negative number of seconds; got {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("lifecell").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]).unwrap();
        let config = args.config();
        assert_eq!(Duration::from_millis(500), config.sim.interval);
        assert_eq!(Rule::default(), config.sim.rule);
        assert!(!config.sim.show_patterns);
        assert_eq!(None, config.sim.max_generations);
        assert_eq!(BoardSource::default(), args.board_source());
    }

    #[test]
    fn test_all_options() {
        let args = parse(&[
            "--width", "80",
            "--height", "24",
            "--file", "glider.json",
            "--interval", "0.25",
            "--fill-mode", "random",
            "--placement", "center",
            "--rules", "zombie",
            "--patterns",
            "--generations", "100",
            "--seed", "42",
        ])
        .unwrap();
        let config = args.config();
        assert_eq!(Duration::from_millis(250), config.sim.interval);
        assert_eq!("zombie", config.sim.rule.name());
        assert!(config.sim.show_patterns);
        assert_eq!(Some(100), config.sim.max_generations);
        assert_eq!(Some(42), config.sim.seed);
        assert_eq!(
            BoardSource {
                file: Some(PathBuf::from("glider.json")),
                width: Some(80),
                height: Some(24),
                fill: Fill::Random,
                placement: Placement::Center,
            },
            args.board_source(),
        );
    }

    #[test]
    fn test_speed_preset() {
        let config = parse(&["--speed", "slow"]).unwrap().config();
        assert_eq!(Duration::from_secs(3), config.sim.interval);
        assert!(parse(&["--speed", "slow", "--interval", "1"]).is_err());
    }

    #[test]
    fn test_invalid_values() {
        assert!(parse(&["--rules", "highlife"]).is_err());
        assert!(parse(&["--fill-mode", "alive"]).is_err());
        assert!(parse(&["--placement", "bottom"]).is_err());
        assert!(parse(&["--interval", "-1"]).is_err());
        assert!(parse(&["--interval", "soon"]).is_err());
        assert!(parse(&["--interval", "1e30"]).is_err());
        assert!(parse(&["--interval", "NaN"]).is_err());
        assert!(parse(&["--width", "-5"]).is_err());
    }
}
