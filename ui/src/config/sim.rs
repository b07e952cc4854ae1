use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use lifecell_core::prelude::Rule;

/// Settings that control how the simulation runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Time between generations.
    pub interval: Duration,
    /// Transition rule applied each generation.
    pub rule: Rule,
    /// Whether to highlight blocks and blinkers.
    pub show_patterns: bool,
    /// Number of generations to run before stopping, or `None` to run
    /// forever.
    pub max_generations: Option<u64>,
    /// Seed for the random source, or `None` to seed from system entropy.
    pub seed: Option<u64>,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            interval: Speed::Fast.interval(),
            rule: Rule::default(),
            show_patterns: false,
            max_generations: None,
            seed: None,
        }
    }
}

/// Named simulation speed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Speed {
    /// Half a second per generation.
    Fast,
    /// One second per generation.
    Medium,
    /// Three seconds per generation.
    Slow,
}
impl Speed {
    /// Every speed, from fastest to slowest.
    pub const ALL: [Speed; 3] = [Speed::Fast, Speed::Medium, Speed::Slow];

    /// Returns the time between generations at this speed.
    pub fn interval(self) -> Duration {
        match self {
            Speed::Fast => Duration::from_millis(500),
            Speed::Medium => Duration::from_secs(1),
            Speed::Slow => Duration::from_secs(3),
        }
    }
}
impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speed::Fast => write!(f, "fast"),
            Speed::Medium => write!(f, "medium"),
            Speed::Slow => write!(f, "slow"),
        }
    }
}
impl FromStr for Speed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        Speed::ALL
            .iter()
            .copied()
            .find(|speed| speed.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown speed {:?}; expected fast, medium, or slow", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_presets() {
        assert_eq!(Duration::from_secs_f64(0.5), Speed::Fast.interval());
        assert_eq!(Duration::from_secs(1), Speed::Medium.interval());
        assert_eq!(Duration::from_secs(3), Speed::Slow.interval());
        assert_eq!(Ok(Speed::Medium), "Medium".parse());
        assert!("warp".parse::<Speed>().is_err());
        assert_eq!(Speed::Fast.interval(), SimConfig::default().interval);
    }
}
