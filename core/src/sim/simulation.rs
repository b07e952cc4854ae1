//! Driver state for running a rule on a grid over many generations.

use log::debug;
use rand::RngCore;

use super::advance;
use super::rule::Rule;
use crate::grid::Grid;
use crate::history::AliveHistory;
use crate::patterns::{detect_patterns, Pattern};

/// A grid being simulated under a rule, along with everything needed to step
/// it forward.
///
/// The random source is owned by the simulation, so two simulations built
/// from the same seeded generator produce the same generations.
#[derive(Debug, Clone)]
pub struct Simulation<R> {
    grid: Grid,
    history: AliveHistory,
    rule: Rule,
    rng: R,
    generation: u64,
}

impl<R: RngCore> Simulation<R> {
    /// Constructs a new simulation starting from `grid`.
    ///
    /// The history starts out containing every cell alive in `grid`.
    pub fn new(grid: Grid, rule: Rule, rng: R) -> Self {
        let history = AliveHistory::from_grid(&grid);
        debug!(
            "New {}x{} simulation with rule {} and {} live cells",
            grid.width(),
            grid.height(),
            rule,
            history.len(),
        );
        Self {
            grid,
            history,
            rule,
            rng,
            generation: 0,
        }
    }

    /// Advances the simulation by one generation.
    pub fn step(&mut self) {
        self.grid = advance(&self.grid, &self.rule, &mut self.history, &mut self.rng);
        self.generation += 1;
    }
    /// Advances the simulation by the given number of generations.
    pub fn step_n(&mut self, generations: u64) {
        for _ in 0..generations {
            self.step();
        }
    }

    /// Returns the current generation.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    /// Returns the set of every position that has been alive so far.
    #[inline]
    pub fn history(&self) -> &AliveHistory {
        &self.history
    }
    /// Returns the rule used for the next step.
    #[inline]
    pub fn rule(&self) -> Rule {
        self.rule
    }
    /// Sets the rule used for subsequent steps.
    pub fn set_rule(&mut self, rule: Rule) {
        debug!("Switching rule from {} to {}", self.rule, rule);
        self.rule = rule;
    }
    /// Returns the number of generations that have elapsed.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    /// Returns the number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.grid.population()
    }
    /// Detects motifs in the current generation.
    pub fn patterns(&self) -> Vec<Pattern> {
        detect_patterns(&self.grid)
    }
}
