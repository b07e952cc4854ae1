//! Rules and simulation algorithms.

mod advance;
pub mod rule;
mod simulation;

pub use advance::advance;
pub use simulation::Simulation;
