mod gfx;
mod sim;

pub use gfx::*;
pub use sim::*;

/// Complete frontend configuration.
#[derive(Debug, Default, Clone)]
pub struct Config {
    pub gfx: GfxConfig,
    pub sim: SimConfig,
}
