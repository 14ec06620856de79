// config.rs - Command line options

use std::time::Duration;

use structopt::StructOpt;

use crate::errors::ConfigError;

#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "conway_window", about = "Conway's Game of Life in a window")]
pub struct Config {
    #[structopt(long, env = "RUST_LOG", default_value = "conway=info,conway_window=info")]
    pub rust_log: String,

    /// Grid width in cells
    #[structopt(short = "x", default_value = "60")]
    pub grid_width: i32,

    /// Grid height in cells
    #[structopt(short = "y", default_value = "40")]
    pub grid_height: i32,

    /// Window width in pixels
    #[structopt(short = "w", default_value = "600")]
    pub window_width: u32,

    /// Window height in pixels (help is only available as --help)
    #[structopt(short = "h", default_value = "400")]
    pub window_height: u32,

    /// Milliseconds between generations
    #[structopt(long, default_value = "30")]
    pub interval_ms: u64,

    /// Chance of each cell starting alive
    #[structopt(long, default_value = "0.5")]
    pub density: f64,

    /// Seed for a reproducible starting board
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.grid_width <= 0 || self.grid_height <= 0 {
            return Err(ConfigError::GridSize { width: self.grid_width, height: self.grid_height });
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::WindowSize { width: self.window_width, height: self.window_height });
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::Interval);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::Density(self.density));
        }
        Ok(self)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
