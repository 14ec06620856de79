// errors.rs - Application errors

use thiserror::Error;

/// Options that parse fine but describe an unusable setup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1 cells, got {width}x{height}")]
    GridSize { width: i32, height: i32 },

    #[error("window must be at least 1x1 pixels, got {width}x{height}")]
    WindowSize { width: u32, height: u32 },

    #[error("interval between generations must be greater than 0 ms")]
    Interval,

    #[error("density must be between 0 and 1, got {0}")]
    Density(f64),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to start timer runtime: {0}")]
    Runtime(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),
}
