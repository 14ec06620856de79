// main.rs - Conway's Game of Life in a window, one generation per timer tick

use eframe::egui;
use log::{error, info};
use structopt::StructOpt;

use conway::{LifeGrid, seed};

mod config;
mod errors;
mod shared;
mod ticker;
mod ui;

use config::Config;
use errors::AppError;
use shared::SharedGrid;
use ui::LifeApp;

const TITLE: &str = "Conway's Game of Life";

fn main() -> anyhow::Result<()> {
    let config = Config::from_args();
    env_logger::Builder::new()
        .parse_filters(&config.rust_log)
        .init();

    let config = config.validate().map_err(|e| {
        error!("{}", e);
        AppError::from(e)
    })?;
    info!("starting with config: {:#?}", config);

    let mut grid = LifeGrid::new(config.grid_width, config.grid_height);
    seed::scatter_seeded(&mut grid, config.density, config.seed);
    let grid = SharedGrid::new(grid);

    let runtime = tokio::runtime::Runtime::new().map_err(AppError::from)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(ui::inner_size(config.window_width, config.window_height)),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(move |cc| Box::new(LifeApp::new(cc, &config, grid, runtime))),
    )
    .map_err(|e| AppError::Window(e.to_string()))?;

    info!("window closed");
    Ok(())
}
