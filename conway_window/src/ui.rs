// ui.rs - Window that paints the board and forwards input to the simulation

use eframe::egui;
use egui::{Color32, Pos2, Rect, Vec2};
use log::debug;
use tokio::runtime::Runtime;

use conway::{TCell, seed};

use crate::config::Config;
use crate::shared::SharedGrid;
use crate::ticker::Ticker;

pub const BACKGROUND_ALPHA  : u8      = 179;
pub const LIVE              : Color32 = Color32::from_rgb(0, 128, 0);
pub const STATUS_BAR_HEIGHT : f32     = 24.0;

pub fn background() -> Color32 {
    Color32::from_white_alpha(BACKGROUND_ALPHA)
}

/// Window inner size that leaves exactly `width` x `height` pixels for the board.
pub fn inner_size(width: u32, height: u32) -> [f32; 2] {
    [width as f32, height as f32 + STATUS_BAR_HEIGHT]
}

/// Toggles `cell` if the simulation is paused. Returns whether the board changed.
pub fn apply_click(grid: &SharedGrid, paused: bool, (x, y): TCell) -> bool {
    if !paused {
        return false;
    }
    grid.write(|grid| grid.toggle_cell(x, y));
    true
}

pub fn clear_board(grid: &SharedGrid) {
    grid.write(|grid| grid.clear());
    debug!("board cleared");
}

/// Replaces the board with a fresh random scatter.
pub fn reseed_board(grid: &SharedGrid, density: f64, seed: Option<u64>) {
    grid.write(|grid| {
        grid.clear();
        seed::scatter_seeded(grid, density, seed);
    });
}

pub struct LifeApp {
    grid    : SharedGrid,
    density : f64,
    ticker  : Ticker,
    // Dropped after the ticker so its task is aborted on a live runtime
    _runtime: Runtime,
}

impl LifeApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config, grid: SharedGrid, runtime: Runtime) -> Self {
        let ctx = cc.egui_ctx.clone();
        let ticker = Ticker::spawn(runtime.handle(), grid.clone(), config.interval(), move || {
            ctx.request_repaint();
        });

        Self {
            grid,
            density: config.density,
            ticker,
            _runtime: runtime,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (space, clear, reseed) = ctx.input(|i| {
            (i.key_pressed(egui::Key::Space), i.key_pressed(egui::Key::C), i.key_pressed(egui::Key::R))
        });

        if space {
            let paused = self.ticker.toggle_pause();
            debug!("{}", if paused { "paused" } else { "resumed" });
        }
        if clear {
            clear_board(&self.grid);
        }
        if reseed {
            reseed_board(&self.grid, self.density, None);
        }
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let board = response.rect;

        painter.rect_filled(board, 0.0, background());

        let scale = self.grid.read(|grid| {
            let scale = cell_scale(board, grid.width(), grid.height());
            for x in 0..grid.width() {
                for y in 0..grid.height() {
                    if grid.get_cell(x, y) {
                        painter.rect_filled(cell_rect(board, scale, x, y), 0.0, LIVE);
                    }
                }
            }
            scale
        });

        // Editing only while paused so clicks don't race the timer
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                apply_click(&self.grid, self.ticker.is_paused(), cell_at(board, scale, pos));
            }
        }
    }
}

/// Pixels per cell along each axis
pub fn cell_scale(board: Rect, width: i32, height: i32) -> Vec2 {
    Vec2::new(board.width() / width as f32, board.height() / height as f32)
}

pub fn cell_rect(board: Rect, scale: Vec2, x: i32, y: i32) -> Rect {
    let min = board.min + Vec2::new(x as f32 * scale.x, y as f32 * scale.y);
    Rect::from_min_size(min, scale)
}

pub fn cell_at(board: Rect, scale: Vec2, pos: Pos2) -> (i32, i32) {
    let offset = pos - board.min;
    ((offset.x / scale.x).floor() as i32, (offset.y / scale.y).floor() as i32)
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::bottom("status")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                let (generation, live) = self.grid.read(|grid| (grid.generation(), grid.visible_population()));
                ui.horizontal(|ui| {
                    ui.label(format!("Generation: {}", generation));
                    ui.separator();
                    ui.label(format!("Live cells: {}", live));
                    ui.separator();
                    ui.label(if self.ticker.is_paused() { "⏸ Paused (click cells to edit)" } else { "▶ Running" });
                    ui.separator();
                    ui.label("Space: pause  C: clear  R: random");
                });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.draw_board(ui));
    }
}

#[cfg(test)]
mod tests {
    use conway::LifeGrid;

    use super::*;

    fn shared(cells: &[TCell]) -> SharedGrid {
        let mut grid = LifeGrid::new(60, 40);
        for &(x, y) in cells {
            grid.set_cell(x, y, true);
        }
        SharedGrid::new(grid)
    }

    fn board() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 20.0), Vec2::new(600.0, 400.0))
    }

    #[test]
    fn scale_maps_grid_onto_surface() {
        let scale = cell_scale(board(), 60, 40);
        assert_eq!(scale, Vec2::new(10.0, 10.0));

        let scale = cell_scale(board(), 30, 100);
        assert_eq!(scale, Vec2::new(20.0, 4.0));
    }

    #[test]
    fn cell_rect_is_offset_by_board_origin() {
        let scale = cell_scale(board(), 60, 40);
        let rect = cell_rect(board(), scale, 3, 2);
        assert_eq!(rect.min, egui::pos2(30.0, 40.0));
        assert_eq!(rect.size(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn click_position_maps_back_to_cell() {
        let scale = cell_scale(board(), 60, 40);
        assert_eq!(cell_at(board(), scale, egui::pos2(35.0, 45.0)), (3, 2));
        assert_eq!(cell_at(board(), scale, egui::pos2(0.0, 20.0)), (0, 0));
        assert_eq!(cell_at(board(), scale, egui::pos2(599.9, 419.9)), (59, 39));
    }

    #[test]
    fn click_is_ignored_while_running() {
        let grid = shared(&[(3, 2)]);
        assert!(!apply_click(&grid, false, (3, 2)));
        assert!(!apply_click(&grid, false, (7, 7)));
        assert!(grid.read(|g| g.get_cell(3, 2)));
        assert!(!grid.read(|g| g.get_cell(7, 7)));
    }

    #[test]
    fn click_toggles_cell_while_paused() {
        let grid = shared(&[(3, 2)]);
        assert!(apply_click(&grid, true, (3, 2)));
        assert!(apply_click(&grid, true, (7, 7)));
        assert!(!grid.read(|g| g.get_cell(3, 2)));
        assert!(grid.read(|g| g.get_cell(7, 7)));
    }

    #[test]
    fn clear_empties_board_and_resets_generation() {
        let grid = shared(&[(0, 0), (1, 0), (2, 0), (10, 10), (11, 10), (10, 11), (11, 11)]);
        grid.step();
        grid.step();
        assert_eq!(grid.read(LifeGrid::generation), 2);

        clear_board(&grid);
        assert_eq!(grid.read(LifeGrid::population), 0);
        assert_eq!(grid.read(LifeGrid::generation), 0);
    }

    #[test]
    fn reseed_replaces_board() {
        let grid = shared(&[(-5, -5)]);
        grid.step();

        reseed_board(&grid, 0.5, Some(3));
        let (population, visible, generation) =
            grid.read(|g| (g.population(), g.visible_population(), g.generation()));
        assert!(population > 0);
        assert_eq!(population, visible);
        assert_eq!(generation, 0);
    }

    #[test]
    fn inner_size_leaves_square_cells_by_default() {
        let [w, h] = inner_size(600, 400);
        let board = Rect::from_min_size(egui::pos2(0.0, 0.0), Vec2::new(w, h - STATUS_BAR_HEIGHT));
        assert_eq!(cell_scale(board, 60, 40), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn background_is_translucent_white() {
        let color = background();
        assert_eq!(color.a(), BACKGROUND_ALPHA);
        assert!(color.r() > 0);
        assert_eq!(color.r(), color.g());
        assert_eq!(color.g(), color.b());
    }
}
