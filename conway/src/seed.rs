// seed.rs - Random starting boards

use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::LifeGrid;

/// Fair coin per cell, the classic random soup
pub const DEFAULT_DENSITY: f64 = 0.5;

/// Brings each on-board cell to life with probability `density`.
///
/// Cells already alive stay alive; off-board cells are never touched.
pub fn scatter<R: Rng>(grid: &mut LifeGrid, density: f64, rng: &mut R) {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };

    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if rng.random_bool(density) {
                grid.set_cell(x, y, true);
            }
        }
    }
}

/// [`scatter`] driven by a `StdRng`, seeded from `seed` or from the OS when `None`.
pub fn scatter_seeded(grid: &mut LifeGrid, density: f64, seed: Option<u64>) {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_os_rng(),
    };
    scatter(grid, density, &mut rng);

    debug!(
        "scattered {}x{} board at density {} (seed {:?}): {} live cells",
        grid.width(), grid.height(), density, seed, grid.population()
    );
}
