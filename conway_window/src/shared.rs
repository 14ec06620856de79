// shared.rs - Single owner of the simulation, shared by the ticker and the UI

use std::sync::{Arc, PoisonError, RwLock};

use conway::LifeGrid;

/// Cloneable handle to the one `LifeGrid` of the application.
///
/// Clones point at the same grid. A step swaps in the next generation under
/// the write lock, so readers only ever see whole generations.
#[derive(Debug, Clone)]
pub struct SharedGrid {
    inner: Arc<RwLock<LifeGrid>>,
}

impl SharedGrid {
    pub fn new(grid: LifeGrid) -> Self {
        Self { inner: Arc::new(RwLock::new(grid)) }
    }

    pub fn read<R>(&self, f: impl FnOnce(&LifeGrid) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut LifeGrid) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn step(&self) {
        self.write(LifeGrid::step);
    }
}
