//! Conway's Game of Life on an unbounded plane.
//!
//! [`LifeGrid`] keeps only the set of live cells and computes each generation
//! from it. Its width and height describe the visible board; nothing stops a
//! pattern from leaving it.

pub mod grid;
pub mod seed;

pub use grid::{LifeGrid, TCell, TLiveSet};
