// grid.rs - Live-cell set for Conway's Game of Life

use std::collections::{HashMap, HashSet};

use log::trace;

pub type TCell    = (i32, i32);
pub type TLiveSet = HashSet<TCell>;

/// Moore neighborhood offsets, (0,0) excluded
const NEIGHBORS: [(i32, i32); 8] = [
    (-1,-1),(-1, 0),(-1, 1),( 0,-1),
    ( 0, 1),( 1,-1),( 1, 0),( 1, 1)
];

/// A Game of Life board of fixed `width` x `height`.
///
/// The board only bounds what gets displayed. The simulation itself runs on the
/// whole integer plane, so patterns walking off the board keep evolving and can
/// come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeGrid {
    width      : i32,
    height     : i32,
    cells      : TLiveSet,
    generation : u64,
}

impl LifeGrid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells      : TLiveSet::new(),
            generation : 0,
        }
    }

    pub fn width(&self)  -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// Number of steps applied since construction or the last [`clear`](Self::clear).
    pub fn generation(&self) -> u64 { self.generation }

    /// Live cells anywhere on the plane, off-board ones included.
    pub fn population(&self) -> usize { self.cells.len() }

    pub fn visible_population(&self) -> usize {
        self.cells.iter().filter(|&&cell| self.in_bounds(cell)).count()
    }

    pub fn in_bounds(&self, (x, y): TCell) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        if alive {
            self.cells.insert((x, y));
        } else {
            self.cells.remove(&(x, y));
        }
    }

    pub fn get_cell(&self, x: i32, y: i32) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        let alive = self.get_cell(x, y);
        self.set_cell(x, y, !alive);
    }

    pub fn live_cells(&self) -> impl Iterator<Item = TCell> + '_ {
        self.cells.iter().copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
    }

    /// Advances the board by one generation.
    ///
    /// Only cells next to a live cell can be alive afterwards, so the tally is
    /// built from the live set outward instead of scanning the board.
    pub fn step(&mut self) {
        let mut neighbor_count: HashMap<TCell, u8> = HashMap::with_capacity(self.cells.len() * 8);

        for &(x, y) in &self.cells {
            for &(dx, dy) in &NEIGHBORS {
                // Neighbors past the i32 range are dropped
                let (Some(nx), Some(ny)) = (x.checked_add(dx), y.checked_add(dy)) else {
                    continue;
                };
                *neighbor_count.entry((nx, ny)).or_insert(0) += 1;
            }
        }

        let next_cells: TLiveSet = neighbor_count
            .into_iter()
            .filter(|&(cell, count)| {
                match (self.cells.contains(&cell), count) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                }
            })
            .map(|(cell, _)| cell)
            .collect();

        self.cells = next_cells;
        self.generation += 1;

        trace!("generation {} -> {} live cells", self.generation, self.cells.len());
    }
}
