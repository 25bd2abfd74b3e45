//! CellGrid - dense row-major cell storage
//!
//! The grid is conceptually surrounded by an infinite Bedrock wall:
//! every read outside `[0,width) x [0,height)` returns [`Cell::BEDROCK`] and
//! every write outside is a no-op.

use crate::domain::Cell;

mod indexing;
mod accessors;

pub use accessors::NEIGHBOR_OFFSETS;

/// Grid position. Signed so rules can probe past the edges.
pub type Pos = (i32, i32);

/// Read-only query interface handed to the material rules.
///
/// Rules never see `&mut`; the only writer is the action-application step.
pub trait GridView: Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn get(&self, x: i32, y: i32) -> Cell;
}

pub struct CellGrid {
    width: u32,
    height: u32,
    size: usize,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Allocate an all-Empty grid.
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive, got {}x{}", width, height);
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![Cell::EMPTY; size],
        }
    }

    /// Reset every cell to Empty, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }
}

impl GridView for CellGrid {
    #[inline]
    fn width(&self) -> u32 { self.width }

    #[inline]
    fn height(&self) -> u32 { self.height }

    #[inline]
    fn get(&self, x: i32, y: i32) -> Cell {
        CellGrid::get(self, x, y)
    }
}
