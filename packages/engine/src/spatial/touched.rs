//! TouchedCells - positions mutated this frame and the value they ended with
//!
//! Doubles as the renderer's damage list and as the conflict ledger: an
//! action whose position is already here is dropped.

use std::collections::HashMap;

use crate::domain::Cell;
use crate::spatial::grid::Pos;

#[derive(Clone, Debug, Default)]
pub struct TouchedCells {
    cells: HashMap<Pos, Cell>,
}

impl TouchedCells {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, pos: Pos, cell: Cell) {
        self.cells.insert(pos, cell);
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains_key(&pos)
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pos, &Cell)> {
        self.cells.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}
