use super::*;
use crate::domain::Material;

/// The 8-neighbourhood, row by row.
pub const NEIGHBOR_OFFSETS: [Pos; 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl CellGrid {
    // === Reads ===

    /// Cell at `(x, y)`; Bedrock outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        match self.index_of(x, y) {
            Some(idx) => *fast!(self.cells, [idx]),
            None => Cell::BEDROCK,
        }
    }

    #[inline]
    pub fn get_at(&self, pos: Pos) -> Cell {
        self.get(pos.0, pos.1)
    }

    #[inline]
    pub fn material(&self, x: i32, y: i32) -> Material {
        self.get(x, y).material
    }

    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|c| c.material == material).count()
    }

    // === Writes ===

    /// Store `cell` at `(x, y)`. Returns false (and does nothing) outside the grid.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                fast!(self.cells, [idx] = cell);
                true
            }
            None => false,
        }
    }

    /// Exchange two in-bounds cells. Returns false if either is outside.
    #[inline]
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        match (self.index_of(a.0, a.1), self.index_of(b.0, b.1)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    // === Neighbourhood ===

    /// All 8 neighbour positions, including ones past the edge.
    #[inline]
    pub fn neighbors(x: i32, y: i32) -> impl Iterator<Item = Pos> {
        NEIGHBOR_OFFSETS.into_iter().map(move |(dx, dy)| (x + dx, y + dy))
    }
}
