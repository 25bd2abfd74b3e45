//! Spatial storage - cell grid plus the per-frame awake and touched sets

pub mod awake;
pub mod grid;
pub mod touched;

pub use awake::AwakeSet;
pub use grid::{CellGrid, GridView, Pos};
pub use touched::TouchedCells;
