//! Actions - the intents a material rule may propose against the grid
//!
//! Rules never write; they return actions. The scheduler shuffles the frame's
//! actions, drops any whose position was already touched, and applies the
//! rest through [`Action::apply`].

use crate::domain::Cell;
use crate::spatial::{CellGrid, Pos, TouchedCells};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Unconditionally place `cell` at `pos`.
    Spawn { pos: Pos, cell: Cell },
    /// Same as spawning Empty.
    Remove { pos: Pos },
    /// Move `mover` (the value that was at `from`, with its updated fall
    /// speed) to `to`; whatever was at `to` ends up at `from`.
    Switch { from: Pos, to: Pos, mover: Cell },
    /// No mutation: keep evaluating `pos` next frame.
    StayAwake { pos: Pos },
}

impl Action {
    #[inline]
    pub fn spawn(pos: Pos, cell: Cell) -> Self {
        Action::Spawn { pos, cell }
    }

    #[inline]
    pub fn remove(pos: Pos) -> Self {
        Action::Remove { pos }
    }

    #[inline]
    pub fn stay_awake(pos: Pos) -> Self {
        Action::StayAwake { pos }
    }

    /// Switch from `from` to `to`, or `None` when they coincide.
    ///
    /// A move onto the cell's own position is not a move; rules go through
    /// this constructor so that case collapses to "no action".
    #[inline]
    pub fn switch(from: Pos, to: Pos, mover: Cell) -> Option<Self> {
        if from == to {
            None
        } else {
            Some(Action::Switch { from, to, mover })
        }
    }

    /// Primary target position.
    #[inline]
    pub fn target(&self) -> Pos {
        match *self {
            Action::Spawn { pos, .. } | Action::Remove { pos } | Action::StayAwake { pos } => pos,
            Action::Switch { to, .. } => to,
        }
    }

    /// Every position the action would write. Empty for `StayAwake`.
    #[inline]
    pub fn positions(&self) -> ([Pos; 2], usize) {
        match *self {
            Action::Spawn { pos, .. } | Action::Remove { pos } => ([pos, pos], 1),
            Action::Switch { from, to, .. } => ([from, to], 2),
            Action::StayAwake { pos } => ([pos, pos], 0),
        }
    }

    /// Positions whose neighbourhood wakes when the action is applied.
    #[inline]
    pub fn wake_positions(&self) -> ([Pos; 2], usize) {
        match *self {
            Action::StayAwake { pos } => ([pos, pos], 1),
            _ => self.positions(),
        }
    }

    #[inline]
    pub fn mutates(&self) -> bool {
        !matches!(self, Action::StayAwake { .. })
    }

    /// Write the action into `grid` and record resulting values in `touched`.
    ///
    /// Conflict checks are the caller's job; this applies unconditionally.
    pub fn apply(&self, grid: &mut CellGrid, touched: &mut TouchedCells) {
        match *self {
            Action::Spawn { pos, cell } => {
                if grid.set(pos.0, pos.1, cell) {
                    touched.record(pos, cell);
                }
            }
            Action::Remove { pos } => {
                if grid.set(pos.0, pos.1, Cell::EMPTY) {
                    touched.record(pos, Cell::EMPTY);
                }
            }
            Action::Switch { from, to, mover } => {
                debug_assert_ne!(from, to, "switch onto its own position");
                if !grid.in_bounds(from.0, from.1) || !grid.in_bounds(to.0, to.1) {
                    return;
                }
                let displaced = grid.get_at(to);
                grid.set(to.0, to.1, mover);
                grid.set(from.0, from.1, displaced);
                touched.record(to, mover);
                touched.record(from, displaced);
            }
            Action::StayAwake { .. } => {}
        }
    }
}
