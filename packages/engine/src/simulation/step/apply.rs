//! Write phase: apply a frame's actions with at-most-one mutation per cell.

use crate::domain::Material;
use crate::spatial::{CellGrid, TouchedCells};
use crate::systems::actions::Action;

use super::Grid;

/// Counters from one application pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub applied: usize,
    /// Dropped because a position was already touched this frame.
    pub conflicts: usize,
    /// Dropped because a position was outside the grid or held Bedrock.
    pub rejected: usize,
}

pub(super) fn apply_actions(grid: &mut Grid, actions: &[Action]) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for action in actions {
        if action.mutates() {
            if conflicts(&grid.touched, action) {
                outcome.conflicts += 1;
                continue;
            }
            if !writable(&grid.cells, action) {
                outcome.rejected += 1;
                continue;
            }
            action.apply(&mut grid.cells, &mut grid.touched);
        }

        // Even StayAwake wakes its neighbourhood: traversability around an
        // applied action may have changed.
        let (positions, n) = action.wake_positions();
        for &(x, y) in &positions[..n] {
            grid.awake.wake_neighborhood(x, y);
        }
        outcome.applied += 1;
    }

    outcome
}

/// First writer wins: any endpoint already touched drops the whole action.
#[inline]
fn conflicts(touched: &TouchedCells, action: &Action) -> bool {
    let (positions, n) = action.positions();
    positions[..n].iter().any(|&pos| touched.contains(pos))
}

/// Actions never write outside the grid and never overwrite Bedrock.
#[inline]
fn writable(cells: &CellGrid, action: &Action) -> bool {
    let (positions, n) = action.positions();
    positions[..n].iter().all(|&(x, y)| {
        cells.in_bounds(x, y) && cells.material(x, y) != Material::Bedrock
    })
}
