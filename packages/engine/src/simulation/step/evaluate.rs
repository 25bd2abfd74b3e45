//! Read phase: every awake cell proposes actions against a shared view.

use rand::rngs::SmallRng;
use rand::SeedableRng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::behaviors::{BehaviorRegistry, RuleContext};
use crate::domain::EngineSettings;
use crate::spatial::{AwakeSet, CellGrid, Pos};
use crate::systems::actions::Action;

use super::random::cell_seed;

/// Evaluate all awake positions. The result is in awake-set index order, on
/// both the sequential and the parallel path.
pub(super) fn evaluate_awake(
    cells: &CellGrid,
    awake: &AwakeSet,
    behaviors: &BehaviorRegistry,
    settings: &EngineSettings,
    frame_seed: u64,
) -> Vec<Action> {
    let positions: Vec<Pos> = awake.iter().collect();

    #[cfg(feature = "parallel")]
    {
        positions
            .par_iter()
            .flat_map_iter(|&(x, y)| evaluate_cell(cells, behaviors, settings, frame_seed, x, y))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        positions
            .iter()
            .flat_map(|&(x, y)| evaluate_cell(cells, behaviors, settings, frame_seed, x, y))
            .collect()
    }
}

#[inline]
fn evaluate_cell(
    cells: &CellGrid,
    behaviors: &BehaviorRegistry,
    settings: &EngineSettings,
    frame_seed: u64,
    x: i32,
    y: i32,
) -> Vec<Action> {
    let Some(idx) = cells.index_of(x, y) else {
        return Vec::new();
    };
    if cells.get(x, y).is_empty() {
        return Vec::new();
    }

    let mut rng = SmallRng::seed_from_u64(cell_seed(frame_seed, idx));
    let mut ctx = RuleContext {
        view: cells,
        x,
        y,
        settings,
        rng: &mut rng,
    };
    behaviors.evaluate(&mut ctx)
}
