use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use super::evaluate::evaluate_awake;
use super::{apply, Grid, PerfTimer};

pub(super) fn step(grid: &mut Grid) {
    let perf_on = grid.perf_enabled;
    if perf_on {
        grid.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // The touched map only ever describes the current frame.
    grid.touched.clear();

    // This frame's set moves to `spare_awake`; `awake` starts empty and
    // collects next frame's wakes during the write phase.
    grid.spare_awake.clear();
    std::mem::swap(&mut grid.awake, &mut grid.spare_awake);
    let awake_cells = grid.spare_awake.len();

    // === READ PHASE ===
    let frame_seed: u64 = grid.rng.random();
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut actions = evaluate_awake(&grid.cells, &grid.spare_awake, &grid.behaviors, &grid.settings, frame_seed);
    if let Some(t0) = t0 {
        grid.perf_stats.evaluate_ms = t0.elapsed_ms();
    }

    // === WRITE PHASE ===
    let t0 = if perf_on { Some(PerfTimer::start()) } else { None };
    actions.shuffle(&mut grid.rng);
    let outcome = apply::apply_actions(grid, &actions);
    if let Some(t0) = t0 {
        grid.perf_stats.apply_ms = t0.elapsed_ms();
    }

    trace!(
        "frame {}: awake={} actions={} applied={} conflicts={} rejected={} touched={}",
        grid.frame,
        awake_cells,
        actions.len(),
        outcome.applied,
        outcome.conflicts,
        outcome.rejected,
        grid.touched.len()
    );

    if perf_on {
        grid.perf_stats.awake_cells = awake_cells as u32;
        grid.perf_stats.actions_proposed = actions.len() as u32;
        grid.perf_stats.actions_applied = outcome.applied as u32;
        grid.perf_stats.actions_conflicted = outcome.conflicts as u32;
        grid.perf_stats.actions_rejected = outcome.rejected as u32;
        grid.perf_stats.touched_cells = grid.touched.len() as u32;
        grid.perf_stats.next_awake_cells = grid.awake.len() as u32;
        if let Some(start) = step_start {
            grid.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    grid.frame += 1;
}
