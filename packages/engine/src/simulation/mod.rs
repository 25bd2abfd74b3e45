//! Grid - the simulation scheduler
//!
//! Owns the cell storage, the awake set, the touched map and the random
//! source, and runs one frame per [`Grid::step`]:
//!
//! 1. clear the touched map
//! 2. evaluate every awake cell against a read-only view (rules only read)
//! 3. shuffle the flattened action list
//! 4. apply actions in order, first writer per cell wins, later conflicts dropped
//! 5. wake every applied action's positions and their 8 neighbours for next frame
//!
//! Cells that nothing touched drop out of the awake set, so a settled region
//! costs nothing.

use rand::rngs::SmallRng;

use crate::behaviors::BehaviorRegistry;
use crate::domain::{Cell, EngineSettings, Material, SettingsError};
use crate::spatial::{AwakeSet, CellGrid, TouchedCells};
use crate::systems::actions::Action;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
mod random;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/evaluate.rs"]
mod evaluate;
#[path = "step/apply.rs"]
mod apply;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;

pub use apply::ApplyOutcome;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation grid and its scheduler.
pub struct Grid {
    cells: CellGrid,
    behaviors: BehaviorRegistry,
    settings: EngineSettings,

    // Per-frame transient state
    awake: AwakeSet,
    /// Reused as the next frame's awake set while the current one is evaluated.
    spare_awake: AwakeSet,
    touched: TouchedCells,

    // State
    rng: SmallRng,
    frame: u64,

    // Render transfer
    touched_transfer: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl Grid {
    /// Allocate an all-Empty grid. Panics on a zero dimension.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_grid(width, height, EngineSettings::default())
    }

    pub fn with_settings(width: u32, height: u32, settings: EngineSettings) -> Self {
        init::create_grid(width, height, settings)
    }

    /// Seeded grid: same seed, same inputs, same frames.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        init::create_grid(width, height, EngineSettings::default().with_seed(seed))
    }

    // === Dimensions / state ===

    pub fn width(&self) -> u32 { self.cells.width() }

    pub fn height(&self) -> u32 { self.cells.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn settings(&self) -> &EngineSettings { &self.settings }

    pub fn cells(&self) -> &CellGrid { &self.cells }

    // === Settings ===

    pub fn set_settings(&mut self, settings: EngineSettings) -> Result<(), SettingsError> {
        settings::set_settings(self, settings)
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), SettingsError> {
        settings::load_settings_json(self, json)
    }

    // === Reads ===

    /// Cell at `(x, y)`; Bedrock outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells.get(x, y)
    }

    /// Cells mutated since the last `step()` started, with their new values.
    pub fn touched_this_frame(&self) -> &TouchedCells {
        &self.touched
    }

    pub fn is_awake(&self, x: i32, y: i32) -> bool {
        self.awake.contains(x, y)
    }

    pub fn awake_count(&self) -> usize {
        self.awake.len()
    }

    pub fn count(&self, material: Material) -> usize {
        self.cells.count(material)
    }

    // === Commands ===

    /// Place `material` at `(x, y)`. Returns false outside the grid.
    pub fn spawn(&mut self, x: i32, y: i32, material: Material) -> bool {
        commands::spawn(self, x, y, material)
    }

    /// Eraser: same as spawning Empty.
    pub fn remove(&mut self, x: i32, y: i32) -> bool {
        commands::spawn(self, x, y, Material::Empty)
    }

    /// Fill a `size` x `size` square centred on `(cx, cy)`.
    pub fn spawn_brush(&mut self, cx: i32, cy: i32, size: u32, material: Material) -> usize {
        commands::spawn_brush(self, cx, cy, size, material)
    }

    pub fn remove_brush(&mut self, cx: i32, cy: i32, size: u32) -> usize {
        commands::spawn_brush(self, cx, cy, size, Material::Empty)
    }

    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === Simulation ===

    /// Advance exactly one frame.
    pub fn step(&mut self) {
        step::step(self)
    }

    /// Apply actions in the given order with first-writer-wins conflict
    /// resolution and wake propagation. `step()` calls this after shuffling.
    pub fn apply_actions(&mut self, actions: &[Action]) -> ApplyOutcome {
        apply::apply_actions(self, actions)
    }

    // === Render transfer ===

    /// Touched cells packed as `[x, y, material, color]` quadruples.
    pub fn extract_touched(&mut self) -> &[u32] {
        render_extract::extract_touched(self)
    }

    // === Perf ===

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last step's perf snapshot (zeros when perf is disabled).
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
