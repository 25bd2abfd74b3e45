use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::behaviors::BehaviorRegistry;
use crate::spatial::{AwakeSet, CellGrid, TouchedCells};
use crate::domain::EngineSettings;

use super::perf_stats::PerfStats;
use super::random::entropy_seed;
use super::Grid;

pub(super) fn create_grid(width: u32, height: u32, settings: EngineSettings) -> Grid {
    debug_assert!(settings.validate().is_ok(), "invalid settings: {:?}", settings);

    let seed = settings.seed.unwrap_or_else(entropy_seed);
    debug!("creating {}x{} grid (seed {})", width, height, seed);

    Grid {
        cells: CellGrid::new(width, height),
        behaviors: BehaviorRegistry::new(),
        settings,
        awake: AwakeSet::new(width, height),
        spare_awake: AwakeSet::new(width, height),
        touched: TouchedCells::new(),
        rng: SmallRng::seed_from_u64(seed),
        frame: 0,
        touched_transfer: Vec::with_capacity(1024),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
