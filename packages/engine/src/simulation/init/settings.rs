use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::domain::{EngineSettings, SettingsError};

use super::Grid;

pub(super) fn set_settings(grid: &mut Grid, settings: EngineSettings) -> Result<(), SettingsError> {
    settings.validate()?;
    if let Some(seed) = settings.seed {
        if grid.settings.seed != Some(seed) {
            grid.rng = SmallRng::seed_from_u64(seed);
        }
    }
    debug!("settings updated: {:?}", settings);
    grid.settings = settings;
    // Rules may decide differently now, so sleeping cells get another look.
    grid.awake.fill();
    Ok(())
}

pub(super) fn load_settings_json(grid: &mut Grid, json: &str) -> Result<(), SettingsError> {
    let settings = EngineSettings::from_json(json)?;
    set_settings(grid, settings)
}
