//! Engine settings - tunable constants, loadable from JSON
//!
//! Settings only tune numbers. Which family does what stays compiled in.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cell::Material;
use super::materials::props;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("setting `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Seed for the grid's random source; `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Fall speed multiplier applied every frame a gravity-affected cell is evaluated.
    pub gravity_acceleration: f32,
    /// Chance to accept a flow target that has same-family fluid on top of it.
    pub bubble_chance: f64,
    pub fire_extinguish_chance: f64,
    pub wood_flammability: f64,
    pub water_flow_speed: u32,
    pub smoke_flow_speed: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            seed: None,
            gravity_acceleration: 1.1,
            bubble_chance: 0.05,
            fire_extinguish_chance: 0.01,
            wood_flammability: props(Material::Wood).flammability,
            water_flow_speed: props(Material::Water).flow_speed,
            smoke_flow_speed: props(Material::Smoke).flow_speed,
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        check_probability("bubble_chance", self.bubble_chance)?;
        check_probability("fire_extinguish_chance", self.fire_extinguish_chance)?;
        check_probability("wood_flammability", self.wood_flammability)?;
        if !(self.gravity_acceleration >= 1.0) {
            return Err(SettingsError::OutOfRange {
                field: "gravity_acceleration",
                value: self.gravity_acceleration as f64,
            });
        }
        if self.water_flow_speed == 0 {
            return Err(SettingsError::OutOfRange { field: "water_flow_speed", value: 0.0 });
        }
        if self.smoke_flow_speed == 0 {
            return Err(SettingsError::OutOfRange { field: "smoke_flow_speed", value: 0.0 });
        }
        Ok(())
    }

    /// Chance that `material` catches fire when a burning neighbour tests it.
    #[inline]
    pub fn flammability(&self, material: Material) -> f64 {
        match material {
            Material::Wood => self.wood_flammability,
            other => props(other).flammability,
        }
    }

    #[inline]
    pub fn flow_speed(&self, material: Material) -> u32 {
        match material {
            Material::Water => self.water_flow_speed,
            Material::Smoke => self.smoke_flow_speed,
            other => props(other).flow_speed,
        }
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), SettingsError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange { field, value })
    }
}
