//! Sandfall Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - core/        - Safety macros
//! - domain/      - Cells, material table, settings
//! - spatial/     - Cell storage, awake set, touched map
//! - systems/     - Actions and per-material rules
//! - simulation/  - The scheduler (`Grid`)
//! - api/         - Browser facade and console logging

// Utils with safety macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod api;

pub use systems::actions;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook and console logging.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    api::logging::init_console_logger(log::LevelFilter::Info);
    log::info!("Sandfall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use actions::Action;
pub use api::wasm::World;
pub use domain::{Cell, EngineSettings, Material, SettingsError};
pub use simulation::{ApplyOutcome, Grid, PerfStats};
pub use spatial::Pos;

// Export material ids for JS
#[wasm_bindgen]
pub fn mat_empty() -> u8 { Material::Empty.id() }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { Material::Sand.id() }
#[wasm_bindgen]
pub fn mat_water() -> u8 { Material::Water.id() }
#[wasm_bindgen]
pub fn mat_smoke() -> u8 { Material::Smoke.id() }
#[wasm_bindgen]
pub fn mat_stone() -> u8 { Material::Stone.id() }
#[wasm_bindgen]
pub fn mat_wood() -> u8 { Material::Wood.id() }
#[wasm_bindgen]
pub fn mat_fire() -> u8 { Material::Fire.id() }
#[wasm_bindgen]
pub fn mat_bedrock() -> u8 { Material::Bedrock.id() }
