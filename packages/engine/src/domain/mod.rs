//! Domain - materials, cell values and engine settings

pub mod cell;
pub mod materials;
pub mod settings;

pub use cell::{Cell, Material};
pub use materials::{Family, FallDirection, MaterialProps};
pub use settings::{EngineSettings, SettingsError};
