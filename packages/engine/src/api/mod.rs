//! Public API for a browser shell

pub mod logging;
pub mod wasm;
