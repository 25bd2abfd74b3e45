//! Systems - per-cell rules and the actions they emit

pub mod actions;
pub mod behaviors;
