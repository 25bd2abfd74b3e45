//! Core utilities shared by every layer

#[path = "utils/safety.rs"]
#[macro_use]
pub mod safety;
