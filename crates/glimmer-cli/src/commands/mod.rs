//! CLI command implementations

pub mod play;
pub mod render;
pub mod scenes;
