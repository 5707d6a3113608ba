//! Glimmer Player - windowed scene playback library
//!
//! This crate provides the `PlayerApp` application handler for
//! playing Glimmer scenes in a window via wgpu.

mod app;
mod blit;
mod context;

pub use app::PlayerApp;
