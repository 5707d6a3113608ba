//! Glimmer Shade - the CPU frame pipeline
//!
//! This crate owns the contract every scene implements and the machinery
//! that turns a scene into pixels:
//! - `Scene` - setup / advance / shade extension points
//! - `SurfaceConfig` - resolution and gamma, validated at startup
//! - `FrameBuffer` - the RGB pixel grid scenes are rendered into
//! - `Renderer` - single-pass and two-pass (block resolve) execution,
//!   scanline-parallel

mod buffer;
mod renderer;
mod scene;
mod surface;

pub use buffer::FrameBuffer;
pub use renderer::Renderer;
pub use scene::{PassMode, Scene};
pub use surface::SurfaceConfig;
