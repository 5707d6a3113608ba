//! The contract every scene implements

use crate::surface::SurfaceConfig;
use glimmer_core::{Rgb, Vec2};

/// How a scene's pixels reach the target buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassMode {
    /// `shade` runs once per target pixel.
    Single,
    /// `shade` fills an intermediate buffer at full resolution, then the
    /// target is resolved from it in fixed blocks for a mosaic effect.
    TwoPass { block_size: u32 },
}

/// A renderable scene. The renderer invokes the hooks in a fixed order each
/// frame: `setup` exactly once before the first frame, then `advance`
/// followed by `shade` for every pixel.
///
/// `shade` must be a pure function of its inputs and the state written by
/// `advance`; it runs concurrently across pixels with no ordering guarantee.
pub trait Scene: Send + Sync {
    /// One-time initialization before the first frame.
    fn setup(&mut self, _config: &SurfaceConfig) {}

    /// Per-frame update, called before any shading. `time` is elapsed
    /// seconds since the start of the run, monotonically increasing.
    fn advance(&mut self, _time: f32) {}

    /// Color for the pixel at `uv` (center-origin, short axis spanning 1).
    fn shade(&self, uv: Vec2, time: f32) -> Rgb;

    /// Which pipeline variant executes this scene.
    fn pass_mode(&self) -> PassMode {
        PassMode::Single
    }

    /// Short name for window titles and listings.
    fn name(&self) -> &str;
}
