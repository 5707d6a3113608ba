//! Frame execution: advance, shade pass, optional block resolve.
//!
//! Shading is scanline-parallel. Within a frame the order is strict:
//! `advance` completes before the first `shade` call, and in two-pass mode
//! the whole intermediate buffer is shaded before the resolve pass reads it.

use crate::buffer::FrameBuffer;
use crate::scene::{PassMode, Scene};
use crate::surface::SurfaceConfig;
use glimmer_core::{GlimmerError, Result};
use rayon::prelude::*;

enum PassState {
    Single,
    TwoPass {
        block_size: u32,
        intermediate: FrameBuffer,
    },
}

/// Executes a scene against a target buffer, one frame at a time.
pub struct Renderer {
    config: SurfaceConfig,
    pass: PassState,
    started: bool,
}

impl Renderer {
    pub fn new(config: SurfaceConfig, mode: PassMode) -> Result<Self> {
        config.validate()?;
        let pass = match mode {
            PassMode::Single => PassState::Single,
            PassMode::TwoPass { block_size } => {
                if block_size == 0 {
                    return Err(GlimmerError::ValueOutOfRange {
                        field: "block_size".to_string(),
                        min: 1.0,
                        max: u32::MAX as f64,
                        value: 0.0,
                    });
                }
                PassState::TwoPass {
                    block_size,
                    intermediate: FrameBuffer::new(config.width, config.height),
                }
            }
        };
        Ok(Self {
            config,
            pass,
            started: false,
        })
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// The intermediate buffer of a two-pass pipeline, if there is one
    pub fn intermediate(&self) -> Option<&FrameBuffer> {
        match &self.pass {
            PassState::Single => None,
            PassState::TwoPass { intermediate, .. } => Some(intermediate),
        }
    }

    /// Produce one frame at `time` into `target`.
    pub fn render_frame(&mut self, scene: &mut dyn Scene, target: &mut FrameBuffer, time: f32) {
        if !self.started {
            scene.setup(&self.config);
            self.started = true;
        }
        scene.advance(time);

        match &mut self.pass {
            PassState::Single => shade_pass(&self.config, scene, target, time),
            PassState::TwoPass {
                block_size,
                intermediate,
            } => {
                shade_pass(&self.config, scene, intermediate, time);
                resolve_pass(intermediate, target, *block_size);
            }
        }
    }
}

/// Shade every pixel of `target` in parallel rows, applying gamma on write.
fn shade_pass(config: &SurfaceConfig, scene: &dyn Scene, target: &mut FrameBuffer, time: f32) {
    let width = target.width() as usize;
    let gamma = config.gamma;
    target
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                let uv = config.uv(x as u32, y as u32);
                let col = scene.shade(uv, time);
                *px = if gamma > 0.0 {
                    col.powf(1.0 / gamma).clamped()
                } else {
                    col
                };
            }
        });
}

/// Copy block-snapped samples from the intermediate buffer into the target.
/// Block origins live on the intermediate's own pixel grid, so resolving is
/// idempotent for an unchanged intermediate.
fn resolve_pass(intermediate: &FrameBuffer, target: &mut FrameBuffer, block_size: u32) {
    let width = target.width() as usize;
    let max_x = intermediate.width() - 1;
    let max_y = intermediate.height() - 1;
    target
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let sy = ((y as u32 / block_size) * block_size).min(max_y);
            for (x, px) in row.iter_mut().enumerate() {
                let sx = ((x as u32 / block_size) * block_size).min(max_x);
                *px = intermediate.get(sx, sy);
            }
        });
}
