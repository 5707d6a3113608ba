//! Two-pass demonstration: the coordinate ramp resolved through pixel blocks

use crate::tuning::check_range;
use glimmer_core::{Result, Rgb, Vec2};
use glimmer_shade::{PassMode, Scene};

/// The uv ramp rendered through the block-resolve pass, giving a mosaic of
/// flat tiles.
pub struct MosaicScene {
    block_size: u32,
}

impl MosaicScene {
    pub fn new(block_size: u32) -> Self {
        Self { block_size }
    }

    pub fn from_toml(table: &toml::value::Table) -> Result<Self> {
        let block_size = table
            .get("block_size")
            .and_then(|v| v.as_integer())
            .unwrap_or(16);
        check_range("block_size", block_size as f32, 1.0, 256.0)?;
        Ok(Self {
            block_size: block_size as u32,
        })
    }
}

impl Scene for MosaicScene {
    fn shade(&self, uv: Vec2, _time: f32) -> Rgb {
        Rgb::new(uv.x + 0.5, uv.y + 0.5, 0.0)
    }

    fn pass_mode(&self) -> PassMode {
        PassMode::TwoPass {
            block_size: self.block_size,
        }
    }

    fn name(&self) -> &str {
        "mosaic"
    }
}
