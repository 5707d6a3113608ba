//! Surface configuration: resolution, gamma, and the pixel/uv mapping

use glimmer_core::{GlimmerError, Result, Vec2};

/// Immutable per-run render surface description.
///
/// `gamma` of 0 disables gamma correction entirely; any positive finite
/// value raises each channel to `1/gamma` after shading.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub gamma: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 563,
            gamma: 2.2,
        }
    }
}

impl SurfaceConfig {
    pub fn new(width: u32, height: u32, gamma: f32) -> Result<Self> {
        let config = Self {
            width,
            height,
            gamma,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would produce no pixels or NaN math.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(GlimmerError::ValueOutOfRange {
                field: "width".to_string(),
                min: 1.0,
                max: u32::MAX as f64,
                value: 0.0,
            });
        }
        if self.height == 0 {
            return Err(GlimmerError::ValueOutOfRange {
                field: "height".to_string(),
                min: 1.0,
                max: u32::MAX as f64,
                value: 0.0,
            });
        }
        if !self.gamma.is_finite() || self.gamma < 0.0 {
            return Err(GlimmerError::ConfigError(format!(
                "gamma must be zero or a positive finite value, got {}",
                self.gamma
            )));
        }
        Ok(())
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Length in pixels of the shorter screen axis
    pub fn short_axis(&self) -> f32 {
        self.width.min(self.height) as f32
    }

    /// Map a pixel coordinate to shading space: origin at the screen center,
    /// the shorter axis spanning length 1, y pointing up.
    pub fn uv(&self, x: u32, y: u32) -> Vec2 {
        let short = self.short_axis();
        Vec2::new(
            (x as f32 - 0.5 * self.width as f32) / short,
            (y as f32 - 0.5 * self.height as f32) / short,
        )
    }

    /// Inverse of `uv`: shading-space coordinate back to (fractional) pixels
    pub fn uv_to_pixel(&self, uv: Vec2) -> Vec2 {
        let short = self.short_axis();
        Vec2::new(
            uv.x * short + 0.5 * self.width as f32,
            uv.y * short + 0.5 * self.height as f32,
        )
    }
}
