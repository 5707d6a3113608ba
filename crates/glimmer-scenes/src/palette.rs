//! Every gradient palette as a horizontal strip, separated by black rules

use glimmer_core::{GradientKind, Rgb, Vec2};
use glimmer_shade::{Scene, SurfaceConfig};

/// Stacks all palettes top to bottom, sampling each across the full width.
pub struct PaletteScene {
    config: SurfaceConfig,
}

impl PaletteScene {
    pub fn new() -> Self {
        Self {
            config: SurfaceConfig::default(),
        }
    }
}

impl Default for PaletteScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for PaletteScene {
    fn setup(&mut self, config: &SurfaceConfig) {
        self.config = config.clone();
    }

    fn shade(&self, uv: Vec2, _time: f32) -> Rgb {
        let pixel = self.config.uv_to_pixel(uv);
        let width = self.config.width as f32;
        let height = self.config.height as f32;
        let count = GradientKind::ALL.len();

        let strip_height = height / count as f32;
        // thin black rule at the bottom of every strip
        if pixel.y % strip_height < (height / 100.0).max(3.0) {
            return Rgb::BLACK;
        }

        let row = (pixel.y / strip_height).floor().clamp(0.0, count as f32 - 1.0) as usize;
        // rows count from the bottom, the first palette goes on top
        let kind = GradientKind::ALL[count - 1 - row];
        kind.sample(pixel.x / width)
    }

    fn name(&self) -> &str {
        "palette"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_scene() -> (PaletteScene, SurfaceConfig) {
        let config = SurfaceConfig::new(100, 100, 2.2).unwrap();
        let mut scene = PaletteScene::new();
        scene.setup(&config);
        (scene, config)
    }

    #[test]
    fn separator_rows_are_black() {
        let (scene, config) = ready_scene();
        // strips are 20 rows tall, the bottom 3 rows of each are the rule
        for y in [0, 1, 2, 20, 41, 82] {
            let c = scene.shade(config.uv(50, y), 0.0);
            assert_eq!(c, Rgb::BLACK, "row {} should be a separator", y);
        }
    }

    #[test]
    fn strips_sample_their_palette() {
        let (scene, config) = ready_scene();

        // bottom strip is the last palette; electric at the right edge is white
        let c = scene.shade(config.uv(99, 10), 0.0);
        assert_eq!(c, Rgb::WHITE);

        // top strip is hue; its midpoint is cyan
        let c = scene.shade(config.uv(50, 90), 0.0);
        assert!(c.r.abs() < 1e-5);
        assert!((c.g - 1.0).abs() < 1e-5);
        assert!((c.b - 1.0).abs() < 1e-5);
    }
}
