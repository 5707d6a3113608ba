//! Coordinate ramp scene, mostly useful for checking surface mapping

use glimmer_core::{Rgb, Vec2};
use glimmer_shade::Scene;

/// Shades red/green from the surface coordinate and leaves blue at zero.
/// The origin-centered uv puts mid gray at the surface center.
pub struct UvScene;

impl Scene for UvScene {
    fn shade(&self, uv: Vec2, _time: f32) -> Rgb {
        Rgb::new(uv.x + 0.5, uv.y + 0.5, 0.0)
    }

    fn name(&self) -> &str {
        "uv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_mid_gray_in_red_green() {
        let c = UvScene.shade(Vec2::ZERO, 0.0);
        assert_eq!(c, Rgb::new(0.5, 0.5, 0.0));
    }

    #[test]
    fn ramp_follows_the_coordinate() {
        let c = UvScene.shade(Vec2::new(-0.5, 0.25), 3.0);
        assert!((c.r - 0.0).abs() < 1e-6);
        assert!((c.g - 0.75).abs() < 1e-6);
        assert_eq!(c.b, 0.0);
    }
}
