//! Flocking fireflies that deposit fading light trails

use glimmer_core::{Rgb, Vec2};
use glimmer_shade::{FrameBuffer, Scene, SurfaceConfig};
use glimmer_swarm::{splat, Swarm, SwarmParams, SwarmRng};

/// A swarm simulation rendered through its own persistent trail buffer.
///
/// Each `advance` runs one simulation step and deposits the flock into the
/// trail; `shade` only reads the trail back, so the frame pass stays pure.
pub struct FirefliesScene {
    swarm: Swarm,
    rng: SwarmRng,
    trail: FrameBuffer,
    config: SurfaceConfig,
}

impl FirefliesScene {
    pub fn new(params: SwarmParams, seed: u32) -> Self {
        Self {
            swarm: Swarm::new(params),
            rng: SwarmRng::new(seed),
            trail: FrameBuffer::new(1, 1),
            config: SurfaceConfig::default(),
        }
    }
}

impl Scene for FirefliesScene {
    fn setup(&mut self, config: &SurfaceConfig) {
        self.config = config.clone();
        self.trail = FrameBuffer::new(config.width, config.height);
        self.swarm.seed(&mut self.rng);
    }

    fn advance(&mut self, time: f32) {
        self.swarm.step(&mut self.rng);
        splat(
            self.swarm.flies(),
            self.swarm.params(),
            &mut self.trail,
            &self.config,
            time,
        );
    }

    fn shade(&self, uv: Vec2, _time: f32) -> Rgb {
        let pixel = self.config.uv_to_pixel(uv);
        let x = pixel.x.round().clamp(0.0, (self.trail.width() - 1) as f32) as u32;
        let y = pixel.y.round().clamp(0.0, (self.trail.height() - 1) as f32) as u32;
        self.trail.get(x, y)
    }

    fn name(&self) -> &str {
        "fireflies"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total_light(scene: &FirefliesScene, config: &SurfaceConfig) -> f32 {
        let mut sum = 0.0;
        for y in 0..config.height {
            for x in 0..config.width {
                let c = scene.shade(config.uv(x, y), 0.0);
                sum += c.r + c.g + c.b;
            }
        }
        sum
    }

    #[test]
    fn advance_deposits_light() {
        let config = SurfaceConfig::new(64, 64, 0.0).unwrap();
        let mut scene = FirefliesScene::new(SwarmParams::default(), 9);
        scene.setup(&config);
        assert_eq!(total_light(&scene, &config), 0.0);

        scene.advance(1.0 / 60.0);
        assert!(total_light(&scene, &config) > 0.0);
    }

    #[test]
    fn same_seed_gives_identical_frames() {
        let config = SurfaceConfig::new(48, 48, 0.0).unwrap();
        let mut a = FirefliesScene::new(SwarmParams::default(), 21);
        let mut b = FirefliesScene::new(SwarmParams::default(), 21);
        a.setup(&config);
        b.setup(&config);
        for frame in 1..=3 {
            let time = frame as f32 / 60.0;
            a.advance(time);
            b.advance(time);
        }
        for y in (0..48).step_by(7) {
            for x in (0..48).step_by(7) {
                let uv = config.uv(x, y);
                assert_eq!(a.shade(uv, 0.0), b.shade(uv, 0.0));
            }
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let config = SurfaceConfig::new(48, 48, 0.0).unwrap();
        let mut a = FirefliesScene::new(SwarmParams::default(), 1);
        let mut b = FirefliesScene::new(SwarmParams::default(), 2);
        a.setup(&config);
        b.setup(&config);
        a.advance(1.0 / 60.0);
        b.advance(1.0 / 60.0);

        let mut differs = false;
        for y in 0..48 {
            for x in 0..48 {
                let uv = config.uv(x, y);
                if a.shade(uv, 0.0) != b.shade(uv, 0.0) {
                    differs = true;
                }
            }
        }
        assert!(differs);
    }
}
