//! Deterministic xorshift32 PRNG for swarm seeding and jitter

use glimmer_core::Vec2;

pub struct SwarmRng {
    state: u32,
}

impl SwarmRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Returns a float in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (u32::MAX as f32)
    }

    /// Returns a float in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns a random unit direction (uniform over the circle)
    pub fn unit_vec2(&mut self) -> Vec2 {
        // Rejection sample the unit disk, then normalize
        loop {
            let x = self.range(-1.0, 1.0);
            let y = self.range(-1.0, 1.0);
            let s = x * x + y * y;
            if s > 1e-6 && s < 1.0 {
                let inv = 1.0 / s.sqrt();
                return Vec2::new(x * inv, y * inv);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_range_bounds() {
        let mut rng = SwarmRng::new(42);
        for _ in 0..1000 {
            let v = rng.range(0.0, 10.0);
            assert!(v >= 0.0 && v < 10.0);
        }
    }

    #[test]
    fn rng_unit_vec2_length() {
        let mut rng = SwarmRng::new(123);
        for _ in 0..100 {
            let d = rng.unit_vec2();
            assert!((d.length() - 1.0).abs() < 0.01);
        }
    }

    #[test]
    fn rng_is_deterministic_per_seed() {
        let mut a = SwarmRng::new(7);
        let mut b = SwarmRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_f32(), b.next_f32());
        }
    }

    #[test]
    fn rng_zero_seed_still_advances() {
        let mut rng = SwarmRng::new(0);
        let first = rng.next_f32();
        let second = rng.next_f32();
        assert_ne!(first, second);
    }
}
