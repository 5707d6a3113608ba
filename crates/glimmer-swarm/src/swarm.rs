//! Firefly state and the per-frame flocking step

use crate::params::SwarmParams;
use crate::rng::SwarmRng;
use glimmer_core::{smootherstep, Rgb, Vec2};

/// One simulated firefly. Position lives in the unit square.
#[derive(Debug, Clone)]
pub struct Firefly {
    pub position: Vec2,
    pub velocity: Vec2,
    pub color: Rgb,
    pub phase: f32,
}

/// The whole flock plus its parameters.
pub struct Swarm {
    params: SwarmParams,
    flies: Vec<Firefly>,
    /// Scratch for the gather phase, reused across steps
    forces: Vec<Vec2>,
}

impl Swarm {
    pub fn new(params: SwarmParams) -> Self {
        Self {
            params,
            flies: Vec::new(),
            forces: Vec::new(),
        }
    }

    pub fn params(&self) -> &SwarmParams {
        &self.params
    }

    pub fn flies(&self) -> &[Firefly] {
        &self.flies
    }

    /// Populate the flock with random positions, headings, colors, and
    /// pulse phases. Clears any previous population.
    pub fn seed(&mut self, rng: &mut SwarmRng) {
        self.flies.clear();
        self.flies.reserve(self.params.count);
        for _ in 0..self.params.count {
            let color = match self.params.palette {
                Some(kind) => kind.sample(rng.next_f32()),
                None => Rgb::new(rng.next_f32(), rng.next_f32(), rng.next_f32()),
            };
            self.flies.push(Firefly {
                position: Vec2::new(rng.next_f32(), rng.next_f32()),
                velocity: rng.unit_vec2() * self.params.speed,
                color,
                phase: rng.range(0.0, std::f32::consts::TAU),
            });
        }
    }

    /// One simulation step.
    ///
    /// Forces are gathered against a snapshot of the current positions, so
    /// the outcome does not depend on iteration order. Integration then runs
    /// per firefly: apply force, jitter the heading, renormalize to constant
    /// speed, move, and reflect off the unit-square walls.
    pub fn step(&mut self, rng: &mut SwarmRng) {
        let params = &self.params;
        self.forces.clear();
        self.forces.resize(self.flies.len(), Vec2::ZERO);

        for (i, fly) in self.flies.iter().enumerate() {
            let mut force = Vec2::ZERO;
            for (j, other) in self.flies.iter().enumerate() {
                if i == j {
                    continue;
                }
                let offset = other.position - fly.position;
                let dist = offset.length();
                // Coincident pairs have no defined direction, skip them
                if dist <= 1e-5 || dist >= params.attraction_radius {
                    continue;
                }
                let magnitude = if dist < 2.0 * params.entity_radius {
                    -params.attraction_strength * 2.0 / dist
                } else {
                    smootherstep(0.0, params.attraction_radius, dist) * params.attraction_strength
                };
                force += offset.normalized() * magnitude;
            }
            self.forces[i] = force;
        }

        for (fly, force) in self.flies.iter_mut().zip(&self.forces) {
            fly.velocity += *force;
            fly.velocity += rng.unit_vec2() * rng.range(0.0, params.jitter);
            let mut heading = fly.velocity.normalized();
            if heading.length_squared() == 0.0 {
                heading = Vec2::X;
            }
            fly.velocity = heading * params.speed;
            fly.position += fly.velocity;
            reflect_into_unit(&mut fly.position, &mut fly.velocity);
        }
    }
}

/// Push a firefly that left the unit square back inside, flipping the
/// velocity component of each crossed axis.
fn reflect_into_unit(position: &mut Vec2, velocity: &mut Vec2) {
    if position.x < 0.0 || position.x > 1.0 {
        velocity.x = -velocity.x;
        position.x = position.x.clamp(0.0, 1.0);
    }
    if position.y < 0.0 || position.y > 1.0 {
        velocity.y = -velocity.y;
        position.y = position.y.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glimmer_core::GradientKind;

    fn still_fly(x: f32, y: f32) -> Firefly {
        Firefly {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            color: Rgb::WHITE,
            phase: 0.0,
        }
    }

    #[test]
    fn velocity_magnitude_is_speed_after_step() {
        let params = SwarmParams::default();
        let speed = params.speed;
        let mut swarm = Swarm::new(params);
        let mut rng = SwarmRng::new(11);
        swarm.seed(&mut rng);
        for _ in 0..5 {
            swarm.step(&mut rng);
        }
        for fly in swarm.flies() {
            assert!((fly.velocity.length() - speed).abs() < 1e-4);
        }
    }

    #[test]
    fn positions_stay_in_unit_square() {
        let mut swarm = Swarm::new(SwarmParams::default());
        let mut rng = SwarmRng::new(3);
        swarm.seed(&mut rng);
        for _ in 0..200 {
            swarm.step(&mut rng);
        }
        for fly in swarm.flies() {
            assert!(fly.position.x >= 0.0 && fly.position.x <= 1.0);
            assert!(fly.position.y >= 0.0 && fly.position.y <= 1.0);
        }
    }

    #[test]
    fn close_pair_repels() {
        let mut params = SwarmParams::default();
        params.jitter = 0.0;
        // 0.01 apart, inside the 2 * entity_radius = 0.016 repulsion zone
        let mut swarm = Swarm::new(params);
        swarm.flies = vec![still_fly(0.5, 0.5), still_fly(0.51, 0.5)];
        let before = swarm.flies[0].position.distance(&swarm.flies[1].position);

        let mut rng = SwarmRng::new(1);
        swarm.step(&mut rng);
        let after = swarm.flies[0].position.distance(&swarm.flies[1].position);
        assert!(after > before);
        assert!(swarm.flies[0].velocity.x < 0.0);
        assert!(swarm.flies[1].velocity.x > 0.0);
    }

    #[test]
    fn no_force_beyond_attraction_radius() {
        let mut params = SwarmParams::default();
        params.jitter = 0.0;
        let speed = params.speed;
        let mut swarm = Swarm::new(params);
        let mut a = still_fly(0.2, 0.5);
        let mut b = still_fly(0.8, 0.5);
        a.velocity = Vec2::new(0.0, speed);
        b.velocity = Vec2::new(0.0, speed);
        swarm.flies = vec![a, b];

        let mut rng = SwarmRng::new(1);
        swarm.step(&mut rng);
        // 0.6 apart is outside attraction_radius, so both keep heading +y
        for fly in swarm.flies() {
            assert!(fly.velocity.x.abs() < 1e-6);
            assert!((fly.velocity.y - speed).abs() < 1e-6);
        }
    }

    #[test]
    fn lone_fly_walks_straight_and_reflects() {
        let mut params = SwarmParams::default();
        params.jitter = 0.0;
        params.speed = 0.1;
        let mut swarm = Swarm::new(params);
        let mut fly = still_fly(0.45, 0.5);
        fly.velocity = Vec2::new(0.1, 0.0);
        swarm.flies = vec![fly];

        let mut rng = SwarmRng::new(1);
        for _ in 0..5 {
            swarm.step(&mut rng);
        }
        // Five steps of 0.1 land just shy of the right wall
        assert!((swarm.flies[0].position.x - 0.95).abs() < 1e-5);
        assert!((swarm.flies[0].position.y - 0.5).abs() < 1e-6);

        // The sixth step crosses, clamps to the wall, and turns around
        swarm.step(&mut rng);
        assert!((swarm.flies[0].position.x - 1.0).abs() < 1e-6);
        assert!(swarm.flies[0].velocity.x < 0.0);

        swarm.step(&mut rng);
        assert!((swarm.flies[0].position.x - 0.9).abs() < 1e-5);
    }

    #[test]
    fn seed_is_reproducible() {
        let mut a = Swarm::new(SwarmParams::default());
        let mut b = Swarm::new(SwarmParams::default());
        a.seed(&mut SwarmRng::new(77));
        b.seed(&mut SwarmRng::new(77));
        assert_eq!(a.flies.len(), b.flies.len());
        for (fa, fb) in a.flies.iter().zip(b.flies.iter()) {
            assert_eq!(fa.position, fb.position);
            assert_eq!(fa.velocity, fb.velocity);
            assert_eq!(fa.color, fb.color);
        }
    }

    #[test]
    fn palette_seeding_draws_from_the_gradient() {
        let mut params = SwarmParams::default();
        params.palette = Some(GradientKind::Fire);
        let mut swarm = Swarm::new(params);
        swarm.seed(&mut SwarmRng::new(5));
        // Fire samples always order the channels red >= green >= blue
        for fly in swarm.flies() {
            assert!(fly.color.r >= fly.color.g);
            assert!(fly.color.g >= fly.color.b);
        }
    }
}
