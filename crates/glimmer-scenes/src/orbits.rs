//! Planets and orbit paths drawn in a rotating, warped coordinate space

use crate::tuning::{check_range, toml_f32};
use glimmer_core::{sd_circle, sd_ring, smooth_min, smoothstep, GlimmerError, Result, Rgb, Vec2};
use glimmer_shade::Scene;

#[derive(Debug, Clone)]
pub struct OrbitsParams {
    pub planet_count: u32,
    /// Animation rate in scene-time units per second
    pub time_scale: f32,
    pub body_radius: f32,
    pub ring_thickness: f32,
    /// Smooth-union width between each body and its orbit line
    pub blend: f32,
}

impl Default for OrbitsParams {
    fn default() -> Self {
        Self {
            planet_count: 10,
            time_scale: 1.8,
            body_radius: 0.05,
            ring_thickness: 0.01,
            blend: 0.1,
        }
    }
}

impl OrbitsParams {
    pub fn from_toml(table: &toml::value::Table) -> Result<Self> {
        let mut params = Self::default();

        if let Some(v) = table.get("planet_count") {
            let n = v.as_integer().unwrap_or(params.planet_count as i64);
            if !(1..=100).contains(&n) {
                return Err(GlimmerError::ValueOutOfRange {
                    field: "planet_count".to_string(),
                    min: 1.0,
                    max: 100.0,
                    value: n as f64,
                });
            }
            params.planet_count = n as u32;
        }
        if let Some(v) = table.get("time_scale") {
            params.time_scale = toml_f32(v, params.time_scale);
        }
        if let Some(v) = table.get("body_radius") {
            params.body_radius = toml_f32(v, params.body_radius);
        }
        if let Some(v) = table.get("ring_thickness") {
            params.ring_thickness = toml_f32(v, params.ring_thickness);
        }
        if let Some(v) = table.get("blend") {
            params.blend = toml_f32(v, params.blend);
        }

        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        check_range("time_scale", self.time_scale, 0.0, 100.0)?;
        check_range("body_radius", self.body_radius, 1e-3, 0.5)?;
        check_range("ring_thickness", self.ring_thickness, 1e-4, 0.25)?;
        check_range("blend", self.blend, 0.0, 2.0)?;
        Ok(())
    }
}

pub struct OrbitsScene {
    params: OrbitsParams,
}

impl OrbitsScene {
    pub fn new(params: OrbitsParams) -> Self {
        Self { params }
    }
}

impl Scene for OrbitsScene {
    fn shade(&self, uv: Vec2, time: f32) -> Rgb {
        let p = &self.params;
        let t = time * p.time_scale;

        // uv spans [-0.5, 0.5] on the short axis; double it to [-1, 1]
        let point = uv * 2.0;
        let warped = warp(rotate(point, t * 0.1), t);

        let bg = Rgb::new(0.0, 0.0, 0.1).lerp(&Rgb::new(0.1, 0.0, 0.2), (t * 0.5).sin());

        let mut best = f32::MAX;
        let mut color = bg;
        for id in 0..p.planet_count {
            let idf = id as f32;
            let angle = t * (0.5 + 0.1 * idf);
            let orbit_radius = 0.2 + 0.1 * idf;
            let center = Vec2::new(angle.cos(), angle.sin()) * orbit_radius;

            let body = if id % 2 == 0 {
                sd_circle(warped - center, p.body_radius)
            } else {
                sd_ring(warped - center, p.body_radius, p.ring_thickness)
            };
            let path_y = 0.1 * ((0.5 + 0.1 * idf) * warped.x + t).sin() + 0.2 * idf;
            let merged = smooth_min(body, (warped.y - path_y).abs(), p.blend);

            if merged < best {
                best = merged;
                let body_color = Rgb::new(
                    0.5 + 0.5 * (t + idf).sin(),
                    0.5 + 0.5 * (t + idf * 0.5).cos(),
                    0.5,
                );
                color = body_color.lerp(&bg, smoothstep(-0.01, 0.01, merged));
            }
        }

        // the background lerp extrapolates on a raw sine, keep output in range
        color.clamped()
    }

    fn name(&self) -> &str {
        "orbits"
    }
}

fn rotate(p: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(c * p.x - s * p.y, s * p.x + c * p.y)
}

fn warp(p: Vec2, t: f32) -> Vec2 {
    p + Vec2::new((p.y + t).sin(), (p.x + t).cos()) * 0.05
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_space_shows_the_background() {
        let scene = OrbitsScene::new(OrbitsParams::default());
        // at t = 0 all bodies sit on the +x axis and every orbit line is at
        // y >= -0.1, so the lower-left region only sees background
        let c = scene.shade(Vec2::new(-0.4, -0.45), 0.0);
        assert!(c.r.abs() < 1e-5);
        assert!(c.g.abs() < 1e-5);
        assert!((c.b - 0.1).abs() < 1e-5);
    }

    #[test]
    fn first_body_interior_is_planet_colored() {
        let scene = OrbitsScene::new(OrbitsParams::default());
        // at t = 0 the warp pushes uv (0.1, 0) to within the first body
        let c = scene.shade(Vec2::new(0.1, 0.0), 0.0);
        assert!((c.r - 0.5).abs() < 0.05);
        assert!(c.g > 0.9);
        assert!((c.b - 0.5).abs() < 0.05);
    }

    #[test]
    fn output_stays_in_unit_range() {
        let scene = OrbitsScene::new(OrbitsParams::default());
        for i in 0..8 {
            for j in 0..8 {
                let uv = Vec2::new(i as f32 * 0.15 - 0.6, j as f32 * 0.12 - 0.45);
                // pick times where the background sine goes negative
                for time in [0.0, 2.0, 3.7] {
                    let c = scene.shade(uv, time);
                    for v in c.to_array() {
                        assert!((0.0..=1.0).contains(&v));
                    }
                }
            }
        }
    }

    #[test]
    fn params_from_toml_and_validation() {
        let table: toml::value::Table = toml::from_str("planet_count = 4\ntime_scale = 1").unwrap();
        let params = OrbitsParams::from_toml(&table).unwrap();
        assert_eq!(params.planet_count, 4);
        assert!((params.time_scale - 1.0).abs() < 1e-6);

        let table: toml::value::Table = toml::from_str("planet_count = 0").unwrap();
        assert!(OrbitsParams::from_toml(&table).is_err());

        let mut params = OrbitsParams::default();
        params.body_radius = -0.1;
        assert!(params.validate().is_err());
    }
}
