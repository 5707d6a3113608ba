//! Falling rings: a scrolling grid of pulsing neon circles.
//!
//! The surface is cut into grid cells. Each column scrolls at a hashed speed
//! from a hashed start offset, and each cell hosts one ring whose radius,
//! color, and optional inner dot all derive from the cell hash.

use crate::tuning::{check_range, toml_f32, toml_vec2};
use glimmer_core::{fract, hash22, sd_circle, sd_ring, smoothstep, Result, Rgb, Vec2};
use glimmer_shade::Scene;
use std::f32::consts::TAU;

#[derive(Debug, Clone)]
pub struct RingsParams {
    pub grid_scale: Vec2,
    pub speed: f32,
    /// Per-column deviation from `speed`, 0 keeps every column in lockstep
    pub speed_variation: f32,
    pub ring_radius: f32,
    pub line_width: f32,
    pub softness: f32,
    pub pulse_amplitude: f32,
    pub pulse_frequency: f32,
    pub inner_circle_radius_factor: f32,
    pub inner_circle_probability: f32,
    pub inner_color_mix_factor: f32,
    pub inner_pulse_amplitude: f32,
    pub inner_pulse_frequency: f32,
}

impl Default for RingsParams {
    fn default() -> Self {
        Self {
            grid_scale: Vec2::new(20.0, 20.0),
            speed: 1.0,
            speed_variation: 0.9,
            ring_radius: 0.35,
            line_width: 0.03,
            softness: 0.01,
            pulse_amplitude: 0.04,
            pulse_frequency: 7.0,
            inner_circle_radius_factor: 0.4,
            inner_circle_probability: 0.4,
            inner_color_mix_factor: 0.5,
            inner_pulse_amplitude: 0.03,
            inner_pulse_frequency: 8.0,
        }
    }
}

impl RingsParams {
    pub fn from_toml(table: &toml::value::Table) -> Result<Self> {
        let mut params = Self::default();

        if let Some(v) = table.get("grid_scale") {
            params.grid_scale = toml_vec2(v, params.grid_scale);
        }
        if let Some(v) = table.get("speed") {
            params.speed = toml_f32(v, params.speed);
        }
        if let Some(v) = table.get("speed_variation") {
            params.speed_variation = toml_f32(v, params.speed_variation);
        }
        if let Some(v) = table.get("ring_radius") {
            params.ring_radius = toml_f32(v, params.ring_radius);
        }
        if let Some(v) = table.get("line_width") {
            params.line_width = toml_f32(v, params.line_width);
        }
        if let Some(v) = table.get("softness") {
            params.softness = toml_f32(v, params.softness);
        }
        if let Some(v) = table.get("pulse_amplitude") {
            params.pulse_amplitude = toml_f32(v, params.pulse_amplitude);
        }
        if let Some(v) = table.get("pulse_frequency") {
            params.pulse_frequency = toml_f32(v, params.pulse_frequency);
        }
        if let Some(v) = table.get("inner_circle_radius_factor") {
            params.inner_circle_radius_factor = toml_f32(v, params.inner_circle_radius_factor);
        }
        if let Some(v) = table.get("inner_circle_probability") {
            params.inner_circle_probability = toml_f32(v, params.inner_circle_probability);
        }
        if let Some(v) = table.get("inner_color_mix_factor") {
            params.inner_color_mix_factor = toml_f32(v, params.inner_color_mix_factor);
        }
        if let Some(v) = table.get("inner_pulse_amplitude") {
            params.inner_pulse_amplitude = toml_f32(v, params.inner_pulse_amplitude);
        }
        if let Some(v) = table.get("inner_pulse_frequency") {
            params.inner_pulse_frequency = toml_f32(v, params.inner_pulse_frequency);
        }

        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        check_range("grid_scale", self.grid_scale.x, 1e-3, 1000.0)?;
        check_range("grid_scale", self.grid_scale.y, 1e-3, 1000.0)?;
        check_range("speed", self.speed, 0.0, 100.0)?;
        check_range("speed_variation", self.speed_variation, 0.0, 1.0)?;
        check_range("ring_radius", self.ring_radius, 1e-3, 0.5)?;
        check_range("line_width", self.line_width, 1e-4, 0.5)?;
        check_range("softness", self.softness, 0.0, 0.5)?;
        check_range("pulse_amplitude", self.pulse_amplitude, 0.0, 0.5)?;
        check_range("pulse_frequency", self.pulse_frequency, 0.0, 100.0)?;
        check_range(
            "inner_circle_radius_factor",
            self.inner_circle_radius_factor,
            0.0,
            1.0,
        )?;
        check_range(
            "inner_circle_probability",
            self.inner_circle_probability,
            0.0,
            1.0,
        )?;
        check_range("inner_color_mix_factor", self.inner_color_mix_factor, 0.0, 1.0)?;
        check_range("inner_pulse_amplitude", self.inner_pulse_amplitude, 0.0, 0.5)?;
        check_range("inner_pulse_frequency", self.inner_pulse_frequency, 0.0, 100.0)?;
        Ok(())
    }
}

pub struct RingsScene {
    params: RingsParams,
}

impl RingsScene {
    pub fn new(params: RingsParams) -> Self {
        Self { params }
    }
}

impl Scene for RingsScene {
    fn shade(&self, uv: Vec2, time: f32) -> Rgb {
        let p = &self.params;
        let scaled = uv.scale(&p.grid_scale);

        let column = scaled.x.floor();
        let speed_hash = hash22(Vec2::new(column, 1.0)).x;
        let speed_multiplier = 1.0 - p.speed_variation + speed_hash * (2.0 * p.speed_variation);
        let column_speed = p.speed * speed_multiplier;
        let start_offset = hash22(Vec2::new(column, 0.0)).x * 100.0;
        let virtual_y = scaled.y + time * column_speed + start_offset;

        let cell = Vec2::new(column, virtual_y.floor());
        let local = Vec2::new(fract(scaled.x) - 0.5, fract(virtual_y) - 0.5);
        let h = hash22(cell);

        let outer_radius = (p.ring_radius
            + (time * p.pulse_frequency + h.y * TAU).sin() * p.pulse_amplitude)
            .max(p.line_width * 1.5);
        let outer_color = scatter_color(h.x * 2.3, h.y * 3.4, (h.x + h.y) * 4.5);

        let d_outer = sd_ring(local, outer_radius, p.line_width);
        let alpha_outer = smoothstep(0.0, p.softness, -d_outer);
        let mut color = Rgb::BLACK.lerp(&outer_color, alpha_outer);

        if fract(h.x + h.y * 7.1) < p.inner_circle_probability {
            let inner_radius = (p.ring_radius * p.inner_circle_radius_factor
                + (time * p.inner_pulse_frequency + h.x * TAU).sin() * p.inner_pulse_amplitude)
                .max(0.005);
            let inner_color = scatter_color(h.y * 5.6, h.x * 6.7, (h.x - h.y) * 7.8)
                .lerp(&outer_color, p.inner_color_mix_factor);

            let alpha_inner = smoothstep(0.0, p.softness, -sd_circle(local, inner_radius));
            color = color.lerp(&inner_color, alpha_inner);
        }

        color
    }

    fn name(&self) -> &str {
        "rings"
    }
}

/// Hash-derived cell color, pulled a fifth of the way toward its complement
/// so no channel sits at full saturation.
fn scatter_color(x: f32, y: f32, z: f32) -> Rgb {
    let col = Rgb::new(fract(x), fract(y), fract(z));
    let inverse = Rgb::new(1.0 - col.r, 1.0 - col.g, 1.0 - col.b);
    col.lerp(&inverse, 0.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgb, b: Rgb) -> bool {
        (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
    }

    // The cell at the grid origin hashes to zero, which pins down every
    // derived quantity: ring radius 0.35, inner dot radius 0.14, and both
    // colors at (0.2, 0.2, 0.2).
    #[test]
    fn origin_cell_shows_ring_and_inner_dot() {
        let scene = RingsScene::new(RingsParams::default());

        // cell center: outer ring is far, the inner dot covers it
        let center = scene.shade(Vec2::new(0.025, 0.025), 0.0);
        assert!(close(center, Rgb::splat(0.2)));

        // on the ring line itself
        let ring = scene.shade(Vec2::new(0.0425, 0.025), 0.0);
        assert!(close(ring, Rgb::splat(0.2)));

        // the gap between dot and ring stays black
        let gap = scene.shade(Vec2::new(0.0375, 0.025), 0.0);
        assert!(close(gap, Rgb::BLACK));
    }

    #[test]
    fn zeroed_motion_params_freeze_the_image() {
        let mut params = RingsParams::default();
        params.speed = 0.0;
        params.pulse_amplitude = 0.0;
        params.inner_pulse_amplitude = 0.0;
        let scene = RingsScene::new(params);

        for i in 0..10 {
            for j in 0..10 {
                let uv = Vec2::new(i as f32 * 0.037 - 0.2, j as f32 * 0.041 - 0.2);
                assert_eq!(scene.shade(uv, 0.0), scene.shade(uv, 5.0));
            }
        }
    }

    #[test]
    fn params_from_toml_overrides() {
        let toml_str = "grid_scale = [10, 10]\nspeed = 2\nring_radius = 0.4";
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let params = RingsParams::from_toml(&table).unwrap();
        assert!((params.grid_scale.x - 10.0).abs() < 1e-6);
        assert!((params.speed - 2.0).abs() < 1e-6);
        assert!((params.ring_radius - 0.4).abs() < 1e-6);
        // untouched keys keep their defaults
        assert!((params.line_width - 0.03).abs() < 1e-6);
    }

    #[test]
    fn params_validation_rejects_bad_values() {
        let mut params = RingsParams::default();
        params.ring_radius = 0.0;
        assert!(params.validate().is_err());

        let mut params = RingsParams::default();
        params.softness = f32::NAN;
        assert!(params.validate().is_err());

        let mut params = RingsParams::default();
        params.inner_circle_probability = 1.5;
        assert!(params.validate().is_err());
    }
}
