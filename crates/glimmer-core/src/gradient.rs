//! Color gradient palettes.
//!
//! Each palette maps `t` in [0, 1] to an RGB color; inputs outside the range
//! are clamped, outputs are clamped to [0, 1].

use crate::ease::{clamp01, fract, mix, smoothstep};
use crate::types::Rgb;

/// The available gradient palettes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientKind {
    /// Full rainbow wheel
    Hue,
    /// Dark base with sharp neon transitions
    Tech,
    /// Black through red and orange to white heat
    Fire,
    /// Sand and sky tones
    Desert,
    /// Deep blue rising into white-hot highlights
    Electric,
}

impl GradientKind {
    pub const ALL: [GradientKind; 5] = [
        GradientKind::Hue,
        GradientKind::Tech,
        GradientKind::Fire,
        GradientKind::Desert,
        GradientKind::Electric,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GradientKind::Hue => "hue",
            GradientKind::Tech => "tech",
            GradientKind::Fire => "fire",
            GradientKind::Desert => "desert",
            GradientKind::Electric => "electric",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "hue" => Some(GradientKind::Hue),
            "tech" => Some(GradientKind::Tech),
            "fire" => Some(GradientKind::Fire),
            "desert" => Some(GradientKind::Desert),
            "electric" => Some(GradientKind::Electric),
            _ => None,
        }
    }

    /// Sample the palette at `t` in [0, 1]
    pub fn sample(&self, t: f32) -> Rgb {
        let t = clamp01(t);
        let col = match self {
            GradientKind::Hue => hue(t),
            GradientKind::Tech => tech(t),
            GradientKind::Fire => fire(t),
            GradientKind::Desert => desert(t),
            GradientKind::Electric => electric(t),
        };
        col.clamped()
    }
}

fn hue(t: f32) -> Rgb {
    let channel = |offset: f32| clamp01((fract(t + offset) * 6.0 - 3.0).abs() - 1.0);
    Rgb::new(channel(1.0), channel(2.0 / 3.0), channel(1.0 / 3.0))
}

fn tech(t: f32) -> Rgb {
    let x = t + 0.01;
    Rgb::new(x.powf(120.0), x.powf(10.0), x.powf(180.0))
}

fn fire(t: f32) -> Rgb {
    let x = (t * 1.02).min(1.0);
    let glow = 0.06 * (1.0 - (t - 0.35).abs()).max(0.0).powi(5);
    Rgb::new(
        x.powf(1.7).max(glow),
        x.powf(25.0).max(glow),
        x.powf(100.0).max(glow),
    )
}

fn desert(t: f32) -> Rgb {
    let base = if t > 0.4 {
        let s = clamp01(1.0 - (t - 0.4) / 0.6).sqrt();
        let sky = Rgb::WHITE.lerp(&Rgb::new(0.0, 0.8, 1.0), smoothstep(0.4, 0.9, t));
        (sky * Rgb::new(s, s, 1.0)).powf(0.5)
    } else {
        let ground = Rgb::new(0.85, 0.75 + (0.8 - t * 20.0).max(0.0), 0.5);
        let blend = (t / 0.4) * (t / 0.4);
        Rgb::new(0.7, 0.3, 0.0).lerp(&ground, blend)
    };
    base.clamped() * clamp01(1.5 * (1.0 - (t - 0.4).abs()))
}

fn electric(t: f32) -> Rgb {
    let g = smoothstep(0.6, 0.9, t);
    Rgb::new(t * 8.0 - 6.3, g * g, t.powi(3) * 1.7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_palettes_stay_in_range() {
        for kind in GradientKind::ALL {
            for i in 0..=20 {
                let c = kind.sample(i as f32 / 20.0);
                for v in c.to_array() {
                    assert!((0.0..=1.0).contains(&v), "{:?} out of range: {}", kind, v);
                }
            }
        }
    }

    #[test]
    fn hue_hits_primaries() {
        let r = GradientKind::Hue.sample(0.0);
        assert!((r.r - 1.0).abs() < 1e-5 && r.g < 1e-5 && r.b < 1e-5);
        let g = GradientKind::Hue.sample(1.0 / 3.0);
        assert!((g.g - 1.0).abs() < 1e-5 && g.r < 1e-5 && g.b < 1e-5);
        let b = GradientKind::Hue.sample(2.0 / 3.0);
        assert!((b.b - 1.0).abs() < 1e-5 && b.r < 1e-5 && b.g < 1e-5);
    }

    #[test]
    fn electric_endpoints() {
        assert_eq!(GradientKind::Electric.sample(0.0), Rgb::BLACK);
        assert_eq!(GradientKind::Electric.sample(1.0), Rgb::WHITE);
    }

    #[test]
    fn input_is_clamped() {
        for kind in GradientKind::ALL {
            assert_eq!(kind.sample(-2.0), kind.sample(0.0));
            assert_eq!(kind.sample(3.0), kind.sample(1.0));
        }
    }

    #[test]
    fn names_round_trip() {
        for kind in GradientKind::ALL {
            assert_eq!(GradientKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(GradientKind::from_name("plasma"), None);
    }
}
