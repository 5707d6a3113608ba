//! Swarm configuration (parsed from TOML) with startup validation

use glimmer_core::{GlimmerError, GradientKind, Result};

/// Tunable parameters for one swarm.
///
/// Distances are in unit-square space where the shorter buffer axis spans 1.
#[derive(Debug, Clone)]
pub struct SwarmParams {
    pub count: usize,
    pub entity_radius: f32,
    pub pulse_speed: f32,
    pub min_pulse_factor: f32,
    pub max_pulse_factor: f32,
    pub speed: f32,
    pub attraction_radius: f32,
    pub attraction_strength: f32,
    pub jitter: f32,
    pub decay: f32,
    pub brightness: f32,
    /// Palette to draw body colors from; `None` picks fully random RGB
    pub palette: Option<GradientKind>,
}

impl Default for SwarmParams {
    fn default() -> Self {
        Self {
            count: 50,
            entity_radius: 0.008,
            pulse_speed: 5.0,
            min_pulse_factor: 0.5,
            max_pulse_factor: 1.5,
            speed: 0.05,
            attraction_radius: 0.2,
            attraction_strength: 0.0005,
            jitter: 0.005,
            decay: 0.95,
            brightness: 0.5,
            palette: None,
        }
    }
}

impl SwarmParams {
    /// Parse SwarmParams from a TOML table, falling back to defaults for
    /// missing keys. Returns an error for out-of-range values or an
    /// unrecognized palette name.
    pub fn from_toml(table: &toml::value::Table) -> Result<Self> {
        let mut params = Self::default();

        if let Some(v) = table.get("count") {
            params.count = v.as_integer().unwrap_or(params.count as i64) as usize;
        }
        if let Some(v) = table.get("entity_radius") {
            params.entity_radius = toml_f32(v, params.entity_radius);
        }
        if let Some(v) = table.get("pulse_speed") {
            params.pulse_speed = toml_f32(v, params.pulse_speed);
        }
        if let Some(v) = table.get("min_pulse_factor") {
            params.min_pulse_factor = toml_f32(v, params.min_pulse_factor);
        }
        if let Some(v) = table.get("max_pulse_factor") {
            params.max_pulse_factor = toml_f32(v, params.max_pulse_factor);
        }
        if let Some(v) = table.get("speed") {
            params.speed = toml_f32(v, params.speed);
        }
        if let Some(v) = table.get("attraction_radius") {
            params.attraction_radius = toml_f32(v, params.attraction_radius);
        }
        if let Some(v) = table.get("attraction_strength") {
            params.attraction_strength = toml_f32(v, params.attraction_strength);
        }
        if let Some(v) = table.get("jitter") {
            params.jitter = toml_f32(v, params.jitter);
        }
        if let Some(v) = table.get("decay") {
            params.decay = toml_f32(v, params.decay);
        }
        if let Some(v) = table.get("brightness") {
            params.brightness = toml_f32(v, params.brightness);
        }
        if let Some(v) = table.get("palette") {
            if let Some(s) = v.as_str() {
                match GradientKind::from_name(s) {
                    Some(kind) => params.palette = Some(kind),
                    None => {
                        return Err(GlimmerError::InvalidEnumValue {
                            value: s.to_string(),
                            allowed: GradientKind::ALL
                                .iter()
                                .map(|k| k.name().to_string())
                                .collect(),
                        })
                    }
                }
            }
        }

        params.validate()?;
        Ok(params)
    }

    /// Reject out-of-range values before any simulation starts.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 || self.count > 10_000 {
            return Err(GlimmerError::ValueOutOfRange {
                field: "count".to_string(),
                min: 1.0,
                max: 10_000.0,
                value: self.count as f64,
            });
        }
        check_range("entity_radius", self.entity_radius, 1e-6, 0.5)?;
        check_range("pulse_speed", self.pulse_speed, 0.0, 100.0)?;
        check_range("min_pulse_factor", self.min_pulse_factor, 0.0, self.max_pulse_factor)?;
        check_range("max_pulse_factor", self.max_pulse_factor, self.min_pulse_factor, 16.0)?;
        check_range("speed", self.speed, 1e-5, 1.0)?;
        check_range("attraction_radius", self.attraction_radius, 0.0, 2.0)?;
        check_range("attraction_strength", self.attraction_strength, 0.0, 1.0)?;
        check_range("jitter", self.jitter, 0.0, 1.0)?;
        // Decay of 0 wipes the trail, 1 never fades it; both are excluded
        if !(self.decay > 0.0 && self.decay < 1.0) {
            return Err(GlimmerError::ValueOutOfRange {
                field: "decay".to_string(),
                min: 0.0,
                max: 1.0,
                value: self.decay as f64,
            });
        }
        check_range("brightness", self.brightness, 0.0, 8.0)?;
        Ok(())
    }
}

// TOML parses `0.95` as a float but `1` as an integer; accept both.
fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

/// NaN fails both comparisons, so it is rejected along with out-of-range values.
fn check_range(field: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(GlimmerError::ValueOutOfRange {
            field: field.to_string(),
            min: min as f64,
            max: max as f64,
            value: value as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        assert!(SwarmParams::default().validate().is_ok());
    }

    #[test]
    fn parse_from_toml_overrides_and_ignores_unknown_keys() {
        let toml_str = r#"
count = 80
speed = 0.1
attraction_radius = 0.3
decay = 0.9
palette = "fire"
not_a_real_key = 12.0
"#;
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let params = SwarmParams::from_toml(&table).unwrap();
        assert_eq!(params.count, 80);
        assert!((params.speed - 0.1).abs() < 1e-6);
        assert!((params.attraction_radius - 0.3).abs() < 1e-6);
        assert!((params.decay - 0.9).abs() < 1e-6);
        assert_eq!(params.palette, Some(GradientKind::Fire));
        // untouched keys keep their defaults
        assert!((params.jitter - 0.005).abs() < 1e-6);
    }

    #[test]
    fn toml_integer_float_coercion() {
        let toml_str = "speed = 1\nbrightness = 2";
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let params = SwarmParams::from_toml(&table).unwrap();
        assert!((params.speed - 1.0).abs() < 1e-6);
        assert!((params.brightness - 2.0).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut params = SwarmParams::default();
        params.decay = 1.5;
        assert!(params.validate().is_err());

        // decay bounds are exclusive
        let mut params = SwarmParams::default();
        params.decay = 1.0;
        assert!(params.validate().is_err());
        params.decay = 0.0;
        assert!(params.validate().is_err());

        let mut params = SwarmParams::default();
        params.count = 0;
        assert!(params.validate().is_err());

        let mut params = SwarmParams::default();
        params.speed = f32::NAN;
        assert!(params.validate().is_err());

        let mut params = SwarmParams::default();
        params.min_pulse_factor = 2.0;
        params.max_pulse_factor = 1.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn unknown_palette_name_is_rejected() {
        let table: toml::value::Table = toml::from_str(r#"palette = "plasma""#).unwrap();
        let err = SwarmParams::from_toml(&table);
        assert!(err.is_err());
    }
}
