//! Shared helpers for scene parameter tables

use glimmer_core::{GlimmerError, Result, Vec2};

// TOML parses `0.95` as a float but `1` as an integer; accept both.
pub(crate) fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

pub(crate) fn toml_vec2(v: &toml::Value, default: Vec2) -> Vec2 {
    if let Some(arr) = v.as_array() {
        if arr.len() >= 2 {
            return Vec2::new(toml_f32(&arr[0], default.x), toml_f32(&arr[1], default.y));
        }
    }
    default
}

/// NaN fails both comparisons, so it is rejected along with out-of-range values.
pub(crate) fn check_range(field: &str, value: f32, min: f32, max: f32) -> Result<()> {
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
    fn coerces_integers_and_floats() {
        let table: toml::value::Table = toml::from_str("a = 3\nb = 2.5\nc = [1, 4.0]").unwrap();
        assert!((toml_f32(&table["a"], 0.0) - 3.0).abs() < 1e-6);
        assert!((toml_f32(&table["b"], 0.0) - 2.5).abs() < 1e-6);
        let v = toml_vec2(&table["c"], Vec2::ZERO);
        assert!((v.x - 1.0).abs() < 1e-6 && (v.y - 4.0).abs() < 1e-6);
    }

    #[test]
    fn range_check_rejects_nan_and_outliers() {
        assert!(check_range("x", 0.5, 0.0, 1.0).is_ok());
        assert!(check_range("x", -0.1, 0.0, 1.0).is_err());
        assert!(check_range("x", f32::NAN, 0.0, 1.0).is_err());
    }
}
