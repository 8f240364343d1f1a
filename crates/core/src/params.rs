//! Typed lookups into a JSON parameter object.
//!
//! Operations accept their tuning knobs as a JSON object (for example
//! `{"exponent": 2.2, "shift": 0}`). Each helper returns `default` when the
//! key is missing, null, or holds the wrong type.

use crate::color::Color;
use crate::geometry::{parse_vector, Vector3};
use serde_json::Value;

/// Reads a number as `f64`. Integers are accepted.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params.get(name).and_then(Value::as_f64).unwrap_or(default)
}

/// Reads an integer that fits in `i32`.
pub fn param_i32(params: &Value, name: &str, default: i32) -> i32 {
    params
        .get(name)
        .and_then(Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .unwrap_or(default)
}

/// Reads a hex color string such as `"#ff0000"`.
pub fn param_color(params: &Value, name: &str, default: Color) -> Color {
    params
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| Color::from_hex(s).ok())
        .unwrap_or(default)
}

/// Reads a vector either as a `[x, y, z]` array of numbers or as a `"x,y,z"` string.
pub fn param_vector(params: &Value, name: &str, default: Vector3) -> Vector3 {
    match params.get(name) {
        Some(Value::Array(items)) if items.len() == 3 => {
            let comps: Option<Vec<f64>> = items.iter().map(Value::as_f64).collect();
            comps.map_or(default, |c| Vector3::new(c[0], c[1], c[2]))
        }
        Some(Value::String(s)) => parse_vector(s).unwrap_or(default),
        _ => default,
    }
}
