//! Vector helpers: spherical coordinates, planar rotation, clamping and easing.
//!
//! [`Vector3`] is a plain `f64` 3-vector. It doubles as a packed RGB triple
//! when colors need vector arithmetic (see [`crate::color::Color::to_vector`]).

use crate::error::ToolkitError;

/// Three `f64` components.
pub type Vector3 = glam::DVec3;

/// Spherical to Cartesian: `(r sinθ cosφ, r sinθ sinφ, r cosθ)`.
///
/// `theta` is the polar angle from +z and `phi` the azimuth in the XY plane.
pub fn from_spherical(r: f64, theta: f64, phi: f64) -> Vector3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    Vector3::new(r * sin_t * cos_p, r * sin_t * sin_p, r * cos_t)
}

/// Rotates `point` about `center` by `angle` radians in the XY plane.
///
/// Only x and y take part in the rotation. The z offset of `point` from
/// `center` is discarded, so the result always has `z == center.z`.
pub fn rotate_2d(point: Vector3, center: Vector3, angle: f64) -> Vector3 {
    let p = point - center;
    let (sin, cos) = angle.sin_cos();
    Vector3::new(p.x * cos - p.y * sin, p.y * cos + p.x * sin, 0.0) + center
}

/// Clamps every component to be at least zero.
pub fn floor_vector(v: Vector3) -> Vector3 {
    v.max(Vector3::ZERO)
}

/// Component-wise maximum.
pub fn max_vector(a: Vector3, b: Vector3) -> Vector3 {
    a.max(b)
}

/// Clamps `x` into `[min, max]`.
///
/// Unlike [`f64::clamp`] this never panics: if `min > max`, `min` wins.
pub fn clamp(x: f64, min: f64, max: f64) -> f64 {
    x.min(max).max(min)
}

/// Clamps every component of `v` into `[min, max]`.
pub fn clamp_vector(v: Vector3, min: f64, max: f64) -> Vector3 {
    Vector3::new(clamp(v.x, min, max), clamp(v.y, min, max), clamp(v.z, min, max))
}

/// Cubic Hermite interpolation between `edge0` and `edge1`.
///
/// Returns 0 for `x <= edge0`, 1 for `x >= edge1`, and `t²(3 - 2t)` in
/// between where `t` is the normalized position of `x`. Coincident edges give
/// a hard step at `edge0`.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// True when each component of `a` differs from `b` by at most the matching
/// component of `spread`.
pub fn vectors_are_close(a: Vector3, b: Vector3, spread: Vector3) -> bool {
    (a - b).abs().cmple(spread).all()
}

/// Parses three numbers separated by commas and/or whitespace, e.g. `"1, 2.5 -3"`.
pub fn parse_vector(text: &str) -> Result<Vector3, ToolkitError> {
    let parts: Vec<&str> = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 3 {
        return Err(ToolkitError::InvalidVector(format!(
            "expected 3 components in {text:?}, got {}",
            parts.len()
        )));
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| ToolkitError::InvalidVector(format!("{part:?}: {e}")))?;
    }
    Ok(Vector3::from_array(out))
}
