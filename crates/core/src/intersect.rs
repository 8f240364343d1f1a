//! Ray intersection with an axis-aligned ellipsoid centered at the origin.
//!
//! Dividing the ray by the radii maps the ellipsoid onto the unit sphere, so
//! the problem reduces to the quadratic `A t² + B t + C = 0` with
//! `A = |d/r|²`, `B = 2 (d/r)·(o/r)` and `C = |o/r|² - 1`.

use crate::geometry::Vector3;
use serde::Serialize;
use tracing::{debug, trace};

/// Result of [`intersect_ellipsoid`].
///
/// `near`/`far` are the points `origin + direction * t0` and
/// `origin + direction * t1`. A miss zeroes every field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Intersection {
    pub hit: bool,
    pub near: Vector3,
    pub far: Vector3,
    pub t0: f64,
    pub t1: f64,
}

impl Intersection {
    /// No real intersection.
    pub const MISS: Intersection = Intersection {
        hit: false,
        near: Vector3::ZERO,
        far: Vector3::ZERO,
        t0: 0.0,
        t1: 0.0,
    };
}

/// Intersects the ray `origin + t * direction` with the ellipsoid
/// `(x/rx)² + (y/ry)² + (z/rz)² = 1`.
///
/// A tangent ray (zero discriminant) counts as a miss. Radii with a zero or
/// non-finite component are degenerate and also yield [`Intersection::MISS`],
/// as does a direction too small to survive rescaling. Any reported hit has
/// finite `t0 <= t1`. `t0` is negative when the origin is inside or past the
/// ellipsoid.
pub fn intersect_ellipsoid(origin: Vector3, direction: Vector3, radii: Vector3) -> Intersection {
    if !radii.is_finite() || radii.cmpeq(Vector3::ZERO).any() {
        debug!(?radii, "degenerate ellipsoid radii, reporting miss");
        return Intersection::MISS;
    }

    let scaled_origin = origin / radii;
    let scaled_dir = direction / radii;

    // Solve in t' = t * extent with the largest direction component at 1, so
    // neither A nor the radii squares can underflow or overflow.
    let extent = scaled_dir.abs().max_element();
    if !extent.is_normal() {
        debug!(?direction, "direction vanishes after rescaling, reporting miss");
        return Intersection::MISS;
    }
    let unit_dir = scaled_dir / extent;

    let a = unit_dir.length_squared();
    let b = 2.0 * unit_dir.dot(scaled_origin);
    let c = scaled_origin.length_squared() - 1.0;
    let s = b * b - 4.0 * a * c;

    if s.is_nan() || s <= 0.0 {
        trace!(a, b, c, discriminant = s, "ray misses ellipsoid");
        return Intersection::MISS;
    }

    let root = s.sqrt();
    let t0 = (-b - root) / (2.0 * a) / extent;
    let t1 = (-b + root) / (2.0 * a) / extent;
    if !t0.is_finite() || !t1.is_finite() {
        debug!(t0, t1, "intersection distance out of range, reporting miss");
        return Intersection::MISS;
    }
    trace!(t0, t1, "ray hits ellipsoid");

    Intersection {
        hit: true,
        near: origin + direction * t0,
        far: origin + direction * t1,
        t0,
        t1,
    }
}
