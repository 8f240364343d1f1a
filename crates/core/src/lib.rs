#![deny(unsafe_code)]
//! Geometry and color math for preprocessing 2D brain-section images.
//!
//! Provides the value types (`Color`, `Vector3`, `PixelBuffer`), per-channel
//! color transforms, spherical and planar vector helpers, ray/ellipsoid
//! intersection, mask-aware box stamping, a seedable PRNG, and section timing.
//! Everything is a free function over plain values; nothing holds global state.

pub mod buffer;
pub mod color;
pub mod error;
pub mod geometry;
pub mod intersect;
pub mod params;
pub mod prng;
pub mod stamp;
pub mod timing;

pub use buffer::{PixelAccess, PixelBuffer};
pub use color::{
    color_length, color_scale, color_scale2, colors_are_close, gamma, greyscale_intensity, Color,
};
pub use error::ToolkitError;
pub use geometry::{
    clamp, clamp_vector, floor_vector, from_spherical, max_vector, parse_vector, rotate_2d,
    smoothstep, vectors_are_close, Vector3,
};
pub use intersect::{intersect_ellipsoid, Intersection};
pub use prng::Xorshift64;
pub use stamp::{draw_box, stamp_markers};
pub use timing::{format_millis, timed, Stopwatch};
