#![deny(unsafe_code)]
//! Raster output for nutil pixel buffers.
//!
//! Converts a [`PixelBuffer`](nutil_core::PixelBuffer) to and from packed
//! RGBA8 bytes, and (with the default `png` feature) reads and writes PNG files.
//! The byte conversion is always available so callers that hand pixels to
//! another image library do not need the `image` dependency.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{buffer_from_rgba, buffer_to_rgba};
