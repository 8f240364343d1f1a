//! PNG files for [`PixelBuffer`].
//!
//! Feature-gated behind `png` (default on). The byte packing lives in
//! [`crate::pixel`].

use nutil_core::{PixelAccess, PixelBuffer, ToolkitError};
use std::path::Path;
use tracing::debug;

use crate::pixel::{buffer_from_rgba, buffer_to_rgba};

/// Writes `buffer` as an RGBA PNG.
///
/// Returns `ToolkitError::InvalidDimensions` if a dimension overflows `u32`,
/// or `ToolkitError::Io` on encode/write failure.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), ToolkitError> {
    let w = u32::try_from(buffer.width()).map_err(|_| ToolkitError::InvalidDimensions)?;
    let h = u32::try_from(buffer.height()).map_err(|_| ToolkitError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, buffer_to_rgba(buffer))
        .ok_or_else(|| ToolkitError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| ToolkitError::Io(e.to_string()))?;
    debug!(path = %path.display(), width = w, height = h, "wrote png");
    Ok(())
}

/// Reads any PNG as an RGBA [`PixelBuffer`].
pub fn read_png(path: &Path) -> Result<PixelBuffer, ToolkitError> {
    let img = image::open(path)
        .map_err(|e| ToolkitError::Io(e.to_string()))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    buffer_from_rgba(w as usize, h as usize, img.as_raw())
}
