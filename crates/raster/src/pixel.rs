//! Packed RGBA8 conversion for [`PixelBuffer`].

use nutil_core::{Color, PixelBuffer, ToolkitError};

/// Flattens a buffer into `width * height * 4` bytes in R, G, B, A order.
pub fn buffer_to_rgba(buffer: &PixelBuffer) -> Vec<u8> {
    buffer
        .data()
        .iter()
        .flat_map(|c| [c.r, c.g, c.b, c.a])
        .collect()
}

/// Builds a buffer from packed RGBA8 bytes.
///
/// Returns `ToolkitError::DimensionMismatch` if `bytes.len()` is not
/// `width * height * 4`.
pub fn buffer_from_rgba(
    width: usize,
    height: usize,
    bytes: &[u8],
) -> Result<PixelBuffer, ToolkitError> {
    if bytes.len() % 4 != 0 {
        return Err(ToolkitError::DimensionMismatch {
            width,
            height,
            expected: width.saturating_mul(height),
            got: bytes.len() / 4,
        });
    }
    let data = bytes
        .chunks_exact(4)
        .map(|p| Color::rgba(p[0], p[1], p[2], p[3]))
        .collect();
    PixelBuffer::from_data(width, height, data)
}
