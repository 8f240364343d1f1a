//! Two-dimensional pixel grid and the access trait the stamping code works against.
//!
//! A `PixelBuffer` stores `width * height` colors in row-major layout.
//! Unlike a wrapping scalar field, coordinates are bounded: reads outside the
//! grid return `None` and writes outside the grid are ignored.

use crate::color::Color;
use crate::error::ToolkitError;

/// Indexed get/set access to a 2D grid of colors.
///
/// Implemented by [`PixelBuffer`]; image types from other libraries can
/// implement it to be stamped in place.
pub trait PixelAccess {
    /// Grid width in pixels.
    fn width(&self) -> usize;

    /// Grid height in pixels.
    fn height(&self) -> usize;

    /// The color at `(x, y)`, or `None` outside the grid.
    fn pixel(&self, x: usize, y: usize) -> Option<Color>;

    /// Writes `color` at `(x, y)`. Returns `false` (and writes nothing) outside the grid.
    fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> bool;
}

/// A fixed-size row-major grid of [`Color`] values.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Color>,
}

impl PixelBuffer {
    /// Creates a buffer filled with opaque black.
    ///
    /// Returns `ToolkitError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, ToolkitError> {
        Self::filled(width, height, Color::BLACK)
    }

    /// Creates a buffer with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Result<Self, ToolkitError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![color; len],
        })
    }

    /// Creates a buffer from row-major pixels, validating that
    /// `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<Color>) -> Result<Self, ToolkitError> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(ToolkitError::DimensionMismatch {
                width,
                height,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Read-only access to the row-major pixels.
    pub fn data(&self) -> &[Color] {
        &self.data
    }

    /// Sets every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        self.data.fill(color);
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize, ToolkitError> {
    if width == 0 || height == 0 {
        return Err(ToolkitError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(ToolkitError::InvalidDimensions)
}

impl PixelAccess for PixelBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        self.index(x, y).map(|i| self.data[i])
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = color;
                true
            }
            None => false,
        }
    }
}
