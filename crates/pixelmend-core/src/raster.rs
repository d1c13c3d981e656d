//! RasterRgb - the interleaved RGB image buffer
//!
//! The fundamental image container for the defect pipeline: a flat,
//! row-major, channel-interleaved R,G,B byte buffer plus dimensions.
//!
//! # Pixel layout
//!
//! - One byte per channel, three channels per pixel
//! - Pixel `(x, y)` starts at byte offset `3 * (y * width + x)`
//! - Invariant: `data.len() == width * height * 3`
//!
//! # Access model
//!
//! The `*_unchecked` accessors are the hot-path primitives used by the
//! kernel evaluator; they only bounds-check in debug builds. Callers must
//! guarantee `x < width` and `y < height`.

use crate::error::{CoreError, Result};

/// An owned interleaved 8-bit RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterRgb {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterRgb {
    /// Create a raster filled with black (0, 0, 0).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, (0, 0, 0))
    }

    /// Create a raster filled with a uniform color.
    pub fn filled(width: u32, height: u32, (r, g, b): (u8, u8, u8)) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            data.push(r);
            data.push(g);
            data.push(b);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing interleaved RGB byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] for zero dimensions and
    /// [`CoreError::BufferSizeMismatch`] if `data.len() != width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(CoreError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        3 * (y as usize * self.width as usize + x as usize)
    }

    /// Get the RGB triple at `(x, y)` without bounds checking.
    ///
    /// Debug builds assert `x < width` and `y < height`.
    #[inline]
    pub fn get_rgb_unchecked(&self, x: u32, y: u32) -> (u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height);
        let i = self.offset(x, y);
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Overwrite the RGB triple at `(x, y)` without bounds checking.
    ///
    /// Debug builds assert `x < width` and `y < height`.
    #[inline]
    pub fn set_rgb_unchecked(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        debug_assert!(x < self.width && y < self.height);
        let i = self.offset(x, y);
        self.data[i] = r;
        self.data[i + 1] = g;
        self.data[i + 2] = b;
    }

    /// Get the RGB triple at `(x, y)`, or `None` if out of bounds.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if x < self.width && y < self.height {
            Some(self.get_rgb_unchecked(x, y))
        } else {
            None
        }
    }

    /// Borrow the raw interleaved bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Mutably borrow the raw interleaved bytes.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the raster and return the raw byte buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
