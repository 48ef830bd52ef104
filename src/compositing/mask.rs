use crate::io::error::{PackError, Result};
use bitvec::prelude::*;
use image::{Rgba, RgbaImage};

/// Widen an 8-bit channel to the 16-bit range by bit replication (`0xAB` -> `0xABAB`)
pub const fn expand_channel(value: u8) -> u16 {
    value as u16 * 257
}

/// Per-pixel opacity decision derived from an image's alpha channel
///
/// A set bit marks a pixel that receives palette content; clear bits stay
/// transparent on the stencil canvas. Row-major, one bit per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpacityMask {
    bits: BitVec,
    width: u32,
    height: u32,
}

impl OpacityMask {
    /// Mark every pixel whose 16-bit expanded alpha is at least `threshold`
    pub fn from_alpha(image: &RgbaImage, threshold: u16) -> Self {
        let (width, height) = image.dimensions();
        let mut bits = bitvec![0; width as usize * height as usize];
        for (x, y, pixel) in image.enumerate_pixels() {
            if expand_channel(pixel.0[3]) >= threshold {
                bits.set(y as usize * width as usize + x as usize, true);
            }
        }
        Self {
            bits,
            width,
            height,
        }
    }

    /// Mask dimensions as (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether `(x, y)` receives palette content; out-of-range coordinates never do
    pub fn is_masked(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y as usize * self.width as usize + x as usize;
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Number of masked pixels
    pub fn masked_count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Cut `source` to the mask's shape on a fully transparent canvas
    ///
    /// # Errors
    ///
    /// Returns [`PackError::DimensionMismatch`] if `source` and the mask differ in size
    pub fn stencil(&self, source: &RgbaImage) -> Result<RgbaImage> {
        if source.dimensions() != self.dimensions() {
            return Err(PackError::DimensionMismatch {
                name: "stencil source".to_string(),
                expected: self.dimensions(),
                found: source.dimensions(),
            });
        }

        let mut canvas = RgbaImage::from_pixel(self.width, self.height, Rgba([0, 0, 0, 0]));
        for index in self.bits.iter_ones() {
            let x = (index % self.width as usize) as u32;
            let y = (index / self.width as usize) as u32;
            canvas.put_pixel(x, y, *source.get_pixel(x, y));
        }
        Ok(canvas)
    }
}
