//! Luminance calculation using ITU-R BT.601 coefficients.
//!
//! The luminance-threshold encoder needs the luminance of every pixel twice:
//! once to find the range across the grid, once to remap each pixel into it.

use crate::decode::PixelGrid;

/// ITU-R BT.601 coefficient for red channel in luminance calculation.
pub const LUMINANCE_R: f64 = 0.299;

/// ITU-R BT.601 coefficient for green channel in luminance calculation.
pub const LUMINANCE_G: f64 = 0.587;

/// ITU-R BT.601 coefficient for blue channel in luminance calculation.
pub const LUMINANCE_B: f64 = 0.114;

/// Calculate luminance from u8 RGB values, truncated toward zero.
///
/// # Arguments
/// * `r` - Red channel value (0-255)
/// * `g` - Green channel value (0-255)
/// * `b` - Blue channel value (0-255)
///
/// # Returns
/// Luminance value (0-255)
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f64 + LUMINANCE_G * g as f64 + LUMINANCE_B * b as f64;
    lum.clamp(0.0, 255.0) as u8
}

/// Minimum and maximum luminance across a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LuminanceRange {
    pub min: u8,
    pub max: u8,
}

impl LuminanceRange {
    /// Reduce a grid to its luminance range.
    ///
    /// Returns `None` for a grid without pixels.
    pub fn of(grid: &PixelGrid) -> Option<Self> {
        grid.iter()
            .map(|[r, g, b, _]| luminance(r, g, b))
            .fold(None, |acc, lum| match acc {
                None => Some(Self { min: lum, max: lum }),
                Some(range) => Some(Self {
                    min: range.min.min(lum),
                    max: range.max.max(lum),
                }),
            })
    }

    /// Width of the range, forced to 1 for a uniform grid.
    pub fn span(&self) -> u8 {
        match self.max - self.min {
            0 => 1,
            span => span,
        }
    }

    /// True when every pixel had the same luminance.
    pub fn is_uniform(&self) -> bool {
        self.min == self.max
    }
}
