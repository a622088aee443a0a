//! Luminance-derived alpha with a range-relative threshold.
//!
//! Turns a grayscale-looking icon into a recolorable alpha mask: the darkest
//! part of the luminance range becomes fully transparent and the rest is
//! stretched over the full alpha range.
//!
//! ## Algorithm
//!
//! 1. Reduction: compute the luminance range (min, max) across the grid.
//!    A uniform grid gets a range of 1.
//! 2. Map: a pixel below `min + t * range` becomes 0. Anything else is
//!    remapped linearly from `[min + t * range, max]` onto `[0, 255]`,
//!    clamped and truncated.

use tracing::debug;

use super::types::validate_grid;
use super::{ColorFormat, EncodeError, EncodedImage};
use crate::decode::PixelGrid;
use crate::luminance::{luminance, LuminanceRange};

/// Fraction of the luminance range cut to transparent when none is given.
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Encode each pixel's luminance as alpha, cutting off the bottom
/// `threshold` fraction of the grid's luminance range.
///
/// # Errors
///
/// Returns `EncodeError::InvalidThreshold` unless `0.0 <= threshold < 1.0`,
/// and the usual errors for a malformed grid.
pub fn encode_luminance_threshold(
    grid: &PixelGrid,
    threshold: f64,
) -> Result<EncodedImage, EncodeError> {
    if !(0.0..1.0).contains(&threshold) {
        return Err(EncodeError::InvalidThreshold(threshold));
    }
    validate_grid(grid)?;

    let range = LuminanceRange::of(grid).ok_or(EncodeError::InvalidDimensions {
        width: grid.width,
        height: grid.height,
    })?;
    let remap = ThresholdRemap::new(range, threshold);

    debug!(
        min = range.min,
        max = range.max,
        uniform = range.is_uniform(),
        cutoff = remap.cutoff,
        "Luminance range"
    );

    let data = grid
        .iter()
        .map(|[r, g, b, _]| remap.alpha(luminance(r, g, b)))
        .collect();

    Ok(EncodedImage::new(
        grid.width,
        grid.height,
        ColorFormat::Alpha8Bit,
        data,
        None,
    ))
}

/// Per-pixel mapping derived from the reduction pass.
#[derive(Debug, Clone, Copy)]
struct ThresholdRemap {
    min: u8,
    /// `range * threshold`, the distance from `min` to the cutoff.
    offset: f64,
    /// Luminance below this is transparent.
    cutoff: f64,
    /// `range * (1 - threshold)`; always positive since threshold < 1.
    span: f64,
}

impl ThresholdRemap {
    fn new(range: LuminanceRange, threshold: f64) -> Self {
        let range_width = range.span() as f64;
        let offset = range_width * threshold;
        Self {
            min: range.min,
            offset,
            cutoff: range.min as f64 + offset,
            span: range_width * (1.0 - threshold),
        }
    }

    #[inline]
    fn alpha(&self, lum: u8) -> u8 {
        if (lum as f64) < self.cutoff {
            return 0;
        }
        // Scale before dividing; truncation depends on this order.
        let adjusted = (lum - self.min) as f64 - self.offset;
        (adjusted * 255.0 / self.span).clamp(0.0, 255.0) as u8
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn grid_strategy() -> impl Strategy<Value = PixelGrid> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(width, height)| {
            let size = (width * height * 4) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |pixels| PixelGrid::new(width, height, pixels))
        })
    }

    fn threshold_strategy() -> impl Strategy<Value = f64> {
        0.0f64..0.99
    }

    proptest! {
        /// Property: Stream length equals the pixel count.
        #[test]
        fn prop_length_matches_pixel_count(
            grid in grid_strategy(),
            threshold in threshold_strategy(),
        ) {
            let encoded = encode_luminance_threshold(&grid, threshold).unwrap();
            prop_assert_eq!(encoded.data.len(), grid.pixel_count());
        }

        /// Property: Same input always produces same output.
        #[test]
        fn prop_deterministic_output(
            grid in grid_strategy(),
            threshold in threshold_strategy(),
        ) {
            let first = encode_luminance_threshold(&grid, threshold).unwrap();
            let second = encode_luminance_threshold(&grid, threshold).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Property: Brightening one pixel never lowers its alpha.
        #[test]
        fn prop_monotonic_in_luminance(
            values in prop::collection::vec(any::<u8>(), 2..=32),
            index in any::<prop::sample::Index>(),
            boost in 1u8..=255,
            threshold in threshold_strategy(),
        ) {
            let i = index.index(values.len());
            let mut brighter = values.clone();
            brighter[i] = values[i].saturating_add(boost);

            let to_grid = |vals: &[u8]| {
                let pixels: Vec<[u8; 4]> = vals.iter().map(|&v| [v, v, v, 255]).collect();
                PixelGrid::from_rgba(vals.len() as u32, 1, &pixels)
            };

            let before = encode_luminance_threshold(&to_grid(&values), threshold).unwrap();
            let after = encode_luminance_threshold(&to_grid(&brighter), threshold).unwrap();

            prop_assert!(
                after.data[i] >= before.data[i],
                "alpha dropped from {} to {}",
                before.data[i],
                after.data[i]
            );
        }

        /// Property: A uniform grid never fails and yields a constant stream.
        #[test]
        fn prop_uniform_grid_safe(
            (width, height) in (1u32..=16, 1u32..=16),
            px in any::<[u8; 4]>(),
            threshold in threshold_strategy(),
        ) {
            let pixels = vec![px; (width * height) as usize];
            let grid = PixelGrid::from_rgba(width, height, &pixels);

            let encoded = encode_luminance_threshold(&grid, threshold).unwrap();
            prop_assert!(encoded.data.iter().all(|&a| a == encoded.data[0]));
        }
    }
}
