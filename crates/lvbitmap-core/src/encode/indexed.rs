//! 1-bit indexed encoding with a two-colour palette.

use super::types::validate_grid;
use super::{ColorFormat, EncodeError, EncodedImage, Palette};
use crate::decode::PixelGrid;

/// Threshold-based foreground test for indexed encoding.
///
/// A pixel is foreground (palette index 1) when both its alpha and its red
/// channel are strictly greater than the configured minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForegroundRule {
    pub min_alpha: u8,
    pub min_red: u8,
}

impl Default for ForegroundRule {
    fn default() -> Self {
        Self {
            min_alpha: 128,
            min_red: 128,
        }
    }
}

impl ForegroundRule {
    pub fn new(min_alpha: u8, min_red: u8) -> Self {
        Self { min_alpha, min_red }
    }

    #[inline]
    pub fn matches(&self, [r, _, _, a]: [u8; 4]) -> bool {
        a > self.min_alpha && r > self.min_red
    }
}

/// Encode one bit per pixel, most significant bit first, row-major.
///
/// `is_foreground` decides each bit. The final byte of the stream is padded
/// with zero bits when the pixel count is not a multiple of 8. The result
/// carries [`Palette::monochrome`].
pub fn encode_indexed_1bit<F>(
    grid: &PixelGrid,
    is_foreground: F,
) -> Result<EncodedImage, EncodeError>
where
    F: Fn([u8; 4]) -> bool,
{
    validate_grid(grid)?;

    let data = pack_bits(grid.iter().map(is_foreground));

    Ok(EncodedImage::new(
        grid.width,
        grid.height,
        ColorFormat::Indexed1Bit,
        data,
        Some(Palette::monochrome()),
    ))
}

/// Pack bits MSB first, zero-padding the last byte.
pub fn pack_bits(bits: impl IntoIterator<Item = bool>) -> Vec<u8> {
    let mut out = Vec::new();
    let mut byte = 0u8;
    let mut count = 0u32;

    for bit in bits {
        byte = (byte << 1) | bit as u8;
        count += 1;
        if count == 8 {
            out.push(byte);
            byte = 0;
            count = 0;
        }
    }

    if count > 0 {
        out.push(byte << (8 - count));
    }

    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn grid_strategy() -> impl Strategy<Value = PixelGrid> {
        (1u32..=24, 1u32..=24).prop_flat_map(|(width, height)| {
            let size = (width * height * 4) as usize;
            prop::collection::vec(any::<u8>(), size..=size)
                .prop_map(move |pixels| PixelGrid::new(width, height, pixels))
        })
    }

    proptest! {
        /// Property: Stream length is ceil(pixels / 8).
        #[test]
        fn prop_length_is_ceil_of_eighth(grid in grid_strategy()) {
            let rule = ForegroundRule::default();
            let encoded = encode_indexed_1bit(&grid, |px| rule.matches(px)).unwrap();
            prop_assert_eq!(encoded.data.len(), grid.pixel_count().div_ceil(8));
            prop_assert_eq!(encoded.header.data_size, encoded.data.len() + 8);
        }

        /// Property: Bit i of the stream is the predicate of pixel i.
        #[test]
        fn prop_bits_follow_predicate(grid in grid_strategy()) {
            let rule = ForegroundRule::default();
            let encoded = encode_indexed_1bit(&grid, |px| rule.matches(px)).unwrap();

            for (i, px) in grid.iter().enumerate() {
                let bit = (encoded.data[i / 8] >> (7 - i % 8)) & 1 == 1;
                prop_assert_eq!(bit, rule.matches(px));
            }
        }

        /// Property: Padding bits after the last pixel are zero.
        #[test]
        fn prop_padding_is_zero(grid in grid_strategy()) {
            let encoded = encode_indexed_1bit(&grid, |_| true).unwrap();
            let used = grid.pixel_count() % 8;
            if used != 0 {
                let last = *encoded.data.last().unwrap();
                prop_assert_eq!(last & (0xFF >> used), 0);
            }
        }

        /// Property: Same input always produces same output.
        #[test]
        fn prop_deterministic_output(grid in grid_strategy()) {
            let rule = ForegroundRule::default();
            prop_assert_eq!(
                encode_indexed_1bit(&grid, |px| rule.matches(px)).unwrap(),
                encode_indexed_1bit(&grid, |px| rule.matches(px)).unwrap()
            );
        }
    }
}
