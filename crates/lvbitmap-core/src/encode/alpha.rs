//! Direct alpha-channel encoding.

use super::types::validate_grid;
use super::{ColorFormat, EncodeError, EncodedImage};
use crate::decode::PixelGrid;

/// Copy the alpha channel of every pixel, row-major, into an 8-bit alpha stream.
///
/// Colour channels are ignored. The result has exactly `width * height` bytes.
///
/// # Errors
///
/// Only fails on a malformed grid (zero dimensions or a buffer that does not
/// match them).
pub fn encode_alpha_direct(grid: &PixelGrid) -> Result<EncodedImage, EncodeError> {
    validate_grid(grid)?;

    let data = grid.iter().map(|[_, _, _, a]| a).collect();

    Ok(EncodedImage::new(
        grid.width,
        grid.height,
        ColorFormat::Alpha8Bit,
        data,
        None,
    ))
}
