//! PNG encoding for generated glyphs.
//!
//! Glyph generators produce a [`PixelGrid`]; this writes it as an RGBA PNG so
//! it can be inspected or fed back through the converters.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::types::validate_grid;
use super::EncodeError;
use crate::decode::PixelGrid;

/// Encode a pixel grid to PNG bytes.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` or `EncodeError::InvalidPixelData`
/// for a malformed grid, `EncodeError::EncodingFailed` if the encoder fails.
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, EncodeError> {
    validate_grid(grid)?;

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(&grid.pixels, grid.width, grid.height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
