//! Resampling applied before encoding when a target size is requested.
//!
//! All functions return new `PixelGrid` instances without modifying the input.

use super::{DecodeError, FilterType, PixelGrid};

/// Resize a grid to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target dimension is zero,
/// or `DecodeError::CorruptedFile` if the source buffer does not match its size.
pub fn resize(
    grid: &PixelGrid,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<PixelGrid, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if grid.width == width && grid.height == height {
        return Ok(grid.clone());
    }

    let rgba_image = grid
        .to_rgba_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&rgba_image, width, height, filter.to_image_filter());

    Ok(PixelGrid::from_rgba_image(resized))
}

/// Resize to a `size x size` square with Lanczos3 resampling.
///
/// Aspect ratio is not preserved; icon sources are expected to be square.
pub fn resize_square(grid: &PixelGrid, size: u32) -> Result<PixelGrid, DecodeError> {
    resize(grid, size, size, FilterType::Lanczos3)
}
