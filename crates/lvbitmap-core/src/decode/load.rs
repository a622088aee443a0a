//! Image loading with normalization to RGBA8.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};
use tracing::debug;

use super::{DecodeError, PixelGrid};

/// Decode an image from bytes, normalizing it to four 8-bit channels.
///
/// The format is guessed from the content, so any format enabled on the
/// `image` crate is accepted. Images without an alpha channel come back fully
/// opaque.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the bytes are not a known format.
/// Returns `DecodeError::CorruptedFile` if decoding fails part way.
/// Returns `DecodeError::EmptyImage` if the image has no pixels.
pub fn decode_image(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Io(e.to_string()))?;

    let img = reader.decode().map_err(map_image_error)?;
    let rgba = img.into_rgba8();

    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    debug!(width, height, "Decoded image");
    Ok(PixelGrid::from_rgba_image(rgba))
}

/// Read an image file from disk and decode it.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read, otherwise the same
/// errors as [`decode_image`].
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelGrid, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::Io(format!("{}: {}", path.display(), e)))?;
    decode_image(&bytes)
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        ImageError::IoError(e) => DecodeError::Io(e.to_string()),
        other => DecodeError::CorruptedFile(other.to_string()),
    }
}
