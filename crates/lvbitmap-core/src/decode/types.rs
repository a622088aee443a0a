//! Core types for image loading.

use thiserror::Error;

/// Number of bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Error types for image loading operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input could not be read from disk.
    #[error("I/O error: {0}")]
    Io(String),

    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    UnsupportedFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The image decoded to zero width or height.
    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A resize target had a zero dimension.
    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Filter type for resampling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    #[default]
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// An RGBA pixel grid in row-major order.
///
/// Every conversion starts from one of these. The grid is never modified
/// after construction; resizing produces a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Grid width in pixels.
    pub width: u32,
    /// Grid height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl PixelGrid {
    /// Create a new PixelGrid with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * BYTES_PER_PIXEL,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a grid from a slice of RGBA tuples laid out row by row.
    pub fn from_rgba(width: u32, height: u32, pixels: &[[u8; 4]]) -> Self {
        Self::new(width, height, pixels.iter().flatten().copied().collect())
    }

    /// Create a PixelGrid from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbaImage for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Iterate over pixels in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.pixels
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Get the pixel at (x, y), or None when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let px = &self.pixels[idx..idx + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if this is an empty/invalid grid.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_type_conversion() {
        assert!(matches!(
            FilterType::Nearest.to_image_filter(),
            image::imageops::FilterType::Nearest
        ));
        assert!(matches!(
            FilterType::Bilinear.to_image_filter(),
            image::imageops::FilterType::Triangle
        ));
        assert!(matches!(
            FilterType::Lanczos3.to_image_filter(),
            image::imageops::FilterType::Lanczos3
        ));
    }

    #[test]
    fn test_filter_type_default_is_high_quality() {
        assert_eq!(FilterType::default(), FilterType::Lanczos3);
    }

    #[test]
    fn test_pixel_grid_creation() {
        let grid = PixelGrid::new(10, 5, vec![0u8; 10 * 5 * 4]);

        assert_eq!(grid.width, 10);
        assert_eq!(grid.height, 5);
        assert_eq!(grid.pixel_count(), 50);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_pixel_grid_empty() {
        let grid = PixelGrid::new(0, 0, vec![]);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_pixel_grid_iter_row_major() {
        let grid = PixelGrid::from_rgba(
            2,
            2,
            &[[1, 0, 0, 1], [2, 0, 0, 2], [3, 0, 0, 3], [4, 0, 0, 4]],
        );
        let alphas: Vec<u8> = grid.iter().map(|px| px[3]).collect();
        assert_eq!(alphas, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pixel_grid_get() {
        let grid = PixelGrid::from_rgba(2, 1, &[[10, 20, 30, 40], [50, 60, 70, 80]]);
        assert_eq!(grid.get(1, 0), Some([50, 60, 70, 80]));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 1), None);
    }

    #[test]
    fn test_rgba_image_roundtrip() {
        let grid = PixelGrid::from_rgba(1, 2, &[[1, 2, 3, 4], [5, 6, 7, 8]]);
        let img = grid.to_rgba_image().unwrap();
        assert_eq!(img.get_pixel(0, 1).0, [5, 6, 7, 8]);
        assert_eq!(PixelGrid::from_rgba_image(img), grid);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::EmptyImage {
            width: 0,
            height: 4,
        };
        assert_eq!(err.to_string(), "Image has no pixels (0x4)");

        let err = DecodeError::UnsupportedFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
