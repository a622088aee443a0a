//! Header record and byte stream produced by the pixel encoders.

use thiserror::Error;

use crate::decode::{PixelGrid, BYTES_PER_PIXEL};

/// Bytes one palette entry occupies in the descriptor data (`lv_color32_t`).
pub const PALETTE_ENTRY_BYTES: usize = 4;

/// Errors that can occur while encoding a pixel grid.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Threshold fraction outside [0, 1)
    #[error("Invalid threshold fraction {0}: must be in [0, 1)")]
    InvalidThreshold(f64),

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Container encoding (PNG) failed
    #[error("Image encoding failed: {0}")]
    EncodingFailed(String),
}

/// Check that a grid has pixels and that its buffer matches its dimensions.
pub(crate) fn validate_grid(grid: &PixelGrid) -> Result<(), EncodeError> {
    if grid.width == 0 || grid.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: grid.width,
            height: grid.height,
        });
    }

    let expected = grid.pixel_count() * BYTES_PER_PIXEL;
    if grid.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: grid.pixels.len(),
        });
    }

    Ok(())
}

/// Colour format tag written into the descriptor header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    /// One alpha byte per pixel; the widget supplies the colour.
    Alpha8Bit,
    /// One bit per pixel selecting a palette entry.
    Indexed1Bit,
}

impl ColorFormat {
    /// The library constant naming this format.
    pub fn lv_constant(self) -> &'static str {
        match self {
            ColorFormat::Alpha8Bit => "LV_IMG_CF_ALPHA_8BIT",
            ColorFormat::Indexed1Bit => "LV_IMG_CF_INDEXED_1BIT",
        }
    }

    /// Length of the byte stream for a grid of `pixel_count` pixels.
    pub fn stream_len(self, pixel_count: usize) -> usize {
        match self {
            ColorFormat::Alpha8Bit => pixel_count,
            ColorFormat::Indexed1Bit => pixel_count.div_ceil(8),
        }
    }
}

/// Ordered RGB palette for indexed formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Two entries: index 0 black (rendered transparent), index 1 white.
    pub fn monochrome() -> Self {
        Self {
            colors: vec![[0x00, 0x00, 0x00], [0xff, 0xff, 0xff]],
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Size the palette adds to the descriptor data.
    pub fn byte_size(&self) -> usize {
        self.colors.len() * PALETTE_ENTRY_BYTES
    }
}

/// Fixed-format header of an encoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageHeader {
    pub width: u32,
    pub height: u32,
    pub color_format: ColorFormat,
    /// Total data size in bytes, palette included.
    pub data_size: usize,
}

/// An encoded byte stream together with its header and optional palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub header: ImageHeader,
    pub data: Vec<u8>,
    pub palette: Option<Palette>,
}

impl EncodedImage {
    /// Assemble an encoded image, computing the declared data size.
    pub(crate) fn new(
        width: u32,
        height: u32,
        color_format: ColorFormat,
        data: Vec<u8>,
        palette: Option<Palette>,
    ) -> Self {
        debug_assert_eq!(
            data.len(),
            color_format.stream_len(width as usize * height as usize),
            "Byte stream length mismatch"
        );
        let data_size = data.len() + palette.as_ref().map_or(0, Palette::byte_size);
        Self {
            header: ImageHeader {
                width,
                height,
                color_format,
                data_size,
            },
            data,
            palette,
        }
    }
}
