//! lvbitmap Core - image to embedded bitmap conversion
//!
//! This crate turns images into C source for the LVGL image API: it loads a
//! pixel grid, encodes it as an alpha or 1-bit indexed byte stream, and emits
//! the array literal together with its `lv_img_dsc_t` descriptor. It also
//! generates small snowflake glyphs and drives the external font converter.

pub mod decode;
pub mod emit;
pub mod encode;
pub mod font;
pub mod glyph;
pub mod luminance;

pub use decode::{load_image, resize_square, DecodeError, PixelGrid};
pub use emit::{emit_array_literal, emit_declaration_header, EmitError};
pub use encode::{
    encode_alpha_direct, encode_indexed_1bit, encode_luminance_threshold, ColorFormat,
    EncodeError, EncodedImage, Encoding, ForegroundRule, ImageHeader, Palette,
};
pub use glyph::{render_snowflake, SnowflakeStyle};

/// Encode a loaded grid and emit its C source.
///
/// Nothing is written to disk here; callers write `source` only once both
/// stages have succeeded.
pub fn convert_image(
    grid: &PixelGrid,
    encoding: Encoding,
    name: &str,
) -> Result<Conversion, ConvertError> {
    let encoded = encoding.encode(grid)?;
    let source = emit_array_literal(&encoded, name)?;
    Ok(Conversion {
        header: encoded.header,
        source,
    })
}

/// Result of [`convert_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Header of the encoded stream.
    pub header: ImageHeader,
    /// Complete C source text.
    pub source: String,
}

/// Errors from the encode and emit stages of a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}
