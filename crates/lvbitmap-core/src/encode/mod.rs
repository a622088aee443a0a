//! Pixel encoders for embedded image descriptors.
//!
//! This module provides functionality for:
//! - Copying the alpha channel directly ([`encode_alpha_direct`])
//! - Deriving alpha from luminance with a range-relative cutoff
//!   ([`encode_luminance_threshold`])
//! - Packing a foreground predicate into a 1-bit indexed stream
//!   ([`encode_indexed_1bit`])
//! - Writing generated grids as PNG ([`encode_png`])
//!
//! Every encoder returns a fresh [`EncodedImage`] whose header `data_size`
//! matches its byte stream (plus palette for indexed output).
//!
//! # Examples
//!
//! ```ignore
//! use lvbitmap_core::decode::load_image;
//! use lvbitmap_core::encode::{encode_luminance_threshold, DEFAULT_THRESHOLD};
//!
//! let grid = load_image("settings.png").unwrap();
//! let encoded = encode_luminance_threshold(&grid, DEFAULT_THRESHOLD).unwrap();
//! println!("Encoded {} bytes", encoded.data.len());
//! ```

mod alpha;
mod encoding;
mod indexed;
mod png;
mod threshold;
mod types;

pub use alpha::encode_alpha_direct;
pub use encoding::Encoding;
pub use indexed::{encode_indexed_1bit, pack_bits, ForegroundRule};
pub use png::encode_png;
pub use threshold::{encode_luminance_threshold, DEFAULT_THRESHOLD};
pub use types::{
    ColorFormat, EncodeError, EncodedImage, ImageHeader, Palette, PALETTE_ENTRY_BYTES,
};
