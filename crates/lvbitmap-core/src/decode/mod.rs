//! Image loading for the conversion pipeline.
//!
//! This module provides functionality for:
//! - Decoding any image format the `image` crate is built with
//! - Normalizing the result to an RGBA8 [`PixelGrid`]
//! - Resampling to a square target size before encoding
//!
//! All operations are synchronous; a conversion loads exactly one image.
//!
//! # Examples
//!
//! ```ignore
//! use lvbitmap_core::decode::{load_image, resize_square};
//!
//! let grid = load_image("settings.png").unwrap();
//! let grid = resize_square(&grid, 30).unwrap();
//! println!("Loaded {}x{} grid", grid.width, grid.height);
//! ```

mod load;
mod resize;
mod types;

pub use load::{decode_image, load_image};
pub use resize::{resize, resize_square};
pub use types::{DecodeError, FilterType, PixelGrid, BYTES_PER_PIXEL};
