//! Procedurally generated glyph images.
//!
//! Glyphs are drawn onto a transparent [`Canvas`] and returned as a
//! [`PixelGrid`], ready to be saved as PNG or fed straight into an encoder.

mod canvas;
mod snowflake;

pub use canvas::{Canvas, Point, WHITE};
pub use snowflake::{render_snowflake, SnowflakeStyle, MIN_GLYPH_SIZE};

use thiserror::Error;

use crate::decode::PixelGrid;

/// Errors that can occur while generating glyphs.
#[derive(Debug, Error)]
pub enum GlyphError {
    /// Requested canvas is too small for the shape.
    #[error("Glyph size {size} is too small (minimum {min})")]
    TooSmall { size: u32, min: u32 },
}

/// Count pixels with alpha above 128.
pub fn opaque_pixel_count(grid: &PixelGrid) -> usize {
    grid.iter().filter(|px| px[3] > 128).count()
}
