//! CLI error type.

use std::path::PathBuf;

use lvbitmap_core::encode::EncodeError;
use lvbitmap_core::font::FontError;
use lvbitmap_core::glyph::GlyphError;
use lvbitmap_core::{ConvertError, DecodeError, EmitError};
use thiserror::Error;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to load image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] EncodeError),

    #[error("Failed to emit C source: {0}")]
    Emit(#[from] EmitError),

    #[error("Conversion failed: {0}")]
    Convert(#[from] ConvertError),

    #[error("Failed to render glyph: {0}")]
    Glyph(#[from] GlyphError),

    #[error("Font generation failed: {0}")]
    Font(#[from] FontError),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("Batch job {index} ({name}) failed: {source}")]
    Job {
        index: usize,
        name: String,
        #[source]
        source: Box<CliError>,
    },
}
