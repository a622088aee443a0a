//! C source emission for LVGL image descriptors.
//!
//! The emitted layout (include guard block, `<name>_map` array and
//! `lv_img_dsc_t` descriptor) is dictated by the graphics library and is
//! treated as a fixed contract. Emission is purely textual and deterministic.

mod c_source;

pub use c_source::{
    emit_array_literal, emit_declaration_header, format_hex_rows, validate_identifier,
};

use thiserror::Error;

/// Number of byte literals per line in the emitted array.
pub const BYTES_PER_LINE: usize = 16;

/// Errors that can occur while emitting C source.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The array name is not a valid C identifier.
    #[error("Invalid C identifier: {0:?}")]
    InvalidIdentifier(String),
}
