//! The `alpha`, `luminance` and `indexed` subcommands.

use std::path::Path;

use lvbitmap_core::{
    convert_image, emit_declaration_header, load_image, resize_square, Encoding, ImageHeader,
};
use tracing::{debug, info};

use super::common::{print_usage_hint, write_outputs};
use crate::cli::ConvertArgs;
use crate::error::CliError;

/// One image conversion, as given on the command line or in a manifest.
#[derive(Debug, Clone, Copy)]
pub struct ConvertRequest<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub name: &'a str,
    pub size: Option<u32>,
    pub header: Option<&'a Path>,
    pub encoding: Encoding,
}

impl<'a> ConvertRequest<'a> {
    pub fn from_args(args: &'a ConvertArgs, encoding: Encoding) -> Self {
        Self {
            input: &args.input,
            output: &args.output,
            name: &args.name,
            size: args.size,
            header: args.header.as_deref(),
            encoding,
        }
    }
}

/// Run a single conversion from the command line.
pub fn run(args: &ConvertArgs, encoding: Encoding) -> Result<(), CliError> {
    let request = ConvertRequest::from_args(args, encoding);
    convert_file(&request)?;
    print_usage_hint(request.name, request.output);
    Ok(())
}

/// Load, encode and emit one image.
///
/// Every stage runs before anything is written, so a failure leaves no
/// partial output behind.
pub fn convert_file(request: &ConvertRequest<'_>) -> Result<ImageHeader, CliError> {
    let grid = load_image(request.input)?;
    debug!(
        input = %request.input.display(),
        width = grid.width,
        height = grid.height,
        "Loaded image"
    );

    let grid = match request.size {
        Some(size) => resize_square(&grid, size)?,
        None => grid,
    };

    let conversion = convert_image(&grid, request.encoding, request.name)?;
    let header_source = request
        .header
        .map(|_| emit_declaration_header(request.name))
        .transpose()?;

    let mut outputs = vec![(request.output, conversion.source.as_bytes())];
    if let (Some(path), Some(source)) = (request.header, &header_source) {
        outputs.push((path, source.as_bytes()));
    }
    write_outputs(&outputs)?;

    let header = conversion.header;
    info!(
        output = %request.output.display(),
        width = header.width,
        height = header.height,
        format = header.color_format.lv_constant(),
        data_size = header.data_size,
        "Wrote image source"
    );
    Ok(header)
}
