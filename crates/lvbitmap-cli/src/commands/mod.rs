//! Subcommand implementations.

mod batch;
mod common;
mod convert;
mod fonts;
mod snowflake;

use lvbitmap_core::{Encoding, ForegroundRule};

use crate::cli::Command;
use crate::error::CliError;

/// Run the selected subcommand.
pub fn dispatch(command: Command) -> Result<(), CliError> {
    match command {
        Command::Alpha(args) => convert::run(&args, Encoding::Alpha),
        Command::Luminance { args, threshold } => {
            convert::run(&args, Encoding::Luminance { threshold })
        }
        Command::Indexed {
            args,
            min_alpha,
            min_red,
        } => convert::run(
            &args,
            Encoding::indexed(ForegroundRule { min_alpha, min_red }),
        ),
        Command::Snowflake(args) => snowflake::run(&args),
        Command::Fonts(args) => fonts::run(&args),
        Command::Batch { manifest } => batch::run(&manifest),
    }
}
