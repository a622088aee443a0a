//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use lvbitmap_core::encode::DEFAULT_THRESHOLD;
use lvbitmap_core::font::{DEFAULT_FONT_CANDIDATES, DEFAULT_FONT_SIZES, DEFAULT_TOOL};
use lvbitmap_core::SnowflakeStyle;

/// Convert images into C sources for the LVGL image API.
#[derive(Debug, Parser)]
#[command(name = "lvbitmap", author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy the alpha channel into an ALPHA_8BIT image
    Alpha(ConvertArgs),

    /// Derive alpha from luminance, cutting the darkest part to transparent
    Luminance {
        #[command(flatten)]
        args: ConvertArgs,

        /// Fraction of the luminance range that becomes transparent, in [0, 1)
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
    },

    /// Pack into a 1-bit indexed image with a black/white palette
    Indexed {
        #[command(flatten)]
        args: ConvertArgs,

        /// Foreground requires alpha strictly above this
        #[arg(long, default_value_t = 128)]
        min_alpha: u8,

        /// Foreground requires red strictly above this
        #[arg(long, default_value_t = 128)]
        min_red: u8,
    },

    /// Generate a snowflake glyph as PNG
    Snowflake(SnowflakeArgs),

    /// Rasterize large Montserrat fonts with lv_font_conv
    Fonts(FontsArgs),

    /// Run every conversion listed in a JSON manifest
    Batch {
        /// Manifest file
        manifest: PathBuf,
    },
}

/// Positional arguments shared by the image converters.
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Input image (PNG or JPEG)
    pub input: PathBuf,

    /// Output C source file
    pub output: PathBuf,

    /// Descriptor name; the byte array is named <NAME>_map
    #[arg(default_value = "image")]
    pub name: String,

    /// Resize to SIZE x SIZE before encoding
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,

    /// Also write a header declaring the image
    #[arg(long, value_name = "PATH")]
    pub header: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct SnowflakeArgs {
    /// Output PNG file
    pub output: PathBuf,

    /// Shape to draw
    #[arg(long, value_enum, default_value_t = StyleArg::Realistic)]
    pub style: StyleArg,

    /// Canvas size in pixels (defaults to the style's own size)
    #[arg(long)]
    pub size: Option<u32>,

    /// Also write the glyph as 1-bit indexed C source
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Descriptor name used with --source
    #[arg(long, default_value = "snowflake_img")]
    pub name: String,
}

#[derive(Debug, Clone, Args)]
pub struct FontsArgs {
    /// Candidate font files; the first that exists is used
    #[arg(
        long = "font",
        value_name = "PATH",
        default_values_t = DEFAULT_FONT_CANDIDATES.map(String::from)
    )]
    pub fonts: Vec<String>,

    /// Directory the generated .c files go to
    #[arg(long, default_value = "src")]
    pub out_dir: PathBuf,

    /// Pixel sizes to generate
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_FONT_SIZES)]
    pub sizes: Vec<u32>,

    /// Bits per pixel
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=8))]
    pub bpp: u8,

    /// Converter executable
    #[arg(long, default_value = DEFAULT_TOOL)]
    pub tool: String,
}

/// Snowflake style selection for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Filled disc
    Simple,
    /// Six arms with one branch pair each
    SixArm,
    /// Six arms with two branch pairs and a centre dot
    Realistic,
}

impl From<StyleArg> for SnowflakeStyle {
    fn from(style: StyleArg) -> Self {
        match style {
            StyleArg::Simple => SnowflakeStyle::Simple,
            StyleArg::SixArm => SnowflakeStyle::SixArm,
            StyleArg::Realistic => SnowflakeStyle::Realistic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_convert_args() {
        let cli = Cli::try_parse_from(["lvbitmap", "alpha", "in.png", "out.c", "gear_img", "30"])
            .unwrap();
        match cli.command {
            Command::Alpha(args) => {
                assert_eq!(args.input, PathBuf::from("in.png"));
                assert_eq!(args.output, PathBuf::from("out.c"));
                assert_eq!(args.name, "gear_img");
                assert_eq!(args.size, Some(30));
                assert!(args.header.is_none());
            }
            other => panic!("Expected alpha command, got {other:?}"),
        }
    }

    #[test]
    fn test_convert_defaults() {
        let cli = Cli::try_parse_from(["lvbitmap", "luminance", "in.png", "out.c"]).unwrap();
        match cli.command {
            Command::Luminance { args, threshold } => {
                assert_eq!(args.name, "image");
                assert_eq!(args.size, None);
                assert!((threshold - 0.15).abs() < f64::EPSILON);
            }
            other => panic!("Expected luminance command, got {other:?}"),
        }
    }

    #[test]
    fn test_indexed_rule_flags() {
        let cli = Cli::try_parse_from([
            "lvbitmap",
            "indexed",
            "in.png",
            "out.c",
            "--min-alpha",
            "10",
            "--min-red",
            "200",
        ])
        .unwrap();
        match cli.command {
            Command::Indexed {
                min_alpha, min_red, ..
            } => assert_eq!((min_alpha, min_red), (10, 200)),
            other => panic!("Expected indexed command, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_output_is_usage_error() {
        let err = Cli::try_parse_from(["lvbitmap", "alpha", "in.png"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(Cli::try_parse_from(["lvbitmap", "alpha", "in.png", "out.c", "x", "0"]).is_err());
    }

    #[test]
    fn test_fonts_defaults() {
        let cli = Cli::try_parse_from(["lvbitmap", "fonts"]).unwrap();
        match cli.command {
            Command::Fonts(args) => {
                assert_eq!(args.sizes, vec![60, 72, 84, 96]);
                assert_eq!(args.bpp, 4);
                assert_eq!(args.tool, "lv_font_conv");
                assert_eq!(args.fonts.len(), 3);
                assert_eq!(args.out_dir, PathBuf::from("src"));
            }
            other => panic!("Expected fonts command, got {other:?}"),
        }
    }

    #[test]
    fn test_fonts_size_list() {
        let cli = Cli::try_parse_from(["lvbitmap", "fonts", "--sizes", "48,64"]).unwrap();
        match cli.command {
            Command::Fonts(args) => assert_eq!(args.sizes, vec![48, 64]),
            other => panic!("Expected fonts command, got {other:?}"),
        }
    }

    #[test]
    fn test_snowflake_style_mapping() {
        let cli =
            Cli::try_parse_from(["lvbitmap", "snowflake", "flake.png", "--style", "six-arm"])
                .unwrap();
        match cli.command {
            Command::Snowflake(args) => {
                assert_eq!(SnowflakeStyle::from(args.style), SnowflakeStyle::SixArm);
                assert_eq!(args.name, "snowflake_img");
            }
            other => panic!("Expected snowflake command, got {other:?}"),
        }
    }

    #[test]
    fn test_verbosity_count() {
        let cli = Cli::try_parse_from(["lvbitmap", "-vv", "batch", "jobs.json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }
}
