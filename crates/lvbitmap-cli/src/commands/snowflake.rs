//! The `snowflake` subcommand.

use lvbitmap_core::encode::encode_png;
use lvbitmap_core::glyph::opaque_pixel_count;
use lvbitmap_core::{convert_image, render_snowflake, Encoding, ForegroundRule, SnowflakeStyle};
use tracing::info;

use super::common::{print_usage_hint, write_outputs};
use crate::cli::SnowflakeArgs;
use crate::error::CliError;

/// Render a snowflake, save it as PNG and optionally as indexed C source.
pub fn run(args: &SnowflakeArgs) -> Result<(), CliError> {
    let style = SnowflakeStyle::from(args.style);
    let size = args.size.unwrap_or_else(|| style.default_size());

    let grid = render_snowflake(style, size)?;
    let png = encode_png(&grid)?;
    let source = match &args.source {
        Some(path) => {
            let encoding = Encoding::indexed(ForegroundRule::default());
            let conversion = convert_image(&grid, encoding, &args.name)?;
            Some((path.as_path(), conversion.source))
        }
        None => None,
    };

    let mut outputs = vec![(args.output.as_path(), png.as_slice())];
    if let Some((path, text)) = &source {
        outputs.push((*path, text.as_bytes()));
    }
    write_outputs(&outputs)?;

    info!(
        output = %args.output.display(),
        ?style,
        size,
        opaque = opaque_pixel_count(&grid),
        "Wrote snowflake"
    );
    println!("Generated {} ({size}x{size})", args.output.display());
    if let Some((path, _)) = source {
        print_usage_hint(&args.name, path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StyleArg;
    use lvbitmap_core::load_image;

    fn args(dir: &std::path::Path, style: StyleArg) -> SnowflakeArgs {
        SnowflakeArgs {
            output: dir.join("flake.png"),
            style,
            size: None,
            source: None,
            name: "snowflake_img".to_string(),
        }
    }

    #[test]
    fn test_png_round_trips_at_default_size() {
        let dir = tempfile::tempdir().unwrap();
        let args = args(dir.path(), StyleArg::Simple);

        run(&args).unwrap();

        let grid = load_image(&args.output).unwrap();
        assert_eq!((grid.width, grid.height), (12, 12));
        assert_eq!(
            grid,
            render_snowflake(SnowflakeStyle::Simple, 12).unwrap()
        );
    }

    #[test]
    fn test_source_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(dir.path(), StyleArg::Realistic);
        args.size = Some(16);
        args.source = Some(dir.path().join("snowflake.c"));

        run(&args).unwrap();

        let source = std::fs::read_to_string(dir.path().join("snowflake.c")).unwrap();
        assert!(source.contains("LV_IMG_CF_INDEXED_1BIT"));
        assert!(source.contains("const lv_img_dsc_t snowflake_img = {"));
    }

    #[test]
    fn test_failed_source_write_removes_png() {
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("snowflake.c");
        std::fs::create_dir(&blocked).unwrap();
        let mut args = args(dir.path(), StyleArg::Simple);
        args.source = Some(blocked);

        assert!(matches!(run(&args), Err(CliError::Write { .. })));
        assert!(!args.output.exists());
    }

    #[test]
    fn test_too_small_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(dir.path(), StyleArg::SixArm);
        args.size = Some(2);

        assert!(matches!(run(&args), Err(CliError::Glyph(_))));
        assert!(!args.output.exists());
    }
}
