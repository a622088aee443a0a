//! The `fonts` subcommand.

use lvbitmap_core::font::{resolve_font, FontConverter, FontError, FontJob};
use tracing::{info, warn};

use crate::cli::FontsArgs;
use crate::error::CliError;

/// Generate every requested font size, skipping sizes that fail.
pub fn run(args: &FontsArgs) -> Result<(), CliError> {
    let converter = FontConverter::new(args.tool.as_str());
    if !converter.is_available() {
        return Err(FontError::ToolNotFound(args.tool.clone()).into());
    }

    let font = resolve_font(&args.fonts)?;
    info!(font = %font.display(), "Using font");

    let jobs: Vec<FontJob> = args
        .sizes
        .iter()
        .map(|&size| FontJob {
            bpp: args.bpp,
            ..FontJob::montserrat(size, font.clone(), &args.out_dir)
        })
        .collect();

    let mut generated = Vec::with_capacity(jobs.len());
    for job in &jobs {
        match converter.run(job) {
            Ok(path) => {
                println!("Generated {}", path.display());
                generated.push(job.name.as_str());
            }
            Err(e) => warn!(size = job.size, error = %e, "Skipping font size"),
        }
    }

    println!(
        "{} of {} font sizes generated in {}",
        generated.len(),
        jobs.len(),
        args.out_dir.display()
    );
    if !generated.is_empty() {
        println!("Add to lv_conf.h or declare in code:");
        for name in &generated {
            println!("  LV_FONT_DECLARE({name});");
        }
    }
    Ok(())
}
