//! Helpers shared by the subcommands.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::CliError;

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), CliError> {
    let to_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, contents).map_err(to_error)
}

/// Write every `(path, contents)` pair in order.
///
/// When a write fails, files already written by this call are removed.
pub fn write_outputs(outputs: &[(&Path, &[u8])]) -> Result<(), CliError> {
    for (i, &(path, contents)) in outputs.iter().enumerate() {
        if let Err(e) = write_output(path, contents) {
            for &(written, _) in &outputs[..i] {
                if let Err(cleanup) = fs::remove_file(written) {
                    warn!(
                        path = %written.display(),
                        error = %cleanup,
                        "Failed to remove output"
                    );
                }
            }
            return Err(e);
        }
    }
    Ok(())
}

/// Print the snippet that wires a generated image into firmware code.
pub fn print_usage_hint(name: &str, output: &Path) {
    println!("Generated {}", output.display());
    println!("  Declare: LV_IMG_DECLARE({name});");
    println!("  Use:     lv_img_set_src(img, &{name});");
}
