//! Driver for the external `lv_font_conv` tool.
//!
//! Large display fonts are rasterized by `lv_font_conv` (installed with
//! `npm install -g lv_font_conv`); this module only builds the invocation,
//! locates a source TTF and runs the tool synchronously.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Default executable name of the converter.
pub const DEFAULT_TOOL: &str = "lv_font_conv";

/// Sizes generated when none are requested.
pub const DEFAULT_FONT_SIZES: [u32; 4] = [60, 72, 84, 96];

/// Basic ASCII plus the degree sign.
pub const DEFAULT_RANGES: [&str; 2] = ["0x20-0x7F", "0xB0"];

/// Places a Montserrat TTF is commonly installed.
pub const DEFAULT_FONT_CANDIDATES: [&str; 3] = [
    "/System/Library/Fonts/Supplemental/Montserrat-Regular.ttf",
    "/Library/Fonts/Montserrat-Regular.ttf",
    "Montserrat-Regular.ttf",
];

/// Errors that can occur while converting fonts.
#[derive(Debug, Error)]
pub enum FontError {
    /// The converter executable could not be started.
    #[error("{0} not found; install it with `npm install -g lv_font_conv`")]
    ToolNotFound(String),

    /// None of the candidate font files exist.
    #[error("No font file found (searched: {})", .0.join(", "))]
    FontNotFound(Vec<String>),

    /// The converter ran but reported failure.
    #[error("Font conversion failed (exit status {status:?}): {stderr}")]
    ConversionFailed { status: Option<i32>, stderr: String },

    /// I/O error preparing or running the conversion.
    #[error("I/O error: {0}")]
    Io(String),
}

/// One font to rasterize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontJob {
    /// C symbol of the generated font.
    pub name: String,
    /// Pixel size.
    pub size: u32,
    /// Bits per pixel for anti-aliasing.
    pub bpp: u8,
    /// Unicode ranges to include.
    pub ranges: Vec<String>,
    /// Source TTF/WOFF file.
    pub font: PathBuf,
    /// Destination `.c` file.
    pub output: PathBuf,
}

impl FontJob {
    /// Montserrat at `size` px, written to `<out_dir>/lv_font_montserrat_<size>.c`.
    pub fn montserrat(size: u32, font: impl Into<PathBuf>, out_dir: impl AsRef<Path>) -> Self {
        let name = format!("lv_font_montserrat_{size}");
        let output = out_dir.as_ref().join(format!("{name}.c"));
        Self {
            name,
            size,
            bpp: 4,
            ranges: DEFAULT_RANGES.iter().map(|r| r.to_string()).collect(),
            font: font.into(),
            output,
        }
    }

    /// Command-line arguments for the converter.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--no-compress".to_string(),
            "--no-prefilter".to_string(),
            "--bpp".to_string(),
            self.bpp.to_string(),
            "--size".to_string(),
            self.size.to_string(),
            "--font".to_string(),
            self.font.display().to_string(),
        ];
        for range in &self.ranges {
            args.push("-r".to_string());
            args.push(range.clone());
        }
        args.extend([
            "--format".to_string(),
            "lvgl".to_string(),
            "--force-fast-kern-format".to_string(),
            "-o".to_string(),
            self.output.display().to_string(),
        ]);
        args
    }
}

/// Return the first candidate path that exists.
pub fn find_font<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|p| p.as_ref())
        .find(|p| p.is_file())
        .map(Path::to_path_buf)
}

/// Like [`find_font`], but reports the searched paths when nothing exists.
pub fn resolve_font<P: AsRef<Path>>(candidates: &[P]) -> Result<PathBuf, FontError> {
    find_font(candidates).ok_or_else(|| {
        FontError::FontNotFound(
            candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect(),
        )
    })
}

/// Runs the converter executable.
#[derive(Debug, Clone)]
pub struct FontConverter {
    program: String,
}

impl Default for FontConverter {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

impl FontConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Check whether the executable can be started at all.
    pub fn is_available(&self) -> bool {
        Command::new(&self.program).arg("--help").output().is_ok()
    }

    /// Run one job, creating the output directory first.
    ///
    /// Returns the path of the generated file.
    pub fn run(&self, job: &FontJob) -> Result<PathBuf, FontError> {
        if let Some(parent) = job.output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| FontError::Io(e.to_string()))?;
        }

        let args = job.to_args();
        debug!(program = %self.program, ?args, "Running font converter");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => FontError::ToolNotFound(self.program.clone()),
                _ => FontError::Io(e.to_string()),
            })?;

        if !output.status.success() {
            return Err(FontError::ConversionFailed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(job.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_montserrat_job_naming() {
        let job = FontJob::montserrat(72, "Montserrat-Regular.ttf", "src");
        assert_eq!(job.name, "lv_font_montserrat_72");
        assert_eq!(job.output, Path::new("src").join("lv_font_montserrat_72.c"));
        assert_eq!(job.bpp, 4);
        assert_eq!(job.ranges, vec!["0x20-0x7F", "0xB0"]);
    }

    #[test]
    fn test_job_args() {
        let job = FontJob::montserrat(60, "font.ttf", "out");
        let output = Path::new("out").join("lv_font_montserrat_60.c");
        let expected: Vec<String> = [
            "--no-compress",
            "--no-prefilter",
            "--bpp",
            "4",
            "--size",
            "60",
            "--font",
            "font.ttf",
            "-r",
            "0x20-0x7F",
            "-r",
            "0xB0",
            "--format",
            "lvgl",
            "--force-fast-kern-format",
            "-o",
        ]
        .iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(output.display().to_string()))
        .collect();

        assert_eq!(job.to_args(), expected);
    }

    #[test]
    fn test_find_font_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("Montserrat-Regular.ttf");
        std::fs::write(&present, b"ttf").unwrap();
        let missing = dir.path().join("missing.ttf");

        assert_eq!(find_font(&[&missing, &present]), Some(present.clone()));
        assert_eq!(find_font(&[&missing]), None);
    }

    #[test]
    fn test_resolve_font_lists_candidates() {
        let err = resolve_font(&["/nope/a.ttf", "/nope/b.ttf"]).unwrap_err();
        match err {
            FontError::FontNotFound(searched) => {
                assert_eq!(searched, vec!["/nope/a.ttf", "/nope/b.ttf"]);
            }
            other => panic!("Expected FontNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_tool_reported() {
        let dir = tempfile::tempdir().unwrap();
        let converter = FontConverter::new("lvbitmap-test-no-such-tool");
        let job = FontJob::montserrat(60, "font.ttf", dir.path());

        assert!(!converter.is_available());
        assert!(matches!(
            converter.run(&job),
            Err(FontError::ToolNotFound(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_reported() {
        let dir = tempfile::tempdir().unwrap();
        let converter = FontConverter::new("false");
        let job = FontJob::montserrat(60, "font.ttf", dir.path().join("fonts"));

        assert!(matches!(
            converter.run(&job),
            Err(FontError::ConversionFailed { status: Some(1), .. })
        ));
        // Output directory is prepared before the tool runs
        assert!(dir.path().join("fonts").is_dir());
    }

    #[test]
    fn test_default_converter() {
        assert_eq!(FontConverter::default().program(), "lv_font_conv");
    }
}
