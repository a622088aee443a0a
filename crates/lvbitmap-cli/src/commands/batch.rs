//! The `batch` subcommand: conversions listed in a JSON manifest.
//!
//! ```json
//! {
//!   "jobs": [
//!     { "input": "gear.png", "output": "src/gear.c", "name": "gear_img", "size": 30,
//!       "encoding": { "mode": "luminance", "threshold": 0.2 } },
//!     { "input": "snow.png", "output": "src/snow.c", "name": "snowflake_img",
//!       "encoding": { "mode": "indexed" } }
//!   ]
//! }
//! ```
//!
//! Relative paths are resolved against the manifest's directory. Jobs run in
//! order and the batch stops at the first failure.

use std::fs;
use std::path::{Path, PathBuf};

use lvbitmap_core::Encoding;
use serde::Deserialize;
use tracing::info;

use super::common::print_usage_hint;
use super::convert::{convert_file, ConvertRequest};
use crate::error::CliError;

fn default_name() -> String {
    "image".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub size: Option<u32>,
    #[serde(default)]
    pub header: Option<PathBuf>,
    #[serde(default)]
    pub encoding: Encoding,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|e| CliError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&text).map_err(|e| CliError::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Rebase every relative path onto `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for job in &mut self.jobs {
            job.input = base.join(&job.input);
            job.output = base.join(&job.output);
            if let Some(header) = job.header.as_mut() {
                *header = base.join(&*header);
            }
        }
    }
}

impl Job {
    fn request(&self) -> ConvertRequest<'_> {
        ConvertRequest {
            input: &self.input,
            output: &self.output,
            name: &self.name,
            size: self.size,
            header: self.header.as_deref(),
            encoding: self.encoding,
        }
    }
}

/// Run every job in the manifest at `path`.
pub fn run(path: &Path) -> Result<(), CliError> {
    let mut manifest = Manifest::load(path)?;
    if let Some(base) = path.parent() {
        manifest.resolve_paths(base);
    }

    let total = manifest.jobs.len();
    for (index, job) in manifest.jobs.iter().enumerate() {
        info!(job = index + 1, total, name = %job.name, "Converting");
        convert_file(&job.request()).map_err(|e| CliError::Job {
            index: index + 1,
            name: job.name.clone(),
            source: Box::new(e),
        })?;
        print_usage_hint(&job.name, &job.output);
    }

    println!("{total} image(s) converted");
    Ok(())
}
