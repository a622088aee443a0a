//! Serializable choice of pixel encoding.

use serde::{Deserialize, Serialize};

use super::{
    encode_alpha_direct, encode_indexed_1bit, encode_luminance_threshold, EncodeError,
    EncodedImage, ForegroundRule, DEFAULT_THRESHOLD,
};
use crate::decode::PixelGrid;

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_min_channel() -> u8 {
    ForegroundRule::default().min_alpha
}

/// Which encoder to run, with its parameters.
///
/// Deserializes from `{"mode": "alpha"}`, `{"mode": "luminance", "threshold": 0.2}`
/// or `{"mode": "indexed", "min_alpha": 128, "min_red": 128}`; omitted
/// parameters take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Alpha,
    Luminance {
        #[serde(default = "default_threshold")]
        threshold: f64,
    },
    Indexed {
        #[serde(default = "default_min_channel")]
        min_alpha: u8,
        #[serde(default = "default_min_channel")]
        min_red: u8,
    },
}

impl Encoding {
    pub fn luminance() -> Self {
        Encoding::Luminance {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    pub fn indexed(rule: ForegroundRule) -> Self {
        Encoding::Indexed {
            min_alpha: rule.min_alpha,
            min_red: rule.min_red,
        }
    }

    /// Run the selected encoder over `grid`.
    pub fn encode(&self, grid: &PixelGrid) -> Result<EncodedImage, EncodeError> {
        match *self {
            Encoding::Alpha => encode_alpha_direct(grid),
            Encoding::Luminance { threshold } => encode_luminance_threshold(grid, threshold),
            Encoding::Indexed { min_alpha, min_red } => {
                let rule = ForegroundRule::new(min_alpha, min_red);
                encode_indexed_1bit(grid, |px| rule.matches(px))
            }
        }
    }
}
