use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::GAMMA_DEFAULT;
use crate::filters::gamma::RoundingPolicy;

/// Settings for a single non-interactive enhancement run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnhanceConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default = "default_gamma")]
    pub gamma: f32,
    #[serde(default)]
    pub rounding: RoundingPolicy,
    /// Write the corrected image's histogram as CSV here.
    #[serde(default)]
    pub histogram: Option<PathBuf>,
}

fn default_gamma() -> f32 {
    GAMMA_DEFAULT
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("corrected.png"),
            gamma: GAMMA_DEFAULT,
            rounding: RoundingPolicy::default(),
            histogram: None,
        }
    }
}
