use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::SplitPolicy;

/// Default upper bound on runs per file, matching GitHub Code Scanning's per-upload limit.
pub const DEFAULT_MAX_RUNS_PER_FILE: usize = 20;

/// Default prefix of injected `automationDetails.id` values.
pub const DEFAULT_ID_PREFIX: &str = "codacy";

/// Split parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitParams {
    pub policy: SplitPolicy,
    /// Only used by `SplitPolicy::Chunked`
    pub max_runs_per_file: usize,
    /// Leading segment of `<prefix>/<tool>/<index>` automation ids (per-run policy)
    pub id_prefix: String,
}

impl SplitParams {
    pub fn per_run() -> Self {
        Self::default()
    }

    pub fn chunked(max_runs_per_file: usize) -> Self {
        Self {
            policy: SplitPolicy::Chunked,
            max_runs_per_file,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.policy == SplitPolicy::Chunked && self.max_runs_per_file == 0 {
            return Err(Error::InvalidArgument {
                arg: "max_runs_per_file",
                value: "0".to_string(),
            });
        }
        if self.policy == SplitPolicy::PerRun && self.id_prefix.trim().is_empty() {
            return Err(Error::InvalidArgument {
                arg: "id_prefix",
                value: self.id_prefix.clone(),
            });
        }
        Ok(())
    }
}

impl Default for SplitParams {
    fn default() -> Self {
        Self {
            policy: SplitPolicy::PerRun,
            max_runs_per_file: DEFAULT_MAX_RUNS_PER_FILE,
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}
