//! Shared types used across the splitter.
//! Includes the partitioning `SplitPolicy`, the in-memory `OutputGroup`, and the
//! `WrittenFile` / `SplitReport` records returned by the high-level API.
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How the runs of a source document are distributed over output files.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SplitPolicy {
    /// One run per output file, with a per-run `automationDetails.id`.
    #[default]
    PerRun,
    /// Fixed-size chunks of at most `max_runs_per_file` runs.
    Chunked,
}

impl std::fmt::Display for SplitPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitPolicy::PerRun => write!(f, "per-run"),
            SplitPolicy::Chunked => write!(f, "chunked"),
        }
    }
}

/// One output document, ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputGroup {
    /// 1-based position of the group in output order
    pub index: usize,
    pub file_name: String,
    /// Number of runs carried in `document["runs"]`
    pub run_count: usize,
    pub document: Map<String, Value>,
}

/// A file produced by a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub index: usize,
    pub path: PathBuf,
    pub file_name: String,
    pub run_count: usize,
}

/// Outcome of splitting a single input document
#[derive(Debug, Clone, Default)]
pub struct SplitReport {
    pub input: PathBuf,
    /// False when the source document had no `runs` key at all
    pub runs_present: bool,
    pub total_runs: usize,
    pub files: Vec<WrittenFile>,
}

impl SplitReport {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.files.iter().map(|f| f.path.clone()).collect()
    }
}
