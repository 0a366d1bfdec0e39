use clap::Parser;
use std::path::PathBuf;

use sarif_split::{DEFAULT_ID_PREFIX, DEFAULT_MAX_RUNS_PER_FILE, SplitParams, SplitPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "sarif-split",
    version,
    about = "Split a SARIF file with multiple runs into separate files",
    after_help = "Example:\n  sarif-split results.sarif ./sarif-output"
)]
pub struct CliArgs {
    /// Input SARIF file
    pub input: PathBuf,

    /// Directory to write split SARIF files into (created if missing)
    pub output_dir: PathBuf,

    /// Maximum runs per output file (only used with --policy chunked)
    #[arg(default_value_t = DEFAULT_MAX_RUNS_PER_FILE)]
    pub max_runs_per_file: usize,

    /// Split policy: one run per file, or fixed-size chunks
    #[arg(long, value_enum, default_value_t = SplitPolicy::PerRun)]
    pub policy: SplitPolicy,

    /// Prefix of the injected automationDetails.id (per-run policy)
    #[arg(long, default_value = DEFAULT_ID_PREFIX)]
    pub id_prefix: String,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn to_params(&self) -> SplitParams {
        SplitParams {
            policy: self.policy,
            max_runs_per_file: self.max_runs_per_file,
            id_prefix: self.id_prefix.clone(),
        }
    }
}
