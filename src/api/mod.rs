//! High-level, ergonomic library API: split a SARIF file into an output directory,
//! split an already-parsed document, or plan a split in memory without touching
//! the disk. Prefer these entrypoints over the low-level `core` modules.
use std::path::Path;

use tracing::{info, warn};

use crate::core::document::SarifDocument;
use crate::core::params::SplitParams;
use crate::core::partition::partition;
use crate::error::{Error, Result};
use crate::io::{read_sarif, write_sarif};
use crate::types::{OutputGroup, SplitReport, WrittenFile};

/// Partition a document into output groups in memory (no disk I/O).
///
/// Returns `Ok(None)` when the document has no `runs` key.
pub fn plan_split(document: SarifDocument, params: &SplitParams) -> Result<Option<Vec<OutputGroup>>> {
    partition(document, params)
}

/// Split the SARIF file at `input` into `output_dir` using `params`.
pub fn split_sarif_file(input: &Path, output_dir: &Path, params: &SplitParams) -> Result<SplitReport> {
    split_sarif_file_with_progress(input, output_dir, params, |_, _| {})
}

/// Like [`split_sarif_file`], calling `on_file(file, total)` after each file is written.
pub fn split_sarif_file_with_progress<F>(
    input: &Path,
    output_dir: &Path,
    params: &SplitParams,
    on_file: F,
) -> Result<SplitReport>
where
    F: FnMut(&WrittenFile, usize),
{
    params.validate()?;
    let document = read_sarif(input)?;
    split_document_to_dir(document, input, output_dir, params, on_file)
}

/// Split an already-parsed document into `output_dir`.
///
/// `input` only labels the report and diagnostics. Writing stops at the first
/// failure; files written before it are left in place.
pub fn split_document_to_dir<F>(
    document: SarifDocument,
    input: &Path,
    output_dir: &Path,
    params: &SplitParams,
    mut on_file: F,
) -> Result<SplitReport>
where
    F: FnMut(&WrittenFile, usize),
{
    let mut report = SplitReport {
        input: input.to_path_buf(),
        ..SplitReport::default()
    };

    let Some(groups) = plan_split(document, params)? else {
        warn!("No 'runs' found in {:?}", input);
        return Ok(report);
    };

    report.runs_present = true;
    report.total_runs = groups.iter().map(|g| g.run_count).sum();
    info!(
        "Total runs found: {} ({} policy, {} file(s))",
        report.total_runs,
        params.policy,
        groups.len()
    );

    if groups.is_empty() {
        return Ok(report);
    }

    std::fs::create_dir_all(output_dir).map_err(|source| Error::OutputWrite {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let total = groups.len();
    for group in groups {
        let path = output_dir.join(&group.file_name);
        write_sarif(&group.document, &path)?;

        let written = WrittenFile {
            index: group.index,
            path,
            file_name: group.file_name,
            run_count: group.run_count,
        };
        info!("[{}/{}] Created {}", written.index, total, written.file_name);
        on_file(&written, total);
        report.files.push(written);
    }

    Ok(report)
}
