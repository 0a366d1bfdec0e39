use serde_json::Value;
use tracing::debug;

use crate::core::document::{SarifDocument, automation_id, set_automation_id, tool_name};
use crate::core::params::SplitParams;
use crate::core::sanitize::{UNKNOWN_TOOL, sanitize_tool_name};
use crate::error::Result;
use crate::types::{OutputGroup, SplitPolicy};

pub fn per_run_file_name(index: usize, tool: &str) -> String {
    format!("results-{index:02}-{tool}.sarif")
}

pub fn chunk_file_name(index: usize) -> String {
    format!("results-{index}.sarif")
}

/// Partition the runs of `document` into output groups according to `params`.
///
/// Returns `Ok(None)` when the document has no `runs` key. Runs are moved into
/// exactly one group each, in source order.
pub fn partition(mut document: SarifDocument, params: &SplitParams) -> Result<Option<Vec<OutputGroup>>> {
    params.validate()?;

    let Some(runs) = document.take_runs()? else {
        return Ok(None);
    };

    let groups = match params.policy {
        SplitPolicy::PerRun => per_run_groups(&document, runs, &params.id_prefix)?,
        SplitPolicy::Chunked => chunked_groups(&document, runs, params.max_runs_per_file),
    };
    Ok(Some(groups))
}

fn per_run_groups(
    document: &SarifDocument,
    runs: Vec<Value>,
    id_prefix: &str,
) -> Result<Vec<OutputGroup>> {
    let mut groups = Vec::with_capacity(runs.len());

    for (i, mut run) in runs.into_iter().enumerate() {
        let index = i + 1;
        let tool = sanitize_tool_name(tool_name(&run).unwrap_or(UNKNOWN_TOOL));
        let id = automation_id(id_prefix, &tool, index);
        debug!("Run {} ({}) -> automationDetails.id = {}", index, tool, id);
        set_automation_id(&mut run, index, id)?;

        groups.push(OutputGroup {
            index,
            file_name: per_run_file_name(index, &tool),
            run_count: 1,
            document: document.with_runs(vec![run]),
        });
    }

    Ok(groups)
}

fn chunked_groups(document: &SarifDocument, runs: Vec<Value>, max_runs: usize) -> Vec<OutputGroup> {
    let mut groups = Vec::with_capacity(runs.len().div_ceil(max_runs));
    let mut iter = runs.into_iter();

    loop {
        let chunk: Vec<Value> = iter.by_ref().take(max_runs).collect();
        if chunk.is_empty() {
            break;
        }
        let index = groups.len() + 1;
        debug!("Chunk {} holds {} run(s)", index, chunk.len());
        groups.push(OutputGroup {
            index,
            file_name: chunk_file_name(index),
            run_count: chunk.len(),
            document: document.with_runs(chunk),
        });
    }

    groups
}
