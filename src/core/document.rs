use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, Result, json_kind};

const RUNS_KEY: &str = "runs";
const AUTOMATION_DETAILS_KEY: &str = "automationDetails";

/// A parsed SARIF log held in memory.
///
/// Only the presence and shape of the top-level `runs` array is checked; every
/// other key is carried through to the outputs untouched, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct SarifDocument {
    fields: Map<String, Value>,
}

impl SarifDocument {
    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn has_runs(&self) -> bool {
        self.fields.contains_key(RUNS_KEY)
    }

    /// Number of runs, when `runs` is present and an array.
    pub fn run_count(&self) -> Option<usize> {
        self.fields
            .get(RUNS_KEY)
            .and_then(Value::as_array)
            .map(Vec::len)
    }

    /// Move the runs out of the document.
    ///
    /// Returns `Ok(None)` when there is no `runs` key. The key itself stays in
    /// place (as an empty array) so later copies keep the original key order.
    pub fn take_runs(&mut self) -> Result<Option<Vec<Value>>> {
        match self.fields.get_mut(RUNS_KEY) {
            None => Ok(None),
            Some(Value::Array(runs)) => Ok(Some(std::mem::take(runs))),
            Some(other) => Err(Error::InvalidRuns {
                found: json_kind(other),
            }),
        }
    }

    /// Copy of every top-level entry with `runs` replaced by `runs`.
    pub fn with_runs(&self, runs: Vec<Value>) -> Map<String, Value> {
        let mut out = self.fields.clone();
        out.insert(RUNS_KEY.to_string(), Value::Array(runs));
        out
    }
}

/// `run.tool.driver.name`, when present and a string.
pub fn tool_name(run: &Value) -> Option<&str> {
    run.pointer("/tool/driver/name").and_then(Value::as_str)
}

pub fn automation_id(prefix: &str, tool: &str, index: usize) -> String {
    format!("{prefix}/{tool}/{index}")
}

/// Set `run.automationDetails.id`, keeping any other `automationDetails` keys.
pub fn set_automation_id(run: &mut Value, index: usize, id: String) -> Result<()> {
    let run = run.as_object_mut().ok_or(Error::InvalidRun { index })?;
    let details = run
        .entry(AUTOMATION_DETAILS_KEY)
        .or_insert_with(|| Value::Object(Map::new()));
    if !details.is_object() {
        warn!(
            "Run {} has a non-object automationDetails ({}); replacing it",
            index,
            json_kind(details)
        );
        *details = Value::Object(Map::new());
    }
    if let Value::Object(details) = details {
        details.insert("id".to_string(), Value::String(id));
    }
    Ok(())
}
