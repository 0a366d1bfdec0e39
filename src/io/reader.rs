use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::core::document::SarifDocument;
use crate::error::{Error, Result};

/// Read and parse a SARIF file from disk.
pub fn read_sarif(path: &Path) -> Result<SarifDocument> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    debug!("Read {} bytes from {:?}", text.len(), path);
    parse_sarif(&text, path)
}

/// Parse SARIF text; `origin` is only used in error messages.
pub fn parse_sarif(text: &str, origin: &Path) -> Result<SarifDocument> {
    let value: Value = serde_json::from_str(text).map_err(|source| Error::MalformedInput {
        path: origin.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(fields) => Ok(SarifDocument::from_map(fields)),
        _ => Err(Error::NotAnObject {
            path: origin.to_path_buf(),
        }),
    }
}
