use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Write a SARIF document as two-space indented UTF-8 JSON, replacing any existing file.
pub fn write_sarif(document: &Map<String, Value>, output: &Path) -> Result<()> {
    let write_error = |source: std::io::Error| Error::OutputWrite {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)
        .map_err(|e| write_error(std::io::Error::from(e)))?;
    writer.flush().map_err(write_error)?;
    Ok(())
}
