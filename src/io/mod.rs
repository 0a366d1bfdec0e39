//! I/O layer: reading SARIF input documents and writing split outputs.
pub mod reader;
pub use reader::{parse_sarif, read_sarif};

pub mod writers;
pub use writers::sarif::write_sarif;
