//! Command Line Interface (CLI) layer for sarif-split.
//!
//! This module defines argument parsing (`args`), CLI-only error types
//! (`errors`), and the orchestration logic (`runner`) that turns parsed
//! arguments into a split and prints progress for the user.
//!
//! If you are embedding the splitter into another application, prefer the
//! library functions in `sarif_split::api` over calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
