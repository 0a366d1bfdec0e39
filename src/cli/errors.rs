use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No output files created")]
    NoOutput,

    #[error(transparent)]
    Split(#[from] sarif_split::Error),
}
