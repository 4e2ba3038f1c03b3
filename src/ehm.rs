// ehm.rs: Error handling module
//
// The resolution core never fails.  AppError covers the command-line
// front end only: argument parsing, writing output, JSON serialization.

use thiserror::Error;





/// Unified error type for fticon.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("{0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line argument (triggers usage display + exit 1)
    #[error("{0}")]
    InvalidArg(String),
}
