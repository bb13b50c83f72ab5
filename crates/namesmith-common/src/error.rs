//! Common error types used throughout namesmith.
//!
//! This module provides the error type for the failure cases shared across
//! the workspace: I/O and external programs.

/// Common error type for namesmith.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An external program failed.
    #[error("{tool}: {message}")]
    Tool {
        /// Program name as invoked.
        tool: String,
        /// What went wrong.
        message: String,
    },
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
