//! Application error types.

use std::io;

use thiserror::Error;

/// Errors surfaced by the bundled drivers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Reading the message stream failed.
    #[error("transport I/O failed: {0}")]
    Io(#[from] io::Error),
}
