//! Client error types.

use huddle_core::ModelError;
use huddle_proto::ProtocolError;
use thiserror::Error;

/// Errors from processing a single command.
///
/// Always scoped to that command: the model is left as it was and later
/// messages are processed normally.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The payload did not decode for its tag.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The command would break a model invariant.
    #[error("model rejected command: {0}")]
    Model(#[from] ModelError),
}

impl ClientError {
    /// Whether the failure came from a malformed payload rather than an
    /// invalid model edit.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Protocol(_))
    }
}
