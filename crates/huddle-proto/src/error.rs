//! Protocol error types.

use thiserror::Error;

/// Result alias for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors raised while decoding inbound messages.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The envelope itself is not valid JSON or lacks a `type` tag.
    #[error("invalid message envelope: {0}")]
    Envelope(#[source] serde_json::Error),

    /// The payload does not match the schema registered for its tag.
    #[error("malformed payload for {kind}: {source}")]
    Payload {
        /// Tag of the offending message.
        kind: String,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },

    /// A message could not be encoded.
    #[error("failed to encode {kind}: {source}")]
    Encode {
        /// Tag of the message being encoded.
        kind: String,
        /// Underlying encode failure.
        #[source]
        source: serde_json::Error,
    },
}

impl ProtocolError {
    /// Tag of the message this error relates to, if known.
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::Envelope(_) => None,
            Self::Payload { kind, .. } | Self::Encode { kind, .. } => Some(kind),
        }
    }
}
