//! Sound effect payload.

use serde::{Deserialize, Serialize};

/// Request to play a sound effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSound {
    /// Sound identifier, e.g. `"whistle"`.
    pub sound: String,
}
