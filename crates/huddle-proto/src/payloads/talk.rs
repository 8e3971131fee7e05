//! Chat payload.

use serde::{Deserialize, Serialize};

/// Out-of-band chat line. Has no effect on the game model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerTalk {
    /// Chat text.
    pub text: String,
    /// Coach who said it. `None` for server announcements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}
