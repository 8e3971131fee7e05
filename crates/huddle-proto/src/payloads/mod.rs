//! Typed payloads for each inbound message kind.
//!
//! Every tag in [`crate::kind`] has exactly one payload type here. Fields use
//! camelCase on the wire; optional fields default so older servers that omit
//! them still decode.

pub mod game;
pub mod sound;
pub mod sync;
pub mod talk;

pub use game::{PlayerSnapshot, ServerGameState, TeamSide, TeamSnapshot};
pub use sound::ServerSound;
pub use sync::{ModelChange, ServerModelSync};
pub use talk::ServerTalk;
