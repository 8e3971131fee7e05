//! Huddle wire protocol.
//!
//! Messages arrive from the game server as JSON objects carrying a `type` tag
//! and an opaque `data` payload. This crate decodes the envelope
//! ([`InboundMessage`]) and defines the typed payloads the client knows how to
//! process. It never interprets game rules; decoding a payload for a tag is
//! left to whoever handles that tag.
//!
//! # Wire Format
//!
//! ```text
//! {"type": "serverSound", "data": {"sound": "whistle"}}
//! ```
//!
//! The tag set is open at this layer: unknown tags decode fine and are
//! rejected (or ignored) by the dispatcher, not here.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod coordinate;
mod error;
mod message;
pub mod payloads;

pub use coordinate::Coordinate;
pub use error::{ProtocolError, Result};
pub use message::{InboundMessage, kind};
pub use payloads::{
    ModelChange, PlayerSnapshot, ServerGameState, ServerModelSync, ServerSound, ServerTalk,
    TeamSide, TeamSnapshot,
};
