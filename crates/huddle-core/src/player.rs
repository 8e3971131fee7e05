//! Player identity and state.

use std::fmt;

use huddle_proto::PlayerSnapshot;

use crate::{Coordinate, TeamSide};

/// Stable server-assigned player identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A player as the client sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Stable identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Shirt number.
    pub number: u8,
    /// Owning team.
    pub side: TeamSide,
    /// Current square. `None` when off the pitch.
    pub coordinate: Option<Coordinate>,
}

impl Player {
    /// Whether the player is standing on the pitch.
    pub fn on_pitch(&self) -> bool {
        self.coordinate.is_some()
    }
}

impl From<&PlayerSnapshot> for Player {
    fn from(snapshot: &PlayerSnapshot) -> Self {
        Self {
            id: PlayerId::new(snapshot.id.as_str()),
            name: snapshot.name.clone(),
            number: snapshot.number,
            side: snapshot.side,
            coordinate: snapshot.coordinate,
        }
    }
}
