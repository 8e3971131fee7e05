//! Full game state snapshot.
//!
//! The server sends a [`ServerGameState`] when a client joins or whenever it
//! decides incremental syncing is no longer enough. The client discards its
//! model and rebuilds it from the snapshot.

use serde::{Deserialize, Serialize};

use crate::Coordinate;

/// Which side of the match a team or player belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    /// Home team.
    Home,
    /// Away team.
    Away,
}

impl TeamSide {
    /// The opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

/// Complete model snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerGameState {
    /// Every player in the match, both teams.
    pub players: Vec<PlayerSnapshot>,
    /// Player currently acting. `None` between activations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_player: Option<String>,
    /// Current half (1 or 2, 3 for overtime).
    pub half: u8,
    /// Server turn mode, e.g. `"regular"`, `"kickoff"`, `"setup"`.
    pub turn_mode: String,
    /// Whether the home team is the acting team.
    pub home_playing: bool,
    /// Home team turn number within the half.
    pub turn_home: u8,
    /// Away team turn number within the half.
    pub turn_away: u8,
    /// Home team.
    pub team_home: TeamSnapshot,
    /// Away team.
    pub team_away: TeamSnapshot,
}

impl Default for ServerGameState {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            active_player: None,
            half: 1,
            turn_mode: String::new(),
            home_playing: true,
            turn_home: 0,
            turn_away: 0,
            team_home: TeamSnapshot::default(),
            team_away: TeamSnapshot::default(),
        }
    }
}

/// One player in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Stable player identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Shirt number.
    #[serde(default)]
    pub number: u8,
    /// Team the player belongs to.
    pub side: TeamSide,
    /// Square the player stands on. `None` when off the pitch (reserves,
    /// knocked out, sent off).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

/// Team summary in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamSnapshot {
    /// Team identifier.
    pub id: String,
    /// Team display name.
    pub name: String,
    /// Touchdowns scored.
    pub score: u8,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn minimal_snapshot_uses_defaults() {
        let state: ServerGameState = serde_json::from_str(
            r#"{"players":[{"id":"P1","side":"home"}],"activePlayer":"P1"}"#,
        )
        .unwrap();

        assert_eq!(state.active_player.as_deref(), Some("P1"));
        assert_eq!(state.half, 1);
        assert!(state.home_playing);
        assert_eq!(state.players[0].coordinate, None);
        assert_eq!(state.players[0].number, 0);
    }

    #[test]
    fn player_requires_side() {
        let result = serde_json::from_str::<ServerGameState>(r#"{"players":[{"id":"P1"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn full_snapshot_decodes() {
        let state: ServerGameState = serde_json::from_str(
            r#"{
                "players": [
                    {"id": "H1", "name": "Grim", "number": 7, "side": "home", "coordinate": [4, 5]},
                    {"id": "A1", "side": "away"}
                ],
                "half": 2,
                "turnMode": "regular",
                "homePlaying": false,
                "turnHome": 3,
                "turnAway": 4,
                "teamHome": {"id": "t1", "name": "Reavers", "score": 1},
                "teamAway": {"id": "t2", "name": "Gutters", "score": 0}
            }"#,
        )
        .unwrap();

        assert_eq!(state.players[0].coordinate, Some(Coordinate::new(4, 5)));
        assert_eq!(state.half, 2);
        assert!(!state.home_playing);
        assert_eq!(state.team_home.score, 1);
        assert_eq!(state.team_away.name, "Gutters");
    }

    #[test]
    fn opponent_flips_side() {
        assert_eq!(TeamSide::Home.opponent(), TeamSide::Away);
        assert_eq!(TeamSide::Away.opponent(), TeamSide::Home);
    }
}
