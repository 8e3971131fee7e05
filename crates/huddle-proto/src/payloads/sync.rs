//! Incremental model changes.
//!
//! Between full snapshots the server streams small edits to the model. A
//! [`ServerModelSync`] carries an ordered batch; the client applies the batch
//! as one unit, so either every change lands or none does.

use serde::{Deserialize, Serialize};

use crate::{Coordinate, TeamSide};

/// Ordered batch of model edits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerModelSync {
    /// Edits, applied front to back.
    pub changes: Vec<ModelChange>,
}

/// A single model edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "change", rename_all = "camelCase")]
pub enum ModelChange {
    /// Select (or clear) the acting player.
    #[serde(rename_all = "camelCase")]
    ActivePlayer {
        /// New active player. `None` clears the selection.
        #[serde(default)]
        player_id: Option<String>,
    },

    /// Move a player to a square, or off the pitch.
    #[serde(rename_all = "camelCase")]
    PlayerPosition {
        /// Player to move.
        player_id: String,
        /// Destination. `None` removes the player from the pitch.
        #[serde(default)]
        coordinate: Option<Coordinate>,
    },

    /// Change the server turn mode.
    TurnMode {
        /// New mode.
        mode: String,
    },

    /// Update a team's score.
    Score {
        /// Scoring side.
        side: TeamSide,
        /// New total.
        score: u8,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_tagged_changes() {
        let sync: ServerModelSync = serde_json::from_str(
            r#"{"changes":[
                {"change":"activePlayer","playerId":"P2"},
                {"change":"playerPosition","playerId":"P2","coordinate":[1,2]},
                {"change":"turnMode","mode":"blitz"},
                {"change":"score","side":"away","score":2}
            ]}"#,
        )
        .unwrap();

        assert_eq!(sync.changes, vec![
            ModelChange::ActivePlayer { player_id: Some("P2".into()) },
            ModelChange::PlayerPosition {
                player_id: "P2".into(),
                coordinate: Some(Coordinate::new(1, 2)),
            },
            ModelChange::TurnMode { mode: "blitz".into() },
            ModelChange::Score { side: TeamSide::Away, score: 2 },
        ]);
    }

    #[test]
    fn active_player_may_be_cleared() {
        let change: ModelChange = serde_json::from_str(r#"{"change":"activePlayer"}"#).unwrap();
        assert_eq!(change, ModelChange::ActivePlayer { player_id: None });
    }

    #[test]
    fn unknown_change_is_rejected() {
        assert!(serde_json::from_str::<ModelChange>(r#"{"change":"weather"}"#).is_err());
    }
}
