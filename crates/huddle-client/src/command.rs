//! Client commands: mutations of the local model.

use huddle_core::{Game, ModelError};
use huddle_proto::{ModelChange, ServerGameState};

/// A mutation of the game model, produced by a server command.
///
/// Applying a command never edits the current model in place. It builds the
/// successor model and the controller swaps it in only on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Replace the whole model with one built from a snapshot.
    Initialize(Box<ServerGameState>),

    /// Apply an ordered batch of edits; all of them or none.
    ApplyChanges(Vec<ModelChange>),
}

impl ClientCommand {
    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Initialize(_) => "initialize",
            Self::ApplyChanges(_) => "apply_changes",
        }
    }

    /// Build the model that results from applying this command to `game`.
    pub fn apply(&self, game: &Game) -> Result<Game, ModelError> {
        match self {
            Self::Initialize(state) => Game::from_snapshot(state),
            Self::ApplyChanges(changes) => game.with_changes(changes),
        }
    }
}
