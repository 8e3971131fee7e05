//! Server commands: one variant per inbound message kind.
//!
//! Each variant is constructed from an [`InboundMessage`] by a
//! [`CommandFactory`] registered in the
//! [`CommandDispatcher`](crate::CommandDispatcher). Adding a message kind
//! means adding a variant, a factory and a table entry; the dispatcher's
//! control flow never changes.

use huddle_proto::{InboundMessage, ServerGameState, ServerModelSync, ServerSound, ServerTalk, kind};

use crate::{ClientCommand, ClientError, Controller};

/// Builds a [`ServerCommand`] from a message whose tag it is registered for.
pub type CommandFactory = fn(InboundMessage) -> Result<ServerCommand, ClientError>;

/// A decoded instruction from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerCommand {
    /// Full snapshot; reinitializes the model.
    GameState(Box<ServerGameState>),
    /// Play a sound effect.
    Sound(ServerSound),
    /// Out-of-band chat line.
    Talk(ServerTalk),
    /// Incremental model edits.
    ModelSync(ServerModelSync),
}

impl ServerCommand {
    /// Factory for [`kind::SERVER_GAME_STATE`].
    pub fn game_state(message: InboundMessage) -> Result<Self, ClientError> {
        Ok(Self::GameState(Box::new(message.decode()?)))
    }

    /// Factory for [`kind::SERVER_SOUND`].
    pub fn sound(message: InboundMessage) -> Result<Self, ClientError> {
        Ok(Self::Sound(message.decode()?))
    }

    /// Factory for [`kind::SERVER_TALK`].
    pub fn talk(message: InboundMessage) -> Result<Self, ClientError> {
        Ok(Self::Talk(message.decode()?))
    }

    /// Factory for [`kind::SERVER_MODEL_SYNC`].
    pub fn model_sync(message: InboundMessage) -> Result<Self, ClientError> {
        Ok(Self::ModelSync(message.decode()?))
    }

    /// Message tag this command was decoded from.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::GameState(_) => kind::SERVER_GAME_STATE,
            Self::Sound(_) => kind::SERVER_SOUND,
            Self::Talk(_) => kind::SERVER_TALK,
            Self::ModelSync(_) => kind::SERVER_MODEL_SYNC,
        }
    }

    /// Carry out the command against the controller.
    pub fn process(self, controller: &mut Controller) -> Result<(), ClientError> {
        match self {
            Self::GameState(state) => {
                tracing::debug!(players = state.players.len(), "processing game state");
                controller.enqueue_command(ClientCommand::Initialize(state))
            },
            Self::Sound(ServerSound { sound }) => {
                tracing::debug!(%sound, "processing server sound");
                controller.play_sound(&sound);
                Ok(())
            },
            Self::Talk(ServerTalk { text, speaker }) => {
                tracing::info!(speaker = speaker.as_deref().unwrap_or("server"), %text, "chat");
                Ok(())
            },
            Self::ModelSync(ServerModelSync { changes }) => {
                if changes.is_empty() {
                    tracing::debug!("empty model sync");
                    return Ok(());
                }
                tracing::debug!(changes = changes.len(), "processing model sync");
                controller.enqueue_command(ClientCommand::ApplyChanges(changes))
            },
        }
    }
}
