//! Message tag → command table.

use std::collections::HashMap;

use huddle_proto::{InboundMessage, kind};

use crate::{ClientError, CommandFactory, Controller, ServerCommand};

/// Handlers installed by [`CommandDispatcher::new`].
const DEFAULT_HANDLERS: [(&str, CommandFactory); 4] = [
    (kind::SERVER_GAME_STATE, ServerCommand::game_state),
    (kind::SERVER_SOUND, ServerCommand::sound),
    (kind::SERVER_TALK, ServerCommand::talk),
    (kind::SERVER_MODEL_SYNC, ServerCommand::model_sync),
];

/// Result of dispatching one message.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// The command ran to completion.
    Processed {
        /// Message tag.
        kind: String,
    },

    /// No handler for the tag; the message was discarded untouched.
    Ignored {
        /// Message tag.
        kind: String,
    },

    /// The command failed. The model is unchanged.
    Rejected {
        /// Message tag.
        kind: String,
        /// Why it failed.
        error: ClientError,
    },
}

impl DispatchOutcome {
    /// Message tag the outcome refers to.
    pub fn kind(&self) -> &str {
        match self {
            Self::Processed { kind } | Self::Ignored { kind } | Self::Rejected { kind, .. } => kind,
        }
    }

    /// Whether the command ran to completion.
    pub fn is_processed(&self) -> bool {
        matches!(self, Self::Processed { .. })
    }
}

/// Routes inbound messages to their commands.
///
/// A failure in one message never escapes as a panic or stops the pipeline;
/// it is logged and reported through [`DispatchOutcome`].
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    handlers: HashMap<&'static str, CommandFactory>,
}

impl CommandDispatcher {
    /// Dispatcher with every built-in message kind registered.
    pub fn new() -> Self {
        Self { handlers: DEFAULT_HANDLERS.into_iter().collect() }
    }

    /// Dispatcher with no handlers.
    pub fn empty() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Register `factory` for `kind`, returning the handler it replaced.
    pub fn register(&mut self, kind: &'static str, factory: CommandFactory) -> Option<CommandFactory> {
        self.handlers.insert(kind, factory)
    }

    /// Whether a handler is registered for `kind`.
    pub fn handles(&self, kind: &str) -> bool {
        self.handlers.contains_key(kind)
    }

    /// Decode `message` into its command and process it.
    pub fn dispatch(&self, message: InboundMessage, controller: &mut Controller) -> DispatchOutcome {
        let Some(factory) = self.handlers.get(message.kind.as_str()).copied() else {
            tracing::warn!(kind = %message.kind, "no handler for message, discarding");
            return DispatchOutcome::Ignored { kind: message.kind };
        };

        let kind = message.kind.clone();
        match factory(message).and_then(|command| command.process(controller)) {
            Ok(()) => DispatchOutcome::Processed { kind },
            Err(error) => {
                tracing::warn!(%kind, %error, "message rejected");
                DispatchOutcome::Rejected { kind, error }
            },
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
