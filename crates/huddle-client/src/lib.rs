//! Huddle client synchronization core.
//!
//! Turns the server's ordered message stream into ordered mutations of the
//! local [`Game`](huddle_core::Game) and tells every registered view that the
//! model changed.
//!
//! # Architecture
//!
//! ```text
//! InboundMessage ─▶ CommandDispatcher ─▶ ServerCommand::process
//!                                              │
//!                       ┌──────────────────────┤
//!                       ▼                      ▼
//!               ClientCommand            side effects
//!                       │              (sound, chat log)
//!                       ▼
//!     Controller::enqueue_command ─▶ Game ─▶ Event::ModelChanged
//!                                                 │
//!                                                 ▼
//!                                   EventListener (marks dirty)
//! ```
//!
//! The [`Controller`] is the only writer of the model. Listeners receive
//! events but no controller handle, so a listener cannot mutate the model it
//! is being told about. It records the change and re-reads the model at its
//! own next tick.
//!
//! # Components
//!
//! - [`CommandDispatcher`]: message tag → [`ServerCommand`] table
//! - [`ServerCommand`]: one variant per inbound message kind
//! - [`ClientCommand`]: model mutations, applied all-or-nothing
//! - [`Controller`]: mediator owning the model, listeners and scene slot
//! - [`Event`] / [`EventListener`]: the notification bus contract
//! - [`SoundEngine`] / [`SceneDirector`]: side-effect seams for the
//!   presentation layer

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod controller;
mod dispatcher;
mod error;
mod event;
mod scene;
mod server_command;
mod sound;

pub use command::ClientCommand;
pub use controller::Controller;
pub use dispatcher::{CommandDispatcher, DispatchOutcome};
pub use error::ClientError;
pub use event::{Event, EventKind, EventListener};
pub use scene::SceneDirector;
pub use server_command::{CommandFactory, ServerCommand};
pub use sound::SoundEngine;
