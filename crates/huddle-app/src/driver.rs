//! Driver trait for abstracting I/O.
//!
//! The [`Driver`] decouples the [`Runtime`](crate::Runtime) from where
//! messages come from and how frames are drawn. The same loop runs against a
//! recorded replay, a scripted test driver or a live transport.

use std::future::Future;

use huddle_client::Event;
use huddle_core::Game;
use huddle_proto::InboundMessage;

use crate::MainView;

/// One input for the runtime loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// A message from the server, in arrival order.
    Message(InboundMessage),

    /// A presentation-side event such as a resize or a dugout toggle.
    Local(Event),

    /// Render tick.
    Tick,
}

/// Abstracts I/O for the runtime.
///
/// Implementations multiplex the transport and their frame timer into a
/// single ordered input stream. Messages must be yielded in the order the
/// transport delivered them.
pub trait Driver {
    /// Platform-specific error type.
    type Error: std::error::Error + 'static;

    /// Wait for the next input.
    ///
    /// Returns `None` once the transport is closed and no more ticks are
    /// wanted.
    fn next_input(&mut self) -> impl Future<Output = Result<Option<Input>, Self::Error>>;

    /// Draw one frame.
    ///
    /// Called only on ticks where the view had something to redraw.
    fn render(&mut self, view: &MainView, game: &Game) -> Result<(), Self::Error>;

    /// Release resources. Called once after the loop ends.
    fn stop(&mut self);
}
