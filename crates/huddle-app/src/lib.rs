//! Presentation runtime for the Huddle client.
//!
//! Wires the synchronization core to a frame loop:
//!
//! - [`MainView`]: reference subscriber. Marks itself dirty on model changes
//!   and re-reads the model only at its own render tick.
//! - [`Driver`]: platform I/O seam yielding inbound messages, local events and
//!   render ticks.
//! - [`Runtime`]: generic loop that dispatches messages to the controller and
//!   drives the view from ticks.
//! - [`ReplayDriver`]: headless driver replaying a recorded NDJSON stream.
//! - [`LogSoundEngine`] / [`LogSceneDirector`]: side-effect sinks that log.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod driver;
mod error;
mod replay;
mod runtime;
mod sinks;
mod view;

pub use driver::{Driver, Input};
pub use error::AppError;
pub use replay::ReplayDriver;
pub use runtime::{RunSummary, Runtime, RuntimeConfig};
pub use sinks::{LogSceneDirector, LogSoundEngine};
pub use view::{ActionText, FloatText, MainView};
