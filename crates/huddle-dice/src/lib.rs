//! Huddle dice roll synthesis.
//!
//! Turns a symbolic dice outcome into a sprite-sheet animation: a sequence of
//! frame indices that tumbles across the sheet and decelerates onto a frame
//! showing the requested face. Pure computation. Callers provide the random
//! generator, so a seeded generator reproduces a roll exactly.
//!
//! # Algorithm
//!
//! ```text
//! (die kind, outcome)
//!        │  destination table (uniform pick among equivalent cells)
//!        ▼
//! target cell (x, y) + random start offset in [0.25, 1.0)²
//!        │  quadratic ease-out, p = 0 → 1 over the frame count
//!        ▼
//! continuous offset × force × sheet size
//!        │  round + wrap (mod width / height)
//!        ▼
//! frame index = x + y · width
//! ```
//!
//! The interpolation parameter reaches exactly 1 on the last frame, which
//! zeroes the random offset. Whatever the start, the last frame is always the
//! chosen target cell.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod die;
mod error;
mod registry;
mod synth;

pub use config::{RollConfig, SheetGeometry};
pub use die::{BLOCK_REMAP, DieKind, SheetCell};
pub use error::DiceError;
pub use registry::{Animation, AnimationRegistry};
pub use synth::{RollFrames, RollSynthesizer, ease_out_quad};
