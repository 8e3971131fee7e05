//! Dice error types.

use thiserror::Error;

use crate::DieKind;

/// Errors from roll synthesis and its configuration.
///
/// None of these are runtime conditions to retry. They mean the caller asked
/// for a face the tables do not cover, or built an unusable configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiceError {
    /// No destination cells are registered for this outcome.
    #[error("no destination registered for {kind} outcome {outcome}")]
    UnmappedOutcome {
        /// Die that was rolled.
        kind: DieKind,
        /// Requested face.
        outcome: u8,
    },

    /// A roll needs at least one frame.
    #[error("frame count must be at least 1")]
    InvalidFrameCount,

    /// Overshoot force must be finite and positive.
    #[error("invalid overshoot force {0}")]
    InvalidForce(f64),

    /// The sheet cannot hold every destination cell.
    #[error("sprite sheet {width}x{height} does not contain every destination cell")]
    SheetTooSmall {
        /// Sheet width in cells.
        width: u32,
        /// Sheet height in cells.
        height: u32,
    },

    /// The sheet has more cells than a `u32` frame index can address.
    #[error("sprite sheet {width}x{height} is too large to index")]
    SheetTooLarge {
        /// Sheet width in cells.
        width: u32,
        /// Sheet height in cells.
        height: u32,
    },
}
