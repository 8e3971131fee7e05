//! Model error types.

use thiserror::Error;

use crate::{Coordinate, PlayerId};

/// Errors raised when a snapshot or change would break a model invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Two players in one snapshot share an id.
    #[error("duplicate player id {0}")]
    DuplicatePlayer(PlayerId),

    /// A change or snapshot refers to a player the model does not have.
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),

    /// A player would be placed on a square someone else already holds.
    #[error("square {coordinate} already occupied by {occupant}")]
    SquareOccupied {
        /// Contested square.
        coordinate: Coordinate,
        /// Player already standing there.
        occupant: PlayerId,
    },
}
