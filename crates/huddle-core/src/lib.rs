//! Huddle game model.
//!
//! The authoritative local copy of the match: players, teams, the acting
//! player and turn bookkeeping. Pure data plus queries. The model knows
//! nothing about networking or rendering; it is built from a server snapshot
//! and edited by validated change batches.
//!
//! # Invariants
//!
//! - Player ids are unique.
//! - The active player, when set, is a known player.
//! - At most one player occupies any square.
//!
//! Every constructor and mutator checks these before committing, so a failed
//! call never leaves a half-applied model behind.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod game;
mod player;

pub use error::ModelError;
pub use game::{Game, Team, TurnState};
pub use huddle_proto::{Coordinate, TeamSide};
pub use player::{Player, PlayerId};
