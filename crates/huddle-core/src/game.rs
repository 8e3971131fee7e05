//! The game model.

use std::collections::{BTreeMap, HashMap};

use huddle_proto::{ModelChange, ServerGameState, TeamSnapshot};

use crate::{Coordinate, ModelError, Player, PlayerId, TeamSide};

/// Team summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    /// Team identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Touchdowns scored.
    pub score: u8,
}

impl From<&TeamSnapshot> for Team {
    fn from(snapshot: &TeamSnapshot) -> Self {
        Self { id: snapshot.id.clone(), name: snapshot.name.clone(), score: snapshot.score }
    }
}

/// Turn bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnState {
    /// Current half.
    pub half: u8,
    /// Server turn mode.
    pub mode: String,
    /// Whether the home team is acting.
    pub home_playing: bool,
    /// Home turn number within the half.
    pub turn_home: u8,
    /// Away turn number within the half.
    pub turn_away: u8,
}

impl TurnState {
    /// Side currently acting.
    pub fn acting_side(&self) -> TeamSide {
        if self.home_playing { TeamSide::Home } else { TeamSide::Away }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self { half: 1, mode: String::new(), home_playing: true, turn_home: 0, turn_away: 0 }
    }
}

/// Local copy of the match state.
///
/// Built whole from a [`ServerGameState`] and edited only through
/// [`Game::with_changes`] / [`Game::apply_change`]. Both validate before
/// writing, so an `Err` leaves the model exactly as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    /// Players keyed by id. Ordered so iteration is deterministic.
    players: BTreeMap<PlayerId, Player>,
    /// Acting player, if any.
    active_player: Option<PlayerId>,
    home: Team,
    away: Team,
    turn: TurnState,
    /// Set once a snapshot has been loaded.
    initialized: bool,
}

impl Game {
    /// Empty, uninitialized model used before the first snapshot arrives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from a full snapshot.
    pub fn from_snapshot(state: &ServerGameState) -> Result<Self, ModelError> {
        let mut players = BTreeMap::new();
        let mut occupied: HashMap<Coordinate, PlayerId> = HashMap::new();

        for snapshot in &state.players {
            let player = Player::from(snapshot);

            if players.contains_key(&player.id) {
                return Err(ModelError::DuplicatePlayer(player.id));
            }

            if let Some(coordinate) = player.coordinate {
                if let Some(occupant) = occupied.get(&coordinate) {
                    return Err(ModelError::SquareOccupied {
                        coordinate,
                        occupant: occupant.clone(),
                    });
                }
                occupied.insert(coordinate, player.id.clone());
            }

            players.insert(player.id.clone(), player);
        }

        let active_player = state.active_player.as_deref().map(PlayerId::from);
        if let Some(id) = &active_player
            && !players.contains_key(id)
        {
            return Err(ModelError::UnknownPlayer(id.clone()));
        }

        Ok(Self {
            players,
            active_player,
            home: Team::from(&state.team_home),
            away: Team::from(&state.team_away),
            turn: TurnState {
                half: state.half,
                mode: state.turn_mode.clone(),
                home_playing: state.home_playing,
                turn_home: state.turn_home,
                turn_away: state.turn_away,
            },
            initialized: true,
        })
    }

    /// Apply an ordered batch of changes to a copy of this model.
    ///
    /// Returns the edited copy, or the first error. `self` is never touched,
    /// which is what makes a batch all-or-nothing.
    pub fn with_changes(&self, changes: &[ModelChange]) -> Result<Self, ModelError> {
        let mut next = self.clone();
        for change in changes {
            next.apply_change(change)?;
        }
        Ok(next)
    }

    /// Apply one change in place. Validates before writing.
    pub fn apply_change(&mut self, change: &ModelChange) -> Result<(), ModelError> {
        match change {
            ModelChange::ActivePlayer { player_id } => {
                let id = player_id.as_deref().map(PlayerId::from);
                if let Some(id) = &id {
                    self.require_player(id)?;
                }
                self.active_player = id;
            },
            ModelChange::PlayerPosition { player_id, coordinate } => {
                let id = PlayerId::from(player_id.as_str());
                self.require_player(&id)?;

                if let Some(target) = coordinate
                    && let Some(occupant) = self.player_on_location(*target)
                    && occupant.id != id
                {
                    return Err(ModelError::SquareOccupied {
                        coordinate: *target,
                        occupant: occupant.id.clone(),
                    });
                }

                if let Some(player) = self.players.get_mut(&id) {
                    player.coordinate = *coordinate;
                }
            },
            ModelChange::TurnMode { mode } => {
                self.turn.mode.clone_from(mode);
            },
            ModelChange::Score { side, score } => {
                self.team_mut(*side).score = *score;
            },
        }
        Ok(())
    }

    /// Whether a snapshot has been loaded.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Look up a player.
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// All players, ordered by id.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    /// Number of players in the match.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Id of the acting player. `None` between activations.
    pub fn active_player_id(&self) -> Option<&PlayerId> {
        self.active_player.as_ref()
    }

    /// The acting player. `None` between activations.
    pub fn active_player(&self) -> Option<&Player> {
        self.active_player.as_ref().and_then(|id| self.players.get(id))
    }

    /// Player standing on `coordinate`, if any.
    pub fn player_on_location(&self, coordinate: Coordinate) -> Option<&Player> {
        self.players.values().find(|p| p.coordinate == Some(coordinate))
    }

    /// Team summary for a side.
    pub fn team(&self, side: TeamSide) -> &Team {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    /// Turn bookkeeping.
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    fn team_mut(&mut self, side: TeamSide) -> &mut Team {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }

    fn require_player(&self, id: &PlayerId) -> Result<(), ModelError> {
        if self.players.contains_key(id) { Ok(()) } else { Err(ModelError::UnknownPlayer(id.clone())) }
    }
}
