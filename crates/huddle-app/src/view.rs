//! Main scene view: the reference event subscriber.
//!
//! # Dirty flag
//!
//! Event handlers never read the model. They record what happened and set a
//! dirty flag. [`MainView::update`] runs on the render tick, resolves the
//! recorded intents against the current [`Game`] and clears the flag. Any
//! number of model changes between two ticks cost one redraw.

use huddle_client::{Event, EventListener};
use huddle_core::{Coordinate, Game, PlayerId};
use huddle_dice::{Animation, AnimationRegistry, DieKind, RollSynthesizer};
use rand::RngCore;

/// Pitch scale the dice sprites are drawn at 1:1.
const BASE_SCALE: f32 = 30.0;

/// Action text shown above the active player.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionText {
    /// Acting player when the tick resolved the action.
    pub player: PlayerId,
    /// Action name, e.g. `"Blitz"`.
    pub action: String,
    /// Where to draw it. `None` if the player is off the pitch.
    pub coordinate: Option<Coordinate>,
}

/// Text floating above a player.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatText {
    /// Annotated player.
    pub player: PlayerId,
    /// Text to show.
    pub text: String,
    /// Where to draw it. `None` if the player is off the pitch.
    pub coordinate: Option<Coordinate>,
}

/// Reference presentation subscriber for the main scene.
pub struct MainView {
    rng: Box<dyn RngCore>,
    animations: AnimationRegistry,

    dirty: bool,
    initialized: bool,
    resize_pending: bool,
    scale: f32,
    dugouts_visible: bool,

    /// Resolved against the model at the next tick.
    pending_actions: Vec<String>,
    pending_float: Vec<(PlayerId, String)>,

    action_text: Option<ActionText>,
    float_texts: Vec<FloatText>,
    /// Roll waiting for a block choice.
    block_dice_key: Option<String>,
    /// Roll the last choice was shown on, and the chosen face.
    block_choice: Option<(String, u8)>,
    kickoff: Option<String>,
    redraws: u64,
}

impl MainView {
    /// View rolling dice with `synth` and `rng`.
    pub fn new(synth: RollSynthesizer, rng: impl RngCore + 'static) -> Self {
        Self {
            rng: Box::new(rng),
            animations: AnimationRegistry::new(synth),
            dirty: false,
            initialized: false,
            resize_pending: false,
            scale: BASE_SCALE,
            dugouts_visible: false,
            pending_actions: Vec::new(),
            pending_float: Vec::new(),
            action_text: None,
            float_texts: Vec::new(),
            block_dice_key: None,
            block_choice: None,
            kickoff: None,
            redraws: 0,
        }
    }

    /// Re-read the model if anything changed since the last tick.
    ///
    /// Returns `true` if the view has a new frame to draw. Nothing is drawn
    /// before the scene is initialized or while a resize is in progress.
    pub fn update(&mut self, game: &Game) -> bool {
        if !self.initialized || self.resize_pending || !self.dirty {
            return false;
        }

        for action in std::mem::take(&mut self.pending_actions) {
            match game.active_player() {
                Some(player) => {
                    self.action_text = Some(ActionText {
                        player: player.id.clone(),
                        action,
                        coordinate: player.coordinate,
                    });
                },
                None => tracing::warn!(%action, "action with no active player, dropped"),
            }
        }

        for (player, text) in std::mem::take(&mut self.pending_float) {
            match game.player(&player) {
                Some(found) => {
                    let coordinate = found.coordinate;
                    self.float_texts.push(FloatText { player, text, coordinate });
                },
                None => tracing::warn!(%player, %text, "float text for unknown player, dropped"),
            }
        }

        self.dirty = false;
        self.redraws += 1;
        true
    }

    /// Whether a model change is waiting for the next tick.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the scene finished setting up.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether a resize started and has not finished.
    pub fn resize_pending(&self) -> bool {
        self.resize_pending
    }

    /// Pitch scale in pixels per square.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Dice sprite scale relative to the base pitch scale.
    pub fn dice_scale(&self) -> f32 {
        self.scale / BASE_SCALE
    }

    /// Whether the dugouts are shown.
    pub fn dugouts_visible(&self) -> bool {
        self.dugouts_visible
    }

    /// Latest active player action.
    pub fn action_text(&self) -> Option<&ActionText> {
        self.action_text.as_ref()
    }

    /// Float texts waiting to be drawn.
    pub fn float_texts(&self) -> &[FloatText] {
        &self.float_texts
    }

    /// Drop float texts once they have been drawn.
    pub fn clear_float_texts(&mut self) {
        self.float_texts.clear();
    }

    /// Animation for the block dice roll awaiting a choice.
    pub fn block_dice(&self) -> Option<&Animation> {
        self.block_dice_key.as_deref().and_then(|key| self.animations.get(key))
    }

    /// Block die face chosen for the latest roll.
    pub fn block_choice(&self) -> Option<u8> {
        self.block_choice.as_ref().map(|(_, choice)| *choice)
    }

    /// Animation the latest block choice was shown on.
    pub fn chosen_block_dice(&self) -> Option<&Animation> {
        self.block_choice.as_ref().and_then(|(key, _)| self.animations.get(key))
    }

    /// Latest kickoff result.
    pub fn kickoff(&self) -> Option<&str> {
        self.kickoff.as_deref()
    }

    /// Roll animations currently held.
    pub fn animations(&self) -> &AnimationRegistry {
        &self.animations
    }

    /// Number of ticks that produced a frame.
    pub fn redraws(&self) -> u64 {
        self.redraws
    }

    fn roll_block_dice(&mut self, key: &str, outcome: u8) {
        match self.animations.register(key, DieKind::Block, outcome, &mut self.rng) {
            Ok(animation) => {
                tracing::debug!(key, outcome, frames = animation.frames().len(), "block dice rolled");
            },
            Err(err) => {
                tracing::error!(key, outcome, error = %err, "block dice roll failed");
                return;
            },
        }

        // Previous rolls fade out once the new one exists.
        let pending = self.block_dice_key.replace(key.to_owned());
        let chosen = self.block_choice.take().map(|(chosen, _)| chosen);
        for previous in pending.into_iter().chain(chosen) {
            if previous != key {
                tracing::debug!(key = %previous, "fading previous roll");
                self.animations.remove(&previous);
            }
        }
        self.dirty = true;
    }

    /// Show `choice` on the pending roll. Without a pending roll there is
    /// nothing to show it on, and the choice is dropped.
    fn choose_block_die(&mut self, choice: u8) {
        let Some(key) = self.block_dice_key.take() else {
            tracing::debug!(choice, "block choice with no pending roll, ignored");
            return;
        };

        tracing::debug!(%key, choice, "block die chosen");
        self.block_choice = Some((key, choice));
        self.dirty = true;
    }
}

impl EventListener for MainView {
    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::ModelChanged => self.dirty = true,
            Event::Resizing => self.resize_pending = true,
            Event::Resized { scale } => {
                self.scale = *scale;
                self.resize_pending = false;
                self.dirty = true;
            },
            Event::ToggleDugouts => {
                self.dugouts_visible = !self.dugouts_visible;
                self.dirty = true;
            },
            Event::ActivePlayerAction { action } => {
                self.pending_actions.push(action.clone());
                self.dirty = true;
            },
            Event::FloatText { player, text } => {
                self.pending_float.push((player.clone(), text.clone()));
                self.dirty = true;
            },
            Event::BlockDice { key, outcome } => self.roll_block_dice(key, *outcome),
            Event::BlockChoice { choice } => self.choose_block_die(*choice),
            Event::Kickoff { kickoff } => {
                self.kickoff = Some(kickoff.clone());
                self.dirty = true;
            },
            Event::Initialized => {
                self.initialized = true;
                self.dirty = true;
            },
        }
    }
}

impl std::fmt::Debug for MainView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MainView")
            .field("dirty", &self.dirty)
            .field("initialized", &self.initialized)
            .field("scale", &self.scale)
            .field("block_dice_key", &self.block_dice_key)
            .field("redraws", &self.redraws)
            .finish_non_exhaustive()
    }
}
