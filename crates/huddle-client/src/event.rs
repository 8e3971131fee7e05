//! Notification events.
//!
//! Events are transient: they are built, broadcast to every listener and
//! dropped. Listeners filter by kind themselves.

use huddle_core::PlayerId;

/// Kinds of notification, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The model changed.
    ModelChanged,
    /// The viewport is being resized.
    Resizing,
    /// Resize finished.
    Resized,
    /// Dugouts should be shown or hidden.
    ToggleDugouts,
    /// The active player performed an action.
    ActivePlayerAction,
    /// Text should float above a player.
    FloatText,
    /// Block dice were rolled.
    BlockDice,
    /// A block die was chosen.
    BlockChoice,
    /// Kickoff result.
    Kickoff,
    /// The presentation layer finished setting up.
    Initialized,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 10] = [
        Self::ModelChanged,
        Self::Resizing,
        Self::Resized,
        Self::ToggleDugouts,
        Self::ActivePlayerAction,
        Self::FloatText,
        Self::BlockDice,
        Self::BlockChoice,
        Self::Kickoff,
        Self::Initialized,
    ];
}

/// A notification and its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The model changed. Listeners should mark themselves dirty.
    ModelChanged,

    /// The viewport is being resized.
    Resizing,

    /// Resize finished.
    Resized {
        /// New pitch scale in pixels per square.
        scale: f32,
    },

    /// Dugouts should be shown or hidden.
    ToggleDugouts,

    /// The active player performed an action.
    ActivePlayerAction {
        /// Action text, e.g. `"Blitz"`.
        action: String,
    },

    /// Text should float above a player.
    FloatText {
        /// Player to annotate.
        player: PlayerId,
        /// Text to show.
        text: String,
    },

    /// Block dice were rolled.
    BlockDice {
        /// Animation key for this roll.
        key: String,
        /// Block die face rolled.
        outcome: u8,
    },

    /// A block die was chosen.
    BlockChoice {
        /// Chosen block die face.
        choice: u8,
    },

    /// Kickoff result.
    Kickoff {
        /// Kickoff table result name.
        kickoff: String,
    },

    /// The presentation layer finished setting up.
    Initialized,
}

impl Event {
    /// Kind of this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ModelChanged => EventKind::ModelChanged,
            Self::Resizing => EventKind::Resizing,
            Self::Resized { .. } => EventKind::Resized,
            Self::ToggleDugouts => EventKind::ToggleDugouts,
            Self::ActivePlayerAction { .. } => EventKind::ActivePlayerAction,
            Self::FloatText { .. } => EventKind::FloatText,
            Self::BlockDice { .. } => EventKind::BlockDice,
            Self::BlockChoice { .. } => EventKind::BlockChoice,
            Self::Kickoff { .. } => EventKind::Kickoff,
            Self::Initialized => EventKind::Initialized,
        }
    }
}

/// Receives broadcast events.
///
/// Handlers run synchronously inside the broadcast. They must not block and
/// should defer any model reads to their own next tick; `ModelChanged` in
/// particular means "mark dirty", not "redraw now".
pub trait EventListener {
    /// Handle one event.
    fn handle_event(&mut self, event: &Event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_payload_variants() {
        let events = [
            Event::ModelChanged,
            Event::Resizing,
            Event::Resized { scale: 30.0 },
            Event::ToggleDugouts,
            Event::ActivePlayerAction { action: "Blitz".into() },
            Event::FloatText { player: PlayerId::from("P1"), text: "Dodge".into() },
            Event::BlockDice { key: "b".into(), outcome: 2 },
            Event::BlockChoice { choice: 1 },
            Event::Kickoff { kickoff: "Blitz!".into() },
            Event::Initialized,
        ];

        let kinds: Vec<_> = events.iter().map(Event::kind).collect();
        assert_eq!(kinds, EventKind::ALL);
    }
}
