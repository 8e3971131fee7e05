//! The controller: single writer of the model and owner of the event bus.
//!
//! # Ordering
//!
//! [`Controller::enqueue_command`] applies a command and broadcasts
//! [`Event::ModelChanged`] before returning. The next command cannot start
//! until that happens, so mutation and notification never interleave across
//! commands and listeners observe commands in arrival order.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use huddle_core::Game;
use serde_json::Value;

use crate::{ClientCommand, ClientError, Event, EventListener, SceneDirector, SoundEngine};

/// Mediator between the command pipeline, the model and the views.
///
/// Owns the [`Game`] for its whole lifetime. Listeners are held weakly:
/// the controller never keeps a view alive, and drops registrations whose
/// view is gone on the next broadcast.
pub struct Controller {
    game: Game,
    /// Registration order is broadcast order.
    listeners: Vec<Weak<RefCell<dyn EventListener>>>,
    scenes: Box<dyn SceneDirector>,
    current_scene: Option<String>,
    sound: Box<dyn SoundEngine>,
    /// Successfully applied client commands.
    applied: u64,
}

impl Controller {
    /// Controller with an empty model.
    pub fn new(sound: Box<dyn SoundEngine>, scenes: Box<dyn SceneDirector>) -> Self {
        Self {
            game: Game::new(),
            listeners: Vec::new(),
            scenes,
            current_scene: None,
            sound,
            applied: 0,
        }
    }

    /// Read-only view of the model.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Number of client commands applied so far.
    pub fn applied_commands(&self) -> u64 {
        self.applied
    }

    /// Apply a client command and notify every listener.
    ///
    /// On failure nothing is committed and no `ModelChanged` is broadcast;
    /// the error is logged and returned.
    pub fn enqueue_command(&mut self, command: ClientCommand) -> Result<(), ClientError> {
        let label = command.label();

        match command.apply(&self.game) {
            Ok(next) => {
                self.game = next;
                self.applied += 1;
                tracing::debug!(command = label, applied = self.applied, "client command applied");
                self.broadcast(&Event::ModelChanged);
                Ok(())
            },
            Err(err) => {
                tracing::error!(command = label, error = %err, "client command failed");
                Err(err.into())
            },
        }
    }

    /// Register a listener.
    ///
    /// Returns `false` without registering if this listener is already
    /// registered.
    pub fn add_event_listener<L: EventListener + 'static>(&mut self, listener: &Rc<RefCell<L>>) -> bool {
        let listener: Rc<RefCell<dyn EventListener>> = listener.clone();
        let weak = Rc::downgrade(&listener);

        if self.listeners.iter().any(|existing| std::ptr::addr_eq(existing.as_ptr(), weak.as_ptr())) {
            tracing::warn!("listener already registered");
            return false;
        }

        self.listeners.push(weak);
        true
    }

    /// Number of registered listeners still alive.
    pub fn listener_count(&self) -> usize {
        self.listeners.iter().filter(|l| l.strong_count() > 0).count()
    }

    /// Broadcast an event without touching the model.
    pub fn trigger_event(&mut self, event: Event) {
        self.broadcast(&event);
    }

    /// Stop the active scene, if any, then start `scene`.
    pub fn set_scene(&mut self, scene: &str, data: Option<Value>) {
        tracing::info!(scene, "setting scene");

        if let Some(current) = self.current_scene.take() {
            self.scenes.stop(&current);
        }
        self.scenes.start(scene, data.as_ref());
        self.current_scene = Some(scene.to_owned());
    }

    /// Stop the active scene.
    ///
    /// Returns `false` if no scene was active; that is not an error.
    pub fn stop_scene(&mut self) -> bool {
        match self.current_scene.take() {
            Some(current) => {
                self.scenes.stop(&current);
                true
            },
            None => {
                tracing::debug!("stop requested with no active scene");
                false
            },
        }
    }

    /// Name of the active scene.
    pub fn current_scene(&self) -> Option<&str> {
        self.current_scene.as_deref()
    }

    /// Forward a sound request to the sound engine.
    pub fn play_sound(&mut self, sound: &str) {
        self.sound.play(sound);
    }

    /// Deliver `event` to every live listener in registration order.
    fn broadcast(&mut self, event: &Event) {
        self.listeners.retain(|l| l.strong_count() > 0);

        for weak in &self.listeners {
            let Some(listener) = weak.upgrade() else { continue };
            let delivered = match listener.try_borrow_mut() {
                Ok(mut listener) => {
                    listener.handle_event(event);
                    true
                },
                Err(_) => {
                    tracing::warn!(kind = ?event.kind(), "listener busy, event skipped");
                    false
                },
            };
            debug_assert!(delivered, "listener busy during broadcast of {:?}", event.kind());
        }
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("game", &self.game)
            .field("listeners", &self.listeners.len())
            .field("current_scene", &self.current_scene)
            .field("applied", &self.applied)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use huddle_core::PlayerId;
    use huddle_proto::{ModelChange, PlayerSnapshot, ServerGameState, TeamSide};

    use super::*;
    use crate::EventKind;

    type Log = Rc<RefCell<Vec<String>>>;

    struct NullSound;

    impl SoundEngine for NullSound {
        fn play(&mut self, _sound: &str) {}
    }

    struct Scenes(Log);

    impl SceneDirector for Scenes {
        fn start(&mut self, scene: &str, _data: Option<&Value>) {
            self.0.borrow_mut().push(format!("start {scene}"));
        }

        fn stop(&mut self, scene: &str) {
            self.0.borrow_mut().push(format!("stop {scene}"));
        }
    }

    struct Recorder {
        name: &'static str,
        log: Rc<RefCell<Vec<(&'static str, EventKind)>>>,
    }

    impl EventListener for Recorder {
        fn handle_event(&mut self, event: &Event) {
            self.log.borrow_mut().push((self.name, event.kind()));
        }
    }

    fn controller() -> (Controller, Log) {
        let scenes = Log::default();
        let controller = Controller::new(Box::new(NullSound), Box::new(Scenes(scenes.clone())));
        (controller, scenes)
    }

    fn snapshot(active: Option<&str>) -> Box<ServerGameState> {
        Box::new(ServerGameState {
            players: vec![PlayerSnapshot {
                id: "P1".into(),
                name: String::new(),
                number: 1,
                side: TeamSide::Home,
                coordinate: None,
            }],
            active_player: active.map(str::to_owned),
            ..ServerGameState::default()
        })
    }

    #[test]
    fn set_scene_from_idle_only_starts() {
        let (mut controller, scenes) = controller();
        controller.set_scene("A", None);

        assert_eq!(*scenes.borrow(), vec!["start A"]);
        assert_eq!(controller.current_scene(), Some("A"));
    }

    #[test]
    fn set_scene_stops_previous_first() {
        let (mut controller, scenes) = controller();
        controller.set_scene("A", None);
        controller.set_scene("B", None);

        assert_eq!(*scenes.borrow(), vec!["start A", "stop A", "start B"]);
        assert_eq!(controller.current_scene(), Some("B"));
    }

    #[test]
    fn stop_without_scene_is_noop() {
        let (mut controller, scenes) = controller();
        assert!(!controller.stop_scene());
        assert!(scenes.borrow().is_empty());

        controller.set_scene("A", None);
        assert!(controller.stop_scene());
        assert!(!controller.stop_scene());
        assert_eq!(*scenes.borrow(), vec!["start A", "stop A"]);
        assert_eq!(controller.current_scene(), None);
    }

    #[test]
    fn listeners_notified_in_registration_order() {
        let (mut controller, _) = controller();
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::new(RefCell::new(Recorder { name: "first", log: log.clone() }));
        let second = Rc::new(RefCell::new(Recorder { name: "second", log: log.clone() }));

        controller.add_event_listener(&first);
        controller.add_event_listener(&second);
        controller.enqueue_command(ClientCommand::Initialize(snapshot(None))).unwrap();

        assert_eq!(*log.borrow(), vec![
            ("first", EventKind::ModelChanged),
            ("second", EventKind::ModelChanged)
        ]);
    }

    #[test]
    fn duplicate_registration_refused() {
        let (mut controller, _) = controller();
        let log = Rc::new(RefCell::new(Vec::new()));
        let view = Rc::new(RefCell::new(Recorder { name: "view", log: log.clone() }));

        assert!(controller.add_event_listener(&view));
        assert!(!controller.add_event_listener(&view));
        controller.trigger_event(Event::Resizing);

        assert_eq!(controller.listener_count(), 1);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn dropped_listener_is_pruned() {
        let (mut controller, _) = controller();
        let log = Rc::new(RefCell::new(Vec::new()));
        let kept = Rc::new(RefCell::new(Recorder { name: "kept", log: log.clone() }));
        let dropped = Rc::new(RefCell::new(Recorder { name: "dropped", log: log.clone() }));

        controller.add_event_listener(&dropped);
        controller.add_event_listener(&kept);
        drop(dropped);
        controller.trigger_event(Event::ToggleDugouts);

        assert_eq!(controller.listener_count(), 1);
        assert_eq!(*log.borrow(), vec![("kept", EventKind::ToggleDugouts)]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "listener busy during broadcast")]
    fn busy_listener_fails_loudly_in_debug() {
        let (mut controller, _) = controller();
        let log = Rc::new(RefCell::new(Vec::new()));
        let view = Rc::new(RefCell::new(Recorder { name: "view", log }));
        controller.add_event_listener(&view);

        let _held = view.borrow_mut();
        controller.trigger_event(Event::Initialized);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn busy_listener_is_skipped() {
        let (mut controller, _) = controller();
        let log = Rc::new(RefCell::new(Vec::new()));
        let view = Rc::new(RefCell::new(Recorder { name: "view", log: log.clone() }));
        controller.add_event_listener(&view);

        let _held = view.borrow_mut();
        controller.trigger_event(Event::Initialized);

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn failed_command_commits_nothing() {
        let (mut controller, _) = controller();
        let log = Rc::new(RefCell::new(Vec::new()));
        let view = Rc::new(RefCell::new(Recorder { name: "view", log: log.clone() }));
        controller.add_event_listener(&view);

        controller.enqueue_command(ClientCommand::Initialize(snapshot(Some("P1")))).unwrap();
        let before = controller.game().clone();

        let result = controller.enqueue_command(ClientCommand::ApplyChanges(vec![
            ModelChange::TurnMode { mode: "blitz".into() },
            ModelChange::ActivePlayer { player_id: Some("nobody".into()) },
        ]));

        assert!(matches!(result, Err(ClientError::Model(_))));
        assert_eq!(*controller.game(), before);
        assert_eq!(controller.applied_commands(), 1);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(controller.game().active_player_id(), Some(&PlayerId::from("P1")));
    }
}
