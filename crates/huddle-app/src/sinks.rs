//! Side-effect sinks for headless runs.

use huddle_client::{SceneDirector, SoundEngine};
use serde_json::Value;

/// Sound engine that logs instead of playing.
#[derive(Debug, Default)]
pub struct LogSoundEngine {
    played: u64,
}

impl LogSoundEngine {
    /// Number of sounds requested so far.
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl SoundEngine for LogSoundEngine {
    fn play(&mut self, sound: &str) {
        self.played += 1;
        tracing::info!(sound, "play sound");
    }
}

/// Scene director that logs transitions.
#[derive(Debug, Default)]
pub struct LogSceneDirector;

impl SceneDirector for LogSceneDirector {
    fn start(&mut self, scene: &str, data: Option<&Value>) {
        tracing::info!(scene, with_data = data.is_some(), "scene started");
    }

    fn stop(&mut self, scene: &str) {
        tracing::info!(scene, "scene stopped");
    }
}
