//! Sound playback seam.

/// Plays sound effects requested by the server.
///
/// Implemented by the presentation layer. Playback is fire-and-forget; a
/// sound that cannot be played is the implementation's problem to log.
pub trait SoundEngine {
    /// Play the sound with this identifier.
    fn play(&mut self, sound: &str);
}
