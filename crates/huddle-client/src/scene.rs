//! Scene lifecycle seam.

use serde_json::Value;

/// Starts and stops presentation scenes.
///
/// The [`Controller`](crate::Controller) guarantees at most one scene is
/// active: it always stops the current scene before starting the next.
pub trait SceneDirector {
    /// Start `scene` with optional scene data.
    fn start(&mut self, scene: &str, data: Option<&Value>);

    /// Stop `scene`.
    fn stop(&mut self, scene: &str);
}
