//! Keyed store of synthesized animations.

use std::collections::{HashMap, hash_map::Entry};

use rand::Rng;

use crate::{DiceError, DieKind, RollSynthesizer, SheetCell};

/// A synthesized, playable roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    key: String,
    kind: DieKind,
    outcome: u8,
    target: SheetCell,
    frames: Vec<u32>,
    frame_rate: u32,
}

impl Animation {
    /// Registry key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Die that was rolled.
    pub fn kind(&self) -> DieKind {
        self.kind
    }

    /// Face the roll comes to rest on.
    pub fn outcome(&self) -> u8 {
        self.outcome
    }

    /// Resting cell on the sheet.
    pub fn target(&self) -> SheetCell {
        self.target
    }

    /// Frame indices, in playback order.
    pub fn frames(&self) -> &[u32] {
        &self.frames
    }

    /// Resting frame index.
    pub fn final_frame(&self) -> Option<u32> {
        self.frames.last().copied()
    }

    /// Playback rate in frames per second.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Animations play once and hold the last frame.
    pub fn repeat(&self) -> u32 {
        0
    }
}

/// Animations by key.
///
/// Registering under an existing key discards the old animation; a key
/// always names the most recent roll.
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    synth: RollSynthesizer,
    animations: HashMap<String, Animation>,
}

impl AnimationRegistry {
    /// Empty registry using `synth` for new rolls.
    pub fn new(synth: RollSynthesizer) -> Self {
        Self { synth, animations: HashMap::new() }
    }

    /// Synthesize a roll and store it under `key`, replacing any previous one.
    pub fn register<R: Rng>(
        &mut self,
        key: impl Into<String>,
        kind: DieKind,
        outcome: u8,
        rng: &mut R,
    ) -> Result<&Animation, DiceError> {
        let key = key.into();
        let frames = self.synth.synthesize(kind, outcome, rng)?;
        let animation = Animation {
            key: key.clone(),
            kind,
            outcome,
            target: frames.target(),
            frame_rate: self.synth.config().frame_rate(),
            frames: frames.collect(),
        };

        match self.animations.entry(key) {
            Entry::Occupied(mut entry) => {
                tracing::debug!(key = %entry.key(), "replacing roll animation");
                entry.insert(animation);
                Ok(entry.into_mut())
            },
            Entry::Vacant(entry) => Ok(entry.insert(animation)),
        }
    }

    /// Animation stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Animation> {
        self.animations.get(key)
    }

    /// Drop the animation under `key`, returning it.
    pub fn remove(&mut self, key: &str) -> Option<Animation> {
        self.animations.remove(key)
    }

    /// Number of stored animations.
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    /// Whether no animations are stored.
    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Stored keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn register_stores_under_key() {
        let mut registry = AnimationRegistry::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let animation = registry.register("block-1", DieKind::Block, 2, &mut rng).unwrap();
        assert_eq!(animation.key(), "block-1");
        assert_eq!(animation.frames().len(), 60);
        assert_eq!(animation.frame_rate(), 60);
        assert_eq!(animation.repeat(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn same_key_replaces() {
        let mut registry = AnimationRegistry::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        registry.register("roll", DieKind::D6, 1, &mut rng).unwrap();
        registry.register("roll", DieKind::D8, 8, &mut rng).unwrap();

        assert_eq!(registry.len(), 1);
        let stored = registry.get("roll").unwrap();
        assert_eq!((stored.kind(), stored.outcome()), (DieKind::D8, 8));
    }

    #[test]
    fn failed_register_keeps_previous() {
        let mut registry = AnimationRegistry::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        registry.register("roll", DieKind::D6, 4, &mut rng).unwrap();
        assert!(registry.register("roll", DieKind::D6, 9, &mut rng).is_err());

        assert_eq!(registry.get("roll").map(Animation::outcome), Some(4));
    }

    #[test]
    fn remove_fades_out() {
        let mut registry = AnimationRegistry::default();
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        registry.register("a", DieKind::D6, 6, &mut rng).unwrap();
        assert!(registry.remove("a").is_some());
        assert!(registry.is_empty());
        assert!(registry.remove("a").is_none());
    }
}
