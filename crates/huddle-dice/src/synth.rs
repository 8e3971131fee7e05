//! Roll path synthesis.

use std::iter::FusedIterator;

use rand::{Rng, seq::SliceRandom};

use crate::{DiceError, DieKind, RollConfig, SheetCell, SheetGeometry};

/// Start offsets are drawn from this range on both axes.
const START_OFFSET: std::ops::Range<f64> = 0.25..1.0;

/// Quadratic ease-out: fast start, decelerating to rest at `t = 1`.
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Produces roll animations for a configuration.
#[derive(Debug, Clone, Default)]
pub struct RollSynthesizer {
    config: RollConfig,
}

impl RollSynthesizer {
    /// Synthesizer for `config`.
    pub fn new(config: RollConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &RollConfig {
        &self.config
    }

    /// Synthesize a roll of `kind` that comes to rest on `outcome`.
    ///
    /// One of the outcome's destination cells is picked uniformly, and a
    /// random start offset is drawn. Both use `rng`; the last frame depends
    /// only on the picked cell.
    ///
    /// # Errors
    ///
    /// [`DiceError::UnmappedOutcome`] if the tables have no cell for the
    /// outcome. This is a caller bug, never silently an empty roll.
    pub fn synthesize<R: Rng>(
        &self,
        kind: DieKind,
        outcome: u8,
        rng: &mut R,
    ) -> Result<RollFrames, DiceError> {
        let target = kind
            .destinations(outcome)
            .and_then(|cells| cells.choose(rng))
            .copied()
            .ok_or(DiceError::UnmappedOutcome { kind, outcome })?;

        let start_x = rng.gen_range(START_OFFSET);
        let start_y = rng.gen_range(START_OFFSET);

        tracing::trace!(%kind, outcome, x = target.x, y = target.y, "synthesizing roll");

        Ok(RollFrames {
            target,
            start: (start_x, start_y),
            force: self.config.force(),
            sheet: self.config.sheet(),
            total: self.config.frame_count(),
            next: 0,
        })
    }
}

/// Lazily computed frame indices of one roll.
///
/// Yields exactly the configured frame count and then stops. Deliberately
/// not `Clone`: a roll is consumed once; synthesize again for a new one.
#[derive(Debug)]
pub struct RollFrames {
    target: SheetCell,
    start: (f64, f64),
    force: f64,
    sheet: SheetGeometry,
    total: usize,
    next: usize,
}

impl RollFrames {
    /// Cell the roll comes to rest on.
    pub fn target(&self) -> SheetCell {
        self.target
    }

    /// Frame index of the resting cell. Equal to the last yielded frame.
    pub fn final_frame(&self) -> u32 {
        self.target.frame_index(self.sheet.width)
    }

    fn frame_at(&self, index: usize) -> u32 {
        let p = if self.total <= 1 { 1.0 } else { index as f64 / (self.total - 1) as f64 };
        let remaining = 1.0 - ease_out_quad(p);

        let x = self.wrap(self.start.0 * remaining, self.target.x, self.sheet.width);
        let y = self.wrap(self.start.1 * remaining, self.target.y, self.sheet.height);

        x + y * self.sheet.width
    }

    /// Map a continuous offset onto a cell along one axis, wrapping around
    /// the sheet edge.
    ///
    /// The shift is reduced modulo `extent` before the target is added, so a
    /// zero offset yields `target` exactly however large the force.
    fn wrap(&self, offset: f64, target: u32, extent: u32) -> u32 {
        let extent_f = f64::from(extent);
        let shift = (offset * extent_f * self.force).round().rem_euclid(extent_f);
        // Non-finite shifts (force near f64::MAX) saturate to 0.
        let shift = (shift as u64).min(u64::from(extent) - 1);

        ((shift + u64::from(target)) % u64::from(extent)) as u32
    }
}

impl Iterator for RollFrames {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next >= self.total {
            return None;
        }
        let frame = self.frame_at(self.next);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RollFrames {}

impl FusedIterator for RollFrames {}
