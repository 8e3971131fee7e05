//! Roll synthesis configuration.

use crate::{DiceError, DieKind};

/// Sprite sheet dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetGeometry {
    /// Cells per row.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl SheetGeometry {
    /// Total number of frames on the sheet. `None` if it does not fit a `u32`.
    pub fn frame_count(self) -> Option<u32> {
        self.width.checked_mul(self.height)
    }
}

impl Default for SheetGeometry {
    fn default() -> Self {
        Self { width: 20, height: 19 }
    }
}

/// Roll synthesis configuration.
///
/// Built through [`RollConfig::new`] / [`RollConfig::with_sheet`], which
/// reject values that would produce an empty roll or a final frame off the
/// sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct RollConfig {
    frame_count: usize,
    force: f64,
    frame_rate: u32,
    sheet: SheetGeometry,
}

impl RollConfig {
    /// Default number of frames per roll.
    pub const DEFAULT_FRAME_COUNT: usize = 60;

    /// Default overshoot force: how many laps of the sheet the start offset
    /// spans before easing out.
    pub const DEFAULT_FORCE: f64 = 3.0;

    /// Default playback rate.
    pub const DEFAULT_FRAME_RATE: u32 = 60;

    /// Configuration with a custom frame count and force on the default sheet.
    pub fn new(frame_count: usize, force: f64) -> Result<Self, DiceError> {
        if frame_count == 0 {
            return Err(DiceError::InvalidFrameCount);
        }
        if !force.is_finite() || force <= 0.0 {
            return Err(DiceError::InvalidForce(force));
        }

        Ok(Self {
            frame_count,
            force,
            frame_rate: Self::DEFAULT_FRAME_RATE,
            sheet: SheetGeometry::default(),
        })
    }

    /// Use a different sprite sheet. Every destination cell must fit on it,
    /// and every frame index must fit a `u32`.
    pub fn with_sheet(mut self, sheet: SheetGeometry) -> Result<Self, DiceError> {
        if sheet.frame_count().is_none() {
            return Err(DiceError::SheetTooLarge { width: sheet.width, height: sheet.height });
        }

        let fits = DieKind::ALL
            .into_iter()
            .flat_map(DieKind::all_destinations)
            .all(|cell| cell.x < sheet.width && cell.y < sheet.height);

        if !fits {
            return Err(DiceError::SheetTooSmall { width: sheet.width, height: sheet.height });
        }

        self.sheet = sheet;
        Ok(self)
    }

    /// Set the playback rate recorded on synthesized animations.
    #[must_use]
    pub fn with_frame_rate(mut self, frame_rate: u32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    /// Frames per roll.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Overshoot force.
    pub fn force(&self) -> f64 {
        self.force
    }

    /// Playback rate in frames per second.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Sprite sheet geometry.
    pub fn sheet(&self) -> SheetGeometry {
        self.sheet
    }
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            frame_count: Self::DEFAULT_FRAME_COUNT,
            force: Self::DEFAULT_FORCE,
            frame_rate: Self::DEFAULT_FRAME_RATE,
            sheet: SheetGeometry::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_frames_rejected() {
        assert_eq!(RollConfig::new(0, 3.0), Err(DiceError::InvalidFrameCount));
    }

    #[test]
    fn bad_force_rejected() {
        assert!(matches!(RollConfig::new(10, 0.0), Err(DiceError::InvalidForce(_))));
        assert!(matches!(RollConfig::new(10, -1.0), Err(DiceError::InvalidForce(_))));
        assert!(matches!(RollConfig::new(10, f64::NAN), Err(DiceError::InvalidForce(_))));
    }

    #[test]
    fn small_sheet_rejected() {
        let result = RollConfig::default().with_sheet(SheetGeometry { width: 16, height: 19 });
        assert_eq!(result, Err(DiceError::SheetTooSmall { width: 16, height: 19 }));
    }

    #[test]
    fn larger_sheet_accepted() {
        let config = RollConfig::default().with_sheet(SheetGeometry { width: 32, height: 32 });
        assert_eq!(config.map(|c| c.sheet().frame_count()), Ok(Some(1024)));
    }

    #[test]
    fn unindexable_sheet_rejected() {
        let sheet = SheetGeometry { width: u32::MAX / 4, height: 19 };
        assert_eq!(
            RollConfig::default().with_sheet(sheet),
            Err(DiceError::SheetTooLarge { width: u32::MAX / 4, height: 19 })
        );
    }

    #[test]
    fn widest_indexable_sheet_accepted() {
        let sheet = SheetGeometry { width: u32::MAX / 19, height: 19 };
        assert!(RollConfig::default().with_sheet(sheet).is_ok());
    }
}
