//! Die kinds and their destination tables.
//!
//! Each outcome maps to one or more cells on the sprite sheet that show that
//! face at rest. Faces that get visual emphasis (a one or a six) have a whole
//! column of equivalent cells so repeated rolls do not always stop on the
//! same sprite.

use std::fmt;

/// A cell on the sprite sheet, addressed by column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetCell {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl SheetCell {
    /// Create a cell.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Linear frame index on a sheet `width` cells wide.
    pub const fn frame_index(self, width: u32) -> u32 {
        self.x + self.y * width
    }
}

/// Every row of one sheet column.
const fn column<const N: usize>(x: u32) -> [SheetCell; N] {
    let mut cells = [SheetCell::new(0, 0); N];
    let mut y = 0;
    while y < N {
        cells[y] = SheetCell::new(x, y as u32);
        y += 1;
    }
    cells
}

const D6_ONE: [SheetCell; 19] = column(5);
const D6_SIX: [SheetCell; 19] = column(15);

/// Six-face destinations, indexed by face (index 0 unused).
const D6_TARGETS: [&[SheetCell]; 7] = [
    &[],
    &D6_ONE,
    &[SheetCell::new(0, 10), SheetCell::new(10, 0)],
    &[SheetCell::new(0, 15), SheetCell::new(10, 5)],
    &[SheetCell::new(0, 5), SheetCell::new(10, 15)],
    &[SheetCell::new(0, 0), SheetCell::new(10, 10)],
    &D6_SIX,
];

/// Eight-face destinations, indexed by face (index 0 unused).
const D8_TARGETS: [&[SheetCell]; 9] = [
    &[],
    &[SheetCell::new(0, 6), SheetCell::new(10, 16)],
    &[SheetCell::new(13, 3), SheetCell::new(17, 13)],
    &[SheetCell::new(13, 13), SheetCell::new(17, 3)],
    &[SheetCell::new(0, 10), SheetCell::new(10, 0)],
    &[SheetCell::new(0, 0), SheetCell::new(10, 10)],
    &[SheetCell::new(3, 13), SheetCell::new(7, 3)],
    &[SheetCell::new(3, 3), SheetCell::new(7, 13)],
    &[SheetCell::new(10, 6), SheetCell::new(0, 16)],
];

/// Block die face → six-face sheet face.
///
/// The server numbers block results 1 = skull, 2 = both down, 3/4 = pushback,
/// 5 = pow/push, 6 = pow. The block sheet shares the six-face geometry but
/// draws pow on 1, pushback on 2 and 5, pow/push on 3, both down on 4 and
/// skull on 6.
pub const BLOCK_REMAP: [u8; 7] = [0, 6, 4, 2, 5, 3, 1];

/// Die geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DieKind {
    /// Regular six-sided die.
    D6,
    /// Eight-sided die (scatter).
    D8,
    /// Block die: six-face sheet with remapped faces.
    Block,
}

impl DieKind {
    /// All die kinds.
    pub const ALL: [Self; 3] = [Self::D6, Self::D8, Self::Block];

    /// Number of faces.
    pub fn faces(self) -> u8 {
        match self {
            Self::D6 | Self::Block => 6,
            Self::D8 => 8,
        }
    }

    /// Sheet cells that show `outcome` at rest.
    ///
    /// `None` if the outcome is outside the die's faces.
    pub fn destinations(self, outcome: u8) -> Option<&'static [SheetCell]> {
        let table: &'static [&'static [SheetCell]] = match self {
            Self::D6 | Self::Block => &D6_TARGETS,
            Self::D8 => &D8_TARGETS,
        };
        let face = match self {
            Self::Block => *BLOCK_REMAP.get(usize::from(outcome))?,
            Self::D6 | Self::D8 => outcome,
        };

        table.get(usize::from(face)).copied().filter(|cells| !cells.is_empty())
    }

    /// Every destination cell of this die, across all faces.
    pub fn all_destinations(self) -> impl Iterator<Item = SheetCell> {
        (1..=self.faces()).filter_map(move |face| self.destinations(face)).flatten().copied()
    }

    /// Sprite sheet key used by the presentation layer.
    pub fn sheet_key(self) -> &'static str {
        match self {
            Self::D6 => "d6",
            Self::D8 => "d8",
            Self::Block => "db",
        }
    }
}

impl fmt::Display for DieKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_key())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn every_face_has_destinations() {
        for kind in DieKind::ALL {
            for face in 1..=kind.faces() {
                assert!(kind.destinations(face).is_some(), "{kind} face {face} unmapped");
            }
        }
    }

    #[test]
    fn zero_and_out_of_range_are_unmapped() {
        for kind in DieKind::ALL {
            assert!(kind.destinations(0).is_none());
            assert!(kind.destinations(kind.faces() + 1).is_none());
        }
    }

    #[test]
    fn six_face_one_is_a_full_column() {
        let cells = DieKind::D6.destinations(1).unwrap();
        assert_eq!(cells.len(), 19);
        assert!(cells.iter().enumerate().all(|(y, c)| c.x == 5 && c.y == y as u32));
    }

    #[test]
    fn block_skull_uses_sheet_six() {
        assert_eq!(DieKind::Block.destinations(1), DieKind::D6.destinations(6));
        assert_eq!(DieKind::Block.destinations(6), DieKind::D6.destinations(1));
        assert_eq!(DieKind::Block.destinations(3), DieKind::D6.destinations(2));
    }

    #[test]
    fn frame_index_is_row_major() {
        assert_eq!(SheetCell::new(5, 2).frame_index(20), 45);
    }
}
