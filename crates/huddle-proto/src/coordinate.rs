//! Pitch coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A square on the pitch.
///
/// Encoded on the wire as a two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Coordinate {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coordinate {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for Coordinate {
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Coordinate> for [i32; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.x, self.y)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_from_array() {
        let c: Coordinate = serde_json::from_str("[3, 7]").unwrap();
        assert_eq!(c, Coordinate::new(3, 7));
    }

    #[test]
    fn rejects_object_form() {
        assert!(serde_json::from_str::<Coordinate>(r#"{"x":1,"y":2}"#).is_err());
    }
}
