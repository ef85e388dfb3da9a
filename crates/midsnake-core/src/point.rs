//! Positions in the edit graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the edit graph: `x` indexes the old sequence, `y` the new one
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`
    pub const fn offset(self, dx: usize, dy: usize) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Diagonal index `k = x - y`
    pub fn diagonal(self) -> isize {
        self.x as isize - self.y as isize
    }

    /// Swap the roles of the two sequences
    pub const fn transposed(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }

    /// True if both coordinates are at least those of `other`
    pub fn dominates(self, other: Point) -> bool {
        self.x >= other.x && self.y >= other.y
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_and_diagonal() {
        let p = Point::new(2, 5).offset(3, 1);
        assert_eq!(p, Point::new(5, 6));
        assert_eq!(p.diagonal(), -1);
        assert_eq!(Point::new(7, 2).diagonal(), 5);
    }

    #[test]
    fn test_transposed() {
        assert_eq!(Point::new(1, 9).transposed(), Point::new(9, 1));
        assert_eq!(Point::from((4, 4)).transposed(), Point::new(4, 4));
    }

    #[test]
    fn test_dominates() {
        assert!(Point::new(3, 3).dominates(Point::new(3, 2)));
        assert!(!Point::new(3, 1).dominates(Point::new(2, 2)));
        assert_eq!(Point::new(1, 2).to_string(), "(1,2)");
    }
}
