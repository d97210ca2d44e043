//! Board geometry: points, directions and board bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TickError, TickResult};

/// A cell coordinate.
///
/// `y` grows downward, so moving up decreases `y`. Coordinates are signed so
/// that a computed next head may step off the board before it is classified
/// as a wall collision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring point one cell away in `direction`.
    ///
    /// Saturates at the `i32` range; a saturated point is never on a board.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards `y - 1`.
    #[default]
    Up,
    /// Towards `y + 1`.
    Down,
    /// Towards `x - 1`.
    Left,
    /// Towards `x + 1`.
    Right,
}

impl Direction {
    /// All directions, in label order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset `(dx, dy)` for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The wire label of this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a direction label is not one of the four known labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDirection(pub String);

impl fmt::Display for UnknownDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown direction '{}'", self.0)
    }
}

impl std::error::Error for UnknownDirection {}

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

/// Validated board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
}

impl Board {
    /// Create a board.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::InvalidDimensions`] if either side is not positive.
    pub const fn new(width: i32, height: i32) -> TickResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(TickError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Board width in cells.
    #[must_use]
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Board height in cells.
    #[must_use]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Check if a point lies on the board.
    #[must_use]
    pub const fn contains(self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    /// Number of cells on the board.
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.width.unsigned_abs() as usize * self.height.unsigned_abs() as usize
    }

    /// Every cell, x outer and y inner.
    ///
    /// This order is part of the food spawning contract and must not change.
    pub fn cells(self) -> impl Iterator<Item = Point> {
        let (width, height) = (self.width, self.height);
        (0..width).flat_map(move |x| (0..height).map(move |y| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_offsets() {
        let p = Point::new(3, 3);
        assert_eq!(p.step(Direction::Up), Point::new(3, 2));
        assert_eq!(p.step(Direction::Down), Point::new(3, 4));
        assert_eq!(p.step(Direction::Left), Point::new(2, 3));
        assert_eq!(p.step(Direction::Right), Point::new(4, 3));
    }

    #[test]
    fn test_step_can_leave_board() {
        let p = Point::new(0, 0).step(Direction::Up);
        assert_eq!(p, Point::new(0, -1));
        assert!(!Board::new(5, 5).unwrap().contains(p));
    }

    #[test]
    fn test_step_saturates_at_coordinate_limits() {
        assert_eq!(
            Point::new(0, i32::MIN).step(Direction::Up),
            Point::new(0, i32::MIN)
        );
        assert_eq!(
            Point::new(i32::MAX, 3).step(Direction::Right),
            Point::new(i32::MAX, 3)
        );
        let board = Board::new(5, 5).unwrap();
        assert!(!board.contains(Point::new(i32::MAX, 3).step(Direction::Right)));
    }

    #[test]
    fn test_direction_labels() {
        for d in Direction::ALL {
            assert_eq!(d.as_str().parse::<Direction>(), Ok(d));
        }
        assert!("UP".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
        assert_eq!(Direction::default(), Direction::Up);
    }

    #[test]
    fn test_direction_serde_label() {
        let json = serde_json::to_string(&Direction::Left).unwrap();
        assert_eq!(json, "\"left\"");
    }

    #[test]
    fn test_board_rejects_empty() {
        assert_eq!(
            Board::new(0, 4),
            Err(TickError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert!(Board::new(3, -1).is_err());
    }

    #[test]
    fn test_board_scan_order() {
        let board = Board::new(2, 3).unwrap();
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), board.cell_count());
        assert_eq!(
            cells,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(1, 2),
            ]
        );
    }
}
