//! Square-grid coordinates for the game board.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
///
/// `x` is the column and `y` the row, both zero-based from the top-left
/// corner. Coordinates are signed so that off-board positions arriving from
/// the wire can be represented and rejected instead of wrapping.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column coordinate
    pub x: i32,
    /// Row coordinate
    pub y: i32,
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Row-major ordering for deterministic iteration
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check if this position is within a board of the given dimensions.
    pub fn in_bounds(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < width && (self.y as u32) < height
    }

    /// Positions strictly between `self` and `other`, stepping one cell at a
    /// time by coordinate sign.
    ///
    /// Only meaningful when the two positions share a row, a column, or an
    /// exact diagonal; for any other pair the walk still terminates but does
    /// not describe a line.
    pub fn cells_between(&self, other: &Position) -> Vec<Position> {
        let step_x = (other.x - self.x).signum();
        let step_y = (other.y - self.y).signum();
        let steps = (other.x - self.x).abs().max((other.y - self.y).abs());

        (1..steps)
            .map(|i| Position::new(self.x + i * step_x, self.y + i * step_y))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let pos = Position::new(3, 5);
        assert_eq!(pos.x, 3);
        assert_eq!(pos.y, 5);
    }

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds(10, 10));
        assert!(Position::new(9, 9).in_bounds(10, 10));
        assert!(!Position::new(10, 9).in_bounds(10, 10));
        assert!(!Position::new(-1, 0).in_bounds(10, 10));
    }

    #[test]
    fn test_row_major_ordering() {
        let mut cells = vec![
            Position::new(0, 1),
            Position::new(9, 0),
            Position::new(1, 1),
        ];
        cells.sort();
        assert_eq!(
            cells,
            vec![
                Position::new(9, 0),
                Position::new(0, 1),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_cells_between_vertical() {
        let cells = Position::new(0, 0).cells_between(&Position::new(0, 3));
        assert_eq!(cells, vec![Position::new(0, 1), Position::new(0, 2)]);
    }

    #[test]
    fn test_cells_between_horizontal_backwards() {
        let cells = Position::new(5, 2).cells_between(&Position::new(2, 2));
        assert_eq!(cells, vec![Position::new(4, 2), Position::new(3, 2)]);
    }

    #[test]
    fn test_cells_between_diagonal() {
        let cells = Position::new(1, 1).cells_between(&Position::new(3, 3));
        assert_eq!(cells, vec![Position::new(2, 2)]);
    }

    #[test]
    fn test_cells_between_adjacent_is_empty() {
        assert!(Position::new(4, 4)
            .cells_between(&Position::new(4, 5))
            .is_empty());
        assert!(Position::new(4, 4)
            .cells_between(&Position::new(4, 4))
            .is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(3, 7)), "(3, 7)");
    }
}
