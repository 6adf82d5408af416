//! Cardinal directions and signed grid positions
//!
//! Positions are signed so that a step off the low edge of the grid produces
//! a coordinate that simply fails the bounds check instead of wrapping.

use std::fmt;

/// One of the four orthogonal moves between adjacent cells
///
/// `Up` increases `y`, `Down` decreases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards `y - 1`
    Down,
    /// Towards `x - 1`
    Left,
    /// Towards `x + 1`
    Right,
    /// Towards `y + 1`
    Up,
}

impl Direction {
    /// All four directions in their canonical order
    pub const ALL: [Self; 4] = [Self::Down, Self::Left, Self::Right, Self::Up];

    /// Coordinate delta `(dx, dy)` of a single step
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Down => (0, -1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, 1),
        }
    }
}

/// Signed cell coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Column, growing to the right
    pub x: i32,
    /// Row, growing upwards
    pub y: i32,
}

impl Position {
    /// Bottom-left corner of every grid
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a position from raw coordinates
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one step away in `direction`
    ///
    /// Saturates at the `i32` limits; such positions are never inside a grid.
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Direction of an orthogonally adjacent position, if it is one
    pub fn direction_to(self, other: Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&direction| self.step(direction) == other)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
