//! Grid coordinates, directions and wall orientations.
//!
//! `(0, 0)` is the top-left cell. `x` grows to the right (column), `y` grows
//! downwards (row). Coordinates are signed so that off-board neighbours can be
//! represented and rejected instead of wrapping.

use serde::{Deserialize, Serialize};

/// A cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by a raw offset.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighbouring cell in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }

    /// Check that both components lie in `0..limit`.
    #[must_use]
    pub const fn within(self, limit: usize) -> bool {
        let limit = limit as i32;
        self.x >= 0 && self.y >= 0 && self.x < limit && self.y < limit
    }

    /// Rotate 180° on a board of side `size`.
    #[must_use]
    pub const fn flipped(self, size: usize) -> Self {
        let last = size as i32 - 1;
        Self {
            x: last - self.x,
            y: last - self.y,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four orthogonal directions.
///
/// Discriminants match the encoding used in reachability snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Towards row 0 (−y).
    Up = 0,
    /// +x.
    Right = 1,
    /// Towards the last row (+y).
    Down = 2,
    /// −x.
    Left = 3,
}

impl Direction {
    /// All directions in encoding order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// The two directions at right angles to this one.
    #[must_use]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Right | Direction::Left => [Direction::Up, Direction::Down],
        }
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Orientation of a wall segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Lies along a row boundary and blocks vertical movement.
    Horizontal,
    /// Lies along a column boundary and blocks horizontal movement.
    Vertical,
}

impl Orientation {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// Offset from a wall's anchor cell to its second occupied cell.
    #[must_use]
    pub const fn extent(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A single cell boundary.
///
/// Horizontal edges sit below `cell`, vertical edges to its right, matching
/// how wall occupancy is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub cell: Coord,
    pub orientation: Orientation,
}

impl Edge {
    /// The edge crossed when leaving `from` in `direction`.
    #[must_use]
    pub const fn crossing(from: Coord, direction: Direction) -> Self {
        match direction {
            Direction::Down => Edge {
                cell: from,
                orientation: Orientation::Horizontal,
            },
            Direction::Up => Edge {
                cell: from.offset(0, -1),
                orientation: Orientation::Horizontal,
            },
            Direction::Right => Edge {
                cell: from,
                orientation: Orientation::Vertical,
            },
            Direction::Left => Edge {
                cell: from.offset(-1, 0),
                orientation: Orientation::Vertical,
            },
        }
    }
}
