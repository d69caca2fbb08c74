use crate::geometry::Point;

/// A heading on the maze grid.
///
/// The grid's origin is its top left corner, so `South` increases `y`.
///
/// The declaration order is also the fallback priority order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display(style = "UPPERCASE")]
pub enum Direction {
    South = 0,
    East = 1,
    North = 2,
    West = 3,
}

impl Direction {
    /// Number of distinct headings.
    pub const COUNT: usize = 4;

    /// Iterate through all `Direction`s in priority order: south, east, north, west.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::South), |direction| {
            use Direction::*;

            match direction {
                South => Some(East),
                East => Some(North),
                North => Some(West),
                West => None,
            }
        })
    }

    /// Iterate through all `Direction`s in inverted priority order: west, north, east, south.
    pub fn iter_inverted() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::West), |direction| {
            use Direction::*;

            match direction {
                West => Some(North),
                North => Some(East),
                East => Some(South),
                South => None,
            }
        })
    }

    /// `(dx, dy)` of a single unit step in this direction.
    pub fn deltas(self) -> (i32, i32) {
        match self {
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Dense index in `0..Direction::COUNT`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<Direction> for Point {
    fn from(direction: Direction) -> Point {
        let (dx, dy) = direction.deltas();
        Point::new(dx, dy)
    }
}
