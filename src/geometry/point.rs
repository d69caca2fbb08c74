use crate::geometry::Direction;
use std::ops::{Add, AddAssign};

/// A position on the maze grid.
///
/// `x` is the column and `y` is the row; the origin is the top left.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// `true` when the points share at least one coordinate axis.
    pub fn shares_axis(self, other: Point) -> bool {
        self.x == other.x || self.y == other.y
    }
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Point {
        Point::new(x as i32, y as i32)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, direction: Direction) -> Point {
        self + Point::from(direction)
    }
}

impl AddAssign<Direction> for Point {
    fn add_assign(&mut self, direction: Direction) {
        *self = *self + direction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_south_increases_row() {
        let mut point = Point::new(2, 3);
        point += Direction::South;
        assert_eq!(point, Point::new(2, 4));
    }

    #[test]
    fn test_shares_axis() {
        assert!(Point::new(1, 5).shares_axis(Point::new(1, 9)));
        assert!(Point::new(4, 2).shares_axis(Point::new(0, 2)));
        assert!(!Point::new(1, 2).shares_axis(Point::new(3, 4)));
    }
}
