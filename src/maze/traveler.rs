use crate::geometry::{Direction, Point};
use itertools::Either;

/// The single moving entity of a traversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Traveler {
    pub position: Point,
    /// `None` until the first committed move.
    pub heading: Option<Direction>,
    /// While set, obstacles are destroyed instead of blocking.
    pub breaker: bool,
    /// While set, the fallback priority order is reversed.
    pub inverter: bool,
}

impl Traveler {
    pub fn new(position: Point) -> Traveler {
        Traveler {
            position,
            heading: None,
            breaker: false,
            inverter: false,
        }
    }

    /// Where a step in `heading` would land, without moving.
    #[inline]
    pub fn peek(&self, heading: Direction) -> Point {
        self.position + heading
    }

    /// Move one step in `heading` and adopt it.
    pub fn advance(&mut self, heading: Direction) {
        self.position += heading;
        self.heading = Some(heading);
    }

    /// Headings to try, best first, when the current heading is blocked.
    pub fn fallback_order(&self) -> impl Iterator<Item = Direction> {
        if self.inverter {
            Either::Left(Direction::iter_inverted())
        } else {
            Either::Right(Direction::iter())
        }
    }
}
