use crate::geometry::{map::Traversable, tile::DisplayWidth, Direction};

/// Kind of a single maze cell.
///
/// Each kind displays and parses as exactly one character.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Cell {
    #[display(" ")]
    #[default]
    Empty,
    #[display("#")]
    Wall,
    /// Destructible while the traveler has the breaker ability.
    #[display("X")]
    Obstacle,
    #[display("$")]
    Goal,
    /// Toggles the breaker ability on entry.
    #[display("B")]
    Breaker,
    /// Toggles the inverter ability on entry.
    #[display("I")]
    Inverter,
    /// Relocates the traveler to the other teleporter on entry.
    #[display("T")]
    Teleporter,
    #[display("S")]
    South,
    #[display("E")]
    East,
    #[display("N")]
    North,
    #[display("W")]
    West,
    #[display("@")]
    Start,
}

impl DisplayWidth for Cell {
    const DISPLAY_WIDTH: usize = 1;
}

impl Cell {
    /// The heading imposed on a traveler standing on this cell, if any.
    pub fn forced_heading(self) -> Option<Direction> {
        match self {
            Cell::South => Some(Direction::South),
            Cell::East => Some(Direction::East),
            Cell::North => Some(Direction::North),
            Cell::West => Some(Direction::West),
            _ => None,
        }
    }

    /// Classify this cell as a movement target.
    ///
    /// Obstacles are passable only while `breaker` is set.
    pub fn traversable(self, breaker: bool) -> Traversable {
        match self {
            Cell::Wall => Traversable::Obstructed,
            Cell::Obstacle if !breaker => Traversable::Obstructed,
            Cell::Goal => Traversable::Halt,
            _ => Traversable::Free,
        }
    }
}
