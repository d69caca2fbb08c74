//! Maze-specific queries over a [`Map`] of [`Cell`]s.

use super::Cell;
use crate::geometry::{map::Traversable, Map, Point};

/// The maze grid.
pub type Grid = Map<Cell>;

impl Map<Cell> {
    /// Kind of the cell at `point`.
    ///
    /// Points outside the grid read as [`Cell::Empty`]: open space, never a wall,
    /// obstacle, or goal.
    pub fn kind_at(&self, point: Point) -> Cell {
        self.get(point).copied().unwrap_or_default()
    }

    /// Classify `point` as a movement target for a traveler with the given breaker ability.
    ///
    /// The traveler never commits a move off the grid, so points outside it are
    /// obstructed for movement even though [`kind_at`][Self::kind_at] reads them as empty.
    pub fn traversable_at(&self, point: Point, breaker: bool) -> Traversable {
        if !self.in_bounds(point) {
            return Traversable::Obstructed;
        }
        self.kind_at(point).traversable(breaker)
    }

    /// Turn the obstacle at `point` into open space.
    ///
    /// Returns `false` and changes nothing if the cell was not an obstacle.
    pub fn destroy(&mut self, point: Point) -> bool {
        match self.get_mut(point) {
            Some(cell) if *cell == Cell::Obstacle => {
                *cell = Cell::Empty;
                true
            }
            _ => false,
        }
    }

    /// Position of the start marker.
    pub fn start(&self) -> Option<Point> {
        self.find_first(|cell| *cell == Cell::Start, None)
    }

    /// Position of the first teleporter, in row-major order, other than `from`.
    pub fn teleport_partner(&self, from: Point) -> Option<Point> {
        self.find_first(|cell| *cell == Cell::Teleporter, Some(from))
    }

    /// Number of obstacle cells still standing.
    pub fn obstacle_count(&self) -> usize {
        self.iter()
            .filter(|(_, cell)| **cell == Cell::Obstacle)
            .count()
    }
}
