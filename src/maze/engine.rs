use super::{
    cycle::{CycleDetection, CycleDetector},
    modifier, Grid, PathRecorder, PathStep, Traveler,
};
use crate::geometry::{map::Traversable, Direction};
use itertools::Itertools;
use std::fmt;
use tracing::{debug, trace};

/// State of the directional state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    HeadSouth,
    HeadEast,
    HeadNorth,
    HeadWest,
    /// The current heading is blocked, or there is none yet.
    ChooseFallback,
    ReachedGoal,
    DetectedLoop,
}

impl State {
    /// The heading this state travels in, if it is a heading state.
    pub fn heading(self) -> Option<Direction> {
        match self {
            State::HeadSouth => Some(Direction::South),
            State::HeadEast => Some(Direction::East),
            State::HeadNorth => Some(Direction::North),
            State::HeadWest => Some(Direction::West),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, State::ReachedGoal | State::DetectedLoop)
    }
}

impl From<Direction> for State {
    fn from(direction: Direction) -> State {
        match direction {
            Direction::South => State::HeadSouth,
            Direction::East => State::HeadEast,
            Direction::North => State::HeadNorth,
            Direction::West => State::HeadWest,
        }
    }
}

/// Terminal result of a traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The goal was reached; these are the headings taken, in order.
    Reached(Vec<Direction>),
    /// The traversal can never reach the goal.
    Loop,
}

impl fmt::Display for Outcome {
    /// One heading per line, or `LOOP`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Reached(headings) => write!(f, "{}", headings.iter().join("\n")),
            Outcome::Loop => write!(f, "LOOP"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid has no start marker")]
    MissingStart,
}

/// One traveler making its way through one grid.
///
/// The traversal owns the grid, so obstacle destruction never leaks out of a run.
#[derive(Debug, Clone)]
pub struct Traversal {
    grid: Grid,
    traveler: Traveler,
    path: PathRecorder,
    detector: CycleDetector,
    state: State,
}

impl Traversal {
    /// Prepare a traversal with exact cycle detection.
    pub fn new(grid: Grid) -> Result<Traversal, Error> {
        Self::with_detection(grid, CycleDetection::default())
    }

    /// Prepare a traversal with the given cycle detection strategy.
    pub fn with_detection(grid: Grid, detection: CycleDetection) -> Result<Traversal, Error> {
        let start = grid.start().ok_or(Error::MissingStart)?;
        let detector = CycleDetector::new(detection, &grid);
        Ok(Traversal {
            grid,
            traveler: Traveler::new(start),
            path: PathRecorder::new(),
            detector,
            state: State::ChooseFallback,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn traveler(&self) -> &Traveler {
        &self.traveler
    }

    pub fn path(&self) -> &PathRecorder {
        &self.path
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Perform a single transition and return the new state.
    ///
    /// Terminal states are absorbing.
    pub fn step(&mut self) -> State {
        let next = match (self.state, self.state.heading()) {
            (State::ReachedGoal | State::DetectedLoop, _) => self.state,
            (_, Some(heading)) => self.head(heading),
            (_, None) => self.choose_fallback(),
        };
        trace!(from = ?self.state, to = ?next, position = %self.traveler.position, "transition");
        self.state = next;
        next
    }

    /// Drive the traversal to a terminal state.
    pub fn run(mut self) -> Outcome {
        debug!(
            start = %self.traveler.position,
            width = self.grid.width(),
            height = self.grid.height(),
            obstacles = self.grid.obstacle_count(),
            detection = %self.detector.strategy(),
            "starting traversal"
        );
        while !self.state.is_terminal() {
            self.step();
        }

        match self.state {
            State::ReachedGoal => {
                debug!(steps = self.path.len(), "reached goal");
                Outcome::Reached(self.path.headings().collect())
            }
            _ => {
                debug!(
                    steps = self.path.len(),
                    path = %self.path.steps().iter().join(", "),
                    "loop detected; discarding path"
                );
                self.path.clear();
                Outcome::Loop
            }
        }
    }

    /// Evaluate the fallback headings against the current position without moving.
    fn choose_fallback(&self) -> State {
        let breaker = self.traveler.breaker;
        self.traveler
            .fallback_order()
            .find(|&heading| {
                let candidate = self.traveler.peek(heading);
                self.grid.traversable_at(candidate, breaker) != Traversable::Obstructed
            })
            .map(State::from)
            .unwrap_or(State::DetectedLoop)
    }

    /// Attempt to move one step in `heading`.
    fn head(&mut self, heading: Direction) -> State {
        let candidate = self.traveler.peek(heading);

        match self.grid.traversable_at(candidate, self.traveler.breaker) {
            Traversable::Obstructed => return State::ChooseFallback,
            Traversable::Halt => {
                // the goal is never entered; only the heading which reaches it is kept
                self.traveler.heading = Some(heading);
                self.path.record(PathStep::new(self.traveler.position, heading));
                return State::ReachedGoal;
            }
            Traversable::Free => {}
        }

        if self.grid.destroy(candidate) {
            debug!(at = %candidate, "destroyed obstacle");
            self.detector.invalidate();
        }

        self.traveler.advance(heading);
        self.path.record(PathStep::new(candidate, heading));
        if self.detector.observe(&self.traveler, &self.path) {
            return State::DetectedLoop;
        }

        if let Some(modifier) = modifier::resolve(&self.grid, &mut self.traveler) {
            trace!(?modifier, at = %candidate, "modifier");
        }

        self.grid
            .kind_at(self.traveler.position)
            .forced_heading()
            .unwrap_or(heading)
            .into()
    }
}

impl fmt::Display for Traversal {
    /// The grid, with the traveler drawn as `+`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (point, cell) in self.grid.iter() {
            if point == self.traveler.position {
                write!(f, "+")?;
            } else {
                write!(f, "{}", cell)?;
            }
            if point.x == self.grid.high_x() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::Point, maze::Cell};
    use std::convert::TryFrom;

    fn traversal(text: &str) -> Traversal {
        let grid = <Grid as TryFrom<&str>>::try_from(text).unwrap();
        Traversal::new(grid).unwrap()
    }

    fn run_to_end(traversal: &mut Traversal) -> State {
        while !traversal.state().is_terminal() {
            traversal.step();
        }
        traversal.state()
    }

    #[test]
    fn test_fallback_does_not_move() {
        let mut traversal = traversal("###\n#@ \n###\n");
        assert_eq!(traversal.state(), State::ChooseFallback);
        assert_eq!(traversal.step(), State::HeadEast);
        assert_eq!(traversal.traveler().position, Point::new(1, 1));
        assert!(traversal.path().is_empty());
    }

    #[test]
    fn test_goal_step_records_heading_without_entering() {
        let mut traversal = traversal("#####\n#@ $#\n#####\n");
        assert_eq!(run_to_end(&mut traversal), State::ReachedGoal);
        assert_eq!(
            traversal.path().steps(),
            &[
                PathStep::new(Point::new(2, 1), Direction::East),
                PathStep::new(Point::new(2, 1), Direction::East),
            ]
        );
        assert_eq!(traversal.traveler().position, Point::new(2, 1));
    }

    #[test]
    fn test_enclosed_start_is_a_loop() {
        let traversal = traversal("###\n#@#\n###\n");
        assert_eq!(traversal.run(), Outcome::Loop);
    }

    #[test]
    fn test_terminal_states_absorb() {
        let mut traversal = traversal("###\n#@#\n###\n");
        assert_eq!(run_to_end(&mut traversal), State::DetectedLoop);
        assert_eq!(traversal.step(), State::DetectedLoop);
    }

    #[test]
    fn test_missing_start() {
        let grid = <Grid as TryFrom<&str>>::try_from("# $\n").unwrap();
        assert!(matches!(Traversal::new(grid), Err(Error::MissingStart)));
    }

    #[test]
    fn test_breaker_toggles_on_each_visit() {
        let mut traversal = traversal("#####\n#@B #\n#####\n");
        assert_eq!(traversal.step(), State::HeadEast);
        assert_eq!(traversal.step(), State::HeadEast);
        assert_eq!(traversal.traveler().position, Point::new(2, 1));
        assert!(traversal.traveler().breaker);
        assert_eq!(traversal.step(), State::HeadEast);
        assert_eq!(traversal.step(), State::ChooseFallback);
        assert_eq!(traversal.step(), State::HeadWest);
        assert_eq!(traversal.step(), State::HeadWest);
        assert_eq!(traversal.traveler().position, Point::new(2, 1));
        assert!(!traversal.traveler().breaker);
    }

    #[test]
    fn test_destroyed_obstacle_stays_open_without_breaker() {
        const GRID: &str = "
#######
#@BX S#
###NBW#
#######
";
        let mut traversal = traversal(GRID);
        assert_eq!(run_to_end(&mut traversal), State::DetectedLoop);
        assert_eq!(traversal.grid().kind_at(Point::new(3, 1)), Cell::Empty);
        let steps = traversal.path().steps();
        let crossing = steps
            .iter()
            .position(|step| *step == PathStep::new(Point::new(3, 1), Direction::North))
            .expect("traveler re-crosses the destroyed obstacle heading north");
        // the second breaker cell was crossed just before, switching the ability off
        assert!(steps[..crossing].contains(&PathStep::new(Point::new(4, 2), Direction::West)));
    }

    #[test]
    fn test_inverter_prefers_west() {
        const GRID: &str = "
#####
#@I #
##  #
#####
";
        let mut traversal = traversal(GRID);
        // fallback, I, (3,1), blocked, fallback
        for _ in 0..5 {
            traversal.step();
        }
        assert!(traversal.traveler().inverter);
        assert_eq!(traversal.state(), State::HeadWest);
    }

    #[test]
    fn test_forced_cell_changes_heading_without_extra_step() {
        let mut traversal = traversal("#####\n#@ S#\n### #\n###$#\n");
        assert_eq!(run_to_end(&mut traversal), State::ReachedGoal);
        assert_eq!(
            traversal.path().headings().collect::<Vec<_>>(),
            vec![
                Direction::East,
                Direction::East,
                Direction::South,
                Direction::South
            ]
        );
    }

    #[test]
    fn test_display_marks_traveler() {
        let mut traversal = traversal("####\n#@ #\n####\n");
        assert_eq!(traversal.to_string(), "####\n#+ #\n####\n");
        traversal.step();
        traversal.step();
        assert_eq!(traversal.to_string(), "####\n#@+#\n####\n");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Loop.to_string(), "LOOP");
        assert_eq!(
            Outcome::Reached(vec![Direction::South, Direction::East]).to_string(),
            "SOUTH\nEAST"
        );
    }
}
