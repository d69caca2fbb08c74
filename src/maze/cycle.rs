use super::{Grid, PathRecorder, PathStep, Traveler};
use crate::geometry::{Direction, Point};
use bitvec::{bitvec, vec::BitVec};
use serde::{Deserialize, Serialize};

/// How a traversal decides that it will never reach the goal.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    parse_display::Display,
    parse_display::FromStr,
)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum CycleDetection {
    /// Exact: a loop is declared when the full traveler state repeats on an unchanged grid.
    #[default]
    State,
    /// Heuristic: a loop is declared when the trailing path segment repeats the one
    /// before it, keyed on position only. Exact detection still runs alongside.
    Segment,
}

/// Number of distinct `(heading, breaker, inverter)` combinations per cell.
const STATES_PER_CELL: usize = Direction::COUNT * 2 * 2;

/// Watches a traversal for repetition.
///
/// The exact check marks each `(position, heading, breaker, inverter)` state seen
/// since the grid last changed. Since the traversal is deterministic, seeing one
/// twice on the same grid proves a loop. Obstacle destruction is monotonic and
/// bounded by the starting `obstacle_count`, so clearing the marks on each
/// destruction still guarantees termination.
#[derive(Debug, Clone)]
pub struct CycleDetector {
    strategy: CycleDetection,
    width: usize,
    seen: BitVec,
}

impl CycleDetector {
    pub fn new(strategy: CycleDetection, grid: &Grid) -> CycleDetector {
        CycleDetector {
            strategy,
            width: grid.width(),
            seen: bitvec![0; grid.area() * STATES_PER_CELL],
        }
    }

    pub fn strategy(&self) -> CycleDetection {
        self.strategy
    }

    /// The grid changed; states seen so far no longer predict the future.
    pub fn invalidate(&mut self) {
        self.seen.fill(false);
    }

    /// Inspect the traversal just after a committed step.
    ///
    /// Returns `true` when the traversal is proven (or, for the segment heuristic,
    /// judged) to be looping.
    pub fn observe(&mut self, traveler: &Traveler, path: &PathRecorder) -> bool {
        let repeated_state = self.mark(traveler, path);
        match self.strategy {
            CycleDetection::State => repeated_state,
            CycleDetection::Segment => {
                repeated_state || repeats_trailing_segment(path.steps(), traveler.position)
            }
        }
    }

    /// Mark the current state, returning whether it was already marked.
    fn mark(&mut self, traveler: &Traveler, path: &PathRecorder) -> bool {
        let Some(heading) = path.last().map(|step| step.heading) else {
            return false;
        };
        let Some(index) = self.state_index(traveler, heading) else {
            return false;
        };
        let seen = self.seen[index];
        self.seen.set(index, true);
        seen
    }

    fn state_index(&self, traveler: &Traveler, heading: Direction) -> Option<usize> {
        let Point { x, y } = traveler.position;
        if x < 0 || y < 0 || x as usize >= self.width {
            return None;
        }
        let cell = x as usize + y as usize * self.width;
        let index = ((cell * Direction::COUNT + heading.index()) * 2 + traveler.breaker as usize)
            * 2
            + traveler.inverter as usize;
        (index < self.seen.len()).then_some(index)
    }
}

/// Position-keyed trailing-segment repetition test.
///
/// Scanning backward from the newest step (which must sit at `position`), find the
/// nearest earlier step at `position`. The newest run is the newest step plus every
/// step after that occurrence; the prior run is that occurrence plus every step back
/// to, but excluding, the occurrence before it. The oldest recorded step never takes
/// part in the scan.
///
/// The runs repeat when they have equal length of at least two and each pair of
/// corresponding steps, compared newest-first, shares at least one coordinate axis.
/// Pairs differing on only one axis therefore still count as matching.
pub fn repeats_trailing_segment(steps: &[PathStep], position: Point) -> bool {
    let newest = match steps.len().checked_sub(1) {
        Some(newest) if newest > 0 => newest,
        _ => return false,
    };
    let at_position = |idx: &usize| steps[*idx].position == position;

    let Some(previous) = (1..newest).rev().find(at_position) else {
        return false;
    };
    let before = (1..previous).rev().find(at_position).unwrap_or(0);

    let newest_run = &steps[previous + 1..=newest];
    let prior_run = &steps[before + 1..=previous];

    newest_run.len() > 1
        && newest_run.len() == prior_run.len()
        && newest_run
            .iter()
            .rev()
            .zip(prior_run.iter().rev())
            .all(|(a, b)| a.position.shares_axis(b.position))
}
