use crate::geometry::{Direction, Point};

/// One committed step: where the traveler ended up, and the heading that took it there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, parse_display::Display)]
#[display("{heading} -> {position}")]
pub struct PathStep {
    pub position: Point,
    pub heading: Direction,
}

impl PathStep {
    pub fn new(position: Point, heading: Direction) -> PathStep {
        PathStep { position, heading }
    }
}

/// Append-only log of the steps of one traversal attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathRecorder {
    steps: Vec<PathStep>,
}

impl PathRecorder {
    pub fn new() -> PathRecorder {
        PathRecorder::default()
    }

    pub fn record(&mut self, step: PathStep) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    pub fn last(&self) -> Option<&PathStep> {
        self.steps.last()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The headings taken, in order.
    pub fn headings(&self) -> impl '_ + Iterator<Item = Direction> {
        self.steps.iter().map(|step| step.heading)
    }

    /// Forget every recorded step.
    pub fn clear(&mut self) {
        self.steps.clear();
    }
}
