use std::time::Instant;

use crate::difficulty::DifficultyLevel;
use crate::geometry::Point;
use crate::scoring::{self, ScoreResult, MIN_STROKE_POINTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttemptState {
    Idle,
    Capturing,
    /// A result was produced and is waiting to be shown; behaves like `Idle`
    Resolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InsufficientSamples,
}

/// What a `stop` did to the attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StopOutcome {
    /// Nothing was being captured
    Ignored,
    Rejected(Rejection),
    Scored(ScoreResult),
}

/// Owns the stroke being drawn and turns start/sample/stop events into scores.
///
/// Only one attempt exists at a time; a new `start` discards whatever the
/// previous attempt left behind.
#[derive(Debug)]
pub struct AttemptStateMachine {
    center: Point,
    level: DifficultyLevel,
    state: AttemptState,
    stroke: Vec<Point>,
    started_at: Option<Instant>,
}

impl AttemptStateMachine {
    pub fn new(center: Point, level: DifficultyLevel) -> Self {
        Self {
            center,
            level,
            state: AttemptState::Idle,
            stroke: Vec::new(),
            started_at: None,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    pub fn stroke(&self) -> &[Point] {
        &self.stroke
    }

    pub fn is_capturing(&self) -> bool {
        self.state == AttemptState::Capturing
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> AttemptState {
        self.state
    }

    /// Refused while capturing. Returns whether the level was applied.
    pub fn set_difficulty(&mut self, level: DifficultyLevel) -> bool {
        if self.is_capturing() {
            log::debug!("difficulty change to {level} ignored during capture");
            return false;
        }
        self.level = level;
        true
    }

    pub fn start(&mut self, point: Point) -> bool {
        self.start_at(point, Instant::now())
    }

    /// Returns false when an attempt is already being captured.
    pub fn start_at(&mut self, point: Point, now: Instant) -> bool {
        if self.is_capturing() {
            return false;
        }
        self.stroke.clear();
        self.stroke.push(point);
        self.started_at = Some(now);
        self.state = AttemptState::Capturing;
        log::debug!("attempt started at ({:.1}, {:.1})", point.x, point.y);
        true
    }

    /// Returns false when the sample was dropped because nothing is being captured.
    pub fn sample(&mut self, point: Point) -> bool {
        if !self.is_capturing() {
            return false;
        }
        self.stroke.push(point);
        true
    }

    pub fn stop(&mut self) -> StopOutcome {
        self.stop_at(Instant::now())
    }

    pub fn stop_at(&mut self, now: Instant) -> StopOutcome {
        if !self.is_capturing() {
            return StopOutcome::Ignored;
        }

        if self.stroke.len() < MIN_STROKE_POINTS {
            log::debug!(
                "attempt rejected with {} of {} samples",
                self.stroke.len(),
                MIN_STROKE_POINTS
            );
            self.stroke.clear();
            self.started_at = None;
            self.state = AttemptState::Idle;
            return StopOutcome::Rejected(Rejection::InsufficientSamples);
        }

        let elapsed_secs = self
            .started_at
            .map(|started| now.saturating_duration_since(started).as_secs_f64())
            .unwrap_or_default();
        let result = scoring::score(
            &self.stroke,
            self.center,
            elapsed_secs,
            self.level.profile(),
        );
        self.state = AttemptState::Resolved;
        StopOutcome::Scored(result)
    }

    /// Pointer left the capture region; same as `stop`.
    pub fn leave_at(&mut self, now: Instant) -> StopOutcome {
        if self.is_capturing() {
            log::debug!("pointer left the canvas after {} samples", self.stroke.len());
        }
        self.stop_at(now)
    }

    /// Drops the current stroke whatever the state.
    pub fn reset(&mut self) {
        self.stroke.clear();
        self.started_at = None;
        self.state = AttemptState::Idle;
    }
}
