//! Turns a finished stroke into a score.
//!
//! The score rewards a stroke whose points keep a constant distance to the
//! reference dot, adds a small bonus for drawing fast, and then pulls the
//! result towards 100 by the difficulty's tolerance factor. Nothing here keeps
//! state; every call is independent.

use crate::difficulty::DifficultyProfile;
use crate::geometry::{contains_point, Point, RadialStats};
use crate::util::format_percent;

/// Strokes shorter than this are discarded without a score.
pub const MIN_STROKE_POINTS: usize = 11;

/// Bonus awarded for an instant stroke; it shrinks by `TIME_BONUS_DECAY` per second.
pub const MAX_TIME_BONUS: f64 = 10.0;
pub const TIME_BONUS_DECAY: f64 = 2.0;

pub const CENTER_OUTSIDE_MESSAGE: &str = "The red dot is not inside your circle!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    CenterOutside,
}

/// Intermediate values of a valid score, kept for display and logging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub roundness: f64,
    pub time_bonus: f64,
    pub raw: f64,
    pub adjustment: f64,
    /// `raw + adjustment`, before the display clamp
    pub unclamped: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreResult {
    /// Final score clamped to `[0, 100]`, not rounded
    pub value: f64,
    pub valid: bool,
    pub reason: Option<InvalidReason>,
    pub breakdown: Option<ScoreBreakdown>,
}

impl ScoreResult {
    fn center_outside() -> Self {
        Self {
            value: 0.0,
            valid: false,
            reason: Some(InvalidReason::CenterOutside),
            breakdown: None,
        }
    }

    pub fn display_text(&self) -> String {
        format_percent(Some(self.value))
    }
}

/// `100 * (1 - σ / r̄)`, floored at 0. A zero mean radius scores 0.
pub fn roundness(stats: &RadialStats) -> f64 {
    if stats.mean_radius <= 0.0 {
        return 0.0;
    }
    (100.0 * (1.0 - stats.std_dev / stats.mean_radius)).max(0.0)
}

pub fn time_bonus(elapsed_secs: f64) -> f64 {
    (MAX_TIME_BONUS - TIME_BONUS_DECAY * elapsed_secs).max(0.0)
}

/// Returns `(adjustment, raw + adjustment)`.
pub fn apply_tolerance(raw: f64, tolerance_factor: f64) -> (f64, f64) {
    let adjustment = (100.0 - raw) * tolerance_factor;
    (adjustment, raw + adjustment)
}

/// Applied after the tolerance adjustment, whatever the tolerance.
pub fn clamp_for_display(value: f64) -> f64 {
    value.min(100.0).max(0.0)
}

pub fn score(
    stroke: &[Point],
    center: Point,
    elapsed_secs: f64,
    profile: &DifficultyProfile,
) -> ScoreResult {
    if !contains_point(stroke, center) {
        return ScoreResult::center_outside();
    }

    let roundness = RadialStats::of(stroke, center)
        .map(|stats| roundness(&stats))
        .unwrap_or(0.0);
    let time_bonus = time_bonus(elapsed_secs);
    let raw = roundness + time_bonus;
    let (adjustment, unclamped) = apply_tolerance(raw, profile.tolerance_factor);

    ScoreResult {
        value: clamp_for_display(unclamped),
        valid: true,
        reason: None,
        breakdown: Some(ScoreBreakdown {
            roundness,
            time_bonus,
            raw,
            adjustment,
            unclamped,
        }),
    }
}
