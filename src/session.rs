use std::time::{Duration, Instant};

use crate::attempt::{AttemptStateMachine, StopOutcome};
use crate::best_score::BestScoreTracker;
use crate::capture::CaptureEvent;
use crate::difficulty::DifficultyLevel;
use crate::geometry::Point;
use crate::render::{Renderer, FEEDBACK_DURATION};
use crate::scoring::{ScoreResult, CENTER_OUTSIDE_MESSAGE};
use crate::theme::Theme;

/// Settings a session is created with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub center: Point,
    pub level: DifficultyLevel,
    pub theme: Theme,
    pub feedback_duration: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            center: Point::new(200.0, 200.0),
            level: DifficultyLevel::default(),
            theme: Theme::default(),
            feedback_duration: FEEDBACK_DURATION,
        }
    }
}

/// One player's session: the current attempt, the best score so far, and the
/// cosmetic settings. Every event is handled to completion before the next.
#[derive(Debug)]
pub struct GameSession {
    attempt: AttemptStateMachine,
    best: BestScoreTracker,
    theme: Theme,
    feedback_duration: Duration,
    last_point: Option<Point>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            attempt: AttemptStateMachine::new(config.center, config.level),
            best: BestScoreTracker::new(),
            theme: config.theme,
            feedback_duration: config.feedback_duration,
            last_point: None,
        }
    }

    pub fn center(&self) -> Point {
        self.attempt.center()
    }

    pub fn level(&self) -> DifficultyLevel {
        self.attempt.level()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn best_score(&self) -> Option<f64> {
        self.best.best()
    }

    pub fn is_capturing(&self) -> bool {
        self.attempt.is_capturing()
    }

    /// Paints the initial screen.
    pub fn begin<R: Renderer>(&mut self, renderer: &mut R) {
        renderer.show_best_score(&self.best.display_text());
        renderer.show_status(self.level(), self.theme);
        self.reset_canvas(renderer);
    }

    pub fn handle<R: Renderer>(
        &mut self,
        event: CaptureEvent,
        renderer: &mut R,
    ) -> Option<ScoreResult> {
        self.handle_at(event, Instant::now(), renderer)
    }

    /// Applies one event. Returns the score when the event finished an attempt.
    pub fn handle_at<R: Renderer>(
        &mut self,
        event: CaptureEvent,
        now: Instant,
        renderer: &mut R,
    ) -> Option<ScoreResult> {
        match event {
            CaptureEvent::Start(point) => {
                self.on_start(point, now, renderer);
                None
            }
            CaptureEvent::Sample(point) => {
                self.on_sample(point, renderer);
                None
            }
            CaptureEvent::Stop => {
                let outcome = self.attempt.stop_at(now);
                self.on_stop(outcome, renderer)
            }
            CaptureEvent::Leave => {
                let outcome = self.attempt.leave_at(now);
                self.on_stop(outcome, renderer)
            }
            CaptureEvent::SetDifficulty(level) => {
                self.change_difficulty(level, renderer);
                None
            }
            CaptureEvent::CycleDifficulty => {
                self.change_difficulty(self.level().next(), renderer);
                None
            }
            CaptureEvent::SetTheme(theme) => {
                self.change_theme(theme, renderer);
                None
            }
            CaptureEvent::ToggleTheme => {
                self.change_theme(self.theme.toggled(), renderer);
                None
            }
            CaptureEvent::Reset => {
                self.attempt.reset();
                self.last_point = None;
                self.reset_canvas(renderer);
                None
            }
        }
    }

    fn on_start<R: Renderer>(&mut self, point: Point, now: Instant, renderer: &mut R) {
        if self.attempt.is_capturing() {
            return;
        }
        self.reset_canvas(renderer);
        self.attempt.start_at(point, now);
        self.last_point = Some(point);
    }

    fn on_sample<R: Renderer>(&mut self, point: Point, renderer: &mut R) {
        if !self.attempt.sample(point) {
            return;
        }
        if let Some(previous) = self.last_point {
            if self.level().shows_path() {
                renderer.draw_path_segment(previous, point, self.theme.path_color());
            }
        }
        self.last_point = Some(point);
    }

    fn on_stop<R: Renderer>(
        &mut self,
        outcome: StopOutcome,
        renderer: &mut R,
    ) -> Option<ScoreResult> {
        match outcome {
            StopOutcome::Ignored => None,
            StopOutcome::Rejected(_) => {
                self.last_point = None;
                self.reset_canvas(renderer);
                None
            }
            StopOutcome::Scored(result) => {
                self.last_point = None;
                self.present(&result, renderer);
                Some(result)
            }
        }
    }

    fn present<R: Renderer>(&mut self, result: &ScoreResult, renderer: &mut R) {
        let text = result.display_text();
        renderer.show_score(&text);

        if !result.valid {
            log::info!("attempt scored 0: center outside the stroke");
            renderer.show_feedback(CENTER_OUTSIDE_MESSAGE, self.feedback_duration);
            return;
        }

        if let Some(breakdown) = result.breakdown {
            log::info!(
                "attempt scored {} on {} (roundness {:.2}, time bonus {:.2}, adjustment {:.2})",
                text,
                self.level(),
                breakdown.roundness,
                breakdown.time_bonus,
                breakdown.adjustment
            );
        }
        renderer.show_feedback(&text, self.feedback_duration);

        if self.best.update(result.value) {
            renderer.show_best_score(&self.best.display_text());
        }
    }

    fn change_difficulty<R: Renderer>(&mut self, level: DifficultyLevel, renderer: &mut R) {
        if !self.attempt.set_difficulty(level) {
            return;
        }
        log::debug!("difficulty set to {level}");
        renderer.show_status(level, self.theme);
        self.reset_canvas(renderer);
    }

    fn change_theme<R: Renderer>(&mut self, theme: Theme, renderer: &mut R) {
        if self.attempt.is_capturing() {
            log::debug!("theme change to {theme} ignored during capture");
            return;
        }
        self.theme = theme;
        renderer.show_status(self.level(), theme);
        self.reset_canvas(renderer);
    }

    fn reset_canvas<R: Renderer>(&self, renderer: &mut R) {
        renderer.clear_canvas();
        renderer.draw_reference_dot(
            self.center(),
            self.level().profile().dot_radius,
            self.theme.dot_color(),
        );
        renderer.show_score("--");
    }
}
