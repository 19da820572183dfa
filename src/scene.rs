use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::difficulty::DifficultyLevel;
use crate::geometry::Point;
use crate::render::{FeedbackSlot, Renderer};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub center: Point,
    pub radius: f64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
}

/// Everything the terminal UI draws, kept between frames
#[derive(Debug, Clone)]
pub struct Scene {
    pub dot: Option<Dot>,
    pub segments: Vec<Segment>,
    pub score_text: String,
    pub best_score_text: String,
    pub feedback: FeedbackSlot,
    pub level: DifficultyLevel,
    pub theme: Theme,
    /// Time of the event being drawn; feedback deadlines count from here
    clock: Instant,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            dot: None,
            segments: Vec::new(),
            score_text: String::from("--"),
            best_score_text: String::from("--"),
            feedback: FeedbackSlot::default(),
            level: DifficultyLevel::default(),
            theme: Theme::default(),
            clock: Instant::now(),
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_to(&mut self, now: Instant) {
        self.clock = now;
    }

    /// Drops feedback whose time is up. Returns true if the scene changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.advance_to(now);
        self.feedback.expire(now)
    }

    pub fn feedback_message(&self) -> Option<&str> {
        self.feedback.message()
    }
}

impl Renderer for Scene {
    fn clear_canvas(&mut self) {
        self.dot = None;
        self.segments.clear();
    }

    fn draw_reference_dot(&mut self, center: Point, radius: f64, color: Color) {
        self.dot = Some(Dot {
            center,
            radius,
            color,
        });
    }

    fn draw_path_segment(&mut self, from: Point, to: Point, color: Color) {
        self.segments.push(Segment { from, to, color });
    }

    fn show_score(&mut self, text: &str) {
        self.score_text = text.to_string();
    }

    fn show_feedback(&mut self, message: &str, duration: Duration) {
        self.feedback.show_at(message, duration, self.clock);
    }

    fn show_best_score(&mut self, text: &str) {
        self.best_score_text = text.to_string();
    }

    fn show_status(&mut self, level: DifficultyLevel, theme: Theme) {
        self.level = level;
        self.theme = theme;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_removes_dot_and_path_but_keeps_labels() {
        let mut scene = Scene::new();
        scene.draw_reference_dot(Point::new(200.0, 200.0), 6.0, Color::Red);
        scene.draw_path_segment(Point::new(0.0, 0.0), Point::new(1.0, 1.0), Color::White);
        scene.show_score("42.00%");
        scene.show_best_score("42.00%");

        scene.clear_canvas();

        assert_eq!(scene.dot, None);
        assert!(scene.segments.is_empty());
        assert_eq!(scene.score_text, "42.00%");
        assert_eq!(scene.best_score_text, "42.00%");
    }

    #[test]
    fn feedback_clears_on_tick_after_duration() {
        let t0 = Instant::now();
        let mut scene = Scene::new();
        scene.advance_to(t0);
        scene.show_feedback("hi", Duration::from_millis(100));
        assert_eq!(scene.feedback_message(), Some("hi"));

        assert!(!scene.on_tick(t0 + Duration::from_millis(99)));
        assert_eq!(scene.feedback_message(), Some("hi"));

        assert!(scene.on_tick(t0 + Duration::from_millis(100)));
        assert_eq!(scene.feedback_message(), None);
    }

    #[test]
    fn feedback_counts_from_the_scene_clock() {
        let later = Instant::now() + Duration::from_secs(30);
        let mut scene = Scene::new();
        scene.advance_to(later);
        scene.show_feedback("late", Duration::from_secs(2));

        assert!(!scene.on_tick(later + Duration::from_secs(1)));
        assert_eq!(scene.feedback_message(), Some("late"));
    }

    #[test]
    fn starts_with_placeholders() {
        let scene = Scene::default();
        assert_eq!(scene.score_text, "--");
        assert_eq!(scene.best_score_text, "--");
        assert_eq!(scene.feedback_message(), None);
    }
}
