use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::difficulty::DifficultyLevel;
use crate::geometry::Point;
use crate::theme::Theme;

/// How long a feedback message stays up unless configured otherwise
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Display boundary driven by the game session.
///
/// Implementations only draw; they never feed anything back into scoring.
pub trait Renderer {
    fn clear_canvas(&mut self);
    fn draw_reference_dot(&mut self, center: Point, radius: f64, color: Color);
    fn draw_path_segment(&mut self, from: Point, to: Point, color: Color);
    fn show_score(&mut self, text: &str);
    /// Transient message, gone after `duration`
    fn show_feedback(&mut self, message: &str, duration: Duration);
    fn show_best_score(&mut self, text: &str);
    fn show_status(&mut self, _level: DifficultyLevel, _theme: Theme) {}
}

/// A message that disappears on its own once its time is up
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedbackSlot {
    message: Option<String>,
    expires_at: Option<Instant>,
}

impl FeedbackSlot {
    pub fn show_at(&mut self, message: &str, duration: Duration, now: Instant) {
        self.message = Some(message.to_string());
        self.expires_at = Some(now + duration);
    }

    /// Clears the message if it has expired. Returns true when something was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) if now >= deadline => {
                self.message = None;
                self.expires_at = None;
                true
            }
            _ => false,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearCanvas,
    ReferenceDot {
        center: Point,
        radius: f64,
        color: Color,
    },
    PathSegment {
        from: Point,
        to: Point,
        color: Color,
    },
    Score(String),
    Feedback {
        message: String,
        duration: Duration,
    },
    BestScore(String),
    Status(DifficultyLevel, Theme),
}

/// Renderer that keeps every call, for headless runs and tests
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_score(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Score(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn last_best_score(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::BestScore(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn feedback_messages(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Feedback { message, .. } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::PathSegment { .. }))
            .count()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn clear_canvas(&mut self) {
        self.commands.push(RenderCommand::ClearCanvas);
    }

    fn draw_reference_dot(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(RenderCommand::ReferenceDot {
            center,
            radius,
            color,
        });
    }

    fn draw_path_segment(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(RenderCommand::PathSegment { from, to, color });
    }

    fn show_score(&mut self, text: &str) {
        self.commands.push(RenderCommand::Score(text.to_string()));
    }

    fn show_feedback(&mut self, message: &str, duration: Duration) {
        self.commands.push(RenderCommand::Feedback {
            message: message.to_string(),
            duration,
        });
    }

    fn show_best_score(&mut self, text: &str) {
        self.commands.push(RenderCommand::BestScore(text.to_string()));
    }

    fn show_status(&mut self, level: DifficultyLevel, theme: Theme) {
        self.commands.push(RenderCommand::Status(level, theme));
    }
}
