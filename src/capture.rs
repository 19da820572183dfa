use crate::difficulty::DifficultyLevel;
use crate::geometry::Point;
use crate::theme::Theme;

/// Input the game session reacts to, independent of any input device
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaptureEvent {
    Start(Point),
    Sample(Point),
    Stop,
    /// Pointer left the drawing region; handled exactly like `Stop`
    Leave,
    SetDifficulty(DifficultyLevel),
    CycleDifficulty,
    SetTheme(Theme),
    ToggleTheme,
    Reset,
}
