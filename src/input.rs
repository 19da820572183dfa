//! Terminal input to game events.
//!
//! Mouse positions arrive as terminal cells. The drawing canvas is a fixed
//! logical square (`canvas_size` units a side) scaled uniformly into the
//! canvas area, with each cell counted as 2 x 4 sub-units so that a round
//! gesture stays round despite tall terminal cells.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::capture::CaptureEvent;
use crate::difficulty::DifficultyLevel;
use crate::geometry::Point;

const SUB_X: f64 = 2.0;
const SUB_Y: f64 = 4.0;

/// Maps terminal cells onto the logical canvas square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    area: Rect,
    canvas_size: f64,
}

impl Viewport {
    pub fn new(area: Rect, canvas_size: f64) -> Self {
        Self { area, canvas_size }
    }

    fn sub_width(&self) -> f64 {
        self.area.width as f64 * SUB_X
    }

    fn sub_height(&self) -> f64 {
        self.area.height as f64 * SUB_Y
    }

    /// Logical units per sub-unit, `None` for an empty area
    fn scale(&self) -> Option<f64> {
        let side = self.sub_width().min(self.sub_height());
        (side > 0.0).then(|| self.canvas_size / side)
    }

    /// Sub-unit offsets of the square's top-left corner inside the area
    fn offset(&self) -> (f64, f64) {
        let side = self.sub_width().min(self.sub_height());
        (
            (self.sub_width() - side) / 2.0,
            (self.sub_height() - side) / 2.0,
        )
    }

    /// Center of the cell at (`column`, `row`) on the logical canvas, or `None`
    /// when the cell lies outside the square.
    pub fn to_logical(&self, column: u16, row: u16) -> Option<Point> {
        let scale = self.scale()?;
        if column < self.area.x
            || row < self.area.y
            || column >= self.area.right()
            || row >= self.area.bottom()
        {
            return None;
        }

        let (offset_x, offset_y) = self.offset();
        let sub_x = (column - self.area.x) as f64 * SUB_X + SUB_X / 2.0;
        let sub_y = (row - self.area.y) as f64 * SUB_Y + SUB_Y / 2.0;
        let point = Point::new((sub_x - offset_x) * scale, (sub_y - offset_y) * scale);

        let inside = (0.0..=self.canvas_size).contains(&point.x)
            && (0.0..=self.canvas_size).contains(&point.y);
        inside.then_some(point)
    }

    /// Canvas widget bounds covering the whole area. The widget's y axis points
    /// up, so logical points are drawn at `(x, -y)`.
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        let Some(scale) = self.scale() else {
            return ([0.0, self.canvas_size], [-self.canvas_size, 0.0]);
        };
        let (offset_x, offset_y) = self.offset();
        (
            [-offset_x * scale, (self.sub_width() - offset_x) * scale],
            [-(self.sub_height() - offset_y) * scale, offset_y * scale],
        )
    }
}

/// Logical canvas point to canvas widget coordinates
pub fn to_widget(p: Point) -> (f64, f64) {
    (p.x, -p.y)
}

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Quit,
    Capture(CaptureEvent),
}

pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }

    let event = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Some(KeyAction::Quit),
        KeyCode::Char('r') => CaptureEvent::Reset,
        KeyCode::Char('d') => CaptureEvent::CycleDifficulty,
        KeyCode::Char('1') => CaptureEvent::SetDifficulty(DifficultyLevel::Easy),
        KeyCode::Char('2') => CaptureEvent::SetDifficulty(DifficultyLevel::Medium),
        KeyCode::Char('3') => CaptureEvent::SetDifficulty(DifficultyLevel::Hardcore),
        KeyCode::Char('t') => CaptureEvent::ToggleTheme,
        _ => return None,
    };
    Some(KeyAction::Capture(event))
}

/// Left button press starts, drag samples, release stops. Dragging off the
/// canvas square counts as leaving the capture region.
pub fn capture_event_for(mouse: &MouseEvent, viewport: &Viewport) -> Option<CaptureEvent> {
    let position = viewport.to_logical(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => position.map(CaptureEvent::Start),
        MouseEventKind::Drag(MouseButton::Left) => {
            Some(position.map_or(CaptureEvent::Leave, CaptureEvent::Sample))
        }
        MouseEventKind::Up(MouseButton::Left) => Some(CaptureEvent::Stop),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn square_area_maps_cell_centers() {
        // 50 x 25 cells is 100 x 100 sub-units, so 4 logical units each
        let viewport = Viewport::new(Rect::new(0, 0, 50, 25), 400.0);

        assert_eq!(viewport.to_logical(0, 0), Some(Point::new(4.0, 8.0)));
        assert_eq!(viewport.to_logical(25, 12), Some(Point::new(204.0, 200.0)));
        assert_eq!(viewport.to_logical(49, 24), Some(Point::new(396.0, 392.0)));
    }

    #[test]
    fn wide_area_centers_the_square() {
        // 100 x 25 cells: 200 x 100 sub-units, square spans sub-x 50..150
        let viewport = Viewport::new(Rect::new(10, 5, 100, 25), 400.0);

        assert_eq!(viewport.to_logical(10, 5), None);
        assert_eq!(viewport.to_logical(34, 5), None);
        assert_eq!(viewport.to_logical(35, 5), Some(Point::new(4.0, 8.0)));
        assert_eq!(viewport.to_logical(84, 29), Some(Point::new(396.0, 392.0)));
        assert_eq!(viewport.to_logical(85, 29), None);
    }

    #[test]
    fn cells_outside_area_are_ignored() {
        let viewport = Viewport::new(Rect::new(10, 5, 50, 25), 400.0);
        assert_eq!(viewport.to_logical(9, 10), None);
        assert_eq!(viewport.to_logical(20, 4), None);
        assert_eq!(viewport.to_logical(60, 10), None);
        assert_eq!(viewport.to_logical(20, 30), None);
    }

    #[test]
    fn empty_area_maps_nothing() {
        let viewport = Viewport::new(Rect::new(0, 0, 0, 0), 400.0);
        assert_eq!(viewport.to_logical(0, 0), None);
        assert_eq!(viewport.bounds(), ([0.0, 400.0], [-400.0, 0.0]));
    }

    #[test]
    fn bounds_cover_the_whole_area() {
        let viewport = Viewport::new(Rect::new(0, 0, 100, 25), 400.0);
        let (x_bounds, y_bounds) = viewport.bounds();
        assert_eq!(x_bounds, [-200.0, 600.0]);
        assert_eq!(y_bounds, [-400.0, 0.0]);
    }

    #[test]
    fn mouse_gestures_become_capture_events() {
        let viewport = Viewport::new(Rect::new(0, 0, 50, 25), 400.0);

        assert_matches!(
            capture_event_for(&mouse(MouseEventKind::Down(MouseButton::Left), 25, 12), &viewport),
            Some(CaptureEvent::Start(_))
        );
        assert_matches!(
            capture_event_for(&mouse(MouseEventKind::Drag(MouseButton::Left), 26, 12), &viewport),
            Some(CaptureEvent::Sample(_))
        );
        assert_eq!(
            capture_event_for(&mouse(MouseEventKind::Up(MouseButton::Left), 26, 12), &viewport),
            Some(CaptureEvent::Stop)
        );
        assert_eq!(
            capture_event_for(&mouse(MouseEventKind::Moved, 26, 12), &viewport),
            None
        );
        assert_eq!(
            capture_event_for(&mouse(MouseEventKind::Down(MouseButton::Right), 26, 12), &viewport),
            None
        );
    }

    #[test]
    fn dragging_off_canvas_leaves() {
        let viewport = Viewport::new(Rect::new(0, 0, 50, 25), 400.0);
        assert_eq!(
            capture_event_for(&mouse(MouseEventKind::Drag(MouseButton::Left), 70, 12), &viewport),
            Some(CaptureEvent::Leave)
        );
        // pressing outside the canvas starts nothing
        assert_eq!(
            capture_event_for(&mouse(MouseEventKind::Down(MouseButton::Left), 70, 12), &viewport),
            None
        );
    }

    #[test]
    fn keys_map_to_actions() {
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(key_action(key(KeyCode::Esc)), Some(KeyAction::Quit));
        assert_eq!(key_action(key(KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(
            key_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            key_action(key(KeyCode::Char('3'))),
            Some(KeyAction::Capture(CaptureEvent::SetDifficulty(
                DifficultyLevel::Hardcore
            )))
        );
        assert_eq!(
            key_action(key(KeyCode::Char('t'))),
            Some(KeyAction::Capture(CaptureEvent::ToggleTheme))
        );
        assert_eq!(
            key_action(key(KeyCode::Char('r'))),
            Some(KeyAction::Capture(CaptureEvent::Reset))
        );
        assert_eq!(key_action(key(KeyCode::Char('x'))), None);
    }
}
