use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine, Points},
        Block, Borders, Paragraph, Widget,
    },
};

use crate::{input::to_widget, App};

const HORIZONTAL_MARGIN: u16 = 2;
const PANEL_HEIGHT: u16 = 4;

const SPARK_COLORS: [Color; 7] = [
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Green,
    Color::Red,
    Color::Blue,
    Color::LightYellow,
];

fn chunks(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([Constraint::Min(3), Constraint::Length(PANEL_HEIGHT)])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Inner area of the bordered drawing canvas, where mouse input is accepted
pub fn canvas_area(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(chunks(area)[0])
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [canvas_chunk, panel_chunk] = chunks(area);
        let scene = &self.scene;
        let theme = scene.theme;

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let (x_bounds, y_bounds) = self.viewport.bounds();
        let frame = Block::default()
            .borders(Borders::ALL)
            .title(" circlet ")
            .title_alignment(Alignment::Center);

        Canvas::default()
            .block(frame)
            .background_color(theme.background())
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for segment in &scene.segments {
                    let (x1, y1) = to_widget(segment.from);
                    let (x2, y2) = to_widget(segment.to);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: segment.color,
                    });
                }

                if let Some(dot) = scene.dot {
                    let (x, y) = to_widget(dot.center);
                    // concentric rings fill the dot at any scale
                    let mut radius = dot.radius;
                    while radius > 0.0 {
                        ctx.draw(&Circle {
                            x,
                            y,
                            radius,
                            color: dot.color,
                        });
                        radius -= 1.0;
                    }
                    ctx.draw(&Points {
                        coords: &[(x, y)],
                        color: dot.color,
                    });
                }

                if self.celebration.is_active {
                    ctx.layer();
                    for spark in &self.celebration.sparks {
                        let (x, y) = to_widget(spark.position);
                        let color = SPARK_COLORS[spark.color_index % SPARK_COLORS.len()];
                        let style = if spark.life() > 0.5 {
                            Style::default().fg(color).add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(color)
                        };
                        ctx.print(x, y, Span::styled(spark.symbol.to_string(), style));
                    }
                }
            })
            .render(canvas_chunk, buf);

        let feedback = match scene.feedback_message() {
            Some(message) => Span::styled(
                message.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::raw(""),
        };

        let panel = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("score ", dim_style),
                Span::styled(scene.score_text.clone(), bold_style),
                Span::styled("   best ", dim_style),
                Span::styled(
                    scene.best_score_text.clone(),
                    Style::default().fg(Color::Magenta).patch(bold_style),
                ),
            ]),
            Line::from(vec![
                Span::styled("difficulty ", dim_style),
                Span::raw(scene.level.to_string()),
                Span::styled("   theme ", dim_style),
                Span::raw(theme.to_string()),
            ]),
            Line::from(feedback),
            Line::from(Span::styled(
                "(drag) draw / (1-3, d)ifficulty / (t)heme / (r)eset / (esc)ape",
                italic_style,
            )),
        ])
        .alignment(Alignment::Center);

        panel.render(panel_chunk, buf);
    }
}
