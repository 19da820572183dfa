use std::f64::consts::TAU;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use circlet::config::Config;
use circlet::runtime::{FixedTicker, GameEvent, Runner, TestEventSource};
use circlet::{App, Flow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

// 50 x 25 cells is a 100 x 100 sub-unit square: 4 canvas units each
const CANVAS: Rect = Rect {
    x: 0,
    y: 0,
    width: 50,
    height: 25,
};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> GameEvent {
    GameEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Cells visited by a circular drag of `radius` canvas units around the middle
fn circular_drag(radius: f64, steps: usize) -> Vec<(u16, u16)> {
    (0..steps)
        .map(|i| {
            let angle = TAU * i as f64 / steps as f64;
            let x = 200.0 + radius * angle.cos();
            let y = 200.0 + radius * angle.sin();
            ((x / 8.0) as u16, (y / 16.0) as u16)
        })
        .collect()
}

fn run_until_idle<E, T>(runner: &Runner<E, T>, app: &mut App, max_steps: u32) -> Flow
where
    E: circlet::runtime::GameEventSource,
    T: circlet::runtime::Ticker,
{
    for _ in 0..max_steps {
        match runner.step() {
            GameEvent::Tick => return Flow::Continue,
            event => {
                if app.on_event(event) == Flow::Quit {
                    return Flow::Quit;
                }
            }
        }
    }
    Flow::Continue
}

#[test]
fn mouse_drawn_circle_is_scored() {
    let mut app = App::new(Config::default(), None);
    app.set_canvas_area(CANVAS);

    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    let cells = circular_drag(120.0, 48);
    tx.send(mouse(MouseEventKind::Down(MouseButton::Left), cells[0].0, cells[0].1))
        .unwrap();
    for &(column, row) in &cells[1..] {
        tx.send(mouse(MouseEventKind::Drag(MouseButton::Left), column, row))
            .unwrap();
    }
    tx.send(mouse(MouseEventKind::Up(MouseButton::Left), cells[0].0, cells[0].1))
        .unwrap();

    assert_eq!(run_until_idle(&runner, &mut app, 200), Flow::Continue);

    assert!(!app.session.is_capturing());
    let best = app.session.best_score().expect("circle around the dot is scored");
    assert!(best > 50.0, "coarse but round drag scored {best}");
    assert!(app.scene.score_text.ends_with('%'));
    assert_eq!(app.scene.best_score_text, app.scene.score_text);
    assert!(!app.scene.segments.is_empty());
}

#[test]
fn drag_off_canvas_finishes_the_attempt() {
    let mut app = App::new(Config::default(), None);
    app.set_canvas_area(CANVAS);

    let cells = circular_drag(120.0, 24);
    app.on_event(mouse(MouseEventKind::Down(MouseButton::Left), cells[0].0, cells[0].1));
    for &(column, row) in &cells[1..] {
        app.on_event(mouse(MouseEventKind::Drag(MouseButton::Left), column, row));
    }
    assert!(app.session.is_capturing());

    app.on_event(mouse(MouseEventKind::Drag(MouseButton::Left), 70, 12));

    assert!(!app.session.is_capturing());
    assert!(app.session.best_score().is_some());
}

#[test]
fn click_without_drag_leaves_no_score() {
    let mut app = App::new(Config::default(), None);
    app.set_canvas_area(CANVAS);

    app.on_event(mouse(MouseEventKind::Down(MouseButton::Left), 25, 12));
    app.on_event(mouse(MouseEventKind::Up(MouseButton::Left), 25, 12));

    assert_eq!(app.scene.score_text, "--");
    assert_eq!(app.scene.feedback_message(), None);
    assert_eq!(app.session.best_score(), None);
}

#[test]
fn feedback_expires_on_tick() {
    let config = Config {
        feedback_ms: 50,
        ..Config::default()
    };
    let mut app = App::new(config, None);
    app.set_canvas_area(CANVAS);

    // a small loop in the top-left corner misses the dot
    let t0 = Instant::now();
    let corner = [
        (2, 1),
        (3, 1),
        (4, 1),
        (5, 1),
        (5, 2),
        (5, 3),
        (4, 3),
        (3, 3),
        (2, 3),
        (2, 2),
        (2, 1),
        (3, 1),
    ];
    let (column, row) = corner[0];
    app.on_event_at(mouse(MouseEventKind::Down(MouseButton::Left), column, row), t0);
    for &(column, row) in &corner[1..] {
        app.on_event_at(mouse(MouseEventKind::Drag(MouseButton::Left), column, row), t0);
    }
    app.on_event_at(mouse(MouseEventKind::Up(MouseButton::Left), 3, 1), t0);

    assert_eq!(app.scene.score_text, "0.00%");
    assert!(app.scene.feedback_message().is_some());

    app.on_event_at(GameEvent::Tick, t0 + Duration::from_millis(49));
    assert!(app.scene.feedback_message().is_some());

    app.on_event_at(GameEvent::Tick, t0 + Duration::from_millis(50));
    assert_eq!(app.scene.feedback_message(), None);
    assert_eq!(app.scene.score_text, "0.00%");
}

#[test]
fn escape_quits_through_the_runner() {
    let mut app = App::new(Config::default(), None);
    let (tx, rx) = mpsc::channel();
    let runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );

    tx.send(GameEvent::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE)))
        .unwrap();
    tx.send(GameEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)))
        .unwrap();

    assert_eq!(run_until_idle(&runner, &mut app, 10), Flow::Quit);
    assert_eq!(app.session.level().to_string(), "hardcore");
}
