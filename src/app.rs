use std::time::Instant;

use ratatui::layout::Rect;

use crate::capture::CaptureEvent;
use crate::celebration::CelebrationAnimation;
use crate::config::{Config, ConfigStore};
use crate::input::{self, KeyAction, Viewport};
use crate::runtime::GameEvent;
use crate::scene::Scene;
use crate::scoring::ScoreResult;
use crate::session::{GameSession, SessionConfig};

const PERFECT_SCORE_TEXT: &str = "100.00%";

/// Whether the main loop keeps going after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the terminal front end owns: the session, what is on screen,
/// and where the canvas currently sits in the terminal.
pub struct App {
    pub session: GameSession,
    pub scene: Scene,
    pub celebration: CelebrationAnimation,
    pub viewport: Viewport,
    pub config: Config,
    store: Option<Box<dyn ConfigStore>>,
}

impl App {
    /// `store` receives difficulty/theme changes; pass `None` to keep them in memory.
    pub fn new(config: Config, store: Option<Box<dyn ConfigStore>>) -> Self {
        let mut session = GameSession::new(SessionConfig::from(&config));
        let mut scene = Scene::new();
        session.begin(&mut scene);

        Self {
            session,
            scene,
            celebration: CelebrationAnimation::new(),
            viewport: Viewport::new(Rect::default(), config.canvas_size),
            config,
            store,
        }
    }

    /// Called with the canvas area of every frame so mouse input lines up with it.
    pub fn set_canvas_area(&mut self, area: Rect) {
        self.viewport = Viewport::new(area, self.config.canvas_size);
    }

    pub fn on_event(&mut self, event: GameEvent) -> Flow {
        self.on_event_at(event, Instant::now())
    }

    pub fn on_event_at(&mut self, event: GameEvent, now: Instant) -> Flow {
        match event {
            GameEvent::Tick => {
                self.scene.on_tick(now);
                self.celebration.update();
            }
            GameEvent::Resize => {}
            GameEvent::FocusLost => {
                self.apply(CaptureEvent::Leave, now);
            }
            GameEvent::Mouse(mouse) => {
                if let Some(capture) = input::capture_event_for(&mouse, &self.viewport) {
                    self.apply(capture, now);
                }
            }
            GameEvent::Key(key) => match input::key_action(key) {
                Some(KeyAction::Quit) => return Flow::Quit,
                Some(KeyAction::Capture(capture)) => {
                    self.apply(capture, now);
                }
                None => {}
            },
        }
        Flow::Continue
    }

    /// Feeds one capture event to the session and reacts to what it changed.
    pub fn apply(&mut self, event: CaptureEvent, now: Instant) -> Option<ScoreResult> {
        let before = (self.session.level(), self.session.theme());
        self.scene.advance_to(now);
        let result = self.session.handle_at(event, now, &mut self.scene);

        if let CaptureEvent::Start(_) | CaptureEvent::Reset = event {
            self.celebration.stop();
        }
        if let Some(result) = result {
            // anything from 99.995 up is shown as a perfect score
            if result.valid && result.display_text() == PERFECT_SCORE_TEXT {
                self.celebration
                    .start(self.session.center(), self.config.canvas_size);
            }
        }

        if before != (self.session.level(), self.session.theme()) {
            self.config.difficulty = self.session.level();
            self.config.theme = self.session.theme();
            self.save_preferences();
        }
        result
    }

    fn save_preferences(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.config) {
                log::warn!("could not save preferences: {e}");
            }
        }
    }
}
