use circlet::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    difficulty::DifficultyLevel,
    logging,
    runtime::{CrosstermEventSource, FixedTicker, Runner},
    theme::Theme,
    ui, App, Flow,
};
use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;

/// draw a perfect circle around the red dot
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Draw a circle around the red dot with your mouse. The rounder and faster the circle, the higher the score."
)]
pub struct Cli {
    /// difficulty: scoring tolerance and size of the red dot (saved for next time)
    #[clap(short = 'd', long, value_enum)]
    difficulty: Option<DifficultyLevel>,

    /// canvas color theme (saved for next time)
    #[clap(short = 't', long, value_enum)]
    theme: Option<Theme>,

    /// side of the logical drawing square, in canvas units
    #[clap(long, value_parser = parse_canvas_size)]
    canvas_size: Option<f64>,

    /// how long feedback messages stay on screen, in milliseconds
    #[clap(long)]
    feedback_ms: Option<u64>,

    /// keep difficulty and theme changes out of the config file
    #[clap(long)]
    no_save: bool,
}

fn parse_canvas_size(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(size) if size.is_finite() && size > 0.0 => Ok(size),
        Ok(_) => Err(String::from("canvas size must be a positive number")),
        Err(e) => Err(e.to_string()),
    }
}

impl Cli {
    /// Command line values win over the stored config
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if let Some(theme) = self.theme {
            config.theme = theme;
        }
        if let Some(canvas_size) = self.canvas_size {
            config.canvas_size = canvas_size;
        }
        if let Some(feedback_ms) = self.feedback_ms {
            config.feedback_ms = feedback_ms;
        }
        config
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Err(e) = logging::init(AppDirs::log_path().as_deref()) {
        eprintln!("circlet: logging disabled: {e}");
    }

    let store = FileConfigStore::new();
    log::info!("loading config from {}", store.path().display());
    let config = cli.apply_to(store.load());
    let store: Option<Box<dyn ConfigStore>> = if cli.no_save {
        None
    } else {
        Some(Box::new(store))
    };

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, store);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    // the first frame positions the canvas before any mouse input arrives
    draw(terminal, app)?;

    loop {
        if app.on_event(runner.step()) == Flow::Quit {
            break;
        }
        draw(terminal, app)?;
    }

    Ok(())
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    terminal.draw(|f| {
        let area = f.area();
        app.set_canvas_area(ui::canvas_area(area));
        f.render_widget(&*app, area);
    })?;
    Ok(())
}
