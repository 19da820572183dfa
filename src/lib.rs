// Library surface for the binary, headless runs and integration tests.
pub mod app;
pub mod app_dirs;
pub mod attempt;
pub mod best_score;
pub mod capture;
pub mod celebration;
pub mod config;
pub mod difficulty;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod render;
pub mod runtime;
pub mod scene;
pub mod scoring;
pub mod session;
pub mod theme;
pub mod ui;
pub mod util;

pub use app::{App, Flow};
pub use error::{Error, Result};
