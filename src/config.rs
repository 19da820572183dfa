use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_dirs::AppDirs;
use crate::difficulty::DifficultyLevel;
use crate::error::Result;
use crate::geometry::Point;
use crate::session::SessionConfig;
use crate::theme::Theme;

pub const DEFAULT_CANVAS_SIZE: f64 = 400.0;
pub const DEFAULT_FEEDBACK_MS: u64 = 2000;

/// Player preferences kept between runs. Scores are never stored here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub difficulty: DifficultyLevel,
    pub theme: Theme,
    /// Side of the logical drawing square
    pub canvas_size: f64,
    pub feedback_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: DifficultyLevel::default(),
            theme: Theme::default(),
            canvas_size: DEFAULT_CANVAS_SIZE,
            feedback_ms: DEFAULT_FEEDBACK_MS,
        }
    }
}

impl Config {
    /// The session center is the middle of the drawing square.
    pub fn center(&self) -> Point {
        Point::new(self.canvas_size / 2.0, self.canvas_size / 2.0)
    }
}

impl From<&Config> for SessionConfig {
    fn from(cfg: &Config) -> Self {
        Self {
            center: cfg.center(),
            level: cfg.difficulty,
            theme: cfg.theme,
            feedback_duration: Duration::from_millis(cfg.feedback_ms),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => {
                log::info!("no config at {}, using defaults", self.path.display());
                return Config::default();
            }
        };

        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) if cfg.canvas_size > 0.0 => cfg,
            Ok(cfg) => {
                log::warn!(
                    "config canvas_size {} is not positive, using defaults",
                    cfg.canvas_size
                );
                Config::default()
            }
            Err(e) => {
                log::warn!("config at {} is unreadable, using defaults: {e}", self.path.display());
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        log::debug!("config saved to {}", self.path.display());
        Ok(())
    }
}
