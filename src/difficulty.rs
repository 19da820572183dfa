use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Medium,
    Hardcore,
}

/// Scoring and cosmetic settings attached to a difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyProfile {
    /// Share of the gap to 100 that is forgiven, in `[0, 1)`
    pub tolerance_factor: f64,
    /// Radius of the reference dot in canvas units. Cosmetic only.
    pub dot_radius: f64,
}

const EASY: DifficultyProfile = DifficultyProfile {
    tolerance_factor: 0.3,
    dot_radius: 10.0,
};

const MEDIUM: DifficultyProfile = DifficultyProfile {
    tolerance_factor: 0.2,
    dot_radius: 6.0,
};

const HARDCORE: DifficultyProfile = DifficultyProfile {
    tolerance_factor: 0.1,
    dot_radius: 2.0,
};

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Medium,
        DifficultyLevel::Hardcore,
    ];

    pub fn profile(&self) -> &'static DifficultyProfile {
        match self {
            DifficultyLevel::Easy => &EASY,
            DifficultyLevel::Medium => &MEDIUM,
            DifficultyLevel::Hardcore => &HARDCORE,
        }
    }

    /// Easy -> Medium -> Hardcore -> Easy
    pub fn next(&self) -> Self {
        match self {
            DifficultyLevel::Easy => DifficultyLevel::Medium,
            DifficultyLevel::Medium => DifficultyLevel::Hardcore,
            DifficultyLevel::Hardcore => DifficultyLevel::Easy,
        }
    }

    /// Hardcore hides the stroke while it is being drawn.
    pub fn shows_path(&self) -> bool {
        !matches!(self, DifficultyLevel::Hardcore)
    }
}
