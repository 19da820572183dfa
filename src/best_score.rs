use crate::util::format_percent;

/// Highest score seen in the current session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestScoreTracker {
    best: Option<f64>,
}

impl BestScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self) -> Option<f64> {
        self.best
    }

    /// Keeps `value` if it beats the current best numerically. Returns whether it did.
    pub fn update(&mut self, value: f64) -> bool {
        let improved = match self.best {
            None => !value.is_nan(),
            Some(best) => value > best,
        };
        if improved {
            self.best = Some(value);
        }
        improved
    }

    pub fn display_text(&self) -> String {
        format_percent(self.best)
    }
}
