use crate::debug_log;
use super::KeyValueStore;

pub const BEST_SCORE_KEY: &str = "snake-best-score";
pub const THEME_KEY: &str = "snake-theme";
pub const DEFAULT_THEME: &str = "neon";

/// Best score and theme on top of a [`KeyValueStore`].
///
/// Reads fall back to defaults and writes are best-effort: failures are
/// logged and otherwise ignored.
pub struct ProfileStore {
    store: Box<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn best_score(&self) -> u32 {
        match self.store.get(BEST_SCORE_KEY) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or(0),
            Ok(None) => 0,
            Err(e) => {
                debug_log!("Could not read best score: {}", e);
                0
            }
        }
    }

    pub fn save_best_score(&self, score: u32) {
        if let Err(e) = self.store.set(BEST_SCORE_KEY, &score.to_string()) {
            debug_log!("Could not save best score: {}", e);
        }
    }

    pub fn theme(&self) -> String {
        match self.store.get(THEME_KEY) {
            Ok(Some(theme)) if !theme.is_empty() => theme,
            Ok(_) => DEFAULT_THEME.to_string(),
            Err(e) => {
                debug_log!("Could not read theme: {}", e);
                DEFAULT_THEME.to_string()
            }
        }
    }

    pub fn save_theme(&self, theme: &str) {
        if let Err(e) = self.store.set(THEME_KEY, theme) {
            debug_log!("Could not save theme: {}", e);
        }
    }
}
