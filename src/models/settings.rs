use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn tag(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Player preferences. Missing fields fill with defaults on load, so older
/// persisted documents keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub version: u32,
    pub display_name: String,
    pub default_difficulty: Difficulty,
    pub theme: String,
    pub sound_effects: bool,
    pub animations: bool,
    pub save_stats: bool,
    pub save_history: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_SCHEMA_VERSION,
            display_name: "NumberMind Player".to_string(),
            default_difficulty: Difficulty::Easy,
            theme: "dark".to_string(),
            sound_effects: true,
            animations: true,
            save_stats: true,
            save_history: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"default_difficulty":"hard","save_stats":false}"#).unwrap();
        assert_eq!(settings.default_difficulty, Difficulty::Hard);
        assert!(!settings.save_stats);
        assert_eq!(settings.display_name, "NumberMind Player");
        assert_eq!(settings.theme, "dark");
        assert!(settings.save_history);
    }
}
