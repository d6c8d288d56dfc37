use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

pub const STATS_SCHEMA_VERSION: u32 = 1;

fn schema_version() -> u32 {
    STATS_SCHEMA_VERSION
}

/// Lifetime statistics across all finished games. Mutated exactly once per
/// finished session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default = "schema_version")]
    pub version: u32,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub best_scores: HashMap<Difficulty, u32>,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub max_streak: u32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            version: STATS_SCHEMA_VERSION,
            games_played: 0,
            games_won: 0,
            best_scores: HashMap::new(),
            current_streak: 0,
            max_streak: 0,
        }
    }
}

impl Stats {
    pub fn record(&mut self, difficulty: Difficulty, won: bool, attempts: u32) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);

            let best = self.best_scores.entry(difficulty).or_insert(attempts);
            if attempts < *best {
                *best = attempts;
            }
        } else {
            self.current_streak = 0;
        }
    }

    pub fn best_score(&self, difficulty: Difficulty) -> Option<u32> {
        self.best_scores.get(&difficulty).copied()
    }

    /// Rounded win percentage, derived rather than stored.
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        ((self.games_won as f64 / self.games_played as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_sequence() {
        let mut stats = Stats::default();
        for won in [true, true, false, true] {
            stats.record(Difficulty::Easy, won, 5);
        }
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.games_played, 4);
    }

    #[test]
    fn test_best_score_only_improves() {
        let mut stats = Stats::default();
        stats.record(Difficulty::Hard, true, 8);
        assert_eq!(stats.best_score(Difficulty::Hard), Some(8));

        stats.record(Difficulty::Hard, true, 12);
        assert_eq!(stats.best_score(Difficulty::Hard), Some(8));

        stats.record(Difficulty::Hard, true, 4);
        assert_eq!(stats.best_score(Difficulty::Hard), Some(4));

        assert_eq!(stats.best_score(Difficulty::Expert), None);
    }

    #[test]
    fn test_loss_does_not_touch_best_score() {
        let mut stats = Stats::default();
        stats.record(Difficulty::Easy, false, 10);
        assert_eq!(stats.best_score(Difficulty::Easy), None);
        assert_eq!(stats.current_streak, 0);
    }

    #[test]
    fn test_win_rate() {
        let mut stats = Stats::default();
        assert_eq!(stats.win_rate(), 0);

        stats.record(Difficulty::Easy, true, 5);
        stats.record(Difficulty::Easy, true, 5);
        stats.record(Difficulty::Easy, false, 10);
        assert_eq!(stats.win_rate(), 67);
    }

    #[test]
    fn test_missing_fields_fill_with_defaults() {
        let stats: Stats = serde_json::from_str(r#"{"games_played":3,"games_won":1}"#).unwrap();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.current_streak, 0);
        assert!(stats.best_scores.is_empty());
        assert_eq!(stats.version, STATS_SCHEMA_VERSION);
    }
}
