use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub difficulty: Difficulty,
    pub attempts: u32,
    pub won: bool,
    /// Local calendar date, `YYYY-MM-DD`.
    pub date: String,
}

/// Recent finished games, newest first, capped at [`HISTORY_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<HistoryEntry>);

impl History {
    pub fn append(&mut self, entry: HistoryEntry) {
        self.0.insert(0, entry);
        self.0.truncate(HISTORY_CAPACITY);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rounded mean attempts over the retained entries.
    pub fn average_attempts(&self) -> u32 {
        if self.0.is_empty() {
            return 0;
        }
        let total: u32 = self.0.iter().map(|e| e.attempts).sum();
        ((total as f64) / (self.0.len() as f64)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(attempts: u32) -> HistoryEntry {
        HistoryEntry {
            difficulty: Difficulty::Easy,
            attempts,
            won: true,
            date: "2026-08-26".to_string(),
        }
    }

    #[test]
    fn test_newest_first_capped_at_ten() {
        let mut history = History::default();
        for i in 1..=15 {
            history.append(entry(i));
        }

        let attempts: Vec<u32> = history.entries().iter().map(|e| e.attempts).collect();
        assert_eq!(attempts, vec![15, 14, 13, 12, 11, 10, 9, 8, 7, 6]);
    }

    #[test]
    fn test_average_attempts() {
        let mut history = History::default();
        assert_eq!(history.average_attempts(), 0);

        history.append(entry(4));
        history.append(entry(7));
        assert_eq!(history.average_attempts(), 6);
    }
}
