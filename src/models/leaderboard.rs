use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

pub const LEADERBOARD_CAPACITY: usize = 50;

/// One recorded winning performance. `win_rate` and `games_played` are the
/// player's lifetime figures at the time of the win.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    /// Attempts taken to win; lower is better.
    pub score: u32,
    pub win_rate: u32,
    pub games_played: u32,
    pub date: DateTime<Utc>,
    pub timestamp: i64,
}

/// 1-based position on a board. An estimated rank is computed for a player
/// with no entries and counts only strictly better scores, so it can
/// undercount when scores tie; it is surfaced with a `~` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    Exact(usize),
    Estimated(usize),
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Exact(n) => write!(f, "{}", n),
            Rank::Estimated(n) => write!(f, "~{}", n),
        }
    }
}

/// Per-difficulty ranked boards, each capped at [`LEADERBOARD_CAPACITY`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboards(HashMap<Difficulty, Vec<LeaderboardEntry>>);

impl Leaderboards {
    /// Called on a win only. Sorts ascending by score, ties broken by the
    /// earlier `date` field, then truncates to capacity.
    pub fn submit(&mut self, difficulty: Difficulty, entry: LeaderboardEntry) {
        let board = self.0.entry(difficulty).or_default();
        board.push(entry);
        board.sort_by(|a, b| a.score.cmp(&b.score).then(a.date.cmp(&b.date)));
        board.truncate(LEADERBOARD_CAPACITY);
    }

    pub fn entries(&self, difficulty: Difficulty) -> &[LeaderboardEntry] {
        self.0.get(&difficulty).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rank of the player's best entry on the board, or an estimated rank
    /// from `best_score` when the player has no entries there.
    pub fn rank_of(
        &self,
        difficulty: Difficulty,
        name: &str,
        best_score: Option<u32>,
    ) -> Option<Rank> {
        let board = self.entries(difficulty);
        if board.is_empty() {
            return None;
        }

        let best = board
            .iter()
            .filter(|e| e.name == name)
            .reduce(|best, e| if e.score < best.score { e } else { best });

        if let Some(best) = best {
            let index = board.iter().position(|e| {
                e.name == best.name && e.score == best.score && e.timestamp == best.timestamp
            })?;
            return Some(Rank::Exact(index + 1));
        }

        let best_score = best_score?;
        let better = board.iter().filter(|e| e.score < best_score).count();
        Some(Rank::Estimated(better + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(name: &str, score: u32, date: DateTime<Utc>) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
            win_rate: 100,
            games_played: 1,
            date,
            timestamp: date.timestamp_millis(),
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_sort_by_score_then_earlier_date() {
        let mut boards = Leaderboards::default();
        boards.submit(Difficulty::Easy, entry("a", 5, day(1)));
        boards.submit(Difficulty::Easy, entry("b", 3, day(1)));
        boards.submit(Difficulty::Easy, entry("c", 3, day(2)));
        boards.submit(Difficulty::Easy, entry("d", 8, day(1)));

        let names: Vec<&str> = boards
            .entries(Difficulty::Easy)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_truncates_to_capacity_dropping_worst() {
        let mut boards = Leaderboards::default();
        for score in 1..=51 {
            boards.submit(Difficulty::Medium, entry("p", score, day(1)));
        }

        let board = boards.entries(Difficulty::Medium);
        assert_eq!(board.len(), LEADERBOARD_CAPACITY);
        assert_eq!(board[0].score, 1);
        assert_eq!(board.last().unwrap().score, 50);
    }

    #[test]
    fn test_exact_rank_of_best_entry() {
        let mut boards = Leaderboards::default();
        boards.submit(Difficulty::Easy, entry("rival", 2, day(1)));
        boards.submit(Difficulty::Easy, entry("me", 6, day(2)));
        boards.submit(Difficulty::Easy, entry("me", 4, day(3)));

        assert_eq!(
            boards.rank_of(Difficulty::Easy, "me", Some(4)),
            Some(Rank::Exact(2))
        );
    }

    #[test]
    fn test_estimated_rank_counts_strictly_lower_scores() {
        let mut boards = Leaderboards::default();
        boards.submit(Difficulty::Easy, entry("a", 3, day(1)));
        boards.submit(Difficulty::Easy, entry("b", 5, day(1)));
        boards.submit(Difficulty::Easy, entry("c", 5, day(2)));
        boards.submit(Difficulty::Easy, entry("d", 8, day(1)));

        // Ties at the hypothetical score are not counted.
        assert_eq!(
            boards.rank_of(Difficulty::Easy, "me", Some(5)),
            Some(Rank::Estimated(2))
        );
    }

    #[test]
    fn test_no_rank_without_entries_or_best_score() {
        let mut boards = Leaderboards::default();
        assert_eq!(boards.rank_of(Difficulty::Easy, "me", Some(5)), None);

        boards.submit(Difficulty::Easy, entry("a", 3, day(1)));
        assert_eq!(boards.rank_of(Difficulty::Easy, "me", None), None);
    }

    #[test]
    fn test_rank_display() {
        assert_eq!(Rank::Exact(3).to_string(), "3");
        assert_eq!(Rank::Estimated(4).to_string(), "~4");
    }
}
