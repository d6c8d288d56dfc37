pub mod difficulty;
pub mod history;
pub mod leaderboard;
pub mod settings;
pub mod stats;

pub use difficulty::{Difficulty, DifficultyConfig};
pub use history::{History, HistoryEntry, HISTORY_CAPACITY};
pub use leaderboard::{LeaderboardEntry, Leaderboards, Rank, LEADERBOARD_CAPACITY};
pub use settings::{Settings, Theme};
pub use stats::Stats;
