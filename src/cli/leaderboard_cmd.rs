use crate::display;
use crate::models::{Difficulty, Leaderboards, Settings, Stats};
use crate::storage::{self, FileStore, LEADERBOARDS_KEY, SETTINGS_KEY, STATS_KEY};

pub fn show_leaderboard(difficulty: Option<Difficulty>) {
    let store = FileStore::open_default();
    let settings: Settings = storage::load_or_default(&store, SETTINGS_KEY);
    let difficulty = difficulty.unwrap_or(settings.default_difficulty);

    let boards: Leaderboards = storage::load_or_default(&store, LEADERBOARDS_KEY);
    let stats: Stats = storage::load_or_default(&store, STATS_KEY);
    let player_name = storage::load_player_name(&store);

    let rank = boards.rank_of(difficulty, &player_name, stats.best_score(difficulty));
    display::print_leaderboard(difficulty, boards.entries(difficulty), &player_name, rank);
}
