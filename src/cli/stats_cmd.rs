use crate::display;
use crate::models::{History, Stats};
use crate::storage::{self, FileStore, HISTORY_KEY, STATS_KEY};

pub fn show_stats() {
    let store = FileStore::open_default();
    let stats: Stats = storage::load_or_default(&store, STATS_KEY);
    let history: History = storage::load_or_default(&store, HISTORY_KEY);
    display::print_stats(&stats, &history);
}
