use crate::models::{Difficulty, Settings};
use crate::storage::{self, FileStore, SETTINGS_KEY};

pub fn handle_difficulty(level: Option<Difficulty>) {
    let mut store = FileStore::open_default();
    let mut settings: Settings = storage::load_or_default(&store, SETTINGS_KEY);

    match level {
        None => {
            println!(
                "Default difficulty: {}",
                settings.default_difficulty.display_name()
            );
            println!();
            for difficulty in Difficulty::all() {
                let config = difficulty.config();
                println!(
                    "  {:<8} range {}-{}, {} attempts, {} hints",
                    difficulty.display_name(),
                    config.min,
                    config.max,
                    config.max_attempts,
                    config.hint_budget
                );
            }
            println!();
            println!("To change: numbermind difficulty <level>");
        }
        Some(new_level) => {
            let old_level = settings.default_difficulty;
            if old_level == new_level {
                println!(
                    "Default difficulty is already {}",
                    new_level.display_name()
                );
                return;
            }

            settings.default_difficulty = new_level;
            if let Err(e) = storage::save(&mut store, SETTINGS_KEY, &settings) {
                eprintln!("Failed to save settings: {}", e);
                std::process::exit(1);
            }

            println!(
                "Default difficulty changed from {} to {}",
                old_level.display_name(),
                new_level.display_name()
            );
        }
    }
}
