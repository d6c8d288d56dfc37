use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::ResetTarget;
use crate::storage::{
    FileStore, KeyValueStore, HISTORY_KEY, LEADERBOARDS_KEY, PLAYER_NAME_KEY, SETTINGS_KEY,
    STATS_KEY, THEME_KEY,
};
use crate::transfer;

pub fn export_to_file(path: &Path) {
    let store = FileStore::open_default();
    let document = transfer::export_data(&store);

    if let Err(e) = fs::write(path, document) {
        eprintln!("Failed to write {}: {}", path.display(), e);
        std::process::exit(1);
    }
    println!("Exported data to {}", path.display());
}

pub fn import_from_file(path: &Path) {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let mut store = FileStore::open_default();
    match transfer::import_data(&mut store, &raw) {
        Ok(summary) => {
            if !summary.imported_anything() {
                println!("Nothing to import: no recognized sections found.");
                return;
            }
            let mut imported = Vec::new();
            if summary.settings {
                imported.push("settings");
            }
            if summary.stats {
                imported.push("stats");
            }
            if summary.history {
                imported.push("history");
            }
            println!("Imported: {}", imported.join(", "));
        }
        Err(e) => {
            eprintln!("Import failed: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn reset(target: ResetTarget) {
    let keys: &[&str] = match target {
        ResetTarget::Stats => &[STATS_KEY],
        ResetTarget::History => &[HISTORY_KEY],
        ResetTarget::Leaderboards => &[LEADERBOARDS_KEY],
        ResetTarget::All => &[
            STATS_KEY,
            HISTORY_KEY,
            LEADERBOARDS_KEY,
            SETTINGS_KEY,
            PLAYER_NAME_KEY,
            THEME_KEY,
        ],
    };

    if !confirm("This cannot be undone. Continue? [y/N] ") {
        println!("Aborted.");
        return;
    }

    let mut store = FileStore::open_default();
    for key in keys {
        if let Err(e) = store.remove(key) {
            eprintln!("Failed to clear '{}': {}", key, e);
            std::process::exit(1);
        }
    }
    println!("Cleared.");
}

fn confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => matches!(line.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}
