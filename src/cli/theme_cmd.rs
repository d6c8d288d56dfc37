use crate::models::Theme;
use crate::storage::{self, FileStore};

pub fn handle_theme(value: Option<Theme>) {
    let mut store = FileStore::open_default();

    match value {
        None => println!("Theme: {}", storage::load_theme(&store)),
        Some(theme) => {
            if let Err(e) = storage::save_theme(&mut store, theme.tag()) {
                eprintln!("Failed to save theme: {}", e);
                std::process::exit(1);
            }
            println!("Theme set to {}", theme.tag());
        }
    }
}
