use crate::storage::{self, FileStore};

pub fn handle_name(value: Option<String>) {
    let mut store = FileStore::open_default();

    match value {
        None => println!("Display name: {}", storage::load_player_name(&store)),
        Some(name) => {
            let name = name.trim();
            if name.is_empty() {
                eprintln!("Display name cannot be empty");
                std::process::exit(1);
            }

            if let Err(e) = storage::save_player_name(&mut store, name) {
                eprintln!("Failed to save display name: {}", e);
                std::process::exit(1);
            }
            println!("Display name set to {}", name);
        }
    }
}
