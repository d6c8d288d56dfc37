#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const STATS_KEY: &str = "stats";
pub const HISTORY_KEY: &str = "history";
pub const LEADERBOARDS_KEY: &str = "leaderboards";
pub const SETTINGS_KEY: &str = "settings";
pub const PLAYER_NAME_KEY: &str = "player_name";
pub const THEME_KEY: &str = "theme";

const DEFAULT_PLAYER_NAME: &str = "Anonymous Player";

/// Durable key-value store the game state persists through. Each store
/// (stats, history, leaderboards, settings) lives under its own key and is
/// written back in full after every mutation.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// One JSON file per key under the data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn open_default() -> FileStore {
        let home = dirs::home_dir().expect("Could not determine home directory");
        FileStore::open(home.join(".config").join("numbermind"))
    }

    pub fn open(dir: PathBuf) -> FileStore {
        FileStore { dir }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Loads a store, falling back to its default when the key is absent or the
/// JSON is corrupt. A bad leaderboard document must not take stats down with
/// it, so each store degrades independently.
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        None => T::default(),
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("corrupt '{}' store, starting from defaults: {}", key, e);
                T::default()
            }
        },
    }
}

pub fn save<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> io::Result<()> {
    let raw = serde_json::to_string_pretty(value)?;
    store.set(key, &raw)?;
    debug!("saved '{}' store", key);
    Ok(())
}

pub fn load_player_name(store: &dyn KeyValueStore) -> String {
    load_or_default::<Option<String>>(store, PLAYER_NAME_KEY)
        .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string())
}

pub fn save_player_name(store: &mut dyn KeyValueStore, name: &str) -> io::Result<()> {
    save(store, PLAYER_NAME_KEY, &name)
}

pub fn load_theme(store: &dyn KeyValueStore) -> String {
    load_or_default::<Option<String>>(store, THEME_KEY).unwrap_or_else(|| "dark".to_string())
}

pub fn save_theme(store: &mut dyn KeyValueStore, theme: &str) -> io::Result<()> {
    save(store, THEME_KEY, &theme)
}
