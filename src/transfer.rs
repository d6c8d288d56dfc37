use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GameError;
use crate::models::{History, Settings, Stats};
use crate::storage::{self, KeyValueStore, HISTORY_KEY, SETTINGS_KEY, STATS_KEY};

/// Portable backup document: `{ settings, stats, history }`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    pub settings: Settings,
    pub stats: Stats,
    pub history: History,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub settings: bool,
    pub stats: bool,
    pub history: bool,
}

impl ImportSummary {
    pub fn imported_anything(&self) -> bool {
        self.settings || self.stats || self.history
    }
}

pub fn export_data(store: &dyn KeyValueStore) -> String {
    let doc = ExportDocument {
        settings: storage::load_or_default(store, SETTINGS_KEY),
        stats: storage::load_or_default(store, STATS_KEY),
        history: storage::load_or_default(store, HISTORY_KEY),
    };
    serde_json::to_string_pretty(&doc).unwrap_or_default()
}

/// Merges a backup document into the store. Each top-level key is validated
/// independently; missing or malformed sections are skipped, not errors.
pub fn import_data(
    store: &mut dyn KeyValueStore,
    raw: &str,
) -> Result<ImportSummary, GameError> {
    let doc: Value = serde_json::from_str(raw)?;
    let mut summary = ImportSummary::default();

    if let Some(section) = doc.get("settings") {
        match serde_json::from_value::<Settings>(section.clone()) {
            Ok(settings) => {
                storage::save(store, SETTINGS_KEY, &settings)?;
                summary.settings = true;
            }
            Err(e) => warn!("skipping malformed settings section: {}", e),
        }
    }

    if let Some(section) = doc.get("stats") {
        match serde_json::from_value::<Stats>(section.clone()) {
            Ok(stats) => {
                storage::save(store, STATS_KEY, &stats)?;
                summary.stats = true;
            }
            Err(e) => warn!("skipping malformed stats section: {}", e),
        }
    }

    if let Some(section) = doc.get("history") {
        match serde_json::from_value::<History>(section.clone()) {
            Ok(history) => {
                storage::save(store, HISTORY_KEY, &history)?;
                summary.history = true;
            }
            Err(e) => warn!("skipping malformed history section: {}", e),
        }
    }

    Ok(summary)
}
