//! UI settings store. The engine only persists and round-trips these.

use tracing::warn;

use oddhouse_types::{Settings, SETTINGS_KEY};

use crate::storage::Storage;

pub fn load(storage: &impl Storage) -> Settings {
    storage
        .get(SETTINGS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save(storage: &mut impl Storage, settings: &Settings) {
    match serde_json::to_string(settings) {
        Ok(raw) => {
            if let Err(err) = storage.set(SETTINGS_KEY, &raw) {
                warn!(%err, "settings write failed; kept in memory only");
            }
        }
        Err(err) => warn!(%err, "settings failed to serialize"),
    }
}

pub fn reset(storage: &mut impl Storage) {
    if let Err(err) = storage.remove(SETTINGS_KEY) {
        warn!(%err, "settings reset failed");
    }
}
