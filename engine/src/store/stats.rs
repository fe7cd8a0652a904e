//! The stats ledger store.
//!
//! Loads and saves the whole [`StatsRecord`] under one key. [`record`] is
//! the single entry point for settled rounds: it applies the event, writes
//! the record back, and runs the achievement pass on the updated stats.

use tracing::warn;

use oddhouse_types::{GameEvent, StatsRecord, STATS_KEY};

use crate::storage::Storage;
use crate::store::achievements::{self, NotificationSink};

/// Load the ledger, backfilling defaults for missing or corrupt data.
pub fn load(storage: &impl Storage) -> StatsRecord {
    storage
        .get(STATS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Persist the whole ledger in one write.
pub fn save(storage: &mut impl Storage, stats: &StatsRecord) {
    match serde_json::to_string(stats) {
        Ok(raw) => {
            if let Err(err) = storage.set(STATS_KEY, &raw) {
                warn!(%err, "stats write failed; ledger kept in memory only");
            }
        }
        Err(err) => warn!(%err, "stats record failed to serialize"),
    }
}

/// Record one settled round and run the achievement pass. Returns the
/// updated ledger.
pub fn record(
    storage: &mut impl Storage,
    sink: &mut impl NotificationSink,
    event: &GameEvent,
) -> StatsRecord {
    let mut stats = load(storage);
    stats.apply(event);
    save(storage, &stats);
    achievements::check(storage, sink, &stats);
    stats
}

/// Reset the ledger to zeroed defaults. Goes through the same write path
/// as [`record`], achievement pass included, so a reset behaves like any
/// other stats update.
pub fn reset(storage: &mut impl Storage, sink: &mut impl NotificationSink) -> StatsRecord {
    let fresh = StatsRecord::default();
    save(storage, &fresh);
    achievements::check(storage, sink, &fresh);
    fresh
}
