//! Achievement engine.
//!
//! A fixed set of achievements, each a predicate over the stats record.
//! After every recorded round the whole set is re-evaluated against the
//! updated stats; newly satisfied achievements are persisted and announced
//! once through the [`NotificationSink`]. Unlocks are permanent (until an
//! explicit reset) even if the underlying stats later fall below the
//! threshold.

use std::collections::BTreeSet;

use tracing::{info, warn};

use oddhouse_types::{StatsRecord, ACHIEVEMENTS_KEY};

use crate::storage::Storage;

/// Where unlock announcements go. The host wires this to its toast layer;
/// tests capture them in a vec.
pub trait NotificationSink {
    fn notify(&mut self, title: &str, body: &str);
}

/// Sink that drops every announcement.
#[derive(Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&mut self, _title: &str, _body: &str) {}
}

pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    unlocked_by: fn(&StatsRecord) -> bool,
}

impl Achievement {
    pub fn is_satisfied_by(&self, stats: &StatsRecord) -> bool {
        (self.unlocked_by)(stats)
    }
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_blood",
        name: "First Blood",
        description: "Play your first game.",
        unlocked_by: |stats| stats.global.total_games >= 1,
    },
    Achievement {
        id: "high_roller",
        name: "High Roller",
        description: "Wager 10,000 in total.",
        unlocked_by: |stats| stats.global.total_bets >= 10_000.0,
    },
    Achievement {
        id: "hot_streak",
        name: "Hot Streak",
        description: "Win 50 games.",
        unlocked_by: |stats| stats.global.total_wins >= 50,
    },
    Achievement {
        id: "sniper",
        name: "Sniper",
        description: "See a crash multiplier of 10x or more.",
        unlocked_by: |stats| stats.crash.max_multiplier >= 10.0,
    },
    Achievement {
        id: "diamond_hands",
        name: "Diamond Hands",
        description: "Win 10 crash rounds.",
        unlocked_by: |stats| stats.crash.wins >= 10,
    },
    Achievement {
        id: "mine_sweeper",
        name: "Mine Sweeper",
        description: "Cash out of mines 10 times.",
        unlocked_by: |stats| stats.mines.cashouts >= 10,
    },
    Achievement {
        id: "coin_master",
        name: "Coin Master",
        description: "Roll the dice 100 times or play 100 games.",
        unlocked_by: |stats| stats.dice.rolls >= 100 || stats.global.total_games >= 100,
    },
];

/// Ids of everything unlocked so far.
pub fn unlocked(storage: &impl Storage) -> BTreeSet<String> {
    storage
        .get(ACHIEVEMENTS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// The whole catalog, each definition paired with its unlock flag. This is
/// what an achievements screen renders.
pub fn status(storage: &impl Storage) -> Vec<(&'static Achievement, bool)> {
    let ids = unlocked(storage);
    ACHIEVEMENTS
        .iter()
        .map(|achievement| (achievement, ids.contains(achievement.id)))
        .collect()
}

fn save(storage: &mut impl Storage, ids: &BTreeSet<String>) {
    match serde_json::to_string(ids) {
        Ok(raw) => {
            if let Err(err) = storage.set(ACHIEVEMENTS_KEY, &raw) {
                warn!(%err, "achievement write failed; unlocks kept in memory only");
            }
        }
        Err(err) => warn!(%err, "achievement set failed to serialize"),
    }
}

/// Re-evaluate every achievement against `stats`, persisting and announcing
/// anything newly satisfied. Returns the fresh unlocks in catalog order.
pub fn check(
    storage: &mut impl Storage,
    sink: &mut impl NotificationSink,
    stats: &StatsRecord,
) -> Vec<&'static Achievement> {
    let mut ids = unlocked(storage);
    let mut fresh = Vec::new();
    for achievement in ACHIEVEMENTS {
        if !ids.contains(achievement.id) && achievement.is_satisfied_by(stats) {
            ids.insert(achievement.id.to_string());
            fresh.push(achievement);
        }
    }
    if !fresh.is_empty() {
        save(storage, &ids);
        for achievement in &fresh {
            info!(id = achievement.id, "achievement unlocked");
            sink.notify(achievement.name, achievement.description);
        }
    }
    fresh
}

/// Clear all unlocks.
pub fn reset(storage: &mut impl Storage) {
    if let Err(err) = storage.remove(ACHIEVEMENTS_KEY) {
        warn!(%err, "achievement reset failed");
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::NotificationSink;

    /// Sink that records `(title, body)` pairs for assertions.
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        pub messages: Vec<(String, String)>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&mut self, title: &str, body: &str) {
            self.messages.push((title.to_string(), body.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingSink;
    use super::*;
    use crate::storage::MemoryStorage;
    use oddhouse_types::GameEvent;

    #[test]
    fn test_catalog_ids_unique() {
        for achievement in ACHIEVEMENTS {
            let count = ACHIEVEMENTS
                .iter()
                .filter(|other| other.id == achievement.id)
                .count();
            assert_eq!(count, 1, "duplicate achievement id {}", achievement.id);
        }
    }

    #[test]
    fn test_first_game_unlocks_first_blood_once() {
        let mut storage = MemoryStorage::new();
        let mut sink = RecordingSink::default();
        let mut stats = StatsRecord::default();
        stats.apply(&GameEvent::Dice {
            bet: 10.0,
            profit: 9.6,
        });

        let fresh = check(&mut storage, &mut sink, &stats);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, "first_blood");
        assert_eq!(sink.messages.len(), 1);
        assert_eq!(sink.messages[0].0, "First Blood");

        // A second evaluation of the same stats announces nothing.
        let again = check(&mut storage, &mut sink, &stats);
        assert!(again.is_empty());
        assert_eq!(sink.messages.len(), 1);
        assert!(unlocked(&storage).contains("first_blood"));
    }

    #[test]
    fn test_first_blood_unlocks_on_a_losing_first_game() {
        let mut storage = MemoryStorage::new();
        let mut sink = RecordingSink::default();
        let mut stats = StatsRecord::default();
        stats.apply(&GameEvent::Dice {
            bet: 10.0,
            profit: -10.0,
        });
        assert_eq!(stats.global.total_wins, 0);

        let fresh = check(&mut storage, &mut sink, &stats);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].id, "first_blood");
    }

    #[test]
    fn test_multiple_thresholds_unlock_together() {
        let mut storage = MemoryStorage::new();
        let mut sink = RecordingSink::default();
        let mut stats = StatsRecord::default();
        stats.global.total_games = 60;
        stats.global.total_wins = 50;
        stats.global.total_bets = 12_000.0;

        let fresh = check(&mut storage, &mut sink, &stats);
        let ids: Vec<&str> = fresh.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["first_blood", "high_roller", "hot_streak"]);
    }

    #[test]
    fn test_unlocks_survive_stats_reset() {
        let mut storage = MemoryStorage::new();
        let mut sink = NullSink;
        let mut stats = StatsRecord::default();
        stats.global.total_games = 1;
        check(&mut storage, &mut sink, &stats);

        // Stats back to zero; the unlock stays.
        let fresh = check(&mut storage, &mut sink, &StatsRecord::default());
        assert!(fresh.is_empty());
        assert!(unlocked(&storage).contains("first_blood"));

        reset(&mut storage);
        assert!(unlocked(&storage).is_empty());
    }

    #[test]
    fn test_status_lists_every_definition_with_its_flag() {
        let mut storage = MemoryStorage::new();
        let mut sink = NullSink;
        let mut stats = StatsRecord::default();
        stats.global.total_games = 1;
        check(&mut storage, &mut sink, &stats);

        let listing = status(&storage);
        assert_eq!(listing.len(), ACHIEVEMENTS.len());
        for (achievement, is_unlocked) in listing {
            assert_eq!(
                is_unlocked,
                achievement.id == "first_blood",
                "wrong flag for {}",
                achievement.id
            );
        }
    }

    #[test]
    fn test_coin_master_either_condition() {
        let mut by_rolls = StatsRecord::default();
        by_rolls.dice.rolls = 100;
        let mut by_games = StatsRecord::default();
        by_games.global.total_games = 100;
        let coin_master = ACHIEVEMENTS
            .iter()
            .find(|a| a.id == "coin_master")
            .unwrap();
        assert!(coin_master.is_satisfied_by(&by_rolls));
        assert!(coin_master.is_satisfied_by(&by_games));
        assert!(!coin_master.is_satisfied_by(&StatsRecord::default()));
    }
}
