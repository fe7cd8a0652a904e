use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{GameEvent, MinesOutcome, Outcome};

/// A level tier over lifetime wagered amount. Derived on demand, never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub level: u8,
    pub title: &'static str,
    /// Wagered total at which the next tier starts; `None` at the top.
    pub next: Option<f64>,
}

const LEVEL_TIERS: &[(f64, &str)] = &[
    (1_000.0, "Rookie"),
    (5_000.0, "Grinder"),
    (20_000.0, "Strategist"),
    (100_000.0, "Pro"),
    (1_000_000.0, "High Roller"),
];

/// Level for a lifetime wagered total. Reaching a threshold exactly
/// advances into the next tier.
pub fn level_for_wagered(total_wagered: f64) -> Level {
    for (i, &(next, title)) in LEVEL_TIERS.iter().enumerate() {
        if total_wagered < next {
            return Level {
                level: i as u8 + 1,
                title,
                next: Some(next),
            };
        }
    }
    Level {
        level: LEVEL_TIERS.len() as u8 + 1,
        title: "Whale",
        next: None,
    }
}

/// Counters shared by every game.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalStats {
    pub total_bets: f64,
    pub total_profit: f64,
    pub total_games: u64,
    pub total_wins: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DiceStats {
    pub rolls: u64,
    pub total_bet: f64,
    pub total_profit: f64,
    pub wins: u64,
    pub losses: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MinesStats {
    pub rounds: u64,
    pub total_bet: f64,
    pub total_profit: f64,
    pub cashouts: u64,
    pub busts: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlinkoStats {
    pub drops: u64,
    pub total_bet: f64,
    pub total_profit: f64,
    pub wins: u64,
    pub losses: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BlackjackStats {
    pub hands: u64,
    pub total_bet: f64,
    pub total_profit: f64,
    pub wins: u64,
    pub losses: u64,
    pub pushes: u64,
    pub blackjacks: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CrashStats {
    pub rounds: u64,
    pub total_bet: f64,
    pub total_profit: f64,
    pub wins: u64,
    pub losses: u64,
    pub max_multiplier: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketStats {
    pub trades: u64,
    pub total_volume: f64,
    pub total_profit: f64,
    pub wins: u64,
    pub losses: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The full persisted stats record.
///
/// Every field (and every section field) carries a serde default so a
/// partial or pre-release stored record backfills cleanly; unknown fields
/// survive a load/store round trip through the flattened `extra` maps.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StatsRecord {
    pub global: GlobalStats,
    pub dice: DiceStats,
    pub mines: MinesStats,
    pub plinko: PlinkoStats,
    pub blackjack: BlackjackStats,
    pub crash: CrashStats,
    pub market: MarketStats,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatsRecord {
    /// The player's level tier, derived from lifetime wagered.
    pub fn level(&self) -> Level {
        level_for_wagered(self.global.total_bets)
    }

    /// Apply one settled round: the global section and exactly one game
    /// section are incremented together. Callers persist the whole record
    /// as a single write afterwards.
    pub fn apply(&mut self, event: &GameEvent) {
        let bet = event.bet();
        let profit = event.profit();

        self.global.total_bets += bet;
        self.global.total_profit += profit;
        self.global.total_games += 1;
        if profit > 0.0 {
            self.global.total_wins += 1;
        }

        match event {
            GameEvent::Dice { .. } => {
                self.dice.rolls += 1;
                self.dice.total_bet += bet;
                self.dice.total_profit += profit;
                if profit > 0.0 {
                    self.dice.wins += 1;
                }
                if profit < 0.0 {
                    self.dice.losses += 1;
                }
            }
            GameEvent::Mines { outcome, .. } => {
                self.mines.rounds += 1;
                self.mines.total_bet += bet;
                self.mines.total_profit += profit;
                match outcome {
                    MinesOutcome::Cashout => self.mines.cashouts += 1,
                    MinesOutcome::Bust => self.mines.busts += 1,
                }
            }
            GameEvent::Plinko { .. } => {
                self.plinko.drops += 1;
                self.plinko.total_bet += bet;
                self.plinko.total_profit += profit;
                if profit > 0.0 {
                    self.plinko.wins += 1;
                }
                if profit < 0.0 {
                    self.plinko.losses += 1;
                }
            }
            GameEvent::Blackjack {
                outcome, natural, ..
            } => {
                self.blackjack.hands += 1;
                self.blackjack.total_bet += bet;
                self.blackjack.total_profit += profit;
                match outcome {
                    Outcome::Win => self.blackjack.wins += 1,
                    Outcome::Loss => self.blackjack.losses += 1,
                    Outcome::Push => self.blackjack.pushes += 1,
                }
                if *natural {
                    self.blackjack.blackjacks += 1;
                }
            }
            GameEvent::Crash {
                outcome, multiplier, ..
            } => {
                self.crash.rounds += 1;
                self.crash.total_bet += bet;
                self.crash.total_profit += profit;
                match outcome {
                    Outcome::Win => self.crash.wins += 1,
                    Outcome::Loss => self.crash.losses += 1,
                    Outcome::Push => {}
                }
                if *multiplier > self.crash.max_multiplier {
                    self.crash.max_multiplier = *multiplier;
                }
            }
            GameEvent::Market { outcome, .. } => {
                self.market.trades += 1;
                self.market.total_volume += bet;
                self.market.total_profit += profit;
                match outcome {
                    Outcome::Win => self.market.wins += 1,
                    Outcome::Loss => self.market.losses += 1,
                    Outcome::Push => {}
                }
            }
        }
    }
}
