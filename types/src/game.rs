use serde::{Deserialize, Serialize};
use std::fmt;

/// Games sharing the wallet and stats ledger.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Coinflip,
    Dice,
    Mines,
    Plinko,
    Blackjack,
    Crash,
    Market,
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameType::Coinflip => "coinflip",
            GameType::Dice => "dice",
            GameType::Mines => "mines",
            GameType::Plinko => "plinko",
            GameType::Blackjack => "blackjack",
            GameType::Crash => "crash",
            GameType::Market => "market",
        };
        write!(f, "{}", name)
    }
}

/// Round outcome from the player's perspective.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Push,
}

impl Outcome {
    /// Classify a settled profit the way the ledger does: positive is a win,
    /// negative a loss, zero a push.
    pub fn from_profit(profit: f64) -> Self {
        if profit > 0.0 {
            Outcome::Win
        } else if profit < 0.0 {
            Outcome::Loss
        } else {
            Outcome::Push
        }
    }
}

/// How a mines round ended.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MinesOutcome {
    Cashout,
    Bust,
}

/// A settled round, tagged per game and carrying exactly the fields that
/// game produces. The stats ledger dispatches on the tag.
///
/// Coinflip intentionally has no variant: it settles against the wallet but
/// keeps no ledger section.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "game", rename_all = "lowercase")]
pub enum GameEvent {
    Dice {
        bet: f64,
        profit: f64,
    },
    Mines {
        bet: f64,
        profit: f64,
        outcome: MinesOutcome,
    },
    Plinko {
        bet: f64,
        profit: f64,
    },
    Blackjack {
        bet: f64,
        profit: f64,
        outcome: Outcome,
        /// Player held a natural blackjack this hand.
        natural: bool,
    },
    Crash {
        bet: f64,
        profit: f64,
        outcome: Outcome,
        /// Multiplier the round crashed at (or was ejected at).
        multiplier: f64,
    },
    Market {
        bet: f64,
        profit: f64,
        outcome: Outcome,
    },
}

impl GameEvent {
    pub fn game_type(&self) -> GameType {
        match self {
            GameEvent::Dice { .. } => GameType::Dice,
            GameEvent::Mines { .. } => GameType::Mines,
            GameEvent::Plinko { .. } => GameType::Plinko,
            GameEvent::Blackjack { .. } => GameType::Blackjack,
            GameEvent::Crash { .. } => GameType::Crash,
            GameEvent::Market { .. } => GameType::Market,
        }
    }

    /// Wagered amount (margin, for market positions).
    pub fn bet(&self) -> f64 {
        match self {
            GameEvent::Dice { bet, .. }
            | GameEvent::Mines { bet, .. }
            | GameEvent::Plinko { bet, .. }
            | GameEvent::Blackjack { bet, .. }
            | GameEvent::Crash { bet, .. }
            | GameEvent::Market { bet, .. } => *bet,
        }
    }

    pub fn profit(&self) -> f64 {
        match self {
            GameEvent::Dice { profit, .. }
            | GameEvent::Mines { profit, .. }
            | GameEvent::Plinko { profit, .. }
            | GameEvent::Blackjack { profit, .. }
            | GameEvent::Crash { profit, .. }
            | GameEvent::Market { profit, .. } => *profit,
        }
    }
}
