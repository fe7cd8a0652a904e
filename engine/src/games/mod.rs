//! Pure outcome engines, one module per game.
//!
//! Engines map `(bet, configuration, random draw)` to a settlement. They
//! never touch the wallet or the ledger; the [`Table`](crate::table::Table)
//! sequences money movement around them. Stateful rounds (mines, blackjack,
//! crash, market) are plain structs scoped to a single round and dropped at
//! resolution.

pub mod blackjack;
pub mod cards;
pub mod coinflip;
pub mod crash;
pub mod dice;
pub mod market;
pub mod mines;
pub mod plinko;
pub mod registry;

use oddhouse_types::Outcome;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("bet must be a positive finite amount")]
    InvalidBet,
    #[error("bet exceeds the current balance")]
    InsufficientBalance,
    #[error("risk must be between 1 and 99")]
    InvalidRisk,
    #[error("mine count must leave at least one safe cell")]
    InvalidMineCount,
    #[error("cell index out of range")]
    InvalidCell,
    #[error("cell already revealed")]
    CellAlreadyRevealed,
    #[error("row count out of range")]
    InvalidRows,
    #[error("leverage must be at least 1")]
    InvalidLeverage,
    #[error("round is not active")]
    RoundOver,
    #[error("move not allowed at this stage")]
    InvalidMove,
}

/// Money movement of one settled round. `payout` is what comes back to the
/// wallet (stake included on a win), `profit` is net of the stake.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settlement {
    pub bet: f64,
    pub payout: f64,
    pub profit: f64,
}

impl Settlement {
    /// Full loss of the stake.
    pub fn lost(bet: f64) -> Self {
        Self {
            bet,
            payout: 0.0,
            profit: -bet,
        }
    }

    /// Stake returned plus any winnings.
    pub fn paid(bet: f64, payout: f64) -> Self {
        Self {
            bet,
            payout,
            profit: payout - bet,
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_profit(self.profit)
    }
}

/// Shared bet precondition: positive, finite, covered by the balance.
pub(crate) fn validate_bet(bet: f64, balance: f64) -> Result<(), RoundError> {
    if !bet.is_finite() || bet <= 0.0 {
        return Err(RoundError::InvalidBet);
    }
    if bet > balance {
        return Err(RoundError::InsufficientBalance);
    }
    Ok(())
}
