//! Coinflip engine.
//!
//! A fair coin with the house edge baked into the payout multiplier rather
//! than the flip itself. Coinflip settles against the wallet but keeps no
//! ledger section.

use serde::{Deserialize, Serialize};

use oddhouse_types::{COINFLIP_EDGE, COINFLIP_WIN_PROB};

use super::Settlement;
use crate::rng::GameRng;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoinSide {
    #[default]
    Heads,
    Tails,
}

/// Payout multiplier on a win: `(1/p)*(1-edge)`, 1.96x for the fair coin.
pub fn multiplier() -> f64 {
    (1.0 / COINFLIP_WIN_PROB) * (1.0 - COINFLIP_EDGE)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlipResult {
    pub pick: CoinSide,
    pub landed: CoinSide,
    pub settlement: Settlement,
}

impl FlipResult {
    pub fn won(&self) -> bool {
        self.pick == self.landed
    }
}

/// Flip once. The bet must already be validated and debited.
pub fn flip(bet: f64, pick: CoinSide, rng: &mut GameRng) -> FlipResult {
    let landed = if rng.chance(COINFLIP_WIN_PROB) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    };
    let settlement = if landed == pick {
        Settlement::paid(bet, bet * multiplier())
    } else {
        Settlement::lost(bet)
    };
    FlipResult {
        pick,
        landed,
        settlement,
    }
}
