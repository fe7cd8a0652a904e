//! Leveraged market simulator.
//!
//! Price follows a zero-drift multiplicative random walk. A position locks
//! entry price, margin, and leverage; the moment unrealized loss reaches
//! the margin the position is liquidated for a total loss, otherwise the
//! player closes voluntarily and realizes `margin + PnL`.

use serde::{Deserialize, Serialize};

use oddhouse_types::{MARKET_MIN_PRICE, MARKET_START_PRICE, MARKET_VOLATILITY};

use super::{RoundError, Settlement};
use crate::rng::GameRng;

/// The simulated price chart.
#[derive(Clone, Copy, Debug)]
pub struct PriceFeed {
    price: f64,
}

impl PriceFeed {
    pub fn new() -> Self {
        Self::with_price(MARKET_START_PRICE)
    }

    pub fn with_price(price: f64) -> Self {
        Self {
            price: price.max(MARKET_MIN_PRICE),
        }
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Advance one step: `price *= 1 + (U-0.5)*volatility/100`, floored at
    /// the minimum price. Returns the new price.
    pub fn tick(&mut self, rng: &mut GameRng) -> f64 {
        let u = rng.unit();
        let next = self.price * (1.0 + (u - 0.5) * MARKET_VOLATILITY / 100.0);
        self.price = next.max(MARKET_MIN_PRICE);
        self.price
    }
}

impl Default for PriceFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Long,
    Short,
}

/// An open leveraged position. The margin is debited at open; settlement
/// returns `margin + PnL` (or nothing on liquidation).
#[derive(Clone, Copy, Debug)]
pub struct Position {
    side: Side,
    entry: f64,
    margin: f64,
    leverage: u32,
}

impl Position {
    pub fn open(side: Side, entry: f64, margin: f64, leverage: u32) -> Result<Self, RoundError> {
        if leverage < 1 {
            return Err(RoundError::InvalidLeverage);
        }
        Ok(Self {
            side,
            entry,
            margin,
            leverage,
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn entry(&self) -> f64 {
        self.entry
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Notional exposure: `margin * leverage`.
    pub fn size(&self) -> f64 {
        self.margin * f64::from(self.leverage)
    }

    /// Price at which unrealized loss exactly equals the margin.
    pub fn liquidation_price(&self) -> f64 {
        let offset = 1.0 / f64::from(self.leverage);
        match self.side {
            Side::Long => self.entry * (1.0 - offset),
            Side::Short => self.entry * (1.0 + offset),
        }
    }

    /// Signed unrealized PnL at `price`.
    pub fn unrealized_pnl(&self, price: f64) -> f64 {
        let move_fraction = (price - self.entry) / self.entry;
        match self.side {
            Side::Long => move_fraction * self.size(),
            Side::Short => -move_fraction * self.size(),
        }
    }

    pub fn is_liquidated(&self, price: f64) -> bool {
        self.unrealized_pnl(price) <= -self.margin
    }

    /// Close at `price`. A liquidated position forfeits the whole margin.
    pub fn close(&self, price: f64) -> Settlement {
        if self.is_liquidated(price) {
            return Settlement::lost(self.margin);
        }
        let payout = (self.margin + self.unrealized_pnl(price)).max(0.0);
        Settlement::paid(self.margin, payout)
    }
}
