//! Plinko odds model and bin resolution.
//!
//! The multiplier table is a symmetric exponential: low at the center bin,
//! high at the edges, with the rate chosen so the edge bin lands exactly on
//! the tier's `edge_high`. The raw curve is then scaled so the expected
//! payout under a fair binomial landing distribution equals `1 - edge`,
//! and each bin is rounded to 2 decimals.
//!
//! Where the ball lands is not the engine's business: a physics simulation
//! (or, for testing and autoplay, a binomial draw) supplies the terminal
//! bin through [`TrajectoryProvider`].

use serde::{Deserialize, Serialize};

use super::{RoundError, Settlement};
use crate::rng::GameRng;

/// House edge applied to the normalized multiplier table.
pub const PLINKO_HOUSE_EDGE: f64 = 0.03;

/// Most rows the board supports.
pub const MAX_ROWS: usize = 32;

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskTier {
    /// `(center_low, edge_high)` anchors of the raw curve.
    fn curve(self) -> (f64, f64) {
        match self {
            RiskTier::Low => (0.9, 4.0),
            RiskTier::Medium => (0.5, 12.0),
            RiskTier::High => (0.2, 30.0),
        }
    }
}

/// Probability of landing in each bin under `rows` fair binary draws.
fn binomial_weights(rows: usize) -> Vec<f64> {
    let mut weights = vec![0.0; rows + 1];
    weights[0] = 0.5f64.powi(rows as i32);
    for i in 0..rows {
        weights[i + 1] = weights[i] * (rows - i) as f64 / (i + 1) as f64;
    }
    weights
}

/// Generate the `rows+1` bin multipliers for a tier.
pub fn multipliers(tier: RiskTier, rows: usize) -> Result<Vec<f64>, RoundError> {
    if !(1..=MAX_ROWS).contains(&rows) {
        return Err(RoundError::InvalidRows);
    }
    let (center_low, edge_high) = tier.curve();
    let center = rows as f64 / 2.0;
    let alpha = (edge_high / center_low).ln() / center;

    let raw: Vec<f64> = (0..=rows)
        .map(|i| {
            let d = (i as f64 - center).abs();
            center_low * (alpha * d).exp()
        })
        .collect();

    // Scale so the binomial-weighted expected payout is exactly the target,
    // then round for display. Rounding moves the EV by well under a cent.
    let weights = binomial_weights(rows);
    let raw_ev: f64 = raw.iter().zip(&weights).map(|(m, w)| m * w).sum();
    let scale = (1.0 - PLINKO_HOUSE_EDGE) / raw_ev;
    Ok(raw
        .iter()
        .map(|m| (m * scale * 100.0).round() / 100.0)
        .collect())
}

/// Supplies the terminal bin for one dropped ball.
pub trait TrajectoryProvider {
    fn final_bin(&mut self, rows: usize) -> usize;
}

/// Fair binomial landing: `rows` independent coin flips, counting rights.
impl TrajectoryProvider for GameRng {
    fn final_bin(&mut self, rows: usize) -> usize {
        (0..rows).filter(|_| self.chance(0.5)).count()
    }
}

/// Map a physics-resolved terminal x position onto a bin index. Positions
/// outside the board clamp to the outermost bins.
pub fn bin_from_position(x: f64, board_width: f64, bins: usize) -> usize {
    let bin_width = board_width / bins as f64;
    let raw = (x / bin_width).floor();
    if raw < 0.0 {
        0
    } else {
        (raw as usize).min(bins - 1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlinkoDrop {
    pub bin: usize,
    pub multiplier: f64,
    pub settlement: Settlement,
}

/// Drop one ball. The bet must already be validated and debited.
pub fn drop_ball(
    bet: f64,
    tier: RiskTier,
    rows: usize,
    provider: &mut impl TrajectoryProvider,
) -> Result<PlinkoDrop, RoundError> {
    let table = multipliers(tier, rows)?;
    let bin = provider.final_bin(rows).min(rows);
    let multiplier = table[bin];
    Ok(PlinkoDrop {
        bin,
        multiplier,
        settlement: Settlement::paid(bet, bet * multiplier),
    })
}
