//! Dice engine.
//!
//! The player picks a risk percentage `r`: a roll of `r` or below loses.
//! The win multiplier is the fair multiplier for the remaining win chance
//! discounted by a house edge that scales with the risk taken.

use oddhouse_types::{DICE_EDGE_BASE, DICE_EDGE_SLOPE};

use super::{RoundError, Settlement};
use crate::rng::GameRng;

/// Probability of winning at risk `r` (roll must land above `r`).
pub fn win_chance(risk: u8) -> f64 {
    f64::from(100u16 - u16::from(risk)) / 100.0
}

/// House edge at risk `r`: 2% at the safe end, 12% at the reckless end.
pub fn house_edge(risk: u8) -> f64 {
    DICE_EDGE_BASE + DICE_EDGE_SLOPE * f64::from(risk) / 100.0
}

/// Win multiplier: `(1/winChance)*(1-houseEdge)`.
pub fn multiplier(risk: u8) -> Result<f64, RoundError> {
    if !(1..=99).contains(&risk) {
        return Err(RoundError::InvalidRisk);
    }
    Ok((1.0 / win_chance(risk)) * (1.0 - house_edge(risk)))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiceRoll {
    pub risk: u8,
    pub roll: u8,
    pub multiplier: f64,
    pub settlement: Settlement,
}

impl DiceRoll {
    pub fn won(&self) -> bool {
        self.roll > self.risk
    }
}

/// Roll once at the given risk. The bet must already be validated and
/// debited.
pub fn roll(bet: f64, risk: u8, rng: &mut GameRng) -> Result<DiceRoll, RoundError> {
    let multiplier = multiplier(risk)?;
    let roll = rng.range_inclusive(1, 100) as u8;
    Ok(settle(bet, risk, roll, multiplier))
}

/// Settle a known roll. Split out so tests can pin exact rolls.
pub(crate) fn settle(bet: f64, risk: u8, roll: u8, multiplier: f64) -> DiceRoll {
    let settlement = if roll > risk {
        Settlement::paid(bet, bet * multiplier)
    } else {
        Settlement::lost(bet)
    };
    DiceRoll {
        risk,
        roll,
        multiplier,
        settlement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_formula() {
        // r=50: win chance 0.5, edge 0.07, multiplier 1.86.
        let m = multiplier(50).unwrap();
        assert!((m - 1.86).abs() < 1e-12);
        assert_eq!(multiplier(0), Err(RoundError::InvalidRisk));
        assert_eq!(multiplier(100), Err(RoundError::InvalidRisk));
    }

    #[test]
    fn test_ev_within_edge_band_for_all_risks() {
        for risk in 1..=99u8 {
            let m = multiplier(risk).unwrap();
            let ev = win_chance(risk) * m - 1.0;
            assert!(
                (-0.12..=-0.02).contains(&ev),
                "risk {risk}: EV {ev} outside [-0.12, -0.02]"
            );
        }
    }

    #[test]
    fn test_settlement_boundary() {
        let m = multiplier(50).unwrap();
        // Roll exactly at the risk threshold loses; one above wins.
        let lost = settle(100.0, 50, 50, m);
        assert!(!lost.won());
        assert_eq!(lost.settlement.profit, -100.0);

        let won = settle(100.0, 50, 51, m);
        assert!(won.won());
        assert!((won.settlement.payout - 186.0).abs() < 1e-9);
        assert!((won.settlement.profit - 86.0).abs() < 1e-9);
    }

    #[test]
    fn test_roll_stays_in_range() {
        let mut rng = GameRng::seeded(11);
        for _ in 0..10_000 {
            let result = roll(1.0, 30, &mut rng).unwrap();
            assert!((1..=100).contains(&result.roll));
        }
    }
}
