//! Crash engine.
//!
//! One crash point is drawn per round: with probability `houseEdge` the
//! round busts instantly at 1.00x, otherwise `crashPoint = (1-edge)/(1-u)`
//! for uniform `u`. The displayed multiplier grows as `e^(k*t)`. The player
//! (or a configured auto-eject threshold) locks in profit before the crash
//! point, or loses the stake.

use oddhouse_types::{CRASH_GROWTH_RATE, CRASH_HOUSE_EDGE};

use super::{RoundError, Settlement};
use crate::rng::GameRng;

/// Draw the round's crash point.
pub fn draw_crash_point(rng: &mut GameRng) -> f64 {
    let u = rng.unit();
    if u < CRASH_HOUSE_EDGE {
        return 1.0;
    }
    ((1.0 - CRASH_HOUSE_EDGE) / (1.0 - u)).max(1.0)
}

/// Multiplier shown after `elapsed` seconds of flight.
pub fn multiplier_at(elapsed: f64) -> f64 {
    (CRASH_GROWTH_RATE * elapsed).exp()
}

/// Probability that a round survives to at least `threshold` (> 1).
/// Used for the closed-form EV the simulation is checked against.
pub fn survival_probability(threshold: f64) -> f64 {
    if threshold <= 1.0 {
        1.0 - CRASH_HOUSE_EDGE
    } else {
        (1.0 - CRASH_HOUSE_EDGE) / threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrashState {
    /// Still flying at the given multiplier.
    Running { multiplier: f64 },
    /// Player locked in before the crash.
    Ejected { multiplier: f64 },
    /// The crash point was reached with the stake still in.
    Crashed { crash_point: f64 },
}

/// One crash round. The crash point is fixed at creation; [`poll`] advances
/// the flight against elapsed time.
///
/// Within a single poll the auto-eject threshold is checked before the
/// crash, so a threshold met in the same tick as the crash point still
/// wins (the eject locks in exactly the threshold).
///
/// [`poll`]: CrashRound::poll
#[derive(Debug)]
pub struct CrashRound {
    bet: f64,
    crash_point: f64,
    auto_eject: Option<f64>,
    state: CrashState,
}

impl CrashRound {
    pub fn new(bet: f64, auto_eject: Option<f64>, rng: &mut GameRng) -> Self {
        Self {
            bet,
            crash_point: draw_crash_point(rng),
            auto_eject: auto_eject.filter(|t| t.is_finite() && *t > 1.0),
            state: CrashState::Running { multiplier: 1.0 },
        }
    }

    pub fn bet(&self) -> f64 {
        self.bet
    }

    pub fn state(&self) -> CrashState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CrashState::Running { .. })
    }

    /// Advance the flight to `elapsed` seconds. Returns the state after the
    /// tick.
    pub fn poll(&mut self, elapsed: f64) -> CrashState {
        if !self.is_running() {
            return self.state;
        }
        let multiplier = multiplier_at(elapsed);
        if let Some(threshold) = self.auto_eject {
            if multiplier >= threshold && threshold <= self.crash_point {
                self.state = CrashState::Ejected {
                    multiplier: threshold,
                };
                return self.state;
            }
        }
        if multiplier >= self.crash_point {
            self.state = CrashState::Crashed {
                crash_point: self.crash_point,
            };
        } else {
            self.state = CrashState::Running { multiplier };
        }
        self.state
    }

    /// Manual eject at the current multiplier. Legal only mid-flight.
    pub fn eject(&mut self, elapsed: f64) -> Result<CrashState, RoundError> {
        if !self.is_running() {
            return Err(RoundError::RoundOver);
        }
        let multiplier = multiplier_at(elapsed);
        if multiplier >= self.crash_point {
            self.state = CrashState::Crashed {
                crash_point: self.crash_point,
            };
        } else {
            self.state = CrashState::Ejected { multiplier };
        }
        Ok(self.state)
    }

    /// Settlement and final multiplier of a finished round.
    pub fn settlement(&self) -> Option<(Settlement, f64)> {
        match self.state {
            CrashState::Running { .. } => None,
            CrashState::Ejected { multiplier } => Some((
                Settlement::paid(self.bet, self.bet * multiplier),
                multiplier,
            )),
            CrashState::Crashed { crash_point } => {
                Some((Settlement::lost(self.bet), crash_point))
            }
        }
    }
}
