//! Mines engine.
//!
//! A 5x5 board with `m` mines placed uniformly at random. Each safe reveal
//! compounds the running multiplier by `1 + m/25`. Hitting a mine forfeits
//! the stake; clearing every safe cell cashes out automatically.

use oddhouse_types::{MinesOutcome, MINES_TOTAL_CELLS};

use super::{RoundError, Settlement};
use crate::rng::GameRng;

/// What one reveal produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellReveal {
    Safe {
        multiplier: f64,
        /// Every safe cell is now revealed; the round cashed out on its own.
        cleared: bool,
    },
    Mine,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MinesState {
    Active,
    CashedOut,
    Busted,
}

/// One round of mines. Created after the bet is debited; dropped after the
/// table settles it.
#[derive(Debug)]
pub struct MinesRound {
    bet: f64,
    mine_count: usize,
    mines: [bool; MINES_TOTAL_CELLS],
    revealed: [bool; MINES_TOTAL_CELLS],
    revealed_safe: usize,
    multiplier: f64,
    state: MinesState,
}

impl MinesRound {
    /// A board needs at least one mine and at least one safe cell.
    pub fn validate_count(mine_count: usize) -> Result<(), RoundError> {
        if (1..MINES_TOTAL_CELLS).contains(&mine_count) {
            Ok(())
        } else {
            Err(RoundError::InvalidMineCount)
        }
    }

    pub fn new(bet: f64, mine_count: usize, rng: &mut GameRng) -> Result<Self, RoundError> {
        Self::validate_count(mine_count)?;
        let mut cells: Vec<usize> = (0..MINES_TOTAL_CELLS).collect();
        rng.shuffle(&mut cells);
        let mut mines = [false; MINES_TOTAL_CELLS];
        for &cell in &cells[..mine_count] {
            mines[cell] = true;
        }
        Ok(Self {
            bet,
            mine_count,
            mines,
            revealed: [false; MINES_TOTAL_CELLS],
            revealed_safe: 0,
            multiplier: 1.0,
            state: MinesState::Active,
        })
    }

    pub fn bet(&self) -> f64 {
        self.bet
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn revealed_safe(&self) -> usize {
        self.revealed_safe
    }

    pub fn is_active(&self) -> bool {
        self.state == MinesState::Active
    }

    /// Growth factor applied per safe reveal.
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.mine_count as f64 / MINES_TOTAL_CELLS as f64
    }

    /// Exact conditional probability that the next reveal hits a mine:
    /// `remainingMines / remainingUnrevealedCells`.
    pub fn mine_probability(&self) -> f64 {
        let unrevealed = MINES_TOTAL_CELLS - self.revealed_safe;
        self.mine_count as f64 / unrevealed as f64
    }

    pub fn reveal(&mut self, cell: usize) -> Result<CellReveal, RoundError> {
        if self.state != MinesState::Active {
            return Err(RoundError::RoundOver);
        }
        if cell >= MINES_TOTAL_CELLS {
            return Err(RoundError::InvalidCell);
        }
        if self.revealed[cell] {
            return Err(RoundError::CellAlreadyRevealed);
        }
        self.revealed[cell] = true;
        if self.mines[cell] {
            self.state = MinesState::Busted;
            return Ok(CellReveal::Mine);
        }
        self.revealed_safe += 1;
        self.multiplier *= self.growth_factor();
        let cleared = self.revealed_safe == MINES_TOTAL_CELLS - self.mine_count;
        if cleared {
            self.state = MinesState::CashedOut;
        }
        Ok(CellReveal::Safe {
            multiplier: self.multiplier,
            cleared,
        })
    }

    /// Bank the current multiplier. Legal only while the round is active.
    pub fn cashout(&mut self) -> Result<Settlement, RoundError> {
        if self.state != MinesState::Active {
            return Err(RoundError::RoundOver);
        }
        self.state = MinesState::CashedOut;
        Ok(Settlement::paid(self.bet, self.bet * self.multiplier))
    }

    /// Settlement of a finished round, if it has finished.
    pub fn settlement(&self) -> Option<(Settlement, MinesOutcome)> {
        match self.state {
            MinesState::Active => None,
            MinesState::CashedOut => Some((
                Settlement::paid(self.bet, self.bet * self.multiplier),
                MinesOutcome::Cashout,
            )),
            MinesState::Busted => Some((Settlement::lost(self.bet), MinesOutcome::Bust)),
        }
    }
}
