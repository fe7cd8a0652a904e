//! The table: wallet orchestration around the pure engines.
//!
//! Every round follows the same contract: validate the bet against the
//! current balance, debit it before any randomness is drawn, then credit
//! the payout and record the settled event. Stateful rounds are consumed
//! at settlement so a round can never pay out twice.

use tracing::debug;

use oddhouse_types::{GameEvent, StatsRecord};

use crate::games::blackjack::{BlackjackRound, HandResult};
use crate::games::coinflip::{self, CoinSide, FlipResult};
use crate::games::crash::CrashRound;
use crate::games::dice::{self, DiceRoll};
use crate::games::market::{Position, Side};
use crate::games::mines::MinesRound;
use crate::games::plinko::{self, PlinkoDrop, RiskTier, TrajectoryProvider};
use crate::games::cards::Deck;
use crate::games::{validate_bet, RoundError, Settlement};
use crate::rng::GameRng;
use crate::storage::Storage;
use crate::store::achievements::NotificationSink;
use crate::store::{achievements, settings, shop, stats, wallet};

pub struct Table<S: Storage, N: NotificationSink> {
    storage: S,
    notifier: N,
}

impl<S: Storage, N: NotificationSink> Table<S, N> {
    pub fn new(storage: S, notifier: N) -> Self {
        Self { storage, notifier }
    }

    pub fn balance(&self) -> f64 {
        wallet::balance(&self.storage)
    }

    pub fn stats(&self) -> StatsRecord {
        stats::load(&self.storage)
    }

    /// Direct access to the underlying storage, for the shop/settings
    /// stores and host persistence concerns.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn take_bet(&mut self, bet: f64) -> Result<(), RoundError> {
        validate_bet(bet, self.balance())?;
        wallet::change(&mut self.storage, -bet);
        Ok(())
    }

    fn settle(&mut self, settlement: Settlement, event: Option<GameEvent>) {
        if settlement.payout > 0.0 {
            wallet::change(&mut self.storage, settlement.payout);
        }
        debug!(
            bet = settlement.bet,
            profit = settlement.profit,
            "round settled"
        );
        if let Some(event) = event {
            stats::record(&mut self.storage, &mut self.notifier, &event);
        }
    }

    /// Flip the coin. Settles against the wallet only; coinflip keeps no
    /// ledger section.
    pub fn flip_coin(
        &mut self,
        bet: f64,
        pick: CoinSide,
        rng: &mut GameRng,
    ) -> Result<FlipResult, RoundError> {
        self.take_bet(bet)?;
        let result = coinflip::flip(bet, pick, rng);
        self.settle(result.settlement, None);
        Ok(result)
    }

    pub fn roll_dice(
        &mut self,
        bet: f64,
        risk: u8,
        rng: &mut GameRng,
    ) -> Result<DiceRoll, RoundError> {
        dice::multiplier(risk)?;
        self.take_bet(bet)?;
        let result = dice::roll(bet, risk, rng)?;
        self.settle(
            result.settlement,
            Some(GameEvent::Dice {
                bet,
                profit: result.settlement.profit,
            }),
        );
        Ok(result)
    }

    pub fn drop_plinko(
        &mut self,
        bet: f64,
        tier: RiskTier,
        rows: usize,
        provider: &mut impl TrajectoryProvider,
    ) -> Result<PlinkoDrop, RoundError> {
        plinko::multipliers(tier, rows)?;
        self.take_bet(bet)?;
        let result = plinko::drop_ball(bet, tier, rows, provider)?;
        self.settle(
            result.settlement,
            Some(GameEvent::Plinko {
                bet,
                profit: result.settlement.profit,
            }),
        );
        Ok(result)
    }

    /// Start a mines round: the bet is debited up front and comes back only
    /// through [`settle_mines`](Self::settle_mines).
    pub fn start_mines(
        &mut self,
        bet: f64,
        mine_count: usize,
        rng: &mut GameRng,
    ) -> Result<MinesRound, RoundError> {
        MinesRound::validate_count(mine_count)?;
        self.take_bet(bet)?;
        MinesRound::new(bet, mine_count, rng)
    }

    /// Settle a finished mines round. Consumes the round so a cashout can
    /// only be credited once.
    pub fn settle_mines(&mut self, round: MinesRound) -> Result<Settlement, RoundError> {
        let (settlement, outcome) = round.settlement().ok_or(RoundError::InvalidMove)?;
        self.settle(
            settlement,
            Some(GameEvent::Mines {
                bet: settlement.bet,
                profit: settlement.profit,
                outcome,
            }),
        );
        Ok(settlement)
    }

    /// Deal a blackjack hand against the shared deck. Naturals settle
    /// within the deal; the round still goes through
    /// [`settle_blackjack`](Self::settle_blackjack).
    pub fn deal_blackjack(
        &mut self,
        bet: f64,
        deck: &mut Deck,
        rng: &mut GameRng,
    ) -> Result<BlackjackRound, RoundError> {
        self.take_bet(bet)?;
        Ok(BlackjackRound::deal(bet, deck, rng))
    }

    /// Double down, debiting the second stake first.
    pub fn double_down(
        &mut self,
        round: &mut BlackjackRound,
        deck: &mut Deck,
        rng: &mut GameRng,
    ) -> Result<(), RoundError> {
        if !round.can_double() {
            return Err(RoundError::InvalidMove);
        }
        self.take_bet(round.bet())?;
        round.double(deck, rng)
    }

    /// Whether the wallet currently covers a double of this hand.
    pub fn can_afford_double(&self, round: &BlackjackRound) -> bool {
        round.bet() <= self.balance()
    }

    pub fn settle_blackjack(&mut self, round: BlackjackRound) -> Result<HandResult, RoundError> {
        let result = *round.result().ok_or(RoundError::InvalidMove)?;
        self.settle(
            result.settlement,
            Some(GameEvent::Blackjack {
                bet: result.settlement.bet,
                profit: result.settlement.profit,
                outcome: result.outcome,
                natural: result.natural,
            }),
        );
        Ok(result)
    }

    pub fn start_crash(
        &mut self,
        bet: f64,
        auto_eject: Option<f64>,
        rng: &mut GameRng,
    ) -> Result<CrashRound, RoundError> {
        self.take_bet(bet)?;
        Ok(CrashRound::new(bet, auto_eject, rng))
    }

    /// Settle a crashed or ejected round. Returns the settlement and the
    /// final multiplier.
    pub fn settle_crash(&mut self, round: CrashRound) -> Result<(Settlement, f64), RoundError> {
        let (settlement, multiplier) = round.settlement().ok_or(RoundError::InvalidMove)?;
        self.settle(
            settlement,
            Some(GameEvent::Crash {
                bet: settlement.bet,
                profit: settlement.profit,
                outcome: settlement.outcome(),
                multiplier,
            }),
        );
        Ok((settlement, multiplier))
    }

    /// Open a leveraged position, debiting the margin.
    pub fn open_position(
        &mut self,
        margin: f64,
        side: Side,
        leverage: u32,
        entry_price: f64,
    ) -> Result<Position, RoundError> {
        let position = Position::open(side, entry_price, margin, leverage)?;
        self.take_bet(margin)?;
        Ok(position)
    }

    /// Close (or liquidate) a position at `price`, crediting whatever is
    /// left of the margin plus PnL.
    pub fn close_position(&mut self, position: Position, price: f64) -> Settlement {
        let settlement = position.close(price);
        self.settle(
            settlement,
            Some(GameEvent::Market {
                bet: settlement.bet,
                profit: settlement.profit,
                outcome: settlement.outcome(),
            }),
        );
        settlement
    }

    /// Wipe everything: wallet, ledger, achievements, shop, settings.
    pub fn reset(&mut self) {
        wallet::reset(&mut self.storage);
        stats::reset(&mut self.storage, &mut self.notifier);
        achievements::reset(&mut self.storage);
        shop::reset(&mut self.storage);
        settings::reset(&mut self.storage);
    }
}
