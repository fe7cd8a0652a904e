//! Blackjack hand evaluation, round state machine, and strategy advisor.
//!
//! Hand values follow standard rules: Aces count 11 and are demoted to 1
//! one at a time while the total exceeds 21. A two-card 21 is a natural and
//! pays 1.5x profit. The dealer stands on every 17, soft included.
//!
//! The round struct runs player moves against a shared [`Deck`]. Dealer
//! resolution is synchronous: the move that ends the player's turn also
//! plays out the dealer and settles, so callers only ever observe
//! `PlayerActing` or `Settled`.

use oddhouse_types::{Outcome, BLACKJACK_PAYOUT};

use super::cards::{card_value, Deck};
use super::{RoundError, Settlement};
use crate::rng::GameRng;

/// Hand total and whether an Ace is still counted as 11.
pub fn hand_value(cards: &[u8]) -> (u8, bool) {
    let mut total: u16 = 0;
    let mut soft_aces: u8 = 0;
    for &card in cards {
        let value = card_value(card);
        if value == 11 {
            soft_aces += 1;
        }
        total += u16::from(value);
    }
    while total > 21 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }
    (total.min(u16::from(u8::MAX)) as u8, soft_aces > 0)
}

/// A natural: exactly two cards totalling 21.
pub fn is_blackjack(cards: &[u8]) -> bool {
    cards.len() == 2 && hand_value(cards).0 == 21
}

/// What the advisor recommends. Purely informational; never alters
/// settlement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Hit,
    Stand,
    Double,
}

/// Fixed basic-strategy lookup. `dealer_up` is the up-card's blackjack
/// value (2..=11, Ace as 11); `can_double` reflects whether doubling is
/// still legal and affordable.
pub fn basic_strategy(total: u8, soft: bool, dealer_up: u8, can_double: bool) -> Action {
    if soft {
        return match total {
            19.. => Action::Stand,
            18 => match dealer_up {
                3..=6 if can_double => Action::Double,
                3..=6 => Action::Stand,
                2 | 7 | 8 => Action::Stand,
                _ => Action::Hit,
            },
            _ => match dealer_up {
                3..=6 if can_double => Action::Double,
                _ => Action::Hit,
            },
        };
    }
    match total {
        17.. => Action::Stand,
        13..=16 => match dealer_up {
            2..=6 => Action::Stand,
            _ => Action::Hit,
        },
        12 => match dealer_up {
            4..=6 => Action::Stand,
            _ => Action::Hit,
        },
        11 if can_double => Action::Double,
        10 if can_double && dealer_up < 10 => Action::Double,
        9 if can_double && (3..=6).contains(&dealer_up) => Action::Double,
        _ => Action::Hit,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    PlayerActing,
    Settled,
}

/// How a settled hand resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandResult {
    pub settlement: Settlement,
    pub outcome: Outcome,
    /// Player held a natural this hand.
    pub natural: bool,
    pub player_total: u8,
    pub dealer_total: u8,
}

/// One blackjack round. The base bet is debited before the deal; a double
/// debits the same amount again via the table before [`double`] is called.
///
/// [`double`]: BlackjackRound::double
#[derive(Debug)]
pub struct BlackjackRound {
    bet: f64,
    player: Vec<u8>,
    dealer: Vec<u8>,
    doubled: bool,
    stage: Stage,
    result: Option<HandResult>,
}

impl BlackjackRound {
    /// Deal a fresh hand. Naturals settle immediately.
    pub fn deal(bet: f64, deck: &mut Deck, rng: &mut GameRng) -> Self {
        let player = vec![deck.draw(rng), deck.draw(rng)];
        let dealer = vec![deck.draw(rng), deck.draw(rng)];
        Self::from_hands(bet, player, dealer)
    }

    fn from_hands(bet: f64, player: Vec<u8>, dealer: Vec<u8>) -> Self {
        let mut round = Self {
            bet,
            player,
            dealer,
            doubled: false,
            stage: Stage::PlayerActing,
            result: None,
        };
        let player_natural = is_blackjack(&round.player);
        let dealer_natural = is_blackjack(&round.dealer);
        if player_natural || dealer_natural {
            let settlement = if player_natural && dealer_natural {
                Settlement::paid(bet, bet)
            } else if player_natural {
                Settlement::paid(bet, bet * (1.0 + BLACKJACK_PAYOUT))
            } else {
                Settlement::lost(bet)
            };
            round.finish(settlement, player_natural);
        }
        round
    }

    /// Fixed deal for pinning exact hands in tests.
    #[cfg(test)]
    pub(crate) fn deal_fixed(bet: f64, player: [u8; 2], dealer: [u8; 2]) -> Self {
        Self::from_hands(bet, player.to_vec(), dealer.to_vec())
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current wager, doubled if a double was taken.
    pub fn bet(&self) -> f64 {
        self.bet
    }

    pub fn player_cards(&self) -> &[u8] {
        &self.player
    }

    pub fn dealer_cards(&self) -> &[u8] {
        &self.dealer
    }

    /// The dealer card visible during play.
    pub fn dealer_upcard(&self) -> u8 {
        self.dealer[0]
    }

    pub fn result(&self) -> Option<&HandResult> {
        self.result.as_ref()
    }

    /// Doubling is legal only on the first decision of the hand.
    pub fn can_double(&self) -> bool {
        self.stage == Stage::PlayerActing && self.player.len() == 2 && !self.doubled
    }

    /// Advisor recommendation for the current decision, if one is pending.
    /// `can_afford_double` lets the caller factor in the wallet.
    pub fn advice(&self, can_afford_double: bool) -> Option<Action> {
        if self.stage != Stage::PlayerActing {
            return None;
        }
        let (total, soft) = hand_value(&self.player);
        let dealer_up = card_value(self.dealer_upcard());
        Some(basic_strategy(
            total,
            soft,
            dealer_up,
            self.can_double() && can_afford_double,
        ))
    }

    /// Draw one card. A bust settles the hand immediately.
    pub fn hit(&mut self, deck: &mut Deck, rng: &mut GameRng) -> Result<(), RoundError> {
        self.require_acting()?;
        self.player.push(deck.draw(rng));
        if hand_value(&self.player).0 > 21 {
            self.finish(Settlement::lost(self.bet), false);
        }
        Ok(())
    }

    /// End the player's turn; the dealer plays out and the hand settles.
    pub fn stand(&mut self, deck: &mut Deck, rng: &mut GameRng) -> Result<(), RoundError> {
        self.require_acting()?;
        self.play_dealer_and_settle(deck, rng);
        Ok(())
    }

    /// Double the wager, draw exactly one card, then stand. The caller must
    /// have debited the second stake already.
    pub fn double(&mut self, deck: &mut Deck, rng: &mut GameRng) -> Result<(), RoundError> {
        self.require_acting()?;
        if !self.can_double() {
            return Err(RoundError::InvalidMove);
        }
        self.doubled = true;
        self.bet *= 2.0;
        self.player.push(deck.draw(rng));
        if hand_value(&self.player).0 > 21 {
            self.finish(Settlement::lost(self.bet), false);
        } else {
            self.play_dealer_and_settle(deck, rng);
        }
        Ok(())
    }

    fn require_acting(&self) -> Result<(), RoundError> {
        if self.stage == Stage::PlayerActing {
            Ok(())
        } else {
            Err(RoundError::RoundOver)
        }
    }

    fn play_dealer_and_settle(&mut self, deck: &mut Deck, rng: &mut GameRng) {
        while hand_value(&self.dealer).0 < 17 {
            self.dealer.push(deck.draw(rng));
        }
        let (player_total, _) = hand_value(&self.player);
        let (dealer_total, _) = hand_value(&self.dealer);
        let settlement = if dealer_total > 21 || player_total > dealer_total {
            Settlement::paid(self.bet, self.bet * 2.0)
        } else if dealer_total == player_total {
            Settlement::paid(self.bet, self.bet)
        } else {
            Settlement::lost(self.bet)
        };
        self.finish(settlement, false);
    }

    fn finish(&mut self, settlement: Settlement, natural: bool) {
        let (player_total, _) = hand_value(&self.player);
        let (dealer_total, _) = hand_value(&self.dealer);
        self.result = Some(HandResult {
            settlement,
            outcome: settlement.outcome(),
            natural,
            player_total,
            dealer_total,
        });
        self.stage = Stage::Settled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Card encoding shorthand: rank 0 is Ace, suit = card / 13.
    const ACE: u8 = 0;
    const TWO: u8 = 1;
    const FIVE: u8 = 4;
    const SIX: u8 = 5;
    const SEVEN: u8 = 6;
    const NINE: u8 = 8;
    const TEN: u8 = 9;
    const KING: u8 = 12;

    fn second_suit(card: u8) -> u8 {
        card + 13
    }

    #[test]
    fn test_hand_value_demotes_aces() {
        assert_eq!(hand_value(&[ACE, KING]), (21, true));
        assert_eq!(hand_value(&[ACE, second_suit(ACE)]), (12, true));
        assert_eq!(hand_value(&[ACE, SIX]), (17, true));
        assert_eq!(hand_value(&[ACE, SIX, TEN]), (17, false));
        assert_eq!(hand_value(&[TEN, KING, TWO]), (22, false));
        // Four aces: 11+1+1+1.
        assert_eq!(
            hand_value(&[ACE, second_suit(ACE), ACE + 26, ACE + 39]),
            (14, true)
        );
    }

    #[test]
    fn test_hand_value_is_idempotent() {
        let hands: [&[u8]; 4] = [
            &[ACE, KING],
            &[ACE, SIX, TEN],
            &[TEN, KING, TWO],
            &[ACE, second_suit(ACE), NINE],
        ];
        for hand in hands {
            assert_eq!(hand_value(hand), hand_value(hand));
        }
    }

    #[test]
    fn test_blackjack_classification() {
        assert!(is_blackjack(&[ACE, KING]));
        assert!(is_blackjack(&[TEN, ACE]));
        // Three-card 21 is not a natural.
        assert!(!is_blackjack(&[SEVEN, SEVEN, SEVEN]));
        assert!(!is_blackjack(&[TEN, NINE]));
    }

    #[test]
    fn test_player_natural_pays_three_to_two() {
        let round = BlackjackRound::deal_fixed(50.0, [ACE, KING], [NINE, SEVEN]);
        assert_eq!(round.stage(), Stage::Settled);
        let result = round.result().unwrap();
        assert!(result.natural);
        assert_eq!(result.outcome, Outcome::Win);
        assert!((result.settlement.profit - 75.0).abs() < 1e-9);
        assert!((result.settlement.payout - 125.0).abs() < 1e-9);
    }

    #[test]
    fn test_both_naturals_push() {
        let round = BlackjackRound::deal_fixed(50.0, [ACE, KING], [second_suit(ACE), TEN]);
        let result = round.result().unwrap();
        assert_eq!(result.outcome, Outcome::Push);
        assert!(result.natural);
        assert_eq!(result.settlement.profit, 0.0);
    }

    #[test]
    fn test_dealer_natural_loses() {
        let round = BlackjackRound::deal_fixed(50.0, [NINE, SEVEN], [ACE, KING]);
        let result = round.result().unwrap();
        assert_eq!(result.outcome, Outcome::Loss);
        assert!(!result.natural);
        assert_eq!(result.settlement.profit, -50.0);
    }

    #[test]
    fn test_stand_and_dealer_draws_to_seventeen() {
        let mut rng = GameRng::seeded(10);
        let mut deck = Deck::shuffled(&mut rng);
        let mut round = BlackjackRound::deal_fixed(10.0, [TEN, KING], [TEN, SIX]);
        round.stand(&mut deck, &mut rng).unwrap();
        let result = round.result().unwrap();
        assert!(result.dealer_total >= 17);
        assert_eq!(result.player_total, 20);
    }

    #[test]
    fn test_dealer_stands_on_soft_seventeen() {
        let mut rng = GameRng::seeded(11);
        let mut deck = Deck::shuffled(&mut rng);
        let mut round = BlackjackRound::deal_fixed(10.0, [TEN, NINE], [ACE, SIX]);
        round.stand(&mut deck, &mut rng).unwrap();
        let result = round.result().unwrap();
        // Ace-six is 17; the dealer draws nothing and loses 17 to 19.
        assert_eq!(result.dealer_total, 17);
        assert_eq!(round.dealer_cards().len(), 2);
        assert_eq!(result.outcome, Outcome::Win);
    }

    #[test]
    fn test_double_draws_one_card_and_doubles_stake() {
        let mut rng = GameRng::seeded(12);
        let mut deck = Deck::shuffled(&mut rng);
        let mut round = BlackjackRound::deal_fixed(25.0, [FIVE, SIX], [TEN, SEVEN]);
        assert!(round.can_double());
        round.double(&mut deck, &mut rng).unwrap();
        assert_eq!(round.stage(), Stage::Settled);
        assert_eq!(round.player_cards().len(), 3);
        assert_eq!(round.bet(), 50.0);
        let result = round.result().unwrap();
        assert_eq!(result.settlement.bet, 50.0);
    }

    #[test]
    fn test_double_illegal_after_hit() {
        let mut rng = GameRng::seeded(13);
        let mut deck = Deck::shuffled(&mut rng);
        let mut round = BlackjackRound::deal_fixed(10.0, [TWO, SEVEN], [TEN, SIX]);
        round.hit(&mut deck, &mut rng).unwrap();
        if round.stage() == Stage::PlayerActing {
            assert!(!round.can_double());
            assert_eq!(round.double(&mut deck, &mut rng), Err(RoundError::InvalidMove));
        }
    }

    #[test]
    fn test_moves_rejected_after_settlement() {
        let mut rng = GameRng::seeded(14);
        let mut deck = Deck::shuffled(&mut rng);
        let mut round = BlackjackRound::deal_fixed(10.0, [ACE, KING], [NINE, SEVEN]);
        assert_eq!(round.hit(&mut deck, &mut rng), Err(RoundError::RoundOver));
        assert_eq!(round.stand(&mut deck, &mut rng), Err(RoundError::RoundOver));
        assert_eq!(round.advice(true), None);
    }

    #[test]
    fn test_basic_strategy_hard_totals() {
        assert_eq!(basic_strategy(20, false, 10, false), Action::Stand);
        assert_eq!(basic_strategy(17, false, 11, false), Action::Stand);
        assert_eq!(basic_strategy(16, false, 6, false), Action::Stand);
        assert_eq!(basic_strategy(16, false, 7, false), Action::Hit);
        assert_eq!(basic_strategy(13, false, 2, false), Action::Stand);
        assert_eq!(basic_strategy(12, false, 3, false), Action::Hit);
        assert_eq!(basic_strategy(12, false, 4, false), Action::Stand);
        assert_eq!(basic_strategy(12, false, 6, false), Action::Stand);
        assert_eq!(basic_strategy(12, false, 7, false), Action::Hit);
        assert_eq!(basic_strategy(11, false, 10, true), Action::Double);
        assert_eq!(basic_strategy(11, false, 10, false), Action::Hit);
        assert_eq!(basic_strategy(10, false, 9, true), Action::Double);
        assert_eq!(basic_strategy(10, false, 10, true), Action::Hit);
        assert_eq!(basic_strategy(9, false, 3, true), Action::Double);
        assert_eq!(basic_strategy(9, false, 2, true), Action::Hit);
        assert_eq!(basic_strategy(8, false, 5, true), Action::Hit);
    }

    #[test]
    fn test_basic_strategy_soft_totals() {
        assert_eq!(basic_strategy(20, true, 6, true), Action::Stand);
        assert_eq!(basic_strategy(19, true, 6, true), Action::Stand);
        assert_eq!(basic_strategy(18, true, 3, true), Action::Double);
        assert_eq!(basic_strategy(18, true, 3, false), Action::Stand);
        assert_eq!(basic_strategy(18, true, 2, true), Action::Stand);
        assert_eq!(basic_strategy(18, true, 8, true), Action::Stand);
        assert_eq!(basic_strategy(18, true, 9, true), Action::Hit);
        assert_eq!(basic_strategy(17, true, 4, true), Action::Double);
        assert_eq!(basic_strategy(17, true, 4, false), Action::Hit);
        assert_eq!(basic_strategy(13, true, 7, true), Action::Hit);
    }

    #[test]
    fn test_advice_reflects_current_hand() {
        let round = BlackjackRound::deal_fixed(10.0, [ACE, SIX], [FIVE, TEN]);
        // Soft 17 vs dealer 5: double when affordable, hit otherwise.
        assert_eq!(round.advice(true), Some(Action::Double));
        assert_eq!(round.advice(false), Some(Action::Hit));
    }
}
