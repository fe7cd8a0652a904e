//! Playing-card encoding and the blackjack deck.
//!
//! Cards are encoded as `0..=51`, where:
//! - suit = card / 13 (0..=3)
//! - rank = card % 13 (0..=12, 0 is Ace)

use oddhouse_types::DECK_LOW_WATER;

use crate::rng::GameRng;

/// Total cards in a standard deck.
pub const CARDS_PER_DECK: u8 = 52;

/// Ranks per suit.
pub const RANKS_PER_SUIT: u8 = 13;

/// Returns the 0-based rank (0..=12), where 0 is Ace.
pub fn card_rank(card: u8) -> u8 {
    card % RANKS_PER_SUIT
}

/// Returns the suit (0..=3).
pub fn card_suit(card: u8) -> u8 {
    card / RANKS_PER_SUIT
}

/// Display label for the card's rank.
pub fn rank_label(card: u8) -> &'static str {
    const LABELS: [&str; 13] = [
        "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
    ];
    LABELS[card_rank(card) as usize]
}

/// Blackjack value of a single card: Ace counts 11 before any demotion,
/// face cards count 10.
pub fn card_value(card: u8) -> u8 {
    match card_rank(card) {
        0 => 11,
        rank if rank >= 9 => 10,
        rank => rank + 1,
    }
}

/// A single 52-card deck, reshuffled fresh whenever the remaining count
/// drops below the low-water mark. Approximates a continuous-shuffle table
/// rather than a countable shoe.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<u8>,
}

impl Deck {
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self { cards: Vec::new() };
        deck.refill(rng);
        deck
    }

    fn refill(&mut self, rng: &mut GameRng) {
        self.cards = (0..CARDS_PER_DECK).collect();
        rng.shuffle(&mut self.cards);
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Draw one card, rebuilding the deck first if it has run low.
    pub fn draw(&mut self, rng: &mut GameRng) -> u8 {
        if self.cards.len() < DECK_LOW_WATER {
            self.refill(rng);
        }
        self.cards.pop().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_round_trip() {
        for card in 0..CARDS_PER_DECK {
            assert_eq!(card_suit(card) * RANKS_PER_SUIT + card_rank(card), card);
        }
    }

    #[test]
    fn test_card_values() {
        assert_eq!(card_value(0), 11); // Ace
        assert_eq!(card_value(1), 2);
        assert_eq!(card_value(8), 9);
        assert_eq!(card_value(9), 10); // Ten
        assert_eq!(card_value(12), 10); // King
        assert_eq!(card_value(13), 11); // Ace of second suit
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(rank_label(0), "A");
        assert_eq!(rank_label(12), "K");
        assert_eq!(rank_label(22), "10");
    }

    #[test]
    fn test_deck_draws_distinct_until_low_water() {
        let mut rng = GameRng::seeded(8);
        let mut deck = Deck::shuffled(&mut rng);
        let mut seen = std::collections::HashSet::new();
        // 38 draws take the deck from 52 down to one below the low-water
        // mark; every card so far is distinct.
        for _ in 0..38 {
            assert!(seen.insert(deck.draw(&mut rng)));
        }
        assert_eq!(deck.remaining(), DECK_LOW_WATER - 1);

        // The next draw reshuffles a fresh 52 first.
        deck.draw(&mut rng);
        assert_eq!(deck.remaining(), CARDS_PER_DECK as usize - 1);
    }
}
