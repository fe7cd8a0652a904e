use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::GameType;

/// A cosmetic skin sold in the shop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShopItem {
    pub id: &'static str,
    pub game: GameType,
    pub name: &'static str,
    pub price: f64,
    pub description: &'static str,
}

/// The fixed catalog. Items never change price or move between games.
pub const CATALOG: &[ShopItem] = &[
    ShopItem {
        id: "bj_cyberpunk",
        game: GameType::Blackjack,
        name: "Cyberpunk Deck",
        price: 5_000.0,
        description: "Neon-infused holographic cards.",
    },
    ShopItem {
        id: "dice_golden",
        game: GameType::Dice,
        name: "Golden Roller",
        price: 10_000.0,
        description: "Luxurious gold interface for the dice table.",
    },
    ShopItem {
        id: "coin_bitcoin",
        game: GameType::Coinflip,
        name: "Bitcoin Asset",
        price: 2_500.0,
        description: "Flip a BTC token instead of a generic coin.",
    },
    ShopItem {
        id: "plinko_matrix",
        game: GameType::Plinko,
        name: "Matrix Balls",
        price: 15_000.0,
        description: "Digital green rain physics style.",
    },
];

impl ShopItem {
    pub fn by_id(id: &str) -> Option<&'static ShopItem> {
        CATALOG.iter().find(|item| item.id == id)
    }
}

/// Persisted ownership and equip state.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ShopState {
    pub owned: Vec<String>,
    pub equipped: BTreeMap<GameType, String>,
}

impl ShopState {
    pub fn owns(&self, id: &str) -> bool {
        self.owned.iter().any(|owned| owned == id)
    }

    pub fn equipped_for(&self, game: GameType) -> Option<&str> {
        self.equipped.get(&game).map(String::as_str)
    }
}
