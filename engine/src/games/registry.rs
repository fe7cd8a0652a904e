//! Game registry: supported games, their table configurations, and
//! metadata for UI display.
//!
//! Configurations are the knobs a player sets before a round (dice risk,
//! mine count, plinko tier and rows, crash auto-eject, market leverage).
//! They serialize as JSON so a host can persist them alongside the other
//! records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use oddhouse_types::GameType;

use super::coinflip::CoinSide;
use super::market::Side;
use super::plinko::RiskTier;

/// Per-game table configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "game", rename_all = "lowercase")]
pub enum GameConfig {
    Coinflip(CoinflipConfig),
    Dice(DiceConfig),
    Mines(MinesConfig),
    Plinko(PlinkoConfig),
    Blackjack(BlackjackConfig),
    Crash(CrashConfig),
    Market(MarketConfig),
}

impl GameConfig {
    pub fn default_for(game_type: GameType) -> Self {
        match game_type {
            GameType::Coinflip => Self::Coinflip(CoinflipConfig::default()),
            GameType::Dice => Self::Dice(DiceConfig::default()),
            GameType::Mines => Self::Mines(MinesConfig::default()),
            GameType::Plinko => Self::Plinko(PlinkoConfig::default()),
            GameType::Blackjack => Self::Blackjack(BlackjackConfig::default()),
            GameType::Crash => Self::Crash(CrashConfig::default()),
            GameType::Market => Self::Market(MarketConfig::default()),
        }
    }

    pub fn game_type(&self) -> GameType {
        match self {
            Self::Coinflip(_) => GameType::Coinflip,
            Self::Dice(_) => GameType::Dice,
            Self::Mines(_) => GameType::Mines,
            Self::Plinko(_) => GameType::Plinko,
            Self::Blackjack(_) => GameType::Blackjack,
            Self::Crash(_) => GameType::Crash,
            Self::Market(_) => GameType::Market,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CoinflipConfig {
    pub pick: CoinSide,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiceConfig {
    /// Lose threshold in percent, 1..=99.
    pub risk: u8,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self { risk: 50 }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MinesConfig {
    pub mines: u8,
}

impl Default for MinesConfig {
    fn default() -> Self {
        Self { mines: 3 }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlinkoConfig {
    pub tier: RiskTier,
    pub rows: u8,
}

impl Default for PlinkoConfig {
    fn default() -> Self {
        Self {
            tier: RiskTier::Medium,
            rows: 12,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlackjackConfig {
    /// Show the basic-strategy advisor during play.
    pub show_advisor: bool,
}

impl Default for BlackjackConfig {
    fn default() -> Self {
        Self { show_advisor: true }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CrashConfig {
    /// Eject automatically at this multiplier, if set.
    pub auto_eject: Option<f64>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MarketConfig {
    pub side: Side,
    pub leverage: u32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            side: Side::Long,
            leverage: 10,
        }
    }
}

/// Category for UI grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCategory {
    /// One draw, instant settlement.
    Instant,
    /// Multi-step rounds the player steers.
    Rounds,
    /// Card games.
    Cards,
    /// Open-ended simulations.
    Simulation,
}

/// Metadata about a game for UI display.
#[derive(Clone, Debug)]
pub struct GameInfo {
    pub game_type: GameType,
    pub name: &'static str,
    pub description: &'static str,
    pub category: GameCategory,
    pub min_bet: f64,
    pub max_bet: f64,
    /// Typical house edge in basis points; varies with configuration for
    /// dice, mines, and crash.
    pub house_edge_bps: u16,
    pub active: bool,
}

impl GameInfo {
    const fn new(
        game_type: GameType,
        name: &'static str,
        description: &'static str,
        category: GameCategory,
        min_bet: f64,
        max_bet: f64,
        house_edge_bps: u16,
    ) -> Self {
        Self {
            game_type,
            name,
            description,
            category,
            min_bet,
            max_bet,
            house_edge_bps,
            active: true,
        }
    }
}

/// Registry of available games and their configurations.
#[derive(Clone, Debug)]
pub struct GameRegistry {
    configs: HashMap<GameType, GameConfig>,
    active: HashMap<GameType, bool>,
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRegistry {
    pub fn new() -> Self {
        let mut configs = HashMap::new();
        let mut active = HashMap::new();
        for &game_type in Self::all_game_types() {
            configs.insert(game_type, GameConfig::default_for(game_type));
            active.insert(game_type, true);
        }
        Self { configs, active }
    }

    pub fn all_game_types() -> &'static [GameType] {
        &[
            GameType::Coinflip,
            GameType::Dice,
            GameType::Mines,
            GameType::Plinko,
            GameType::Blackjack,
            GameType::Crash,
            GameType::Market,
        ]
    }

    pub fn get_info(game_type: GameType) -> GameInfo {
        match game_type {
            GameType::Coinflip => GameInfo::new(
                GameType::Coinflip,
                "Coinflip",
                "Call the toss. Wins pay 1.96x.",
                GameCategory::Instant,
                1.0,
                10_000.0,
                200,
            ),
            GameType::Dice => GameInfo::new(
                GameType::Dice,
                "Dice",
                "Pick your risk, roll over it to win.",
                GameCategory::Instant,
                1.0,
                10_000.0,
                700, // at the default 50% risk
            ),
            GameType::Mines => GameInfo::new(
                GameType::Mines,
                "Mines",
                "Reveal safe cells and cash out before a mine.",
                GameCategory::Rounds,
                1.0,
                10_000.0,
                150, // per reveal at the default 3 mines
            ),
            GameType::Plinko => GameInfo::new(
                GameType::Plinko,
                "Plinko",
                "Drop a ball through the pegs and land a multiplier.",
                GameCategory::Instant,
                1.0,
                10_000.0,
                300,
            ),
            GameType::Blackjack => GameInfo::new(
                GameType::Blackjack,
                "Blackjack",
                "Beat the dealer to 21 without going bust.",
                GameCategory::Cards,
                1.0,
                5_000.0,
                50, // with basic strategy
            ),
            GameType::Crash => GameInfo::new(
                GameType::Crash,
                "Crash",
                "Ride the multiplier and eject before it crashes.",
                GameCategory::Rounds,
                1.0,
                10_000.0,
                400,
            ),
            GameType::Market => GameInfo::new(
                GameType::Market,
                "Market",
                "Trade a simulated chart with leverage.",
                GameCategory::Simulation,
                1.0,
                10_000.0,
                0, // zero-drift walk; liquidation is the only edge
            ),
        }
    }

    pub fn is_active(&self, game_type: GameType) -> bool {
        self.active.get(&game_type).copied().unwrap_or(false)
    }

    pub fn set_active(&mut self, game_type: GameType, active: bool) {
        self.active.insert(game_type, active);
    }

    pub fn active_games(&self) -> Vec<GameType> {
        Self::all_game_types()
            .iter()
            .copied()
            .filter(|gt| self.is_active(*gt))
            .collect()
    }

    pub fn get_config(&self, game_type: GameType) -> Option<&GameConfig> {
        self.configs.get(&game_type)
    }

    pub fn set_config(&mut self, config: GameConfig) {
        let game_type = config.game_type();
        self.configs.insert(game_type, config);
    }

    pub fn all_games_info(&self) -> Vec<GameInfo> {
        Self::all_game_types()
            .iter()
            .map(|&gt| {
                let mut info = Self::get_info(gt);
                info.active = self.is_active(gt);
                info
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_every_game() {
        let registry = GameRegistry::default();
        for &game_type in GameRegistry::all_game_types() {
            assert!(registry.is_active(game_type), "{game_type:?} inactive");
            let config = registry.get_config(game_type).unwrap();
            assert_eq!(config.game_type(), game_type);
        }
        assert_eq!(registry.active_games().len(), 7);
    }

    #[test]
    fn test_set_active() {
        let mut registry = GameRegistry::new();
        registry.set_active(GameType::Crash, false);
        assert!(!registry.is_active(GameType::Crash));
        assert_eq!(registry.active_games().len(), 6);
        let info = registry
            .all_games_info()
            .into_iter()
            .find(|i| i.game_type == GameType::Crash)
            .unwrap();
        assert!(!info.active);
    }

    #[test]
    fn test_config_round_trips_as_json() {
        let config = GameConfig::Plinko(PlinkoConfig {
            tier: RiskTier::High,
            rows: 16,
        });
        let raw = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.game_type(), GameType::Plinko);

        // Sparse payloads backfill defaults.
        let sparse: DiceConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(sparse.risk, 50);
    }

    #[test]
    fn test_set_config_replaces() {
        let mut registry = GameRegistry::new();
        registry.set_config(GameConfig::Dice(DiceConfig { risk: 80 }));
        match registry.get_config(GameType::Dice).unwrap() {
            GameConfig::Dice(config) => assert_eq!(config.risk, 80),
            other => panic!("wrong config slot: {other:?}"),
        }
    }
}
