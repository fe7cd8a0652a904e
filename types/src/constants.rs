/// Wallet balance granted on first use or after a corrupt read.
pub const DEFAULT_BALANCE: f64 = 1000.0;

/// Storage key for the shared wallet balance.
pub const BALANCE_KEY: &str = "oddhouse_balance_v1";

/// Storage key for the stats record.
pub const STATS_KEY: &str = "oddhouse_stats_v1";

/// Storage key for the unlocked achievement ids.
pub const ACHIEVEMENTS_KEY: &str = "oddhouse_achievements_v1";

/// Storage key for shop ownership and equipped skins.
pub const SHOP_KEY: &str = "oddhouse_shop_v1";

/// Storage key for UI settings.
pub const SETTINGS_KEY: &str = "oddhouse_settings_v1";

/// Coinflip win probability (fair coin).
pub const COINFLIP_WIN_PROB: f64 = 0.5;

/// Coinflip house edge applied to the fair multiplier.
pub const COINFLIP_EDGE: f64 = 0.02;

/// Dice house edge at risk -> 0.
pub const DICE_EDGE_BASE: f64 = 0.02;

/// Additional dice house edge per unit of lose-probability (edge reaches
/// `DICE_EDGE_BASE + DICE_EDGE_SLOPE` as risk -> 100).
pub const DICE_EDGE_SLOPE: f64 = 0.10;

/// Mines board side length.
pub const MINES_GRID_SIDE: usize = 5;

/// Total cells on the mines board.
pub const MINES_TOTAL_CELLS: usize = MINES_GRID_SIDE * MINES_GRID_SIDE;

/// Blackjack deck is rebuilt once fewer cards than this remain.
pub const DECK_LOW_WATER: usize = 15;

/// Blackjack natural pays this multiple of the bet as profit.
pub const BLACKJACK_PAYOUT: f64 = 1.5;

/// Probability that a crash round busts instantly at 1.00x.
pub const CRASH_HOUSE_EDGE: f64 = 0.04;

/// Crash multiplier growth-rate constant `k` in `e^(k*t)`.
pub const CRASH_GROWTH_RATE: f64 = 0.05;

/// Market price movement scale per tick (percent of price).
pub const MARKET_VOLATILITY: f64 = 0.2;

/// Market starting price for a fresh chart.
pub const MARKET_START_PRICE: f64 = 100.0;

/// Market price floor; the walk never goes below this.
pub const MARKET_MIN_PRICE: f64 = 0.01;
