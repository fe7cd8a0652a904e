//! Shared domain types for the oddhouse mini-game collection.
//!
//! Defines the game identifiers, settlement events, stats record, shop and
//! settings state shared by the engine and any frontend. Everything persisted
//! is plain JSON under a single storage key per record; the exact schemas live
//! here so the engine and presentation layers agree on them.

mod constants;
mod game;
mod settings;
mod shop;
mod stats;

pub use constants::*;
pub use game::*;
pub use settings::*;
pub use shop::*;
pub use stats::*;
