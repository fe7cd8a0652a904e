//! Outcome engines, settlement, and persisted stores for oddhouse.
//!
//! Every game follows the same shape: a pure engine in [`games`] draws its
//! outcome from an injected [`GameRng`], and the [`Table`] orchestrates the
//! wallet around it. Bets are debited before any randomness is drawn, wins
//! are credited back at settlement, and settled rounds flow through the
//! stats ledger which in turn drives the achievement engine.
//!
//! Persistence goes through the [`Storage`] trait so the engine works the
//! same against an in-memory map in tests and whatever key-value store the
//! host embeds it in.

pub mod games;
pub mod rng;
pub mod scheduler;
pub mod storage;
pub mod store;
pub mod table;

pub use games::{RoundError, Settlement};
pub use rng::GameRng;
pub use storage::{MemoryStorage, Storage, StorageError};
pub use table::Table;
