//! The shared wallet.
//!
//! One balance across every game, persisted as a decimal string. A missing
//! or unparsable value reads as the starting balance; the stored value is
//! rounded to cents and never negative.

use tracing::warn;

use oddhouse_types::{BALANCE_KEY, DEFAULT_BALANCE};

use crate::storage::Storage;

/// Current balance, falling back to [`DEFAULT_BALANCE`] on a missing or
/// corrupt read.
pub fn balance(storage: &impl Storage) -> f64 {
    storage
        .get(BALANCE_KEY)
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(DEFAULT_BALANCE)
}

/// Persist `amount`, clamped to non-negative and rounded to cents.
/// Returns the value actually stored.
pub fn set_balance(storage: &mut impl Storage, amount: f64) -> f64 {
    let safe = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
    let rounded = (safe * 100.0).round() / 100.0;
    if let Err(err) = storage.set(BALANCE_KEY, &rounded.to_string()) {
        warn!(%err, "wallet write failed; balance kept in memory only");
    }
    rounded
}

/// Apply a signed delta to the balance. Returns the new balance.
pub fn change(storage: &mut impl Storage, delta: f64) -> f64 {
    let current = balance(storage);
    set_balance(storage, current + delta)
}

/// Restore the starting balance.
pub fn reset(storage: &mut impl Storage) -> f64 {
    set_balance(storage, DEFAULT_BALANCE)
}
