//! Cosmetic shop store.
//!
//! Purchases settle against the shared wallet. Owning an item is permanent;
//! equipping is one item per game and freely reversible.

use tracing::warn;

use oddhouse_types::{GameType, ShopItem, ShopState, SHOP_KEY};

use thiserror::Error;

use crate::storage::Storage;
use crate::store::wallet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("unknown shop item: {0}")]
    UnknownItem(String),
    #[error("item already owned")]
    AlreadyOwned,
    #[error("balance too low for this item")]
    InsufficientBalance,
    #[error("item not owned")]
    NotOwned,
}

pub fn load(storage: &impl Storage) -> ShopState {
    storage
        .get(SHOP_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

pub fn save(storage: &mut impl Storage, state: &ShopState) {
    match serde_json::to_string(state) {
        Ok(raw) => {
            if let Err(err) = storage.set(SHOP_KEY, &raw) {
                warn!(%err, "shop write failed; state kept in memory only");
            }
        }
        Err(err) => warn!(%err, "shop state failed to serialize"),
    }
}

/// Buy an item outright. The price is debited from the wallet only after
/// every check passes. Returns the new balance.
pub fn buy(storage: &mut impl Storage, id: &str) -> Result<f64, ShopError> {
    let item = ShopItem::by_id(id).ok_or_else(|| ShopError::UnknownItem(id.to_string()))?;
    let mut state = load(storage);
    if state.owns(id) {
        return Err(ShopError::AlreadyOwned);
    }
    if wallet::balance(storage) < item.price {
        return Err(ShopError::InsufficientBalance);
    }
    let balance = wallet::change(storage, -item.price);
    state.owned.push(item.id.to_string());
    save(storage, &state);
    Ok(balance)
}

/// Equip an owned item for its game, replacing whatever was equipped.
pub fn equip(storage: &mut impl Storage, id: &str) -> Result<(), ShopError> {
    let item = ShopItem::by_id(id).ok_or_else(|| ShopError::UnknownItem(id.to_string()))?;
    let mut state = load(storage);
    if !state.owns(id) {
        return Err(ShopError::NotOwned);
    }
    state.equipped.insert(item.game, item.id.to_string());
    save(storage, &state);
    Ok(())
}

/// Return a game to its default look.
pub fn unequip(storage: &mut impl Storage, game: GameType) {
    let mut state = load(storage);
    if state.equipped.remove(&game).is_some() {
        save(storage, &state);
    }
}

/// Forget all purchases and equips.
pub fn reset(storage: &mut impl Storage) {
    if let Err(err) = storage.remove(SHOP_KEY) {
        warn!(%err, "shop reset failed");
    }
}
