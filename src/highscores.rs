//! Highscore persistence
//!
//! A single best score, stored as a decimal string under a fixed key with a
//! one-year retention. Anything unreadable counts as no highscore.

use crate::consts::HIGHSCORE_KEY;
use crate::persistence::{KeyValueStore, StorageError};

/// Load the stored highscore (0 when absent, expired or corrupt)
pub fn load_highscore<S: KeyValueStore + ?Sized>(store: &S) -> u64 {
    match store.get(HIGHSCORE_KEY) {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(score) => score,
            Err(_) => {
                log::warn!("Ignoring unreadable highscore {:?}", raw);
                0
            }
        },
        None => 0,
    }
}

/// Persist a highscore for `ttl_days`
pub fn save_highscore<S: KeyValueStore + ?Sized>(
    store: &mut S,
    highscore: u64,
    ttl_days: u32,
) -> Result<(), StorageError> {
    store.set(HIGHSCORE_KEY, &highscore.to_string(), ttl_days)
}
