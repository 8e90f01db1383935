//! Key/value persistence with expiry
//!
//! Features:
//! - String values wrapped in a JSON envelope carrying an expiry timestamp
//! - Expired or unreadable entries read back as absent
//! - In-memory backend (native, tests) and LocalStorage backend (browser)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Milliseconds per day
pub const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Storage errors
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// No backend (private browsing, storage disabled)
    #[error("Storage unavailable")]
    Unavailable,

    /// Backend refused the write (quota, security)
    #[error("Write rejected: {0}")]
    Rejected(String),

    /// Envelope could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A named-value store with per-entry retention
pub trait KeyValueStore {
    /// Read a value; absent, expired and corrupt entries all yield `None`
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value that expires after `ttl_days`
    fn set(&mut self, key: &str, value: &str, ttl_days: u32) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str, ttl_days: u32) -> Result<(), StorageError> {
        (**self).set(key, value, ttl_days)
    }
}

/// Stored form of a value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredValue {
    pub value: String,
    /// Unix time (ms) after which the value is gone
    pub expires_at_ms: f64,
}

impl StoredValue {
    pub fn new(value: &str, now_ms: f64, ttl_days: u32) -> Self {
        Self {
            value: value.to_string(),
            expires_at_ms: now_ms + ttl_days as f64 * MS_PER_DAY,
        }
    }

    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at_ms
    }

    pub fn encode(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse an envelope; `None` if the raw text is not one
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Value if the envelope parses and is still live
    pub fn read_live(raw: &str, now_ms: f64) -> Option<String> {
        let stored = Self::decode(raw)?;
        if stored.is_expired(now_ms) {
            None
        } else {
            Some(stored.value)
        }
    }
}

/// Process-local store with a manually driven clock
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    now_ms: f64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock reading (ms)
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn set_now_ms(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Move the clock forward
    pub fn advance_days(&mut self, days: f64) {
        self.now_ms += days * MS_PER_DAY;
    }

    /// Store raw text bypassing the envelope (simulates foreign or corrupt data)
    pub fn insert_raw(&mut self, key: &str, raw: &str) {
        self.entries.insert(key.to_string(), raw.to_string());
    }

    /// Raw stored text
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = self.entries.get(key)?;
        StoredValue::read_live(raw, self.now_ms)
    }

    fn set(&mut self, key: &str, value: &str, ttl_days: u32) -> Result<(), StorageError> {
        let raw = StoredValue::new(value, self.now_ms, ttl_days).encode()?;
        self.entries.insert(key.to_string(), raw);
        Ok(())
    }
}

/// Browser LocalStorage, scoped to the page path
#[cfg(target_arch = "wasm32")]
pub struct LocalStorageStore {
    storage: web_sys::Storage,
    prefix: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageStore {
    /// Open LocalStorage; `None` when the browser has it disabled
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;
        let path = window.location().pathname().unwrap_or_else(|_| "/".to_string());
        Some(Self {
            storage,
            prefix: format!("{}:", path),
        })
    }

    fn scoped(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = self.storage.get_item(&self.scoped(key)).ok()??;
        StoredValue::read_live(&raw, js_sys::Date::now())
    }

    fn set(&mut self, key: &str, value: &str, ttl_days: u32) -> Result<(), StorageError> {
        let raw = StoredValue::new(value, js_sys::Date::now(), ttl_days).encode()?;
        self.storage
            .set_item(&self.scoped(key), &raw)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// Fallback when no persistent backend exists: remembers nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str, _ttl_days: u32) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}
