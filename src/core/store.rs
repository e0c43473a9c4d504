//! Persisted values with change notification.
//!
//! A [`Store`] reads its record once when created and writes it back after
//! every mutation. Storage failures never reach the caller: reads fall back
//! to the initial value and writes are dropped with a warning, while the
//! in-memory value stays authoritative for the rest of the session.

use anyhow::Result;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Storage key of the food list.
pub const FOODS_KEY: &str = "ct_foods_v1";
/// Storage key of the entry log.
pub const ENTRIES_KEY: &str = "ct_entries_v1";
/// Storage key of the daily target.
pub const TARGET_KEY: &str = "ct_target_v1";

/// String-keyed record storage.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process storage. Can be told to fail every call.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RefCell<HashMap<String, String>>,
    failing: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `get`/`set` return an error (or stop doing so).
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Raw stored text for `key`, bypassing the failure switch.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.failing.get() {
            anyhow::bail!("storage unavailable");
        }
        Ok(self.records.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.failing.get() {
            anyhow::bail!("storage unavailable");
        }
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

type Subscriber<'a, T> = Box<dyn Fn(&T) + 'a>;

/// A value mirrored to one storage key.
pub struct Store<'a, T> {
    storage: &'a dyn KeyValueStorage,
    key: &'static str,
    value: T,
    subscribers: Vec<Subscriber<'a, T>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<'a, T: Serialize + DeserializeOwned> Store<'a, T> {
    /// Read `key` from `storage`, or start from `initial()` when the record
    /// is missing or unreadable. A fallback value is written back at once.
    pub fn load(
        storage: &'a dyn KeyValueStorage,
        key: &'static str,
        initial: impl FnOnce() -> T,
    ) -> Self {
        let loaded = match storage.get(key) {
            Ok(Some(raw)) => match serde_json::from_str::<T>(&raw) {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!(key, error = %e, "stored record is not valid; using default");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "storage read failed; using default");
                None
            }
        };

        match loaded {
            Some(value) => {
                debug!(key, "loaded record");
                Self::with_value(storage, key, value)
            }
            None => {
                let store = Self::with_value(storage, key, initial());
                store.persist();
                store
            }
        }
    }

    fn with_value(storage: &'a dyn KeyValueStorage, key: &'static str, value: T) -> Self {
        Self {
            storage,
            key,
            value,
            subscribers: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Register a callback run with the new value after every mutation.
    pub fn subscribe(&mut self, f: impl Fn(&T) + 'a) {
        self.subscribers.push(Box::new(f));
    }

    /// Mutate the value in place, then persist and notify.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = f(&mut self.value);
        self.persist();
        for s in &self.subscribers {
            s(&self.value);
        }
        out
    }

    /// Replace the value, then persist and notify.
    pub fn set(&mut self, value: T) {
        self.update(|v| *v = value);
    }

    /// Best-effort write of the current value. Returns whether it stuck.
    pub fn persist(&self) -> bool {
        let result = serde_json::to_string(&self.value)
            .map_err(anyhow::Error::from)
            .and_then(|raw| self.storage.set(self.key, &raw));
        match result {
            Ok(()) => {
                debug!(key = self.key, "persisted record");
                true
            }
            Err(e) => {
                warn!(key = self.key, error = %e, "persisting record failed; keeping in-memory state");
                false
            }
        }
    }
}
