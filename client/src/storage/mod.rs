//! Persistent string-keyed storage behind the preference registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages persist small preferences in the browser's `localStorage`. The
//! [`KeyValueStore`] trait is the seam between that browser API and the typed
//! registry in `state::preferences`, so the registry can be exercised natively
//! against [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Reads fail closed: an unavailable store or malformed JSON reads as absent.
//! Writes report a [`StoreError`] so callers can surface it, but nothing here
//! panics. No two keys are written atomically; an interrupted write can only
//! lose the key in flight.


pub mod browser;
pub mod memory;

pub use browser::BrowserStorage;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure writing to a [`KeyValueStore`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No backing store (storage disabled, private mode, or not in a browser).
    #[error("storage is unavailable")]
    Unavailable,
    /// The store refused the write (typically quota exceeded).
    #[error("storage write failed: {0}")]
    Write(String),
    /// The value could not be serialized.
    #[error("failed to encode value: {0}")]
    Encode(String),
}

/// Synchronous string key-value store.
///
/// Receivers are `&self`: the browser store serializes writes internally and
/// all callers run on the single UI thread.
pub trait KeyValueStore {
    /// Read `key`. Any failure reads as `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing store is unavailable or
    /// rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the backing store is unavailable.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Load a JSON value stored under `key`.
///
/// Missing keys and malformed JSON both yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("ignoring malformed stored value for {key}: {err}");
            None
        }
    }
}

/// Save `value` as JSON under `key`.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails, or the store's own
/// error if the write is rejected.
pub fn save_json<T: Serialize + ?Sized>(store: &impl KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value).map_err(|e| StoreError::Encode(e.to_string()))?;
    store.set(key, &raw)
}
