//! `window.localStorage` as a [`KeyValueStore`].
//!
//! Hydrate builds talk to the real browser store. Native builds (tests, SSR
//! tooling) see a store that is permanently unavailable, which exercises the
//! same fail-closed paths a browser with storage disabled would.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "browser_test.rs"]
mod browser_test;

use super::{KeyValueStore, StoreError};

/// Handle to the browser's local storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    #[cfg(feature = "hydrate")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            Self::storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = Self::storage().ok_or(StoreError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}
