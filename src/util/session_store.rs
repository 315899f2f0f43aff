//! Persistent storage for the bearer token.
//!
//! DESIGN
//! ======
//! Session code talks to a small [`SessionStore`] interface instead of
//! reaching into `localStorage` directly, so login/logout transitions can be
//! tested against an in-memory store.

/// Get/set/clear access to the single persisted token value.
pub trait SessionStore {
    /// Stored token, or `None` when anonymous. Empty values count as absent.
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// [`SessionStore`] backed by browser `localStorage` under a fixed key.
///
/// Outside the browser every read is `None` and writes are no-ops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_owned() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage()?;
            storage
                .get_item(&self.key)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; token not persisted");
                return;
            };
            if let Err(e) = storage.set_item(&self.key, token) {
                leptos::logging::warn!("failed to persist token: {e:?}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if let Err(e) = storage.remove_item(&self.key) {
                    leptos::logging::warn!("failed to clear token: {e:?}");
                }
            }
        }
    }
}
