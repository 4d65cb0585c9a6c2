//! LocalStorage wrapper.
//!
//! Thin layer over `web_sys::Storage` instead of `gloo-storage`, keeping the
//! WASM binary small. Off-wasm the same interface is backed by a
//! thread-local map, so the session logic that persists through it can be
//! exercised in plain tests.

#[cfg(target_arch = "wasm32")]
mod imp {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get(key: &str) -> Option<String> {
        storage()?.get_item(key).ok()?
    }

    pub fn set(key: &str, value: &str) -> bool {
        storage().and_then(|s| s.set_item(key, value).ok()).is_some()
    }

    pub fn delete(key: &str) -> bool {
        storage().and_then(|s| s.remove_item(key).ok()).is_some()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use std::cell::RefCell;
    use std::collections::HashMap;

    // Thread-local keeps parallel test threads isolated from each other.
    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set(key: &str, value: &str) -> bool {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
        true
    }

    pub fn delete(key: &str) -> bool {
        STORE.with(|store| store.borrow_mut().remove(key).is_some())
    }
}

/// Static accessors for the browser LocalStorage API.
pub struct LocalStorage;

impl LocalStorage {
    /// Returns the stored value, or `None` if the key is absent or the
    /// storage API is unavailable.
    pub fn get(key: &str) -> Option<String> {
        imp::get(key)
    }

    /// Stores a value. Returns `true` on success.
    pub fn set(key: &str, value: &str) -> bool {
        imp::set(key, value)
    }

    /// Removes a key. Returns `true` on success.
    pub fn delete(key: &str) -> bool {
        imp::delete(key)
    }
}
