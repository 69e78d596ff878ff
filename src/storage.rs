//! Browser Storage
//!
//! `localStorage` as a `KeyValueStorage`, chosen once at startup. When the
//! browser refuses access (privacy mode, sandboxed frames) the menu runs on
//! `NoopStorage` and simply forgets its state.

use menu_state::{KeyValueStorage, MenuError, MenuResult, NoopStorage};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Handle to `window.localStorage`
#[derive(Debug, Clone, Copy)]
pub struct WebStorage;

impl WebStorage {
    pub fn detect() -> Option<Self> {
        local_storage().map(|_| WebStorage)
    }
}

impl KeyValueStorage for WebStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> MenuResult<()> {
        let storage = local_storage()
            .ok_or_else(|| MenuError::Storage("localStorage unavailable".to_string()))?;
        // Fails when the quota is exhausted
        storage
            .set_item(key, value)
            .map_err(|e| MenuError::Storage(format!("{:?}", e)))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum BrowserStorage {
    Local(WebStorage),
    Unavailable(NoopStorage),
}

impl BrowserStorage {
    pub fn detect() -> Self {
        match WebStorage::detect() {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                log::warn!("localStorage unavailable, expanded sections will not be remembered");
                BrowserStorage::Unavailable(NoopStorage)
            }
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key),
            BrowserStorage::Unavailable(storage) => storage.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> MenuResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value),
            BrowserStorage::Unavailable(storage) => storage.set_item(key, value),
        }
    }

    fn is_durable(&self) -> bool {
        match self {
            BrowserStorage::Local(storage) => storage.is_durable(),
            BrowserStorage::Unavailable(storage) => storage.is_durable(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_is_not_durable() {
        let storage = BrowserStorage::Unavailable(NoopStorage);
        assert!(!storage.is_durable());
        assert!(storage.set_item("expanded", "[]").is_ok());
        assert_eq!(storage.get_item("expanded"), None);
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::super::*;
        use wasm_bindgen_test::*;

        wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn test_local_storage_round_trip() {
            let storage = BrowserStorage::detect();
            assert!(storage.is_durable());
            storage.set_item("menu-tree-test", r#"["x"]"#).unwrap();
            assert_eq!(storage.get_item("menu-tree-test").as_deref(), Some(r#"["x"]"#));
        }
    }
}
