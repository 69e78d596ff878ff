//! Storage Backends
//!
//! The expansion store writes through `KeyValueStorage`, a string get/set
//! interface shaped like the browser's `localStorage`. Implementations can
//! use localStorage, memory, or nothing at all.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::MenuResult;

/// String key/value storage
pub trait KeyValueStorage {
    /// Read a value, `None` when the key is absent or unreadable
    fn get_item(&self, key: &str) -> Option<String>;

    /// Overwrite a value
    fn set_item(&self, key: &str, value: &str) -> MenuResult<()>;

    /// Whether values survive a reload. A non-durable backend turns both
    /// saving and restoring into no-ops.
    fn is_durable(&self) -> bool {
        true
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> MenuResult<()> {
        (**self).set_item(key, value)
    }

    fn is_durable(&self) -> bool {
        (**self).is_durable()
    }
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for Rc<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> MenuResult<()> {
        (**self).set_item(key, value)
    }

    fn is_durable(&self) -> bool {
        (**self).is_durable()
    }
}

/// Stand-in for environments without durable storage
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStorage;

impl KeyValueStorage for NoopStorage {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _value: &str) -> MenuResult<()> {
        Ok(())
    }

    fn is_durable(&self) -> bool {
        false
    }
}

/// In-memory storage; shared by reference it outlives a `Menu`, which is
/// how a reload is simulated.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> MenuResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_overwrites() {
        let storage = MemoryStorage::with_item("expanded", "[]");
        storage.set_item("expanded", r#"["a"]"#).unwrap();
        assert_eq!(storage.get_item("expanded").as_deref(), Some(r#"["a"]"#));
        assert_eq!(storage.get_item("other"), None);
        assert!(storage.is_durable());
    }

    #[test]
    fn test_noop_storage_forgets() {
        let storage = NoopStorage;
        storage.set_item("expanded", r#"["a"]"#).unwrap();
        assert_eq!(storage.get_item("expanded"), None);
        assert!(!storage.is_durable());
    }

    #[test]
    fn test_shared_handles_see_same_items() {
        let storage = Rc::new(MemoryStorage::new());
        let writer = Rc::clone(&storage);
        writer.set_item("k", "v").unwrap();
        assert_eq!((&*storage).get_item("k").as_deref(), Some("v"));
    }
}
