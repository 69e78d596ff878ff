//! Expansion State
//!
//! The persisted record is a JSON array of node ids, e.g.
//! `["concepts","install"]`, stored under a single key and overwritten in
//! full on every save.

use serde::{Deserialize, Serialize};

use crate::config::MenuConfig;
use crate::error::{MenuError, MenuResult};
use crate::storage::KeyValueStorage;

/// Ordered ids of expanded nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionSet(Vec<String>);

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a persisted record
    pub fn parse(raw: &str) -> MenuResult<Self> {
        serde_json::from_str(raw).map_err(MenuError::CorruptRecord)
    }

    pub fn to_json(&self) -> MenuResult<String> {
        serde_json::to_string(self).map_err(MenuError::Encode)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

}

impl FromIterator<String> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ExpansionSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// What a load found, and therefore what gets restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Restoration {
    /// Storage is not durable, nothing is restored
    Unavailable,
    /// First visit: nothing persisted yet
    Default(ExpansionSet),
    Persisted(ExpansionSet),
    /// The record did not parse; restoration is abandoned as a whole
    Corrupt,
}

impl Restoration {
    /// Ids to re-expand, in order
    pub fn ids(&self) -> &[String] {
        match self {
            Restoration::Default(set) | Restoration::Persisted(set) => set.ids(),
            Restoration::Unavailable | Restoration::Corrupt => &[],
        }
    }

    pub fn source(&self) -> &'static str {
        match self {
            Restoration::Unavailable => "unavailable",
            Restoration::Default(_) => "default",
            Restoration::Persisted(_) => "persisted",
            Restoration::Corrupt => "corrupt",
        }
    }
}

/// Reads and writes the expansion record under one fixed key
#[derive(Debug, Clone)]
pub struct ExpansionStore<S> {
    storage: S,
    key: String,
    defaults: ExpansionSet,
}

impl<S: KeyValueStorage> ExpansionStore<S> {
    pub fn new(storage: S, config: &MenuConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
            defaults: config.default_set(),
        }
    }

    /// Overwrite the record. Skipped when storage is not durable.
    pub fn save(&self, set: &ExpansionSet) -> MenuResult<()> {
        if !self.storage.is_durable() {
            return Ok(());
        }
        let json = set.to_json()?;
        self.storage.set_item(&self.key, &json)
    }

    pub fn load(&self) -> Restoration {
        if !self.storage.is_durable() {
            return Restoration::Unavailable;
        }
        let raw = match self.storage.get_item(&self.key) {
            Some(raw) if !raw.is_empty() => raw,
            _ => return Restoration::Default(self.defaults.clone()),
        };
        match ExpansionSet::parse(&raw) {
            Ok(set) => Restoration::Persisted(set),
            Err(e) => {
                log::warn!("ignoring expansion record under '{}': {}", self.key, e);
                Restoration::Corrupt
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, NoopStorage};

    fn set(ids: &[&str]) -> ExpansionSet {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_parse_record() {
        let parsed = ExpansionSet::parse(r#"["concepts","install"]"#).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.ids(), ["concepts", "install"]);
        assert!(ExpansionSet::parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_string_arrays() {
        for raw in ["not json", "{}", "null", "[1,2]", r#"["a","#] {
            assert!(
                matches!(ExpansionSet::parse(raw), Err(MenuError::CorruptRecord(_))),
                "{} should be rejected",
                raw
            );
        }
    }

    #[test]
    fn test_record_format() {
        assert_eq!(set(&["x", "y"]).to_json().unwrap(), r#"["x","y"]"#);
        assert_eq!(ExpansionSet::new().to_json().unwrap(), "[]");
    }

    #[test]
    fn test_load_default_when_absent_or_empty() {
        let config = MenuConfig::default();

        let store = ExpansionStore::new(MemoryStorage::new(), &config);
        assert_eq!(store.load(), Restoration::Default(set(&["concepts"])));

        let store = ExpansionStore::new(MemoryStorage::with_item("expanded", ""), &config);
        assert_eq!(store.load(), Restoration::Default(set(&["concepts"])));
    }

    #[test]
    fn test_load_persisted_and_corrupt() {
        let config = MenuConfig::default();

        let storage = MemoryStorage::with_item("expanded", r#"["b","a"]"#);
        let store = ExpansionStore::new(storage, &config);
        let restoration = store.load();
        assert_eq!(restoration.source(), "persisted");
        assert_eq!(restoration.ids(), ["b", "a"]);

        let store = ExpansionStore::new(MemoryStorage::with_item("expanded", "{oops"), &config);
        assert_eq!(store.load(), Restoration::Corrupt);
        assert!(store.load().ids().is_empty());
    }

    #[test]
    fn test_save_uses_configured_key() {
        let config = MenuConfig {
            storage_key: "docs-menu".to_string(),
            ..Default::default()
        };
        let storage = MemoryStorage::new();
        let store = ExpansionStore::new(&storage, &config);

        store.save(&set(&["a"])).unwrap();
        assert_eq!(storage.get_item("docs-menu").as_deref(), Some(r#"["a"]"#));
        assert_eq!(storage.get_item("expanded"), None);
    }

    #[test]
    fn test_unavailable_storage() {
        let store = ExpansionStore::new(NoopStorage, &MenuConfig::default());
        assert!(store.save(&set(&["a"])).is_ok());
        assert_eq!(store.load(), Restoration::Unavailable);
    }
}
