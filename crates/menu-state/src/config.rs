//! Menu Configuration
//!
//! Every knob the page can override. Field names are camelCase so the host
//! page can hand over a plain JS object.

use serde::Deserialize;

use crate::error::{MenuError, MenuResult};
use crate::expansion::ExpansionSet;

pub const DEFAULT_ROOT_ID: &str = "menu-tree";
pub const DEFAULT_STORAGE_KEY: &str = "expanded";
pub const DEFAULT_OPEN_SECTION: &str = "concepts";
pub const DEFAULT_ANIMATION_MS: u32 = 400;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Id of the `<ul>` holding the menu
    pub root_id: String,
    /// localStorage key of the persisted record
    pub storage_key: String,
    /// Ids opened on the very first visit, before anything was persisted
    pub default_expanded: Vec<String>,
    /// Duration of user-initiated show/hide transitions
    pub animation_ms: u32,
    /// `log` level filter: off, error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_expanded: vec![DEFAULT_OPEN_SECTION.to_string()],
            animation_ms: DEFAULT_ANIMATION_MS,
            log_level: "info".to_string(),
        }
    }
}

impl MenuConfig {
    pub fn validate(&self) -> MenuResult<()> {
        if self.root_id.trim().is_empty() {
            return Err(MenuError::Config("rootId must not be empty".to_string()));
        }
        if self.storage_key.is_empty() {
            return Err(MenuError::Config("storageKey must not be empty".to_string()));
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(MenuError::Config(format!("unknown logLevel '{}'", self.log_level)));
        }
        Ok(())
    }

    /// Level filter for the logger, `Info` when unparsable
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    pub fn default_set(&self) -> ExpansionSet {
        self.default_expanded.iter().cloned().collect()
    }
}
