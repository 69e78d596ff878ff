//! Menu Outline
//!
//! Nested description of a menu as the page presents it. The tree is built
//! from this once; the DOM reader in the frontend produces it from the
//! pre-rendered `<ul>`/`<li>` markup.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOutline {
    /// Element id, the handle under which expansion is persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub label: String,
    /// Link target when the entry's label is an anchor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub children: Vec<MenuOutline>,
}

impl MenuOutline {
    pub fn leaf(id: Option<&str>, label: &str) -> Self {
        Self {
            id: id.map(str::to_owned),
            label: label.to_string(),
            ..Default::default()
        }
    }

    pub fn branch(id: Option<&str>, label: &str, children: Vec<MenuOutline>) -> Self {
        Self {
            children,
            ..Self::leaf(id, label)
        }
    }
}
