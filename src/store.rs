//! Menu State Store
//!
//! Uses Leptos reactive_stores so every rendered node re-reads the menu
//! after a toggle.

use leptos::prelude::*;
use menu_state::{ClickOutcome, Menu, MenuNode, NodeId};
use reactive_stores::Store;

use crate::storage::BrowserStorage;

#[derive(Debug, Store)]
pub struct MenuState {
    /// Tree, expansion store and transition mode
    pub menu: Menu<BrowserStorage>,
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Snapshot of a node, without subscribing to later changes
pub fn store_node(store: &MenuStore, node: NodeId) -> Option<MenuNode> {
    store.menu().read_untracked().tree().node(node).cloned()
}

/// Forward a click on `node` to the menu
pub fn store_click(store: &MenuStore, node: NodeId, target: NodeId) -> ClickOutcome {
    store.menu().write().click(node, target)
}

/// Class list of a node's `<li>`: `collapsed` marks every collapsible node
/// for good, `expanded` follows the toggle state
pub fn store_item_class(store: &MenuStore, node: NodeId) -> String {
    let menu = store.menu().read();
    match menu.tree().node(node) {
        Some(entry) if entry.is_collapsible() && entry.is_expanded() => {
            "collapsed expanded".to_string()
        }
        Some(entry) if entry.is_collapsible() => "collapsed".to_string(),
        _ => String::new(),
    }
}

/// Class and inline style of a node's child `<ul>`
pub fn store_children_style(store: &MenuStore, node: NodeId) -> (String, String) {
    let menu = store.menu().read();
    let Some(entry) = menu.tree().node(node) else {
        return ("menu-children".to_string(), String::new());
    };
    let class = if entry.children_visible() {
        "menu-children"
    } else {
        "menu-children hidden"
    };
    let style = format!("transition-duration: {}ms;", entry.transition().duration_ms());
    (class.to_string(), style)
}
