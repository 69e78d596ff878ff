//! Menu Tree App
//!
//! Startup: read the config and the static menu markup, prepare the menu
//! (initialize, restore, switch to animated), then take over the `<ul>`
//! with reactive components.

use leptos::mount::mount_to;
use leptos::prelude::*;
use menu_state::{ExpansionStore, Menu, MenuConfig, MenuTree};
use reactive_stores::Store;

use crate::components::MenuItems;
use crate::config;
use crate::dom;
use crate::logger;
use crate::storage::BrowserStorage;
use crate::store::MenuState;

pub fn start() {
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (MenuConfig::default(), Some(e)),
    };
    logger::init(config.log_level());
    if let Some(e) = config_error {
        log::warn!("invalid menuTreeConfig, using defaults: {}", e);
    }

    let Some(root) = dom::menu_root(&config.root_id) else {
        log::warn!("no element with id '{}', menu disabled", config.root_id);
        return;
    };

    let outline = dom::read_outline(&root);
    let tree = MenuTree::from_outline(&outline);
    log::debug!("read {} menu nodes from #{}", tree.len(), config.root_id);

    let store = ExpansionStore::new(BrowserStorage::detect(), &config);
    let mut menu = Menu::new(tree, store, &config);
    if let Some(report) = menu.prepare() {
        log::debug!(
            "{} sections skipped during restoration",
            report.restore.skipped
        );
    }

    let roots = menu.tree().roots().to_vec();
    dom::clear(&root);
    mount_to(root, move || {
        let store = Store::new(MenuState { menu });
        provide_context(store);
        view! { <MenuItems nodes=roots /> }
    })
    .forget();
}
