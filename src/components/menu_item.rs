//! Menu Item Component
//!
//! One `<li>` per tree node, its children in a nested `<ul>`.

use leptos::prelude::*;
use menu_state::NodeId;

use crate::dom;
use crate::store::{
    store_children_style, store_click, store_item_class, store_node, use_menu_store,
};

/// A list of sibling nodes
#[component]
pub fn MenuItems(nodes: Vec<NodeId>) -> AnyView {
    nodes
        .into_iter()
        .map(|node| view! { <MenuItem node=node /> })
        .collect_view()
        .into_any()
}

/// A single menu entry
#[component]
pub fn MenuItem(node: NodeId) -> AnyView {
    let store = use_menu_store();

    // Structure never changes after startup
    let Some(entry) = store_node(&store, node) else {
        return ().into_any();
    };

    let on_click = move |ev: web_sys::MouseEvent| {
        // Clicks on links and nested elements keep their default behavior
        let Some(target) = dom::event_node(&ev) else {
            return;
        };
        if store_click(&store, node, target).is_handled() {
            ev.prevent_default();
            ev.stop_propagation();
        }
    };

    let label = match entry.href() {
        Some(href) => {
            view! { <a href=href.to_string()>{entry.label().to_string()}</a> }.into_any()
        }
        None => entry.label().to_string().into_any(),
    };

    let child_list = entry.has_children().then(|| {
        let children = entry.children().to_vec();
        let list_class = move || store_children_style(&store, node).0;
        let list_style = move || store_children_style(&store, node).1;
        view! {
            <ul class=list_class style=list_style>
                <MenuItems nodes=children />
            </ul>
        }
    });

    view! {
        <li
            id=entry.id().map(str::to_owned)
            class=move || store_item_class(&store, node)
            data-node=node.index().to_string()
            on:click=on_click
        >
            {label}
            {child_list}
        </li>
    }
    .into_any()
}
