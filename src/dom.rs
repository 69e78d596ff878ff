//! DOM Access
//!
//! Reads the pre-rendered menu markup once at startup and maps click
//! targets back to tree nodes.
//!
//! Expected markup:
//!
//! ```html
//! <ul id="menu-tree">
//!   <li id="concepts">Concepts
//!     <ul>
//!       <li><a href="agents.html">Agents</a></li>
//!     </ul>
//!   </li>
//! </ul>
//! ```

use menu_state::{MenuOutline, NodeId};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, MouseEvent, Node};

/// Attribute carrying the node handle on every rendered `<li>`
pub const NODE_ATTR: &str = "data-node";

pub fn menu_root(root_id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(root_id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Walk the `<li>` entries of a menu list, depth first
pub fn read_outline(list: &Element) -> Vec<MenuOutline> {
    element_children(list)
        .filter(|child| is_tag(child, "LI"))
        .map(|item| read_item(&item))
        .collect()
}

fn read_item(item: &Element) -> MenuOutline {
    let id = Some(item.id()).filter(|id| !id.is_empty());
    let mut label = direct_text(item);
    let mut href = None;
    let mut children = Vec::new();

    for child in element_children(item) {
        if is_tag(&child, "UL") {
            children.extend(read_outline(&child));
        } else if is_tag(&child, "A") && href.is_none() {
            href = child.get_attribute("href");
            if label.is_empty() {
                label = text_of(&child);
            }
        } else if label.is_empty() {
            label = text_of(&child);
        }
    }

    MenuOutline {
        id,
        label,
        href,
        children,
    }
}

/// Remove the static markup once it has been read
pub fn clear(element: &Element) {
    element.set_inner_html("");
}

/// Node whose `<li>` was the event target itself, `None` when the click
/// landed on anything else (a link, a nested element)
pub fn event_node(ev: &MouseEvent) -> Option<NodeId> {
    target_node(&ev.target()?)
}

fn target_node(target: &EventTarget) -> Option<NodeId> {
    target
        .dyn_ref::<Element>()?
        .get_attribute(NODE_ATTR)?
        .parse::<usize>()
        .ok()
        .map(NodeId::from_index)
}

fn element_children(parent: &Element) -> impl Iterator<Item = Element> {
    let children = parent.children();
    (0..children.length()).filter_map(move |index| children.item(index))
}

fn is_tag(element: &Element, tag: &str) -> bool {
    element.tag_name().eq_ignore_ascii_case(tag)
}

/// Concatenated text of the element's own text nodes
fn direct_text(element: &Element) -> String {
    let nodes = element.child_nodes();
    let text: String = (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter(|node| node.node_type() == Node::TEXT_NODE)
        .filter_map(|node| node.text_content())
        .collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn text_of(element: &Element) -> String {
    element
        .text_content()
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
