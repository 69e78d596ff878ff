//! UI Components
//!
//! The menu rendered as reactive `<li>`/`<ul>` elements.

mod menu_item;

pub use menu_item::MenuItems;
