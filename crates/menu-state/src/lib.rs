//! Menu State
//!
//! Platform-free core of the persistent tree menu:
//! - tree: menu nodes, collapsible/expanded markers, toggling
//! - expansion: the persisted set of expanded ids and its store
//! - storage: key/value backends the store writes through
//! - menu: startup preparation, click entry point, restoration
//!
//! Nothing in here touches the DOM, so the frontend and the tests drive
//! exactly the same code.

mod config;
mod error;
mod expansion;
mod menu;
mod outline;
mod storage;
mod transition;
mod tree;

pub use config::MenuConfig;
pub use error::{MenuError, MenuResult};
pub use expansion::{ExpansionSet, ExpansionStore, Restoration};
pub use menu::{ClickOutcome, Menu, PrepareReport, RestoreReport};
pub use outline::MenuOutline;
pub use storage::{KeyValueStorage, MemoryStorage, NoopStorage};
pub use transition::{Transition, TransitionMode};
pub use tree::{MenuNode, MenuTree, NodeId, Toggled};
