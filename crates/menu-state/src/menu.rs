//! Menu Controller
//!
//! Ties the tree to the expansion store. `click` is the single entry point
//! for toggling: user clicks and startup restoration both go through it, so
//! every toggle is followed by a save.

use crate::config::MenuConfig;
use crate::expansion::{ExpansionStore, Restoration};
use crate::storage::KeyValueStorage;
use crate::transition::TransitionMode;
use crate::tree::{MenuTree, NodeId, Toggled};

/// What a click did. A handled click must not propagate further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Toggled(Toggled),
    Ignored,
}

impl ClickOutcome {
    pub fn is_handled(&self) -> bool {
        matches!(self, ClickOutcome::Toggled(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestoreReport {
    /// Ids listed by the record (or the defaults)
    pub requested: usize,
    /// Ids whose node was toggled
    pub restored: usize,
    /// Ids with no matching collapsible node
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrepareReport {
    pub collapsible: usize,
    pub source: &'static str,
    pub restore: RestoreReport,
}

#[derive(Debug, Clone)]
pub struct Menu<S> {
    tree: MenuTree,
    store: ExpansionStore<S>,
    mode: TransitionMode,
    animation_ms: u32,
    prepared: bool,
}

impl<S: KeyValueStorage> Menu<S> {
    pub fn new(tree: MenuTree, store: ExpansionStore<S>, config: &MenuConfig) -> Self {
        Self {
            tree,
            store,
            mode: TransitionMode::Instant,
            animation_ms: config.animation_ms,
            prepared: false,
        }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Startup: initialize the tree, restore the remembered sections
    /// instantly, then switch to animated transitions.
    ///
    /// Runs once; later calls return `None` and change nothing.
    pub fn prepare(&mut self) -> Option<PrepareReport> {
        if self.prepared {
            log::warn!("menu already prepared, ignoring");
            return None;
        }
        self.prepared = true;

        let collapsible = self.tree.initialize();
        let restoration = self.store.load();
        let restore = self.restore_from(&restoration);
        self.mode = TransitionMode::Animated;

        log::info!(
            "menu ready: {} collapsible, {} of {} {} sections restored",
            collapsible,
            restore.restored,
            restore.requested,
            restoration.source()
        );
        Some(PrepareReport {
            collapsible,
            source: restoration.source(),
            restore,
        })
    }

    /// Click on `node` whose event target was `target`.
    ///
    /// Fires only when the node itself was hit, never for clicks bubbling up
    /// from a descendant, and only for collapsible nodes.
    pub fn click(&mut self, node: NodeId, target: NodeId) -> ClickOutcome {
        if node != target {
            return ClickOutcome::Ignored;
        }
        let transition = self.mode.transition(self.animation_ms);
        let Some(toggled) = self.tree.toggle(node, transition) else {
            return ClickOutcome::Ignored;
        };
        self.save();
        ClickOutcome::Toggled(toggled)
    }

    /// Persist the ids of the currently expanded nodes
    pub fn save(&self) {
        let set = self.tree.expansion_set();
        if let Err(e) = self.store.save(&set) {
            log::warn!("could not save expanded sections: {}", e);
        }
    }

    fn restore_from(&mut self, restoration: &Restoration) -> RestoreReport {
        let ids = restoration.ids();
        let mut report = RestoreReport {
            requested: ids.len(),
            ..Default::default()
        };
        for id in ids {
            let Some(node) = self.tree.find(id) else {
                log::debug!("no menu node with id '{}'", id);
                report.skipped += 1;
                continue;
            };
            match self.click(node, node) {
                ClickOutcome::Toggled(_) => report.restored += 1,
                ClickOutcome::Ignored => {
                    log::debug!("menu node '{}' is not collapsible", id);
                    report.skipped += 1;
                }
            }
        }
        report
    }
}
