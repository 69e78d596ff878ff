//! Menu Tree
//!
//! Arena of menu nodes in document (pre-order) order. Nodes with at least
//! one child become collapsible on initialization; leaves stay inert.

use std::collections::HashMap;

use crate::expansion::ExpansionSet;
use crate::outline::MenuOutline;
use crate::transition::Transition;

/// Handle of a node inside one `MenuTree`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuNode {
    id: Option<String>,
    label: String,
    href: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    // UI state
    collapsible: bool,
    expanded: bool,
    children_visible: bool,
    transition: Transition,
}

impl MenuNode {
    fn new(
        id: Option<String>,
        label: String,
        href: Option<String>,
        parent: Option<NodeId>,
    ) -> Self {
        Self {
            id,
            label,
            href,
            parent,
            children: Vec::new(),
            collapsible: false,
            expanded: false,
            children_visible: true,
            transition: Transition::INSTANT,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Static marker set by `MenuTree::initialize`, never cleared
    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the direct child list is shown
    pub fn children_visible(&self) -> bool {
        self.children_visible
    }

    /// Transition used the last time the child list was shown or hidden
    pub fn transition(&self) -> Transition {
        self.transition
    }
}

/// Result of a toggle that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggled {
    pub node: NodeId,
    pub expanded: bool,
    pub transition: Transition,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
    roots: Vec<NodeId>,
    by_id: HashMap<String, NodeId>,
}

impl MenuTree {
    pub fn from_outline(outline: &[MenuOutline]) -> Self {
        let mut tree = Self::default();
        for entry in outline {
            let root = tree.push(entry, None);
            tree.roots.push(root);
        }
        tree
    }

    fn push(&mut self, entry: &MenuOutline, parent: Option<NodeId>) -> NodeId {
        let node = NodeId(self.nodes.len());
        // An empty id attribute is the same as none
        let id = entry.id.as_deref().filter(|id| !id.is_empty()).map(str::to_owned);
        if let Some(key) = &id {
            // Like an id selector, lookups resolve to the first match
            self.by_id.entry(key.clone()).or_insert(node);
        }
        self.nodes.push(MenuNode::new(id, entry.label.clone(), entry.href.clone(), parent));

        let children: Vec<NodeId> = entry
            .children
            .iter()
            .map(|child| self.push(child, Some(node)))
            .collect();
        self.nodes[node.0].children = children;
        node
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn node(&self, node: NodeId) -> Option<&MenuNode> {
        self.nodes.get(node.0)
    }

    /// All nodes with their handles, in document order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MenuNode)> {
        self.nodes.iter().enumerate().map(|(index, node)| (NodeId(index), node))
    }

    pub fn find(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    /// Mark every node with children as collapsible and hide its children.
    ///
    /// Returns the number of collapsible nodes. Leaves are not touched.
    pub fn initialize(&mut self) -> usize {
        let mut collapsible = 0;
        for node in self.nodes.iter_mut().filter(|node| node.has_children()) {
            node.collapsible = true;
            node.children_visible = false;
            collapsible += 1;
        }
        collapsible
    }

    /// Flip the expanded marker and the child list visibility of a
    /// collapsible node. Returns `None` for leaves and unknown handles.
    pub fn toggle(&mut self, node: NodeId, transition: Transition) -> Option<Toggled> {
        let entry = self.nodes.get_mut(node.0)?;
        if !entry.collapsible {
            return None;
        }
        entry.expanded = !entry.expanded;
        entry.children_visible = !entry.children_visible;
        entry.transition = transition;
        Some(Toggled {
            node,
            expanded: entry.expanded,
            transition,
        })
    }

    /// A node is visible when every ancestor shows its child list
    pub fn is_visible(&self, node: NodeId) -> bool {
        let mut current = self.node(node).and_then(MenuNode::parent);
        while let Some(parent) = current {
            let Some(entry) = self.node(parent) else {
                return false;
            };
            if !entry.children_visible {
                return false;
            }
            current = entry.parent;
        }
        self.node(node).is_some()
    }

    /// Ids of the expanded nodes in document order. Nodes without an id
    /// cannot be represented and are left out.
    pub fn expansion_set(&self) -> ExpansionSet {
        self.nodes
            .iter()
            .filter(|node| node.expanded)
            .filter_map(|node| node.id.clone())
            .collect()
    }
}
