//! Resolved UI tree.
//!
//! The raw dump is flattened into an arena of rendered nodes, each carrying
//! its absolute [`DisplayRegion`]. Nodes that are not rendered, and everything
//! beneath them, never enter the arena, so every search over a
//! [`ResolvedTree`] only sees what is on screen.
//!
//! All walks use an explicit queue: dumps can be arbitrarily deep and wide.

pub mod region;
pub mod dispatch;

use std::collections::{BTreeMap, VecDeque};

use crate::raw::{AttrValue, NodeAddress, ATTR_COLOR, ATTR_NAME, ATTR_SET_TEXT, ATTR_TEXT};
use crate::types::{Color, DisplayRegion};

pub use dispatch::{classify, PanelIndex, PanelKind};
pub use region::resolve;

/// Index of a node in a [`ResolvedTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIdx(pub(crate) usize);

impl NodeIdx {
    /// Position in the arena.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A rendered node with its absolute region.
#[derive(Debug, Clone, PartialEq)]
pub struct UiNode {
    /// Identity from the dump.
    pub address: NodeAddress,
    /// Type tag from the dump.
    pub type_name: String,
    /// Attribute map from the dump.
    pub attrs: BTreeMap<String, AttrValue>,
    /// Absolute region.
    pub region: DisplayRegion,
    /// Rendered children in declaration order.
    pub children: Vec<NodeIdx>,
}

impl UiNode {
    /// Look up an attribute.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    /// The `_name` attribute, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.attr(ATTR_NAME).and_then(AttrValue::as_text)
    }

    /// True if the `_name` attribute equals `name`.
    pub fn has_name(&self, name: &str) -> bool {
        self.name() == Some(name)
    }

    /// A string attribute.
    pub fn text_attr(&self, key: &str) -> Option<&str> {
        self.attr(key).and_then(AttrValue::as_text)
    }

    /// A numeric attribute, decoded with [`AttrValue::numeric`].
    pub fn numeric_attr(&self, key: &str) -> Option<f64> {
        self.attr(key).map(AttrValue::numeric)
    }

    /// A boolean attribute.
    pub fn bool_attr(&self, key: &str) -> Option<bool> {
        self.attr(key).and_then(AttrValue::as_bool)
    }

    /// The `_color` attribute, if it is a color record.
    pub fn color(&self) -> Option<Color> {
        self.attr(ATTR_COLOR)
            .and_then(AttrValue::as_color)
            .map(Color::from)
    }

    /// The text this node displays, if any.
    ///
    /// Some widgets stage a pending value in `_setText` next to the committed
    /// `_text`; the longer of the two is taken.
    pub fn display_text(&self) -> Option<&str> {
        let set_text = self.text_attr(ATTR_SET_TEXT).filter(|s| !s.is_empty());
        let text = self.text_attr(ATTR_TEXT).filter(|s| !s.is_empty());
        match (set_text, text) {
            (Some(a), Some(b)) => Some(if b.chars().count() > a.chars().count() { b } else { a }),
            (a, b) => a.or(b),
        }
    }
}

/// Arena of rendered nodes. Index 0 is the root.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTree {
    nodes: Vec<UiNode>,
    pruned: usize,
}

impl ResolvedTree {
    pub(crate) fn from_parts(nodes: Vec<UiNode>, pruned: usize) -> Self {
        Self { nodes, pruned }
    }

    /// The root node.
    pub fn root(&self) -> NodeIdx {
        NodeIdx(0)
    }

    /// Get a node.
    pub fn node(&self, idx: NodeIdx) -> &UiNode {
        &self.nodes[idx.0]
    }

    /// Number of rendered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the arena is empty (never the case for a resolved dump).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes cut off because they lacked geometry.
    ///
    /// Counts only the subtree roots, not what was beneath them.
    pub fn pruned_count(&self) -> usize {
        self.pruned
    }

    /// Breadth-first walk of `start` and everything beneath it.
    pub fn descendants(&self, start: NodeIdx) -> Descendants<'_> {
        Descendants {
            tree: self,
            queue: VecDeque::from([start]),
        }
    }

    /// Every node matching `pred` at or below `start`, breadth-first.
    ///
    /// Matched nodes are not searched further; a match nested inside
    /// another match is not reported.
    pub fn find_all<F>(&self, start: NodeIdx, pred: F) -> Vec<NodeIdx>
    where
        F: Fn(&UiNode) -> bool,
    {
        let mut found = Vec::new();
        let mut queue = VecDeque::from([start]);

        while let Some(idx) = queue.pop_front() {
            let node = self.node(idx);
            if pred(node) {
                found.push(idx);
            } else {
                queue.extend(node.children.iter().copied());
            }
        }

        found
    }

    /// First node matching `pred` at or below `start`, breadth-first.
    pub fn find_first<F>(&self, start: NodeIdx, pred: F) -> Option<NodeIdx>
    where
        F: Fn(&UiNode) -> bool,
    {
        self.descendants(start).find(|idx| pred(self.node(*idx)))
    }

    /// First node named `name` at or below `start`.
    pub fn find_named(&self, start: NodeIdx, name: &str) -> Option<NodeIdx> {
        self.find_first(start, |n| n.has_name(name))
    }

    /// First node of type `type_name` at or below `start`.
    pub fn find_typed(&self, start: NodeIdx, type_name: &str) -> Option<NodeIdx> {
        self.find_first(start, |n| n.type_name == type_name)
    }
}

/// Breadth-first iterator over a subtree. See [`ResolvedTree::descendants`].
pub struct Descendants<'a> {
    tree: &'a ResolvedTree,
    queue: VecDeque<NodeIdx>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<NodeIdx> {
        let idx = self.queue.pop_front()?;
        self.queue.extend(self.tree.node(idx).children.iter().copied());
        Some(idx)
    }
}
