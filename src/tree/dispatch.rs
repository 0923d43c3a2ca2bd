//! Panel classification.
//!
//! One breadth-first pass over the resolved tree locates the top-level
//! panels. A classified subtree is not scanned any further by this pass;
//! the panel's normalizer walks it on its own.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use super::{NodeIdx, ResolvedTree};

/// The recognized top-level panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// A stack of chat windows. There may be several.
    ChatStack,
    /// The overview table.
    Overview,
    /// The drones window.
    Drones,
    /// The ship HUD.
    Ship,
}

impl PanelKind {
    /// Classify a node by its type tag.
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        match type_name {
            "ChatWindowStack" => Some(Self::ChatStack),
            "OverviewWindow" => Some(Self::Overview),
            "DronesWindow" => Some(Self::Drones),
            "ShipUI" => Some(Self::Ship),
            _ => None,
        }
    }

    /// The type tag this panel is recognized by.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ChatStack => "ChatWindowStack",
            Self::Overview => "OverviewWindow",
            Self::Drones => "DronesWindow",
            Self::Ship => "ShipUI",
        }
    }
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChatStack => write!(f, "chat"),
            Self::Overview => write!(f, "overview"),
            Self::Drones => write!(f, "drones"),
            Self::Ship => write!(f, "ship"),
        }
    }
}

/// Location of each panel found in a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelIndex {
    /// Chat window stacks in breadth-first order.
    pub chat_stacks: Vec<NodeIdx>,
    /// The overview window.
    pub overview: Option<NodeIdx>,
    /// The drones window.
    pub drones: Option<NodeIdx>,
    /// The ship HUD.
    pub ship: Option<NodeIdx>,
}

impl PanelIndex {
    fn record(&mut self, kind: PanelKind, idx: NodeIdx) {
        let slot = match kind {
            PanelKind::ChatStack => {
                self.chat_stacks.push(idx);
                return;
            }
            PanelKind::Overview => &mut self.overview,
            PanelKind::Drones => &mut self.drones,
            PanelKind::Ship => &mut self.ship,
        };

        if slot.is_none() {
            *slot = Some(idx);
        } else {
            debug!(panel = %kind, "ignoring additional panel instance");
        }
    }
}

/// Locate the top-level panels of a resolved tree.
pub fn classify(tree: &ResolvedTree) -> PanelIndex {
    let mut index = PanelIndex::default();
    let mut queue = VecDeque::from([tree.root()]);

    while let Some(idx) = queue.pop_front() {
        let node = tree.node(idx);
        match PanelKind::from_type_name(&node.type_name) {
            Some(kind) => index.record(kind, idx),
            None => queue.extend(node.children.iter().copied()),
        }
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawNode;
    use crate::tree::resolve;

    fn pane(address: u64, type_name: &str) -> RawNode {
        RawNode::new(address, type_name).with_geometry(0.0, 0.0, 10.0, 10.0)
    }

    #[test]
    fn test_finds_each_panel() {
        let root = pane(1, "UIRoot")
            .with_child(pane(2, "ChatWindowStack"))
            .with_child(pane(3, "Layer").with_child(pane(4, "OverviewWindow")))
            .with_child(pane(5, "DronesWindow"))
            .with_child(pane(6, "Layer").with_child(pane(7, "ShipUI")))
            .with_child(pane(8, "ChatWindowStack"));
        let tree = resolve(root);
        let index = classify(&tree);

        assert_eq!(index.chat_stacks.len(), 2);
        assert_eq!(tree.node(index.overview.unwrap()).address.value(), 4);
        assert_eq!(tree.node(index.drones.unwrap()).address.value(), 5);
        assert_eq!(tree.node(index.ship.unwrap()).address.value(), 7);
    }

    #[test]
    fn test_does_not_descend_into_classified_subtree() {
        let root = pane(1, "UIRoot").with_child(
            pane(2, "ChatWindowStack").with_child(pane(3, "ChatWindowStack")),
        );
        let tree = resolve(root);
        let index = classify(&tree);
        assert_eq!(index.chat_stacks.len(), 1);
    }

    #[test]
    fn test_first_singleton_wins() {
        let root = pane(1, "UIRoot")
            .with_child(pane(2, "Layer").with_child(pane(3, "ShipUI")))
            .with_child(pane(4, "ShipUI"));
        let tree = resolve(root);
        let index = classify(&tree);
        assert_eq!(tree.node(index.ship.unwrap()).address.value(), 4);
    }

    #[test]
    fn test_hidden_panel_is_not_found() {
        let root = pane(1, "UIRoot").with_child(RawNode::new(2, "OverviewWindow"));
        let tree = resolve(root);
        assert_eq!(classify(&tree), PanelIndex::default());
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [PanelKind::ChatStack, PanelKind::Overview, PanelKind::Drones, PanelKind::Ship] {
            assert_eq!(PanelKind::from_type_name(kind.type_name()), Some(kind));
        }
        assert_eq!(PanelKind::from_type_name("Label"), None);
    }
}
