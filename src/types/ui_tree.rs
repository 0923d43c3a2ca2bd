//! The parsed snapshot.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::raw::NodeAddress;

use super::chat::ChatWindow;
use super::drones::DroneList;
use super::overview::OverviewEntry;
use super::ship::ShipUI;

/// Typed snapshot of the UI panels found in one dump.
///
/// Every field is independently optional: a panel that is not open yields an
/// empty list or `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiTree {
    /// Address of the dump's root node. Pass it back to the dump producer to
    /// skip root discovery on later cycles.
    pub root_address: NodeAddress,
    /// Open chat windows.
    pub chat_windows: Vec<ChatWindow>,
    /// Overview rows in display order.
    pub overview: Vec<OverviewEntry>,
    /// Drones window contents.
    pub drones: DroneList,
    /// Ship HUD, if present.
    pub ship_ui: Option<ShipUI>,
}

impl UiTree {
    /// Create an empty snapshot for the given root.
    pub fn empty(root_address: NodeAddress) -> Self {
        Self {
            root_address,
            chat_windows: Vec::new(),
            overview: Vec::new(),
            drones: DroneList::default(),
            ship_ui: None,
        }
    }

    /// Find a chat window whose name ends with the given suffix.
    pub fn chat_window_with_suffix(&self, suffix: &str) -> Option<&ChatWindow> {
        self.chat_windows.iter().find(|w| w.name.ends_with(suffix))
    }

    /// Deterministic fingerprint of the snapshot contents.
    ///
    /// Equal snapshots have equal fingerprints.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatUserEntity;

    #[test]
    fn test_empty_fingerprint_is_stable() {
        let a = UiTree::empty(NodeAddress::new(1));
        let b = UiTree::empty(NodeAddress::new(1));
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), UiTree::empty(NodeAddress::new(2)).fingerprint());
    }

    #[test]
    fn test_chat_window_with_suffix() {
        let mut tree = UiTree::empty(NodeAddress::new(1));
        tree.chat_windows.push(ChatWindow {
            name: "chatchannel_local".to_string(),
            user_list: vec![ChatUserEntity { name: "A".to_string(), standing: None }],
        });
        assert!(tree.chat_window_with_suffix("_local").is_some());
        assert!(tree.chat_window_with_suffix("_corp").is_none());
    }
}
