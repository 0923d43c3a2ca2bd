//! Chat roster types.

use serde::{Deserialize, Serialize};

/// One member listed in a chat window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatUserEntity {
    /// Character name.
    pub name: String,
    /// Standing tooltip (e.g. "Pilot has Good Standing"), if the entry shows a flag.
    pub standing: Option<String>,
}

/// A chat window and its member list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatWindow {
    /// Window name, e.g. `chatchannel_local`.
    pub name: String,
    /// Members in display order. Empty if the window shows no member list.
    pub user_list: Vec<ChatUserEntity>,
}
