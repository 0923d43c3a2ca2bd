//! Chat window normalizer.

use crate::raw::ATTR_HINT;
use crate::text::longest_text;
use crate::tree::{NodeIdx, ResolvedTree};
use crate::types::{ChatUserEntity, ChatWindow};

/// Type tag of a chat window inside a stack.
pub const CHAT_WINDOW_TYPE: &str = "XmppChatWindow";
/// `_name` of the member list container.
pub const USER_LIST_NAME: &str = "userlist";
/// Type tags of member list entries.
pub const USER_ENTRY_TYPES: [&str; 2] = ["XmppChatUserEntry", "XmppChatSimpleUserEntry"];
/// Type tag of the standing flag icon.
pub const FLAG_ICON_TYPE: &str = "FlagIconWithState";

/// Parse the chat window held by a chat window stack.
///
/// Returns `None` if the stack holds no rendered chat window.
pub fn parse_chat_stack(tree: &ResolvedTree, stack: NodeIdx) -> Option<ChatWindow> {
    let window = tree.find_typed(stack, CHAT_WINDOW_TYPE)?;
    let name = tree.node(window).name().unwrap_or_default().to_string();

    let user_list = match tree.find_named(window, USER_LIST_NAME) {
        Some(list) => tree
            .find_all(list, |n| USER_ENTRY_TYPES.contains(&n.type_name.as_str()))
            .into_iter()
            .filter_map(|entry| parse_user_entry(tree, entry))
            .collect(),
        None => Vec::new(),
    };

    Some(ChatWindow { name, user_list })
}

fn parse_user_entry(tree: &ResolvedTree, entry: NodeIdx) -> Option<ChatUserEntity> {
    let name = longest_text(tree, entry)?;
    let standing = tree
        .find_typed(entry, FLAG_ICON_TYPE)
        .and_then(|flag| tree.node(flag).text_attr(ATTR_HINT))
        .map(str::to_string);

    Some(ChatUserEntity { name, standing })
}
