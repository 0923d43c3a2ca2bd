//! Region resolution.
//!
//! Every node in the dump declares its geometry relative to its parent. The
//! resolver turns those local offsets into absolute regions while flattening
//! the dump into a [`ResolvedTree`].
//!
//! A non-root node that lacks any of the four geometry attributes is not
//! rendered. It is dropped together with its whole subtree: nothing beneath
//! an element that is not on screen is on screen either.

use std::collections::VecDeque;

use tracing::trace;

use crate::raw::{RawNode, ATTR_HEIGHT, ATTR_WIDTH, ATTR_X, ATTR_Y};
use crate::types::DisplayRegion;

use super::{NodeIdx, ResolvedTree, UiNode};

/// Local (parent-relative) region of a raw node, if all four geometry
/// attributes are present.
pub fn local_region(node: &RawNode) -> Option<DisplayRegion> {
    Some(DisplayRegion::new(
        node.attr(ATTR_X)?.numeric(),
        node.attr(ATTR_Y)?.numeric(),
        node.attr(ATTR_WIDTH)?.numeric(),
        node.attr(ATTR_HEIGHT)?.numeric(),
    ))
}

/// Root geometry: missing attributes read as 0, so the root is always kept.
fn root_region(node: &RawNode) -> DisplayRegion {
    let read = |key: &str| node.attr(key).map(|v| v.numeric()).unwrap_or(0.0);
    DisplayRegion::new(read(ATTR_X), read(ATTR_Y), read(ATTR_WIDTH), read(ATTR_HEIGHT))
}

/// Resolve absolute regions and flatten the dump into an arena.
///
/// Breadth-first; the arena is in breadth-first order with the root at
/// index 0, and each node's child list keeps declaration order.
pub fn resolve(root: RawNode) -> ResolvedTree {
    let mut nodes: Vec<UiNode> = Vec::new();
    let mut pruned = 0usize;

    let root_region = root_region(&root);
    let mut queue: VecDeque<(RawNode, DisplayRegion, Option<NodeIdx>)> = VecDeque::new();
    queue.push_back((root, root_region, None));

    while let Some((mut raw, region, parent)) = queue.pop_front() {
        let idx = NodeIdx(nodes.len());
        let children = std::mem::take(&mut raw.children);

        for child in children {
            match local_region(&child) {
                Some(local) => queue.push_back((child, region.offset(local), Some(idx))),
                None => pruned += 1,
            }
        }

        nodes.push(UiNode {
            address: raw.address,
            type_name: std::mem::take(&mut raw.type_name),
            attrs: std::mem::take(&mut raw.attrs),
            region,
            children: Vec::new(),
        });

        if let Some(parent) = parent {
            nodes[parent.0].children.push(idx);
        }
    }

    trace!(rendered = nodes.len(), pruned = pruned, "regions resolved");

    ResolvedTree::from_parts(nodes, pruned)
}
