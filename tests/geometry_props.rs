//! Property tests for region resolution.

use eve_ui_parser::tree::resolve;
use eve_ui_parser::RawNode;
use proptest::prelude::*;

fn geometry() -> impl Strategy<Value = (f64, f64, f64, f64)> {
    (-500i32..500, -500i32..500, 0i32..2000, 0i32..2000)
        .prop_map(|(x, y, w, h)| (x as f64, y as f64, w as f64, h as f64))
}

/// A chain root → child → grandchild … with the given local geometries.
fn chain(levels: &[(f64, f64, f64, f64)]) -> RawNode {
    let mut node: Option<RawNode> = None;
    for (depth, &(x, y, w, h)) in levels.iter().enumerate().rev() {
        let mut current = RawNode::new(depth as u64 + 1, "Container").with_geometry(x, y, w, h);
        if let Some(child) = node.take() {
            current = current.with_child(child);
        }
        node = Some(current);
    }
    node.unwrap_or_else(|| RawNode::new(1, "UIRoot"))
}

proptest! {
    #[test]
    fn prop_offsets_accumulate_sizes_do_not(levels in prop::collection::vec(geometry(), 1..40)) {
        let tree = resolve(chain(&levels));
        let nodes: Vec<_> = tree.descendants(tree.root()).collect();
        prop_assert_eq!(nodes.len(), levels.len());

        let mut x = 0.0;
        let mut y = 0.0;
        for (idx, &(lx, ly, w, h)) in nodes.iter().zip(levels.iter()) {
            x += lx;
            y += ly;
            let region = tree.node(*idx).region;
            prop_assert_eq!(region.x, x);
            prop_assert_eq!(region.y, y);
            prop_assert_eq!(region.width, w);
            prop_assert_eq!(region.height, h);
        }
    }

    #[test]
    fn prop_missing_geometry_prunes_subtree(levels in prop::collection::vec(geometry(), 2..20), cut in 1usize..20) {
        let cut = cut.min(levels.len() - 1);
        let mut nodes = Vec::new();
        for (depth, &(x, y, w, h)) in levels.iter().enumerate() {
            let node = RawNode::new(depth as u64 + 1, "Container");
            nodes.push(if depth == cut { node } else { node.with_geometry(x, y, w, h) });
        }
        let root = nodes
            .into_iter()
            .rev()
            .reduce(|child, parent| parent.with_child(child))
            .unwrap_or_else(|| RawNode::new(1, "UIRoot"));

        let tree = resolve(root);
        prop_assert_eq!(tree.len(), cut);
        prop_assert_eq!(tree.pruned_count(), 1);
    }
}
