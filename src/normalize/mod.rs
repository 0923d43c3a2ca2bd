//! Panel normalizers.
//!
//! Each normalizer turns one classified panel subtree into its typed
//! snapshot. Missing sub-elements are never errors: they become empty lists
//! or `None`.

pub mod chat;
pub mod overview;
pub mod drones;
pub mod ship;

pub use chat::parse_chat_stack;
pub use overview::parse_overview;
pub use drones::parse_drones;
pub use ship::parse_ship_ui;

use crate::tree::{NodeIdx, ResolvedTree};
use crate::types::{clamp_percent, HitPointPercentages};

/// Read three named gauges and combine them into hit points.
///
/// Returns `None` unless all three gauges produced a value.
pub(crate) fn read_hit_points<F>(
    tree: &ResolvedTree,
    start: NodeIdx,
    names: [&str; 3],
    read_gauge: F,
) -> Option<HitPointPercentages>
where
    F: Fn(&ResolvedTree, NodeIdx) -> Option<f64>,
{
    let [shield, armor, structure] = names.map(|name| {
        tree.find_named(start, name)
            .and_then(|gauge| read_gauge(tree, gauge))
            .map(clamp_percent)
    });

    Some(HitPointPercentages::new(shield?, armor?, structure?))
}
