//! Drones window normalizer.

use crate::text::first_text;
use crate::tree::{NodeIdx, ResolvedTree, UiNode};
use crate::types::{Drone, DroneList};

use super::read_hit_points;

/// Gauge container names, in shield/armor/structure order.
pub const GAUGE_NAMES: [&str; 3] = ["shieldGauge", "armorGauge", "structGauge"];
/// `_name` of the bar spanning the full gauge width.
pub const GAUGE_BAR_NAME: &str = "droneGaugeBar";
/// `_name` of the overlay bar covering the missing fraction.
pub const GAUGE_DAMAGE_NAME: &str = "droneGaugeBarDmg";

fn is_drone_entry(node: &UiNode) -> bool {
    node.type_name.starts_with("Drone") && node.type_name.ends_with("Entry")
}

/// Parse the drones window.
pub fn parse_drones(tree: &ResolvedTree, window: NodeIdx) -> DroneList {
    let mut drones = DroneList::default();

    for entry in tree.find_all(window, is_drone_entry) {
        let drone = Drone {
            label: first_text(tree, entry).unwrap_or_default(),
            hit_points: read_hit_points(tree, entry, GAUGE_NAMES, gauge_percent),
        };
        if tree.node(entry).type_name.contains("InBay") {
            drones.in_bay.push(drone);
        } else {
            drones.in_space.push(drone);
        }
    }

    drones
}

/// Remaining health of one gauge from the widths of its two bars.
fn gauge_percent(tree: &ResolvedTree, gauge: NodeIdx) -> Option<f64> {
    let full = tree.node(tree.find_named(gauge, GAUGE_BAR_NAME)?).region.width;
    let damage = tree.node(tree.find_named(gauge, GAUGE_DAMAGE_NAME)?).region.width;
    Some(bar_percent(full, damage))
}

/// `(full - damage) / full` as a percentage; 0 for a zero-width bar.
pub fn bar_percent(full_width: f64, damage_width: f64) -> f64 {
    if full_width == 0.0 {
        return 0.0;
    }
    (full_width - damage_width) / full_width * 100.0
}
