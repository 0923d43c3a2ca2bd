//! Ship HUD normalizer.

use crate::raw::{ATTR_LAST_VALUE, ATTR_RAMP_ACTIVE};
use crate::text::first_text;
use crate::tree::{NodeIdx, ResolvedTree};
use crate::types::{ModuleButton, ShipUI};

use super::read_hit_points;

/// Type tag of the capacitor ring.
pub const CAPACITOR_TYPE: &str = "CapacitorContainer";
/// `_name` of one capacitor mark.
pub const CAPACITOR_MARK_NAME: &str = "pmark";
/// A mark whose alpha is below this is lit.
pub const LIT_ALPHA_BELOW: f64 = 20.0;
/// Type tag of the speed readout.
pub const SPEED_GAUGE_TYPE: &str = "SpeedGauge";
/// Gauge names, in shield/armor/structure order.
pub const GAUGE_NAMES: [&str; 3] = ["shieldGauge", "armorGauge", "structureGauge"];
/// Type tag of a module slot.
pub const SLOT_TYPE: &str = "ShipSlot";
/// Type tag of a module button.
pub const MODULE_BUTTON_TYPE: &str = "ModuleButton";
/// `_name` of the sprite shown while a module is busy.
pub const BUSY_SPRITE_NAME: &str = "busy";

/// Parse the ship HUD.
pub fn parse_ship_ui(tree: &ResolvedTree, hud: NodeIdx) -> ShipUI {
    ShipUI {
        capacitor_percentage: capacitor_percentage(tree, hud),
        speed_label: tree
            .find_typed(hud, SPEED_GAUGE_TYPE)
            .and_then(|speed| first_text(tree, speed)),
        hit_points: read_hit_points(tree, hud, GAUGE_NAMES, gauge_value),
        module_buttons: module_buttons(tree, hud),
    }
}

/// Share of lit capacitor marks, or `None` if there are no marks.
fn capacitor_percentage(tree: &ResolvedTree, hud: NodeIdx) -> Option<f64> {
    let ring = tree.find_typed(hud, CAPACITOR_TYPE).unwrap_or(hud);
    let marks = tree.find_all(ring, |n| n.has_name(CAPACITOR_MARK_NAME));
    if marks.is_empty() {
        return None;
    }

    let lit = marks
        .iter()
        .filter(|m| {
            tree.node(**m)
                .color()
                .map_or(false, |c| c.a < LIT_ALPHA_BELOW)
        })
        .count();

    Some(lit as f64 / marks.len() as f64 * 100.0)
}

/// Fill of a HUD gauge.
///
/// The HUD omits `_lastValue` both for an empty gauge and for a gauge that
/// has not been populated yet. Both read as 0.
fn gauge_value(tree: &ResolvedTree, gauge: NodeIdx) -> Option<f64> {
    Some(tree.node(gauge).numeric_attr(ATTR_LAST_VALUE).unwrap_or(0.0) * 100.0)
}

fn module_buttons(tree: &ResolvedTree, hud: NodeIdx) -> Vec<ModuleButton> {
    tree.find_all(hud, |n| n.type_name == SLOT_TYPE)
        .into_iter()
        .filter_map(|slot| {
            let button = tree.node(tree.find_typed(slot, MODULE_BUTTON_TYPE)?);
            Some(ModuleButton {
                is_active: button.bool_attr(ATTR_RAMP_ACTIVE).unwrap_or(false),
                is_busy: tree.find_named(slot, BUSY_SPRITE_NAME).is_some(),
                region: button.region,
            })
        })
        .collect()
}
