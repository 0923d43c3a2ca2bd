//! Ship status types.

use serde::{Deserialize, Serialize};

use super::color::HitPointPercentages;
use super::region::DisplayRegion;

/// A fitted module's button in the ship HUD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModuleButton {
    /// The module is running.
    pub is_active: bool,
    /// The module is cycling down or reloading.
    pub is_busy: bool,
    /// Absolute screen region of the button.
    pub region: DisplayRegion,
}

/// The ship HUD.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ShipUI {
    /// Capacitor fill, absent if no capacitor marks were found.
    pub capacitor_percentage: Option<f64>,
    /// Speed readout text, e.g. "215 m/s".
    pub speed_label: Option<String>,
    /// Shield, armor and structure.
    pub hit_points: Option<HitPointPercentages>,
    /// Module buttons in display order.
    pub module_buttons: Vec<ModuleButton>,
}
