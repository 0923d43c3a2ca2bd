//! Drone types.

use serde::{Deserialize, Serialize};

use super::color::HitPointPercentages;

/// A drone as listed in the drones window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    /// Entry label, e.g. "Hobgoblin II".
    pub label: String,
    /// Health, absent unless all three gauges could be read.
    pub hit_points: Option<HitPointPercentages>,
}

/// Drones grouped by location.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DroneList {
    /// Drones in the drone bay.
    pub in_bay: Vec<Drone>,
    /// Drones launched into space.
    pub in_space: Vec<Drone>,
}

impl DroneList {
    /// True if no drone is listed at all.
    pub fn is_empty(&self) -> bool {
        self.in_bay.is_empty() && self.in_space.is_empty()
    }
}
