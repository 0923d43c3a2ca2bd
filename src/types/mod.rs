//! Domain snapshot types.

pub mod region;
pub mod color;
pub mod chat;
pub mod overview;
pub mod drones;
pub mod ship;
pub mod ui_tree;

pub use region::DisplayRegion;
pub use color::{Color, HitPointPercentages, clamp_percent};
pub use chat::{ChatWindow, ChatUserEntity};
pub use overview::{OverviewEntry, OverviewEntryIndicators};
pub use drones::{Drone, DroneList};
pub use ship::{ShipUI, ModuleButton};
pub use ui_tree::UiTree;
