//! Overview table types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Status flags of an overview row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverviewEntryIndicators {
    /// The object has locked me.
    pub locked_me: bool,
    /// The object is attacking me.
    pub attacking_me: bool,
    /// I am locking the object.
    pub targeting: bool,
    /// I have locked the object.
    pub targeted: bool,
    /// The object is my active target.
    pub is_active_target: bool,
    /// The object is neutralizing my capacitor.
    pub neut: bool,
    /// The object is tracking-disrupting me.
    pub tracking_disrupt: bool,
    /// The object is jamming me.
    pub jam: bool,
    /// The object is warp-disrupting me.
    pub warp_disrupt: bool,
    /// The object is webifying me.
    pub web: bool,
}

impl OverviewEntryIndicators {
    /// True if any flag that means "hostile action against me" is set.
    pub fn any_hostile_action(&self) -> bool {
        self.attacking_me
            || self.neut
            || self.tracking_disrupt
            || self.jam
            || self.warp_disrupt
            || self.web
    }
}

/// One row of the overview.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverviewEntry {
    /// Cell text by visible column header.
    pub info: BTreeMap<String, String>,
    /// Status flags.
    pub indicators: OverviewEntryIndicators,
    /// Color of the space object icon, if known.
    pub icon_color: Option<Color>,
    /// Row background color, if known.
    pub background_color: Option<Color>,
}

impl OverviewEntry {
    /// Get the text of a column, if the column is visible and the cell is set.
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.info.get(column).map(String::as_str)
    }
}
