//! Raw graph model: the untyped node tree as written by the dump producer.

pub mod attr;
pub mod node;

pub use attr::{AttrValue, ColorRecord, IntPair};
pub use node::{NodeAddress, RawNode};

/// Attribute key for the local x offset.
pub const ATTR_X: &str = "_displayX";
/// Attribute key for the local y offset.
pub const ATTR_Y: &str = "_displayY";
/// Attribute key for the width.
pub const ATTR_WIDTH: &str = "_displayWidth";
/// Attribute key for the height.
pub const ATTR_HEIGHT: &str = "_displayHeight";
/// Attribute key for the pending text value.
pub const ATTR_SET_TEXT: &str = "_setText";
/// Attribute key for the committed text value.
pub const ATTR_TEXT: &str = "_text";
/// Attribute key for the widget name.
pub const ATTR_NAME: &str = "_name";
/// Attribute key for tooltip text.
pub const ATTR_HINT: &str = "_hint";
/// Attribute key for the color record.
pub const ATTR_COLOR: &str = "_color";
/// Attribute key for a gauge fill fraction.
pub const ATTR_LAST_VALUE: &str = "_lastValue";
/// Attribute key for a module's active flag.
pub const ATTR_RAMP_ACTIVE: &str = "ramp_active";
