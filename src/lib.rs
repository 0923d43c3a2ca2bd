//! # eve-ui-parser
//!
//! Typed snapshots of EVE Online UI tree dumps.
//!
//! An external reader snapshots the game client's retained-mode UI tree into
//! a JSON document of generic nodes. This crate turns that document into a
//! [`UiTree`]: chat rosters, overview rows with their status flags, drones
//! with their health, and the ship HUD.
//!
//! ## Pipeline
//!
//! ```text
//! dump → RawNode → resolve (absolute regions, hidden subtrees pruned)
//!                → classify (locate panels)
//!                → normalize (chat / overview / drones / ship)
//!                → UiTree
//! ```
//!
//! ## Guarantees
//!
//! - A panel that is not open yields an empty list or `None`, never an error
//! - Only a structurally malformed dump fails to parse
//! - Every percentage is clamped to `[0, 100]`
//! - Parsing is stateless: the same dump always yields an equal snapshot
//!
//! ## Example
//!
//! ```no_run
//! let tree = eve_ui_parser::parse_file("tmp/mem-read.json")?;
//! if let Some(local) = tree.chat_window_with_suffix("_local") {
//!     println!("{} pilots in local", local.user_list.len());
//! }
//! # Ok::<(), eve_ui_parser::ParseError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod raw;
pub mod types;
pub mod tree;
pub mod text;
pub mod normalize;
pub mod parser;
pub mod canonical;
pub mod monitor;

// Re-exports
pub use error::ParseError;
pub use raw::{AttrValue, NodeAddress, RawNode};
pub use types::{
    ChatUserEntity, ChatWindow, Color, DisplayRegion, Drone, DroneList, HitPointPercentages,
    ModuleButton, OverviewEntry, OverviewEntryIndicators, ShipUI, UiTree,
};
pub use tree::{NodeIdx, PanelIndex, PanelKind, ResolvedTree, UiNode};
pub use text::{ColumnHeaders, TextFragment, COLUMN_TOLERANCE};
pub use parser::{parse_file, parse_raw, parse_resolved, parse_str, read_dump};
pub use canonical::{canonical_hash, canonical_hash_hex, to_canonical_bytes};
