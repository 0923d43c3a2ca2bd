//! Dump parsing entry points.
//!
//! ```text
//! dump file → RawNode → resolve (regions) → classify (panels) → normalize → UiTree
//! ```
//!
//! Each call is independent: no state is kept between parses, and parsing
//! the same document twice yields equal snapshots.

use std::path::Path;
use std::time::Instant;

use serde::Deserialize;
use tracing::debug;

use crate::error::ParseError;
use crate::normalize::{parse_chat_stack, parse_drones, parse_overview, parse_ship_ui};
use crate::raw::RawNode;
use crate::tree::{classify, resolve, ResolvedTree};
use crate::types::{DroneList, UiTree};

/// Read a dump file into a raw node tree.
pub fn read_dump(path: impl AsRef<Path>) -> Result<RawNode, ParseError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| ParseError::io(path, e))?;
    raw_from_slice(&bytes)
}

/// Deserialize a raw node tree from JSON bytes.
///
/// The nesting limit of the JSON reader is lifted: UI trees routinely nest
/// deeper than the default allows. Nested nodes are read on a stack that
/// grows on the heap, so depth is bounded by memory, not by the thread's
/// stack.
pub fn raw_from_slice(bytes: &[u8]) -> Result<RawNode, ParseError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    deserializer.disable_recursion_limit();
    let node = RawNode::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(node)
}

/// Parse a dump file into a snapshot.
pub fn parse_file(path: impl AsRef<Path>) -> Result<UiTree, ParseError> {
    Ok(parse_raw(read_dump(path)?))
}

/// Parse a dump held in memory.
pub fn parse_str(json: &str) -> Result<UiTree, ParseError> {
    Ok(parse_raw(raw_from_slice(json.as_bytes())?))
}

/// Build a snapshot from an already deserialized dump.
pub fn parse_raw(root: RawNode) -> UiTree {
    let start = Instant::now();
    let tree = resolve(root);
    let snapshot = parse_resolved(&tree);

    debug!(
        root = %snapshot.root_address,
        rendered_nodes = tree.len(),
        pruned = tree.pruned_count(),
        chat_windows = snapshot.chat_windows.len(),
        overview_rows = snapshot.overview.len(),
        drones = snapshot.drones.in_bay.len() + snapshot.drones.in_space.len(),
        ship_ui = snapshot.ship_ui.is_some(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "ui tree parsed"
    );

    snapshot
}

/// Build a snapshot from a resolved tree.
pub fn parse_resolved(tree: &ResolvedTree) -> UiTree {
    let panels = classify(tree);

    UiTree {
        root_address: tree.node(tree.root()).address,
        chat_windows: panels
            .chat_stacks
            .iter()
            .filter_map(|stack| parse_chat_stack(tree, *stack))
            .collect(),
        overview: panels
            .overview
            .map(|window| parse_overview(tree, window))
            .unwrap_or_default(),
        drones: panels
            .drones
            .map(|window| parse_drones(tree, window))
            .unwrap_or_else(DroneList::default),
        ship_ui: panels.ship.map(|hud| parse_ship_ui(tree, hud)),
    }
}
