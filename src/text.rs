//! Text extraction and column matching.
//!
//! The dump carries no column index for table cells. A cell's column is found
//! by comparing its horizontal span with the spans of the header labels.

use std::collections::BTreeMap;

use crate::tree::{NodeIdx, ResolvedTree};
use crate::types::DisplayRegion;

/// Slack, in screen units, allowed on either side when matching a cell to a
/// header. Absorbs sub-pixel alignment noise.
pub const COLUMN_TOLERANCE: f64 = 3.0;

/// A piece of displayed text and where it is.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    /// The text.
    pub text: String,
    /// Absolute region of the node showing it.
    pub region: DisplayRegion,
    /// The node showing it.
    pub node: NodeIdx,
}

/// Every displayed text at or below `start`, breadth-first.
pub fn contained_texts(tree: &ResolvedTree, start: NodeIdx) -> Vec<TextFragment> {
    tree.descendants(start)
        .filter_map(|idx| {
            let node = tree.node(idx);
            node.display_text().map(|text| TextFragment {
                text: text.to_string(),
                region: node.region,
                node: idx,
            })
        })
        .collect()
}

/// First displayed text at or below `start`.
pub fn first_text(tree: &ResolvedTree, start: NodeIdx) -> Option<String> {
    tree.descendants(start)
        .find_map(|idx| tree.node(idx).display_text().map(str::to_string))
}

/// Longest displayed text at or below `start`. Ties go to the first found.
pub fn longest_text(tree: &ResolvedTree, start: NodeIdx) -> Option<String> {
    let mut best: Option<String> = None;
    for fragment in contained_texts(tree, start) {
        let longer = best
            .as_ref()
            .map_or(true, |b| fragment.text.chars().count() > b.chars().count());
        if longer {
            best = Some(fragment.text);
        }
    }
    best
}

/// True if a cell spanning `cell` belongs under a header spanning `header`.
pub fn spans_column(header: &DisplayRegion, cell: &DisplayRegion) -> bool {
    header.x < cell.x + COLUMN_TOLERANCE && header.right() > cell.right() - COLUMN_TOLERANCE
}

/// Header labels of a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnHeaders {
    headers: Vec<TextFragment>,
}

impl ColumnHeaders {
    /// Collect the header labels found at or below `start`.
    pub fn from_subtree(tree: &ResolvedTree, start: NodeIdx) -> Self {
        Self {
            headers: contained_texts(tree, start),
        }
    }

    /// Build from explicit fragments.
    pub fn new(headers: Vec<TextFragment>) -> Self {
        Self { headers }
    }

    /// Header names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(|h| h.text.as_str())
    }

    /// Number of headers.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// True if no header was found.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// The column a cell at `cell` belongs to.
    ///
    /// Headers do not overlap, so the first match is the only plausible one.
    pub fn column_for(&self, cell: &DisplayRegion) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| spans_column(&h.region, cell))
            .map(|h| h.text.as_str())
    }

    /// Assign cells to columns.
    ///
    /// Cells matching no header are dropped. If several cells land in the
    /// same column the first one is kept.
    pub fn assign(&self, cells: &[TextFragment]) -> BTreeMap<String, String> {
        let mut info = BTreeMap::new();
        for cell in cells {
            if let Some(column) = self.column_for(&cell.region) {
                info.entry(column.to_string())
                    .or_insert_with(|| cell.text.clone());
            }
        }
        info
    }
}
