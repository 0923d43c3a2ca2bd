//! Overview normalizer.
//!
//! Rows are matched to columns by geometry (see [`crate::text`]). Status
//! flags come from two places: named sprites under the row's space object
//! icon, and the tooltips of the row's right-aligned effect icons.

use std::collections::BTreeSet;

use crate::raw::ATTR_HINT;
use crate::text::{contained_texts, ColumnHeaders};
use crate::tree::{NodeIdx, ResolvedTree};
use crate::types::{OverviewEntry, OverviewEntryIndicators};

/// Type tag of an overview row.
pub const ROW_TYPE: &str = "OverviewScrollEntry";
/// Type tag of the icon at the start of a row.
pub const SPACE_OBJECT_ICON_TYPE: &str = "SpaceObjectIcon";
/// `_name` of the container holding effect icons.
pub const RIGHT_ALIGNED_ICONS_NAME: &str = "rightAlignedIconContainer";
/// `_name` of the icon sprite whose color encodes the object's status.
pub const ICON_SPRITE_NAME: &str = "iconSprite";
/// `_name` of the row background fill.
pub const BACKGROUND_NAME: &str = "bgColor";

/// Indicator sprite names under the space object icon.
const LOCKED_ME: &str = "hostile";
const ATTACKING_ME: &str = "attackingMe";
const TARGETING: &str = "targeting";
const TARGETED: &str = "targetedByMeIndicator";
const ACTIVE_TARGET: &str = "myActiveTargetIndicator";

/// Tooltip fragments of the effect icons. Tooltips also name the pilot, so
/// these are matched as substrings.
const NEUT_HINT: &str = "is cap neutralizing me";
const TRACKING_DISRUPT_HINT: &str = "is tracking disrupting me";
const JAM_HINT: &str = "is jamming me";
const WARP_DISRUPT_HINT: &str = "is warp disrupting me";
const WEB_HINT: &str = "is webifying me";

/// Parse every row of the overview window.
pub fn parse_overview(tree: &ResolvedTree, window: NodeIdx) -> Vec<OverviewEntry> {
    let headers = tree
        .find_first(window, |n| n.type_name.to_lowercase().contains("headers"))
        .map(|h| ColumnHeaders::from_subtree(tree, h))
        .unwrap_or_default();

    tree.find_all(window, |n| n.type_name == ROW_TYPE)
        .into_iter()
        .map(|row| parse_row(tree, row, &headers))
        .collect()
}

fn parse_row(tree: &ResolvedTree, row: NodeIdx, headers: &ColumnHeaders) -> OverviewEntry {
    let info = headers.assign(&contained_texts(tree, row));

    let mut indicators = OverviewEntryIndicators::default();
    if let Some(icon) = tree.find_typed(row, SPACE_OBJECT_ICON_TYPE) {
        apply_icon_names(&mut indicators, &sprite_names(tree, icon));
    }
    if let Some(container) = tree.find_named(row, RIGHT_ALIGNED_ICONS_NAME) {
        for hint in tree.descendants(container).filter_map(|i| tree.node(i).text_attr(ATTR_HINT)) {
            apply_effect_hint(&mut indicators, hint);
        }
    }

    OverviewEntry {
        info,
        indicators,
        icon_color: tree.find_named(row, ICON_SPRITE_NAME).and_then(|i| tree.node(i).color()),
        background_color: tree.find_named(row, BACKGROUND_NAME).and_then(|i| tree.node(i).color()),
    }
}

fn sprite_names(tree: &ResolvedTree, icon: NodeIdx) -> BTreeSet<&str> {
    tree.descendants(icon)
        .filter_map(|i| tree.node(i).name())
        .collect()
}

fn apply_icon_names(indicators: &mut OverviewEntryIndicators, names: &BTreeSet<&str>) {
    indicators.locked_me = names.contains(LOCKED_ME);
    indicators.attacking_me = names.contains(ATTACKING_ME);
    indicators.targeting = names.contains(TARGETING);
    indicators.targeted = names.contains(TARGETED);
    indicators.is_active_target = names.contains(ACTIVE_TARGET);
}

fn apply_effect_hint(indicators: &mut OverviewEntryIndicators, hint: &str) {
    let hint = hint.to_lowercase();
    indicators.neut |= hint.contains(NEUT_HINT);
    indicators.tracking_disrupt |= hint.contains(TRACKING_DISRUPT_HINT);
    indicators.jam |= hint.contains(JAM_HINT);
    indicators.warp_disrupt |= hint.contains(WARP_DISRUPT_HINT);
    indicators.web |= hint.contains(WEB_HINT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{AttrValue, ColorRecord, RawNode};
    use crate::tree::resolve;
    use crate::types::Color;

    fn text(value: &str) -> AttrValue {
        AttrValue::Text(value.to_string())
    }

    fn node(address: u64, type_name: &str, x: f64, width: f64) -> RawNode {
        RawNode::new(address, type_name).with_geometry(x, 0.0, width, 20.0)
    }

    fn label(address: u64, x: f64, width: f64, value: &str) -> RawNode {
        node(address, "EveLabelSmall", x, width).with_attr("_text", text(value))
    }

    fn named(address: u64, name: &str) -> RawNode {
        node(address, "Sprite", 0.0, 16.0).with_attr("_name", text(name))
    }

    fn color(a: f64) -> AttrValue {
        AttrValue::Color(ColorRecord { a_percent: a, r_percent: 100.0, g_percent: 0.0, b_percent: 0.0 })
    }

    fn window(rows: Vec<RawNode>) -> RawNode {
        let headers = node(2, "SortHeaders", 0.0, 400.0)
            .with_child(label(3, 0.0, 100.0, "Name"))
            .with_child(label(4, 100.0, 80.0, "Distance"));
        let mut content = node(5, "ScrollContainer", 0.0, 400.0);
        for row in rows {
            content = content.with_child(row);
        }
        node(1, "OverviewWindow", 0.0, 400.0)
            .with_child(headers)
            .with_child(content)
    }

    #[test]
    fn test_row_cells_and_icon_indicators() {
        let row = node(10, ROW_TYPE, 0.0, 400.0)
            .with_child(
                node(11, SPACE_OBJECT_ICON_TYPE, 0.0, 16.0)
                    .with_child(named(12, "hostile"))
                    .with_child(named(13, "attackingMe"))
                    .with_child(named(14, ICON_SPRITE_NAME).with_attr("_color", color(80.0))),
            )
            .with_child(label(15, 20.0, 70.0, "Guristas Pillager"))
            .with_child(label(16, 105.0, 40.0, "14 km"))
            .with_child(node(17, "Fill", 0.0, 400.0).with_attr("_name", text(BACKGROUND_NAME)).with_attr("_color", color(10.0)));
        let tree = resolve(window(vec![row]));
        let entries = parse_overview(&tree, tree.root());

        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.cell("Name"), Some("Guristas Pillager"));
        assert_eq!(entry.cell("Distance"), Some("14 km"));
        assert!(entry.indicators.locked_me);
        assert!(entry.indicators.attacking_me);
        assert!(!entry.indicators.targeting);
        assert!(!entry.indicators.web);
        assert_eq!(entry.icon_color, Some(Color::new(80.0, 100.0, 0.0, 0.0)));
        assert_eq!(entry.background_color.map(|c| c.a), Some(10.0));
    }

    #[test]
    fn test_effect_hints() {
        let icons = node(20, "Container", 300.0, 100.0)
            .with_attr("_name", text(RIGHT_ALIGNED_ICONS_NAME))
            .with_child(node(21, "Icon", 0.0, 16.0).with_attr("_hint", text("Some Pilot is webifying me")))
            .with_child(node(22, "Icon", 16.0, 16.0).with_attr("_hint", text("Some Pilot is warp disrupting me")));
        let row = node(10, ROW_TYPE, 0.0, 400.0)
            .with_child(label(11, 5.0, 80.0, "Some Pilot"))
            .with_child(icons);
        let tree = resolve(window(vec![row]));
        let entry = &parse_overview(&tree, tree.root())[0];

        assert!(entry.indicators.web);
        assert!(entry.indicators.warp_disrupt);
        assert!(!entry.indicators.jam);
        assert!(!entry.indicators.neut);
        assert!(!entry.indicators.attacking_me);
        // No icon data at all: colors are unknown, not black.
        assert_eq!(entry.icon_color, None);
        assert_eq!(entry.background_color, None);
    }

    #[test]
    fn test_unmatched_cells_are_dropped() {
        let row = node(10, ROW_TYPE, 0.0, 400.0)
            .with_child(label(11, 5.0, 80.0, "Rifter"))
            .with_child(label(12, 250.0, 40.0, "Frigate"));
        let tree = resolve(window(vec![row]));
        let entry = &parse_overview(&tree, tree.root())[0];

        assert_eq!(entry.info.len(), 1);
        assert_eq!(entry.cell("Name"), Some("Rifter"));
    }

    #[test]
    fn test_window_without_headers() {
        let row = node(10, ROW_TYPE, 0.0, 400.0).with_child(label(11, 5.0, 80.0, "Rifter"));
        let tree = resolve(node(1, "OverviewWindow", 0.0, 400.0).with_child(row));
        let entries = parse_overview(&tree, tree.root());

        assert_eq!(entries.len(), 1);
        assert!(entries[0].info.is_empty());
    }

    #[test]
    fn test_rows_keep_display_order() {
        let rows = vec![
            node(10, ROW_TYPE, 0.0, 400.0).with_child(label(11, 5.0, 80.0, "First")),
            node(20, ROW_TYPE, 0.0, 400.0).with_child(label(21, 5.0, 80.0, "Second")),
        ];
        let tree = resolve(window(rows));
        let names: Vec<_> = parse_overview(&tree, tree.root())
            .iter()
            .filter_map(|e| e.cell("Name").map(str::to_string))
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }
}
