//! Edge case and boundary condition tests
//!
//! Absent inputs must degrade to no-ops, never raise: worst case is a
//! feature that does not appear.

use codex_core::navigation::{active_section, SectionSpan};
use codex_core::theme::badge_nodes;
use codex_core::{
    path_to_root, HierarchyTable, MenuState, PageRegistry, RevealSet, ScrollTracker, ThemeTable,
};

// ============================================================================
// Empty and absent inputs
// ============================================================================

#[test]
fn empty_levels_everywhere() {
    let hierarchy = HierarchyTable::codex();
    let themes = ThemeTable::codex();
    let levels: [&str; 0] = [];

    assert!(hierarchy.resolve_path(&levels).is_empty());
    assert_eq!(hierarchy.breadcrumbs(&levels, "/index.html").len(), 1);
    assert_eq!(themes.active_themes(&levels).len(), 2);
}

#[test]
fn whitespace_and_casing_do_not_match() {
    let hierarchy = HierarchyTable::codex();
    let resolved = hierarchy.resolve_path(&[" aurifex", "AURIFEX", "aurifex "]);
    assert!(resolved.is_empty());
}

#[test]
fn empty_registry_degrades_to_not_found() {
    let registry = PageRegistry::empty();
    assert!(registry.is_empty());
    assert!(registry.get("aurifex").is_none());
    assert_eq!(registry.gateways().count(), 0);
}

#[test]
fn empty_manifest_parses_to_empty_registry() {
    let registry = PageRegistry::from_json("[]").unwrap();
    assert!(registry.is_empty());
}

// ============================================================================
// Path oddities
// ============================================================================

#[test]
fn path_with_repeated_slashes() {
    assert_eq!(path_to_root("//the-eternal-codex//aurifex//page.html"), "../");
}

#[test]
fn path_that_is_only_a_marker() {
    assert_eq!(path_to_root("/the-eternal-codex"), "./");
}

#[test]
fn dotted_directory_before_file_is_kept() {
    // Only the trailing segment is treated as a file
    assert_eq!(path_to_root("/v1.2/docs/page.html"), "../../");
}

// ============================================================================
// State machines at their boundaries
// ============================================================================

#[test]
fn section_lookup_with_no_sections() {
    assert_eq!(active_section(500.0, &[]), None);
}

#[test]
fn overlapping_sections_pick_the_last() {
    let sections = vec![
        SectionSpan { id: "outer".into(), top: 0.0, height: 1000.0 },
        SectionSpan { id: "inner".into(), top: 200.0, height: 300.0 },
    ];
    assert_eq!(active_section(250.0, &sections), Some("inner"));
}

#[test]
fn scroll_tracker_with_unscrollable_content() {
    let mut tracker = ScrollTracker::new();
    // Content shorter than the viewport: no milestones, no division by zero
    let update = tracker.on_scroll(0.0, 500.0, 1000.0);
    assert!(!update.show_to_top);
    assert!(update.crossed_milestones.is_empty());
}

#[test]
fn menu_resize_while_closed_is_a_noop() {
    let mut menu = MenuState::default();
    assert!(!menu.on_viewport_resize(2000.0));
    assert!(!menu.is_open());
}

#[test]
fn reveal_report_for_unregistered_element() {
    let mut set = RevealSet::new();
    assert!(set.on_intersection("stray", true));
    assert!(set.is_revealed("stray"));
    assert_eq!(set.revealed_count(), 1);
}

#[test]
fn badges_of_empty_active_set() {
    assert!(badge_nodes(&[]).is_empty());
}
