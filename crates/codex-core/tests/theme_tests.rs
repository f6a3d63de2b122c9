//! Cascading theme activation tests

use codex_core::theme::{badge_nodes, root_classes};
use codex_core::{ThemeTable, BASE_THEME_KEYS};

fn table() -> ThemeTable {
    ThemeTable::codex()
}

#[test]
fn full_lineage_activates_five_sorted_levels() {
    let t = table();
    let levels = ["celestial-dominion", "visurena", "stellara-sonara", "aurifex", "lexomancer"];
    let active = t.active_themes(&levels);

    assert_eq!(active.len(), 5);
    let depths: Vec<u8> = active.iter().map(|n| n.level).collect();
    assert_eq!(depths, vec![0, 1, 3, 4, 5]);

    let badges = badge_nodes(&active);
    assert_eq!(badges.len(), 3);
    let badge_keys: Vec<&str> = badges.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(badge_keys, vec!["stellara-sonara", "aurifex", "lexomancer"]);
}

#[test]
fn base_layers_are_always_active() {
    let t = table();
    let active = t.active_themes::<&str>(&[]);

    assert_eq!(active.len(), 2);
    let keys: Vec<&str> = active.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, BASE_THEME_KEYS.to_vec());
    assert!(badge_nodes(&active).is_empty());
}

#[test]
fn base_keys_in_levels_are_not_duplicated() {
    let t = table();
    let active = t.active_themes(&["visurena", "celestial-dominion", "visurena"]);
    assert_eq!(active.len(), 2);
}

#[test]
fn unknown_keys_do_not_activate_anything() {
    let t = table();
    let active = t.active_themes(&["visurena", "middle-earth"]);
    assert_eq!(active.len(), 2);
}

#[test]
fn root_classes_skip_empty_base_class() {
    let t = table();
    let levels = ["celestial-dominion", "visurena", "stellara-sonara"];
    let active = t.active_themes(&levels);

    // celestial-dominion carries no body class of its own
    let classes = root_classes(&active);
    assert_eq!(classes, vec!["theme-visurena", "theme-stellara-sonara"]);
}

#[test]
fn equal_levels_keep_table_order() {
    // aurifex, virelia, caeloria all sit at level 4
    let t = table();
    let active = t.active_themes(&["caeloria", "virelia", "aurifex"]);
    let level4: Vec<&str> = active
        .iter()
        .filter(|n| n.level == 4)
        .map(|n| n.key.as_str())
        .collect();
    assert_eq!(level4, vec!["aurifex", "virelia", "caeloria"]);
}

#[test]
fn class_suffixes_match_css_targets() {
    let t = table();
    assert_eq!(t.get("celestial-dominion").unwrap().class_suffix(), "celestial");
    assert_eq!(t.get("stellara-sonara").unwrap().class_suffix(), "stellara");
    assert_eq!(t.get("lexomancer").unwrap().class_suffix(), "lexomancer");
    assert_eq!(t.get("aurifex").unwrap().class_suffix(), "aurifex");
}

#[test]
fn indicator_segment_per_active_theme() {
    let t = table();
    let levels = ["celestial-dominion", "visurena", "eterna-prime"];
    let active = t.active_themes(&levels);

    // One segment per active node, colors preserved from the table
    assert_eq!(active.len(), 3);
    assert_eq!(active[2].color, "#1B3C70");
    assert_eq!(active[2].name, "Eterna Prime");
}
