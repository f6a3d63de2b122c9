//! Hierarchy resolution and breadcrumb trail tests

use codex_core::hierarchy::TRAIL_SEPARATOR;
use codex_core::{path_to_root, HierarchyTable, SITE_ROOT_MARKER};

fn table() -> HierarchyTable {
    HierarchyTable::codex()
}

// ============================================================================
// resolve_path
// ============================================================================

#[test]
fn resolve_preserves_length_and_order_for_known_keys() {
    let t = table();
    let levels = ["celestial-dominion", "visurena", "stellara-sonara", "aurifex", "lexomancer"];
    let resolved = t.resolve_path(&levels);

    assert_eq!(resolved.len(), levels.len());
    for (node, key) in resolved.iter().zip(levels.iter()) {
        assert_eq!(node.key, *key);
    }
}

#[test]
fn resolve_drops_unknown_keys_keeping_relative_order() {
    let t = table();
    let levels = ["celestial-dominion", "atlantis", "visurena", "narnia", "caeloria"];
    let resolved = t.resolve_path(&levels);

    let keys: Vec<&str> = resolved.iter().map(|n| n.key.as_str()).collect();
    assert_eq!(keys, vec!["celestial-dominion", "visurena", "caeloria"]);
}

#[test]
fn resolve_of_only_unknown_keys_is_empty() {
    let t = table();
    let resolved = t.resolve_path(&["gondor", "rohan"]);
    assert!(resolved.is_empty());
}

#[test]
fn parent_links_exist_for_houses() {
    let t = table();
    assert_eq!(t.get("lexomancer").unwrap().parent.as_deref(), Some("aurifex"));
    assert_eq!(t.get("aurifex").unwrap().parent.as_deref(), Some("stellara-sonara"));
    assert!(t.get("celestial-dominion").unwrap().parent.is_none());
}

// ============================================================================
// path_to_root
// ============================================================================

#[test]
fn root_level_page_uses_current_dir() {
    assert_eq!(path_to_root("/index.html"), "./");
    assert_eq!(path_to_root("index.html"), "./");
    assert_eq!(path_to_root(""), "./");
}

#[test]
fn depth_counts_from_site_root_marker_when_present() {
    assert_eq!(path_to_root("/www/the-eternal-codex/index.html"), "./");
    assert_eq!(
        path_to_root("/www/the-eternal-codex/stellara-sonara/index.html"),
        "../"
    );
    assert_eq!(
        path_to_root("/www/the-eternal-codex/stellara-sonara/aurifex/lexomancer.html"),
        "../../"
    );
}

#[test]
fn depth_falls_back_to_raw_segment_count_without_marker() {
    assert_eq!(path_to_root("/stellara-sonara/aurifex/lexomancer.html"), "../../");
    assert_eq!(path_to_root("/docs/page.html"), "../");
}

#[test]
fn trailing_directory_path_keeps_all_segments() {
    // No file segment to drop
    assert_eq!(path_to_root("/the-eternal-codex/stellara-sonara/aurifex"), "../../");
}

/// Following a computed link and re-resolving from the landing location
/// yields the prefix the target page would compute for itself.
#[test]
fn prefix_is_stable_under_navigation() {
    let t = table();
    let current = format!("/{SITE_ROOT_MARKER}/stellara-sonara/aurifex/lexomancer.html");
    let prefix = path_to_root(&current);
    assert_eq!(prefix, "../../");

    for node in t.iter() {
        // Where the link actually lands, normalized
        let landed = format!("/{SITE_ROOT_MARKER}/{}", node.url);
        let via_link = normalize(&format!(
            "/{SITE_ROOT_MARKER}/stellara-sonara/aurifex/{prefix}{}",
            node.url
        ));
        assert_eq!(via_link, landed, "link to {} lands off-target", node.key);
        assert_eq!(path_to_root(&via_link), path_to_root(&landed));
    }
}

/// Collapse `..` segments the way a browser would.
fn normalize(path: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    for part in path.split('/').filter(|p| !p.is_empty()) {
        if part == ".." {
            out.pop();
        } else if part != "." {
            out.push(part);
        }
    }
    format!("/{}", out.join("/"))
}

// ============================================================================
// breadcrumbs
// ============================================================================

#[test]
fn empty_levels_renders_home_only() {
    let trail = table().breadcrumbs::<&str>(&[], "/the-eternal-codex/index.html");

    assert_eq!(trail.len(), 1);
    let home = &trail[0];
    assert_eq!(home.label, "Home");
    assert_eq!(home.icon, "⌂");
    assert!(!home.is_current);
    // Zero separators between a single entry
    assert_eq!(trail.len().saturating_sub(1), 0);
    assert!(!TRAIL_SEPARATOR.is_empty());
}

#[test]
fn only_last_entry_is_current() {
    let levels = ["celestial-dominion", "visurena", "stellara-sonara", "aurifex"];
    let trail = table().breadcrumbs(&levels, "/the-eternal-codex/stellara-sonara/aurifex/index.html");

    assert_eq!(trail.len(), 5);
    for crumb in &trail[..4] {
        assert!(!crumb.is_current, "{} should be a link", crumb.key);
    }
    assert!(trail[4].is_current);
    assert_eq!(trail[4].key, "aurifex");
}

#[test]
fn hrefs_carry_the_root_prefix() {
    let levels = ["celestial-dominion", "visurena"];
    let trail = table().breadcrumbs(&levels, "/the-eternal-codex/stellara-sonara/index.html");

    assert_eq!(trail[0].href, "../index.html");
    assert_eq!(trail[1].href, "../celestial-dominion.html");
    assert_eq!(trail[2].href, "../house-visurena.html");
}

#[test]
fn unknown_levels_drop_out_of_the_trail() {
    let levels = ["celestial-dominion", "mystery-realm", "visurena"];
    let trail = table().breadcrumbs(&levels, "/the-eternal-codex/index.html");

    assert_eq!(trail.len(), 3); // Home + two known
    assert!(trail[2].is_current);
    assert_eq!(trail[2].key, "visurena");
}

#[test]
fn breadcrumbs_are_idempotent() {
    let levels = ["celestial-dominion", "visurena", "caeloria", "heraldis"];
    let path = "/the-eternal-codex/stellara-sonara/caeloria/heraldis.html";

    let first = table().breadcrumbs(&levels, path);
    let second = table().breadcrumbs(&levels, path);
    assert_eq!(first, second);
}
