//! Site hierarchy resolution.
//!
//! The wiki's structure is a static key → node table. Pages declare their
//! ancestor chain as an ordered list of keys; this module resolves those
//! keys into renderable breadcrumb trails and computes the relative prefix
//! needed to link back to the site root from any page depth.

use serde::{Deserialize, Serialize};

/// Directory name that marks the site root inside a longer URL path.
///
/// When present, link depth is computed relative to this marker rather
/// than the raw segment count.
pub const SITE_ROOT_MARKER: &str = "the-eternal-codex";

/// Separator glyph rendered between breadcrumb entries.
pub const TRAIL_SEPARATOR: &str = "›";

/// One node in the static site-structure table.
///
/// Immutable after startup. `parent` links express theme inheritance only;
/// breadcrumb order comes from the page's declared level list, never from
/// walking parents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyNode {
    /// Unique key naming this node (e.g. "aurifex")
    pub key: String,
    /// Human-readable label
    pub display_name: String,
    /// URL relative to the site root
    pub url: String,
    /// Glyph shown next to the label
    pub icon: String,
    /// CSS class suffix for color theming
    pub style_class: String,
    /// Logical parent key, for theme inheritance only
    pub parent: Option<String>,
}

impl HierarchyNode {
    fn new(key: &str, display_name: &str, url: &str, icon: &str, style_class: &str) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            url: url.to_string(),
            icon: icon.to_string(),
            style_class: style_class.to_string(),
            parent: None,
        }
    }

    fn child_of(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }
}

/// One entry of a rendered breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub key: String,
    pub label: String,
    /// Link target, already prefixed with the path back to the site root
    pub href: String,
    pub icon: String,
    pub style_class: String,
    /// The current page renders as plain text, everything else as a link
    pub is_current: bool,
}

impl Crumb {
    /// Synthetic "Home" entry that leads every trail.
    fn home(root_prefix: &str) -> Self {
        Self {
            key: "home".to_string(),
            label: "Home".to_string(),
            href: format!("{root_prefix}index.html"),
            icon: "⌂".to_string(),
            style_class: "celestial".to_string(),
            is_current: false,
        }
    }
}

/// Immutable key → node lookup table.
///
/// Built once at startup and passed by reference into resolvers; entry
/// order is significant (it breaks ties when themes sort by level).
#[derive(Debug, Clone)]
pub struct HierarchyTable {
    nodes: Vec<HierarchyNode>,
}

impl HierarchyTable {
    /// The Eternal Codex site structure.
    pub fn codex() -> Self {
        let n = HierarchyNode::new;
        Self {
            nodes: vec![
                n("celestial-dominion", "Celestial Dominion", "celestial-dominion.html", "✦", "celestial"),
                n("visurena", "House Visurena", "house-visurena.html", "♔", "visurena"),
                n("eterna-prime", "Eterna Prime", "eterna-prime/index.html", "★", "eterna-prime"),
                n("stellara-sonara", "Stellara Sonara", "stellara-sonara/index.html", "♪", "stellara"),
                // High Houses
                n("aurifex", "High House Aurifex", "stellara-sonara/aurifex/index.html", "🕯️", "aurifex")
                    .child_of("stellara-sonara"),
                n("virelia", "High House Virelia", "stellara-sonara/virelia/index.html", "🎨", "virelia")
                    .child_of("stellara-sonara"),
                n("caeloria", "High House Caeloria", "stellara-sonara/caeloria/index.html", "🔥", "caeloria")
                    .child_of("stellara-sonara"),
                // Lesser Houses - Aurifex
                n("lexomancer", "House Lexomancer", "stellara-sonara/aurifex/lexomancer.html", "📖", "aurifex")
                    .child_of("aurifex"),
                n("architecton", "House Architecton", "stellara-sonara/aurifex/architecton.html", "📐", "aurifex")
                    .child_of("aurifex"),
                n("promptwright", "House Promptwright", "stellara-sonara/aurifex/promptwright.html", "🪶", "aurifex")
                    .child_of("aurifex"),
                // Lesser Houses - Virelia
                n("imara", "House Imara", "stellara-sonara/virelia/imara.html", "✋", "virelia")
                    .child_of("virelia"),
                n("veyra", "House Veyra", "stellara-sonara/virelia/veyra.html", "🦉", "virelia")
                    .child_of("virelia"),
                n("reclinor", "House Reclinor", "stellara-sonara/virelia/reclinor.html", "🔨", "virelia")
                    .child_of("virelia"),
                // Lesser Houses - Caeloria
                n("scriptorum", "House Scriptorum", "stellara-sonara/caeloria/scriptorum.html", "✒️", "caeloria")
                    .child_of("caeloria"),
                n("alchemere", "House Alchemere", "stellara-sonara/caeloria/alchemere.html", "🏆", "caeloria")
                    .child_of("caeloria"),
                n("heraldis", "House Heraldis", "stellara-sonara/caeloria/heraldis.html", "🎺", "caeloria")
                    .child_of("caeloria"),
            ],
        }
    }

    /// Build a table from explicit nodes (tests and tooling).
    pub fn from_nodes(nodes: Vec<HierarchyNode>) -> Self {
        Self { nodes }
    }

    /// Look up a node by key.
    pub fn get(&self, key: &str) -> Option<&HierarchyNode> {
        self.nodes.iter().find(|n| n.key == key)
    }

    /// Iterate nodes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.nodes.iter()
    }

    /// Resolve a page's declared level keys into nodes, preserving input
    /// order. Unknown keys are dropped, not reported as errors.
    pub fn resolve_path<S: AsRef<str>>(&self, levels: &[S]) -> Vec<&HierarchyNode> {
        levels
            .iter()
            .filter_map(|key| {
                let key = key.as_ref();
                let node = self.get(key);
                if node.is_none() {
                    tracing::debug!(key, "skipping unknown hierarchy key");
                }
                node
            })
            .collect()
    }

    /// Build the breadcrumb trail for a page: a synthetic Home entry
    /// followed by every resolved level, the last marked current.
    ///
    /// Re-invocation with the same input produces identical output.
    pub fn breadcrumbs<S: AsRef<str>>(&self, levels: &[S], current_path: &str) -> Vec<Crumb> {
        let prefix = path_to_root(current_path);
        let resolved = self.resolve_path(levels);
        let last = resolved.len().saturating_sub(1);

        let mut trail = Vec::with_capacity(resolved.len() + 1);
        trail.push(Crumb::home(&prefix));
        for (i, node) in resolved.iter().enumerate() {
            trail.push(Crumb {
                key: node.key.clone(),
                label: node.display_name.clone(),
                href: format!("{prefix}{}", node.url),
                icon: node.icon.clone(),
                style_class: node.style_class.clone(),
                is_current: i == last,
            });
        }
        trail
    }
}

/// Compute the relative prefix (e.g. `"../../"`) that leads from the page
/// at `current_path` back to the site root.
///
/// The trailing file segment is ignored. If [`SITE_ROOT_MARKER`] appears in
/// the path, depth is counted from the marker; otherwise the raw directory
/// count is used. Zero depth yields `"./"`.
pub fn path_to_root(current_path: &str) -> String {
    let mut parts: Vec<&str> = current_path.split('/').filter(|p| !p.is_empty()).collect();
    if parts.last().is_some_and(|p| p.contains('.')) {
        parts.pop();
    }

    let depth = match parts.iter().position(|p| *p == SITE_ROOT_MARKER) {
        Some(marker) => parts.len() - marker - 1,
        None => parts.len(),
    };

    if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    }
}
