//! Cascading theme resolution.
//!
//! A page inherits visual styling from every ancestor level in its
//! hierarchy simultaneously, most-specific last. The active set always
//! contains the two fixed base nodes plus any declared level found in the
//! table, sorted by ascending depth level (ties broken by table order).

use serde::{Deserialize, Serialize};

/// The two base theme keys every page carries regardless of its levels.
pub const BASE_THEME_KEYS: [&str; 2] = ["celestial-dominion", "visurena"];

/// One theme layer in the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeNode {
    /// Hierarchy key this theme belongs to
    pub key: String,
    /// Depth level in the cascade (0 = outermost)
    pub level: u8,
    /// Human-readable label for badges and indicator tooltips
    pub name: String,
    /// Accent color for indicator segments and badge borders
    pub color: String,
    /// Class added to the root element; empty means base styling only
    pub body_class: String,
    /// Logical parent key (inheritance bookkeeping, not traversed)
    pub parent: Option<String>,
}

impl ThemeNode {
    fn new(key: &str, level: u8, name: &str, color: &str, body_class: &str) -> Self {
        Self {
            key: key.to_string(),
            level,
            name: name.to_string(),
            color: color.to_string(),
            body_class: body_class.to_string(),
            parent: None,
        }
    }

    fn child_of(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    /// Whether this is one of the two fixed base layers.
    pub fn is_base(&self) -> bool {
        BASE_THEME_KEYS.contains(&self.key.as_str())
    }

    /// CSS class suffix for targeting this layer's segments and badges.
    pub fn class_suffix(&self) -> &str {
        match self.key.as_str() {
            "celestial-dominion" => "celestial",
            "stellara-sonara" => "stellara",
            _ => &self.key,
        }
    }
}

/// Immutable key → theme table, built once at startup.
#[derive(Debug, Clone)]
pub struct ThemeTable {
    nodes: Vec<ThemeNode>,
}

impl ThemeTable {
    /// The Eternal Codex theme cascade.
    pub fn codex() -> Self {
        let t = ThemeNode::new;
        Self {
            nodes: vec![
                t("celestial-dominion", 0, "Celestial Dominion", "#FFD700", ""),
                t("visurena", 1, "House Visurena", "#D4AF37", "theme-visurena"),
                t("eterna-prime", 2, "Eterna Prime", "#1B3C70", "theme-eterna-prime"),
                t("stellara-sonara", 3, "Stellara Sonara", "#0F52BA", "theme-stellara-sonara"),
                t("aurifex", 4, "High House Aurifex", "#6B8CC4", "theme-aurifex"),
                t("virelia", 4, "High House Virelia", "#DC3545", "theme-virelia"),
                t("caeloria", 4, "High House Caeloria", "#FFD86B", "theme-caeloria"),
                // Lesser Houses
                t("lexomancer", 5, "House Lexomancer", "#A8B5C9", "theme-lexomancer").child_of("aurifex"),
                t("architecton", 5, "House Architecton", "#5A7FA1", "theme-architecton").child_of("aurifex"),
                t("promptwright", 5, "House Promptwright", "#6A4C93", "theme-promptwright").child_of("aurifex"),
                t("imara", 5, "House Imara", "#C84B5B", "theme-imara").child_of("virelia"),
                t("veyra", 5, "House Veyra", "#C8C8C8", "theme-veyra").child_of("virelia"),
                t("reclinor", 5, "House Reclinor", "#CD7F32", "theme-reclinor").child_of("virelia"),
                t("scriptorum", 5, "House Scriptorum", "#DAA520", "theme-scriptorum").child_of("caeloria"),
                t("alchemere", 5, "House Alchemere", "#FFCA28", "theme-alchemere").child_of("caeloria"),
                t("heraldis", 5, "House Heraldis", "#FFD700", "theme-heraldis").child_of("caeloria"),
            ],
        }
    }

    /// Look up a theme by key.
    pub fn get(&self, key: &str) -> Option<&ThemeNode> {
        self.nodes.iter().find(|n| n.key == key)
    }

    /// Iterate themes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &ThemeNode> {
        self.nodes.iter()
    }

    /// Determine the active theme set for a page.
    ///
    /// Collecting in table order before the stable sort makes table order
    /// the tie-break for equal levels. Base keys repeated in `levels` are
    /// not duplicated; unknown keys are silently skipped.
    pub fn active_themes<S: AsRef<str>>(&self, levels: &[S]) -> Vec<&ThemeNode> {
        let mut active: Vec<&ThemeNode> = self
            .nodes
            .iter()
            .filter(|node| node.is_base() || levels.iter().any(|k| k.as_ref() == node.key))
            .collect();
        active.sort_by_key(|node| node.level);
        active
    }
}

/// Classes to add to the root element, one per active node with a
/// non-empty class.
pub fn root_classes<'a>(active: &[&'a ThemeNode]) -> Vec<&'a str> {
    active
        .iter()
        .filter(|n| !n.body_class.is_empty())
        .map(|n| n.body_class.as_str())
        .collect()
}

/// Badge layers: every active node except the two fixed base layers.
/// An empty result means the badge container is not rendered at all.
pub fn badge_nodes<'a>(active: &[&'a ThemeNode]) -> Vec<&'a ThemeNode> {
    active.iter().filter(|n| !n.is_base()).copied().collect()
}
