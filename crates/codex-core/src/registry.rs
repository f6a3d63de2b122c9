//! Page registry.
//!
//! Every page declares its own hierarchy levels and content as static
//! metadata; nothing is derived by walking the hierarchy at runtime. The
//! registry is parsed once from an embedded JSON manifest and stays
//! immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::error::CodexError;

/// One titled section of a page body, written in Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSection {
    /// Anchor id, unique within the page
    pub id: String,
    pub title: String,
    /// Markdown body
    pub body: String,
}

/// Static metadata one page supplies before any resolver runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Registry key, also the route parameter
    pub key: String,
    pub title: String,
    /// Ordered ancestor-to-current hierarchy keys, declared, not derived
    #[serde(default)]
    pub levels: Vec<String>,
    /// One-line teaser shown on gateway cards
    #[serde(default)]
    pub summary: String,
    /// Whether the landing page shows a gateway card for this page
    #[serde(default)]
    pub gateway: bool,
    #[serde(default)]
    pub sections: Vec<PageSection>,
}

impl PageEntry {
    /// Full body text across sections, for reading-time estimates.
    pub fn body_text(&self) -> String {
        let mut text = String::new();
        for section in &self.sections {
            text.push_str(&section.title);
            text.push('\n');
            text.push_str(&section.body);
            text.push('\n');
        }
        text
    }
}

/// Immutable page lookup, parsed once at startup.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
    pages: Vec<PageEntry>,
}

impl PageRegistry {
    /// Parse the embedded JSON manifest.
    pub fn from_json(manifest: &str) -> Result<Self, CodexError> {
        let pages: Vec<PageEntry> = serde_json::from_str(manifest)?;
        Ok(Self { pages })
    }

    /// Empty registry; every lookup degrades to "page not found".
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&PageEntry> {
        self.pages.iter().find(|p| p.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageEntry> {
        self.pages.iter()
    }

    /// Pages shown as gateway cards on the landing page, in manifest order.
    pub fn gateways(&self) -> impl Iterator<Item = &PageEntry> {
        self.pages.iter().filter(|p| p.gateway)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"[
        {
            "key": "stellara-sonara",
            "title": "Stellara Sonara",
            "levels": ["celestial-dominion", "visurena", "stellara-sonara"],
            "summary": "The singing realm.",
            "gateway": true,
            "sections": [
                {"id": "origins", "title": "Origins", "body": "Born of the *first chord*."}
            ]
        },
        {"key": "bare", "title": "Bare Page"}
    ]"#;

    #[test]
    fn parses_manifest_with_defaults() {
        let registry = PageRegistry::from_json(MANIFEST).unwrap();
        assert_eq!(registry.len(), 2);

        let page = registry.get("stellara-sonara").unwrap();
        assert_eq!(page.levels.len(), 3);
        assert!(page.gateway);

        let bare = registry.get("bare").unwrap();
        assert!(bare.levels.is_empty());
        assert!(!bare.gateway);
        assert!(bare.sections.is_empty());
    }

    #[test]
    fn gateways_filters_manifest_order() {
        let registry = PageRegistry::from_json(MANIFEST).unwrap();
        let keys: Vec<&str> = registry.gateways().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["stellara-sonara"]);
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        assert!(matches!(
            PageRegistry::from_json("{not json"),
            Err(CodexError::Manifest(_))
        ));
    }

    #[test]
    fn body_text_concatenates_sections() {
        let registry = PageRegistry::from_json(MANIFEST).unwrap();
        let text = registry.get("stellara-sonara").unwrap().body_text();
        assert!(text.contains("Origins"));
        assert!(text.contains("first chord"));
    }
}
