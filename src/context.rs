//! Site context providers.
//!
//! The lookup tables are built once at startup and provided to all
//! components as an immutable [`SiteConfig`]; resolvers receive them by
//! reference instead of reaching for module-level singletons.

use std::sync::Arc;

use codex_core::effects::MotionPrefs;
use codex_core::{HierarchyTable, MenuState, PageRegistry, RevealSet, ThemeTable};
use dioxus::prelude::*;

use crate::content::PAGE_MANIFEST;

/// Immutable lookup tables for the whole site.
pub struct SiteConfig {
    pub hierarchy: HierarchyTable,
    pub themes: ThemeTable,
    pub registry: PageRegistry,
}

impl SiteConfig {
    /// Build the tables and parse the embedded page manifest. A malformed
    /// manifest degrades to an empty wiki rather than a crash.
    pub fn load() -> Self {
        let registry = match PageRegistry::from_json(PAGE_MANIFEST) {
            Ok(registry) => registry,
            Err(e) => {
                tracing::warn!(error = %e, "page manifest failed to parse; archive will be empty");
                PageRegistry::empty()
            }
        };
        tracing::debug!(pages = registry.len(), "site configuration loaded");
        Self {
            hierarchy: HierarchyTable::codex(),
            themes: ThemeTable::codex(),
            registry,
        }
    }
}

/// Shared site type for context.
pub type SharedSite = Arc<SiteConfig>;

/// Theme classes the current page cascades onto the root element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RootThemeClasses(pub Vec<String>);

/// Whether the konami easter egg pulse is currently playing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EggActive(pub bool);

/// Hook to access the site configuration from context.
pub fn use_site() -> Signal<SharedSite> {
    use_context::<Signal<SharedSite>>()
}

/// Hook to access motion preferences (reduced motion, viewport width).
pub fn use_motion() -> Signal<MotionPrefs> {
    use_context::<Signal<MotionPrefs>>()
}

/// Hook to access the shared sidebar open/closed state.
///
/// The state lives at the app root so escape and resize handling can close
/// the panel from outside the page that renders it.
pub fn use_menu() -> Signal<MenuState> {
    use_context::<Signal<MenuState>>()
}

/// Hook to access the reveal phase registry for the current page load.
pub fn use_reveals() -> Signal<RevealSet> {
    use_context::<Signal<RevealSet>>()
}

/// Hook to access the root theme class list the current page applies.
pub fn use_root_theme() -> Signal<RootThemeClasses> {
    use_context::<Signal<RootThemeClasses>>()
}

/// Hook to access the easter egg pulse flag.
pub fn use_egg() -> Signal<EggActive> {
    use_context::<Signal<EggActive>>()
}
