//! The Eternal Codex Core Library
//!
//! Presentation logic for the Eternal Codex fan wiki, kept free of any UI
//! runtime so it can be tested headlessly.
//!
//! ## Overview
//!
//! The wiki is a static hierarchy of realms and houses. Each page declares
//! its ancestor chain ("levels"), and everything else is derived from two
//! immutable lookup tables built once at startup:
//!
//! - [`HierarchyTable`] resolves level keys into breadcrumb trails and
//!   computes relative link prefixes from the current URL depth.
//! - [`ThemeTable`] computes the cascading theme set a page inherits from
//!   its ancestors, sorted by depth level.
//!
//! The remaining modules are small state machines behind the interactive
//! behaviors: the mobile menu, scroll tracking, scroll-reveal phases, and
//! decorative pointer effects.
//!
//! Unknown hierarchy keys are silently skipped (logged at debug level),
//! never raised as errors. Worst-case degradation is a feature that does
//! not appear, never a broken page.
//!
//! ## Quick Start
//!
//! ```
//! use codex_core::{HierarchyTable, ThemeTable};
//!
//! let hierarchy = HierarchyTable::codex();
//! let themes = ThemeTable::codex();
//!
//! let levels = ["celestial-dominion", "visurena", "stellara-sonara"];
//! let trail = hierarchy.breadcrumbs(&levels, "/the-eternal-codex/stellara-sonara/index.html");
//! assert_eq!(trail.len(), 4); // Home + three resolved levels
//! assert!(trail.last().unwrap().is_current);
//!
//! let active = themes.active_themes(&levels);
//! assert_eq!(active.len(), 3);
//! ```

pub mod effects;
pub mod error;
pub mod hierarchy;
pub mod navigation;
pub mod registry;
pub mod reveal;
pub mod theme;

// Re-exports
pub use error::CodexError;
pub use hierarchy::{path_to_root, Crumb, HierarchyNode, HierarchyTable, SITE_ROOT_MARKER};
pub use navigation::{KonamiTracker, MenuState, ScrollTracker, MOBILE_BREAKPOINT};
pub use registry::{PageEntry, PageRegistry, PageSection};
pub use reveal::{RevealKind, RevealPhase, RevealSet};
pub use theme::{ThemeNode, ThemeTable, BASE_THEME_KEYS};
