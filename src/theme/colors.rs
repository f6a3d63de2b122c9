//! Base palette of the Codex.
//!
//! Per-House accents live in `codex_core::ThemeTable`; these are the fixed
//! colors of the shell itself.

/// The Flame Eternal.
pub const GOLD: &str = "#FFD700";

/// Aged gilt, the Visurena seal.
pub const GOLD_DARK: &str = "#D4AF37";

/// Deep firmament behind everything.
pub const NIGHT: &str = "#0B0E1A";

/// Raised panels and the sidebar.
pub const NIGHT_PANEL: &str = "#141A2E";

/// Hairline borders between panels.
pub const NIGHT_EDGE: &str = "#26304F";

/// Body text.
pub const PARCHMENT: &str = "#E8E0CC";

/// Secondary text and separators.
pub const PARCHMENT_DIM: &str = "#9A9480";
