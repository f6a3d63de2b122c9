//! Error types for the Eternal Codex

use thiserror::Error;

/// Startup-time failures.
///
/// Runtime lookup misses (unknown hierarchy keys, absent page context) are
/// deliberately *not* errors: they degrade to empty output with a debug log.
/// This type covers the cases where continuing would render a wrong site,
/// not just a sparser one.
#[derive(Error, Debug)]
pub enum CodexError {
    /// Requested page key has no entry in the page registry
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// Embedded page manifest failed to parse
    #[error("Invalid page manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
