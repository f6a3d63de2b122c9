//! Scroll-reveal phase tracking.
//!
//! Observed elements start `Pending` and move to `Revealed` the first time
//! they intersect the viewport. The transition is one-way per page load:
//! scrolling an element back out never hides it again.

use std::collections::HashMap;

/// Animation variant applied to a revealed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    Fade,
    FadeLeft,
    FadeRight,
    Scale,
}

impl RevealKind {
    /// Base CSS class for this variant.
    pub fn class(&self) -> &'static str {
        match self {
            RevealKind::Fade => "scroll-reveal",
            RevealKind::FadeLeft => "scroll-reveal-left",
            RevealKind::FadeRight => "scroll-reveal-right",
            RevealKind::Scale => "scroll-reveal-scale",
        }
    }

    /// Panels alternate slide direction down the page.
    pub fn for_panel(index: usize) -> Self {
        if index % 2 == 0 {
            RevealKind::FadeLeft
        } else {
            RevealKind::FadeRight
        }
    }
}

/// Reveal phase of one observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Pending,
    Revealed,
}

/// Registry of observed elements and their phases for one page load.
///
/// Elements register once; intersection reports flow through
/// [`RevealSet::on_intersection`], which enforces the one-way transition.
#[derive(Debug, Default, Clone)]
pub struct RevealSet {
    phases: HashMap<String, RevealPhase>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element as pending. Re-registering a revealed element
    /// does not reset it.
    pub fn observe(&mut self, id: impl Into<String>) {
        self.phases.entry(id.into()).or_default();
    }

    /// Report an intersection change. Returns true only when the element
    /// newly transitions to revealed.
    pub fn on_intersection(&mut self, id: &str, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }
        match self.phases.get_mut(id) {
            Some(phase @ RevealPhase::Pending) => {
                *phase = RevealPhase::Revealed;
                true
            }
            Some(RevealPhase::Revealed) => false,
            None => {
                // Unregistered elements reveal on first report
                self.phases.insert(id.to_string(), RevealPhase::Revealed);
                true
            }
        }
    }

    pub fn phase(&self, id: &str) -> RevealPhase {
        self.phases.get(id).copied().unwrap_or_default()
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.phase(id) == RevealPhase::Revealed
    }

    pub fn revealed_count(&self) -> usize {
        self.phases.values().filter(|p| **p == RevealPhase::Revealed).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_is_one_way() {
        let mut set = RevealSet::new();
        set.observe("panel-0");

        assert_eq!(set.phase("panel-0"), RevealPhase::Pending);
        assert!(!set.on_intersection("panel-0", false));
        assert_eq!(set.phase("panel-0"), RevealPhase::Pending);

        assert!(set.on_intersection("panel-0", true));
        assert!(set.is_revealed("panel-0"));

        // Leaving and re-entering the viewport changes nothing
        assert!(!set.on_intersection("panel-0", false));
        assert!(!set.on_intersection("panel-0", true));
        assert!(set.is_revealed("panel-0"));
    }

    #[test]
    fn observe_does_not_reset_revealed() {
        let mut set = RevealSet::new();
        set.observe("h-1");
        set.on_intersection("h-1", true);
        set.observe("h-1");
        assert!(set.is_revealed("h-1"));
    }

    #[test]
    fn panels_alternate_direction() {
        assert_eq!(RevealKind::for_panel(0), RevealKind::FadeLeft);
        assert_eq!(RevealKind::for_panel(1), RevealKind::FadeRight);
        assert_eq!(RevealKind::for_panel(2), RevealKind::FadeLeft);
    }
}
