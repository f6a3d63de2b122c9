//! Navigation state machines.
//!
//! The mobile menu, scroll tracking, and the konami easter egg each own a
//! small explicit state object mutated only through its transition
//! functions; event callbacks in the UI layer forward into these.

use std::collections::VecDeque;

/// Viewport width above which the mobile menu no longer applies.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Scroll offset past which the scroll-to-top button becomes visible.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Offset subtracted from section tops when picking the active section.
pub const SECTION_TRIGGER_OFFSET: f64 = 100.0;

/// Words per minute assumed by the reading-time indicator.
pub const READING_WPM: usize = 200;

/// Scroll-depth percentages logged once per page load.
pub const SCROLL_MILESTONES: [u8; 4] = [25, 50, 75, 95];

/// Binary open/closed state of the mobile navigation panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape closes an open menu. Returns true if the state changed.
    pub fn on_escape(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// A click outside both the panel and its toggle button closes an open
    /// menu. Returns true if the state changed.
    pub fn on_outside_click(&mut self, inside_panel: bool, on_toggle: bool) -> bool {
        if self.open && !inside_panel && !on_toggle {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// Crossing the desktop breakpoint closes an open menu. Returns true if
    /// the state changed.
    pub fn on_viewport_resize(&mut self, width: f64) -> bool {
        if self.open && width > MOBILE_BREAKPOINT {
            self.open = false;
            true
        } else {
            false
        }
    }
}

/// A section's vertical extent within the scrolled content, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Pick the section containing `scroll_pos`, with the usual trigger offset
/// so a section activates slightly before its heading reaches the top.
pub fn active_section(scroll_pos: f64, sections: &[SectionSpan]) -> Option<&str> {
    let probe = scroll_pos + SECTION_TRIGGER_OFFSET;
    let mut current = None;
    for section in sections {
        if probe >= section.top && probe < section.top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Result of feeding one scroll event into [`ScrollTracker`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollUpdate {
    /// Whether the scroll-to-top button should be visible
    pub show_to_top: bool,
    /// Depth milestones newly crossed by this event (each fires once)
    pub crossed_milestones: Vec<u8>,
}

/// Tracks scroll position, button visibility, and depth milestones for one
/// page load.
#[derive(Debug, Default, Clone)]
pub struct ScrollTracker {
    last_offset: f64,
    max_depth_pct: f64,
    reported: [bool; SCROLL_MILESTONES.len()],
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Feed one scroll event. `content_height` is the full scrollable
    /// height, `viewport_height` the visible portion.
    pub fn on_scroll(&mut self, offset: f64, content_height: f64, viewport_height: f64) -> ScrollUpdate {
        self.last_offset = offset;

        let scrollable = (content_height - viewport_height).max(0.0);
        if scrollable > 0.0 {
            let pct = (offset / scrollable * 100.0).clamp(0.0, 100.0);
            self.max_depth_pct = self.max_depth_pct.max(pct);
        }

        let mut crossed = Vec::new();
        for (i, milestone) in SCROLL_MILESTONES.iter().enumerate() {
            if !self.reported[i] && self.max_depth_pct > f64::from(*milestone) {
                self.reported[i] = true;
                crossed.push(*milestone);
            }
        }

        ScrollUpdate {
            show_to_top: offset > SCROLL_TOP_THRESHOLD,
            crossed_milestones: crossed,
        }
    }
}

/// The classic sequence, as keyboard event key names.
pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft",
    "ArrowRight", "b", "a",
];

/// Sliding-window matcher for the konami easter egg.
#[derive(Debug, Default, Clone)]
pub struct KonamiTracker {
    recent: VecDeque<String>,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one keydown. Returns true when the last ten keys match the
    /// sequence; the buffer resets on a match so holding keys cannot
    /// re-trigger immediately.
    pub fn record(&mut self, key: &str) -> bool {
        self.recent.push_back(key.to_string());
        while self.recent.len() > KONAMI_SEQUENCE.len() {
            self.recent.pop_front();
        }

        let matched = self.recent.len() == KONAMI_SEQUENCE.len()
            && self.recent.iter().zip(KONAMI_SEQUENCE.iter()).all(|(got, want)| got == want);
        if matched {
            self.recent.clear();
        }
        matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_twice_restores_state() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());

        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        menu.toggle();
        assert!(menu.is_open());
    }

    #[test]
    fn escape_closes_only_open_menu() {
        let mut menu = MenuState::default();
        assert!(!menu.on_escape());
        menu.toggle();
        assert!(menu.on_escape());
        assert!(!menu.is_open());
    }

    #[test]
    fn outside_click_ignores_panel_and_toggle() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.on_outside_click(true, false));
        assert!(menu.is_open());
        assert!(!menu.on_outside_click(false, true));
        assert!(menu.is_open());
        assert!(menu.on_outside_click(false, false));
        assert!(!menu.is_open());
    }

    #[test]
    fn resize_past_breakpoint_closes_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(!menu.on_viewport_resize(MOBILE_BREAKPOINT - 1.0));
        assert!(menu.is_open());
        assert!(menu.on_viewport_resize(MOBILE_BREAKPOINT + 1.0));
        assert!(!menu.is_open());
    }

    #[test]
    fn scroll_tracker_reports_each_milestone_once() {
        let mut tracker = ScrollTracker::new();

        let update = tracker.on_scroll(100.0, 2000.0, 1000.0);
        assert!(!update.show_to_top);
        assert!(update.crossed_milestones.is_empty());

        // 60% of the 1000px scrollable range
        let update = tracker.on_scroll(600.0, 2000.0, 1000.0);
        assert!(update.show_to_top);
        assert_eq!(update.crossed_milestones, vec![25, 50]);

        // Scrolling back up does not re-report
        let update = tracker.on_scroll(600.0, 2000.0, 1000.0);
        assert!(update.crossed_milestones.is_empty());

        let update = tracker.on_scroll(1000.0, 2000.0, 1000.0);
        assert_eq!(update.crossed_milestones, vec![75, 95]);
    }

    #[test]
    fn active_section_uses_trigger_offset() {
        let sections = vec![
            SectionSpan { id: "origins".into(), top: 0.0, height: 500.0 },
            SectionSpan { id: "houses".into(), top: 500.0, height: 500.0 },
        ];
        assert_eq!(active_section(0.0, &sections), Some("origins"));
        // 100px trigger offset pulls the next section in early
        assert_eq!(active_section(420.0, &sections), Some("houses"));
        assert_eq!(active_section(2000.0, &sections), None);
    }

    #[test]
    fn konami_matches_only_full_sequence() {
        let mut tracker = KonamiTracker::new();
        for key in KONAMI_SEQUENCE.iter().take(9) {
            assert!(!tracker.record(key));
        }
        assert!(tracker.record("a"));
        // Buffer cleared after a match
        assert!(!tracker.record("a"));
    }

    #[test]
    fn konami_tolerates_noise_before_sequence() {
        let mut tracker = KonamiTracker::new();
        tracker.record("x");
        tracker.record("Enter");
        for (i, key) in KONAMI_SEQUENCE.iter().enumerate() {
            let matched = tracker.record(key);
            assert_eq!(matched, i == KONAMI_SEQUENCE.len() - 1);
        }
    }
}
