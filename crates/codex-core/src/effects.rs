//! Decorative pointer effects and reading-time math.
//!
//! Pure geometry for the card tilt and cursor glow, plus the gate that
//! disables both on small viewports or when reduced motion is preferred.

use crate::navigation::{MOBILE_BREAKPOINT, READING_WPM};

/// Maximum tilt rotation in degrees.
pub const MAX_TILT_DEG: f64 = 5.0;

/// Rotation applied to a card under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at `(x, y)` within a card of the given size.
    /// The card tips toward the pointer, up to [`MAX_TILT_DEG`] at the
    /// edges; degenerate sizes yield no tilt.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: ((y - center_y) / center_y) * -MAX_TILT_DEG,
            rotate_y: ((x - center_x) / center_x) * MAX_TILT_DEG,
        }
    }

    /// CSS transform for the hovered card.
    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) translateY(-8px) scale(1.02)",
            self.rotate_x, self.rotate_y
        )
    }
}

/// Pointer position in viewport coordinates, for the cursor glow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    /// Inline style positioning the glow under the pointer.
    pub fn glow_style(&self) -> String {
        format!("left: {:.0}px; top: {:.0}px;", self.x, self.y)
    }
}

/// Whether decorative effects should run at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionPrefs {
    /// User prefers reduced motion
    pub reduced_motion: bool,
    /// Current viewport width in pixels
    pub viewport_width: f64,
}

impl Default for MotionPrefs {
    fn default() -> Self {
        Self { reduced_motion: false, viewport_width: MOBILE_BREAKPOINT + 1.0 }
    }
}

impl MotionPrefs {
    /// Cursor glow and card tilt run only on larger viewports without a
    /// reduced-motion preference. Reveal animations also respect the
    /// reduced-motion half of this gate.
    pub fn effects_enabled(&self) -> bool {
        !self.reduced_motion && self.viewport_width > MOBILE_BREAKPOINT
    }
}

/// Estimated reading time in whole minutes, at 200 words per minute.
/// Never returns zero for non-empty text.
pub fn reading_time_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0;
    }
    words.div_ceil(READING_WPM) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilt_is_zero_at_center() {
        let tilt = Tilt::at(100.0, 50.0, 200.0, 100.0);
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn tilt_maxes_out_at_edges() {
        let tilt = Tilt::at(200.0, 0.0, 200.0, 100.0);
        assert!((tilt.rotate_y - MAX_TILT_DEG).abs() < f64::EPSILON);
        assert!((tilt.rotate_x - MAX_TILT_DEG).abs() < f64::EPSILON);
    }

    #[test]
    fn tilt_handles_degenerate_card() {
        assert_eq!(Tilt::at(10.0, 10.0, 0.0, 0.0), Tilt::default());
    }

    #[test]
    fn effects_gate() {
        let prefs = MotionPrefs::default();
        assert!(prefs.effects_enabled());

        let reduced = MotionPrefs { reduced_motion: true, ..prefs };
        assert!(!reduced.effects_enabled());

        let narrow = MotionPrefs { viewport_width: 600.0, ..prefs };
        assert!(!narrow.effects_enabled());
    }

    #[test]
    fn reading_time_rounds_up() {
        assert_eq!(reading_time_minutes(""), 0);
        assert_eq!(reading_time_minutes("one two three"), 1);
        let long = "word ".repeat(201);
        assert_eq!(reading_time_minutes(&long), 2);
    }
}
