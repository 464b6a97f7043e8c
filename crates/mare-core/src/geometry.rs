//! Screen geometry for the dive transition.

use serde::{Deserialize, Serialize};

use crate::config::Breakpoints;
use crate::easing::Easing;

/// Axis-aligned rectangle in CSS pixels, relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Linear interpolation towards `other`; `t` is clamped to [0, 1].
    pub fn lerp(&self, other: &Rect, t: f64) -> Rect {
        if t.is_nan() || t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Rect {
            x: mix(self.x, other.x),
            y: mix(self.y, other.y),
            width: mix(self.width, other.width),
            height: mix(self.height, other.height),
        }
    }

    /// Inline CSS placing a fixed-position element on this rectangle.
    pub fn to_css(&self) -> String {
        format!(
            "left: {:.2}px; top: {:.2}px; width: {:.2}px; height: {:.2}px;",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Layout class of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

/// Browser viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Mobile ghost width relative to the viewport.
const MOBILE_TARGET_WIDTH: f64 = 0.85;

/// Mobile ghost aspect ratio (height / width).
const MOBILE_TARGET_ASPECT: f64 = 0.75;

/// Desktop ghost width relative to the viewport.
const DESKTOP_TARGET_WIDTH: f64 = 0.4;

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn breakpoint(&self, breakpoints: &Breakpoints) -> Breakpoint {
        if self.width <= breakpoints.mobile_max_width {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }

    /// Where the ghost element lands once expanded.
    ///
    /// Desktop: the left 40% of the viewport at full height, matching the
    /// detail page's image column. Mobile: 85% width with a 4:3 aspect,
    /// centred on both axes.
    pub fn transition_target(&self, breakpoints: &Breakpoints) -> Rect {
        let width = self.width.max(0.0);
        let height = self.height.max(0.0);
        match self.breakpoint(breakpoints) {
            Breakpoint::Desktop => Rect::new(0.0, 0.0, width * DESKTOP_TARGET_WIDTH, height),
            Breakpoint::Mobile => {
                let target_width = width * MOBILE_TARGET_WIDTH;
                let target_height = (target_width * MOBILE_TARGET_ASPECT).min(height);
                Rect::new(
                    (width - target_width) / 2.0,
                    (height - target_height) / 2.0,
                    target_width,
                    target_height,
                )
            }
        }
    }
}

/// Eased interpolation between two rectangles over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Morph {
    pub from: Rect,
    pub to: Rect,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Morph {
    pub fn new(from: Rect, to: Rect, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing: Easing::EaseOutQuart,
        }
    }

    /// Normalized time for `elapsed_ms`; a zero duration is already finished.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (elapsed_ms / f64::from(self.duration_ms)).clamp(0.0, 1.0)
    }

    /// Rectangle after `elapsed_ms`.
    pub fn frame(&self, elapsed_ms: f64) -> Rect {
        let t = self.easing.apply(self.progress(elapsed_ms));
        self.from.lerp(&self.to, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn between(value: f64, a: f64, b: f64) -> bool {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        value >= lo - 1e-9 && value <= hi + 1e-9
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -2000.0..4000.0f64,
            -2000.0..4000.0f64,
            0.0..3000.0f64,
            0.0..3000.0f64,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn test_midpoint_lies_between_source_and_target(
            source in rect_strategy(),
            target in rect_strategy(),
        ) {
            let mid = source.lerp(&target, 0.5);
            prop_assert!(between(mid.left(), source.left(), target.left()));
            prop_assert!(between(mid.right(), source.right(), target.right()));
            prop_assert!(between(mid.top(), source.top(), target.top()));
            prop_assert!(between(mid.bottom(), source.bottom(), target.bottom()));
        }

        #[test]
        fn test_morph_frames_stay_between_endpoints(
            source in rect_strategy(),
            target in rect_strategy(),
            elapsed in 0.0..1200.0f64,
        ) {
            let frame = Morph::new(source, target, 800).frame(elapsed);
            prop_assert!(between(frame.x, source.x, target.x));
            prop_assert!(between(frame.y, source.y, target.y));
            prop_assert!(between(frame.width, source.width, target.width));
            prop_assert!(between(frame.height, source.height, target.height));
        }
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rect::new(10.0, 20.0, 100.0, 50.0);
        let b = Rect::new(0.0, 0.0, 400.0, 900.0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
        assert_eq!(a.lerp(&b, 2.0), b);
    }

    #[test]
    fn test_desktop_target_is_left_forty_percent() {
        let viewport = Viewport::new(1440.0, 900.0);
        let target = viewport.transition_target(&Breakpoints::default());
        assert_eq!((target.x, target.y), (0.0, 0.0));
        assert!((target.width - 576.0).abs() < 1e-9);
        assert!((target.height - 900.0).abs() < 1e-9);
    }

    #[test]
    fn test_mobile_target_is_centred() {
        let viewport = Viewport::new(400.0, 800.0);
        let target = viewport.transition_target(&Breakpoints::default());
        assert!((target.width - 340.0).abs() < 1e-9);
        assert!((target.height - 255.0).abs() < 1e-9);
        assert!((target.x + target.width / 2.0 - 200.0).abs() < 1e-9);
        assert!((target.y + target.height / 2.0 - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_breakpoint_boundary_is_mobile() {
        let breakpoints = Breakpoints::default();
        assert_eq!(
            Viewport::new(768.0, 600.0).breakpoint(&breakpoints),
            Breakpoint::Mobile
        );
        assert_eq!(
            Viewport::new(769.0, 600.0).breakpoint(&breakpoints),
            Breakpoint::Desktop
        );
    }

    #[test]
    fn test_morph_zero_duration_jumps_to_target() {
        let morph = Morph::new(Rect::default(), Rect::new(5.0, 5.0, 5.0, 5.0), 0);
        assert_eq!(morph.frame(0.0), morph.to);
    }
}
