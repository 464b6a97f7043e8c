//! Scroll choreography.
//!
//! A section's progress is a pure function of the scroll offset, the viewport
//! height and the section's layout; nothing accumulates across frames, so it
//! can be recomputed on any scroll or resize event. Visual values are derived
//! from progress through piecewise-linear [`Transform`]s.

use crate::easing::Easing;

/// Progress values closer than this are treated as equal by
/// [`ProgressTracker`].
const PROGRESS_RESOLUTION: f64 = 1000.0;

/// Vertical layout of a section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionGeometry {
    /// Distance from the document top to the section's top edge.
    pub top: f64,
    pub height: f64,
}

impl SectionGeometry {
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// The moment a point of the section meets a line of the viewport.
///
/// Both values are fractions: `element: 0.0` is the section's top edge,
/// `viewport: 1.0` is the viewport's bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub element: f64,
    pub viewport: f64,
}

impl Intersection {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// Scroll offset at which this intersection happens.
    fn scroll_offset(&self, section: SectionGeometry, viewport_height: f64) -> f64 {
        section.top + self.element * section.height - self.viewport * viewport_height
    }
}

/// Window of scroll offsets mapped onto progress 0..1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollRange {
    /// Section top meets viewport bottom -> section bottom meets viewport top.
    pub const ENTER_TO_EXIT: Self = Self {
        start: Intersection::new(0.0, 1.0),
        end: Intersection::new(1.0, 0.0),
    };

    /// Section top at viewport top -> section bottom at viewport bottom.
    /// Used for sticky sections taller than the viewport.
    pub const PINNED: Self = Self {
        start: Intersection::new(0.0, 0.0),
        end: Intersection::new(1.0, 1.0),
    };

    /// Section top meets viewport bottom -> section top meets viewport top.
    pub const ENTER: Self = Self {
        start: Intersection::new(0.0, 1.0),
        end: Intersection::new(0.0, 0.0),
    };
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self::ENTER_TO_EXIT
    }
}

/// Normalized progress of `section` through `range`, always within [0, 1].
///
/// Degenerate windows (zero or negative length, e.g. a zero-height section in
/// a zero-height viewport) behave as a step at the start offset. Non-finite
/// input yields 0.
pub fn scroll_progress(
    scroll_y: f64,
    viewport_height: f64,
    section: SectionGeometry,
    range: ScrollRange,
) -> f64 {
    if !(scroll_y.is_finite()
        && viewport_height.is_finite()
        && section.top.is_finite()
        && section.height.is_finite())
    {
        return 0.0;
    }

    let viewport_height = viewport_height.max(0.0);
    let section = SectionGeometry::new(section.top, section.height.max(0.0));

    let start = range.start.scroll_offset(section, viewport_height);
    let end = range.end.scroll_offset(section, viewport_height);
    let span = end - start;

    if span <= f64::EPSILON {
        return if scroll_y >= start { 1.0 } else { 0.0 };
    }

    ((scroll_y - start) / span).clamp(0.0, 1.0)
}

/// Maps progress onto a visual value through keyframes.
///
/// `input` must be ascending; values outside it clamp to the first/last
/// output.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    input: Vec<f64>,
    output: Vec<f64>,
    easing: Easing,
}

impl Transform {
    /// Builds a transform; extra keyframes on the longer side are dropped.
    pub fn new(input: &[f64], output: &[f64]) -> Self {
        let len = input.len().min(output.len());
        Self {
            input: input[..len].to_vec(),
            output: output[..len].to_vec(),
            easing: Easing::Linear,
        }
    }

    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn value_at(&self, progress: f64) -> f64 {
        let (Some(&first_in), Some(&last_in)) = (self.input.first(), self.input.last()) else {
            return 0.0;
        };
        let first_out = self.output[0];
        let last_out = self.output[self.output.len() - 1];

        if progress.is_nan() || progress <= first_in {
            return first_out;
        }
        if progress >= last_in {
            return last_out;
        }

        for (i, window) in self.input.windows(2).enumerate() {
            let (a, b) = (window[0], window[1]);
            if progress <= b {
                let (from, to) = (self.output[i], self.output[i + 1]);
                if b <= a {
                    return to;
                }
                let t = self.easing.apply((progress - a) / (b - a));
                return from + (to - from) * t;
            }
        }
        last_out
    }
}

/// Resolved visual properties for one section at one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualStyle {
    pub opacity: f64,
    pub scale: f64,
    /// Pixels.
    pub translate_x: f64,
    /// Pixels.
    pub translate_y: f64,
    /// Degrees.
    pub rotate: f64,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            rotate: 0.0,
        }
    }
}

impl VisualStyle {
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translate3d({:.2}px, {:.2}px, 0) scale({:.4}) rotate({:.2}deg);",
            self.opacity.clamp(0.0, 1.0),
            self.translate_x,
            self.translate_y,
            self.scale,
            self.rotate
        )
    }
}

/// Set of transforms driven by one section's progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Choreography {
    opacity: Option<Transform>,
    scale: Option<Transform>,
    translate_x: Option<Transform>,
    translate_y: Option<Transform>,
    rotate: Option<Transform>,
}

impl Choreography {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn opacity(mut self, transform: Transform) -> Self {
        self.opacity = Some(transform);
        self
    }

    #[must_use]
    pub fn scale(mut self, transform: Transform) -> Self {
        self.scale = Some(transform);
        self
    }

    #[must_use]
    pub fn translate_x(mut self, transform: Transform) -> Self {
        self.translate_x = Some(transform);
        self
    }

    #[must_use]
    pub fn translate_y(mut self, transform: Transform) -> Self {
        self.translate_y = Some(transform);
        self
    }

    #[must_use]
    pub fn rotate(mut self, transform: Transform) -> Self {
        self.rotate = Some(transform);
        self
    }

    pub fn style_at(&self, progress: f64) -> VisualStyle {
        let base = VisualStyle::default();
        let eval = |transform: &Option<Transform>, fallback: f64| {
            transform
                .as_ref()
                .map_or(fallback, |t| t.value_at(progress))
        };
        VisualStyle {
            opacity: eval(&self.opacity, base.opacity),
            scale: eval(&self.scale, base.scale),
            translate_x: eval(&self.translate_x, base.translate_x),
            translate_y: eval(&self.translate_y, base.translate_y),
            rotate: eval(&self.rotate, base.rotate),
        }
    }
}

/// Remembers the last published progress and reports only real changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressTracker {
    last: Option<f64>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<f64> {
        self.last
    }

    /// Returns the quantized progress if it differs from the last one.
    pub fn update(&mut self, progress: f64) -> Option<f64> {
        let quantized = quantize(progress);
        if self.last == Some(quantized) {
            return None;
        }
        self.last = Some(quantized);
        Some(quantized)
    }
}

fn quantize(progress: f64) -> f64 {
    let clamped = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    (clamped * PROGRESS_RESOLUTION).round() / PROGRESS_RESOLUTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_progress_is_zero_when_top_meets_viewport_bottom(
            top in -5000.0..20000.0f64,
            height in 0.0..5000.0f64,
            viewport in 1.0..3000.0f64,
        ) {
            let section = SectionGeometry::new(top, height);
            let scroll_y = top - viewport;
            let progress = scroll_progress(scroll_y, viewport, section, ScrollRange::ENTER_TO_EXIT);
            prop_assert!(progress.abs() < 1e-9);
        }

        #[test]
        fn test_progress_is_one_when_bottom_meets_viewport_top(
            top in -5000.0..20000.0f64,
            height in 0.0..5000.0f64,
            viewport in 1.0..3000.0f64,
        ) {
            let section = SectionGeometry::new(top, height);
            let scroll_y = top + height;
            let progress = scroll_progress(scroll_y, viewport, section, ScrollRange::ENTER_TO_EXIT);
            prop_assert!((progress - 1.0).abs() < 1e-9);
        }

        #[test]
        fn test_progress_is_always_in_unit_range(
            scroll_y in -1e6..1e6f64,
            top in -1e5..1e5f64,
            height in -100.0..1e4f64,
            viewport in -100.0..3000.0f64,
        ) {
            let section = SectionGeometry::new(top, height);
            for range in [ScrollRange::ENTER_TO_EXIT, ScrollRange::PINNED, ScrollRange::ENTER] {
                let progress = scroll_progress(scroll_y, viewport, section, range);
                prop_assert!((0.0..=1.0).contains(&progress));
            }
        }
    }

    #[test]
    fn test_progress_midway() {
        let section = SectionGeometry::new(1000.0, 600.0);
        // Window runs from 200 (1000 - 800) to 1600, so 900 is halfway
        let progress = scroll_progress(900.0, 800.0, section, ScrollRange::ENTER_TO_EXIT);
        assert!((progress - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_off_screen_sections_clamp() {
        let section = SectionGeometry::new(5000.0, 400.0);
        assert_eq!(
            scroll_progress(0.0, 800.0, section, ScrollRange::ENTER_TO_EXIT),
            0.0
        );
        assert_eq!(
            scroll_progress(90_000.0, 800.0, section, ScrollRange::ENTER_TO_EXIT),
            1.0
        );
    }

    #[test]
    fn test_zero_height_section_in_zero_viewport_is_a_step() {
        let section = SectionGeometry::new(300.0, 0.0);
        assert_eq!(
            scroll_progress(299.0, 0.0, section, ScrollRange::ENTER_TO_EXIT),
            0.0
        );
        assert_eq!(
            scroll_progress(300.0, 0.0, section, ScrollRange::ENTER_TO_EXIT),
            1.0
        );
    }

    #[test]
    fn test_non_finite_input_yields_zero() {
        let section = SectionGeometry::new(0.0, 100.0);
        let range = ScrollRange::ENTER_TO_EXIT;
        assert_eq!(scroll_progress(f64::NAN, 800.0, section, range), 0.0);
        assert_eq!(scroll_progress(10.0, f64::INFINITY, section, range), 0.0);
        assert_eq!(
            scroll_progress(10.0, 800.0, SectionGeometry::new(f64::NAN, 1.0), range),
            0.0
        );
    }

    #[test]
    fn test_pinned_range() {
        // 3 viewports tall: pinned for two viewports of scrolling
        let section = SectionGeometry::new(0.0, 2400.0);
        let at = |y| scroll_progress(y, 800.0, section, ScrollRange::PINNED);
        assert_eq!(at(0.0), 0.0);
        assert!((at(800.0) - 0.5).abs() < 1e-9);
        assert_eq!(at(1600.0), 1.0);
    }

    #[test]
    fn test_pinned_section_shorter_than_viewport_is_a_step() {
        let section = SectionGeometry::new(100.0, 300.0);
        assert_eq!(
            scroll_progress(99.0, 800.0, section, ScrollRange::PINNED),
            0.0
        );
        assert_eq!(
            scroll_progress(100.0, 800.0, section, ScrollRange::PINNED),
            1.0
        );
    }

    #[test]
    fn test_transform_sub_ranges() {
        // Fade in over the first 20%, hold, fade out over the last 20%
        let fade = Transform::new(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(fade.value_at(-1.0), 0.0);
        assert!((fade.value_at(0.1) - 0.5).abs() < 1e-9);
        assert_eq!(fade.value_at(0.5), 1.0);
        assert!((fade.value_at(0.9) - 0.5).abs() < 1e-9);
        assert_eq!(fade.value_at(2.0), 0.0);
    }

    #[test]
    fn test_transform_edge_cases() {
        assert_eq!(Transform::new(&[], &[]).value_at(0.5), 0.0);
        assert_eq!(Transform::new(&[0.5], &[3.0]).value_at(0.9), 3.0);
        // Mismatched lengths are truncated to the shorter side
        let t = Transform::new(&[0.0, 1.0, 2.0], &[10.0, 20.0]);
        assert_eq!(t.value_at(5.0), 20.0);
        assert_eq!(t.value_at(f64::NAN), 10.0);
    }

    #[test]
    fn test_transform_with_easing() {
        let t = Transform::new(&[0.0, 1.0], &[0.0, 100.0]).with_easing(Easing::EaseInCubic);
        assert!((t.value_at(0.5) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_choreography_defaults_and_css() {
        let hero = Choreography::new()
            .scale(Transform::new(&[0.0, 1.0], &[1.0, 1.2]))
            .translate_y(Transform::new(&[0.0, 1.0], &[0.0, -120.0]));

        let style = hero.style_at(0.5);
        assert_eq!(style.opacity, 1.0);
        assert!((style.scale - 1.1).abs() < 1e-9);
        assert!((style.translate_y + 60.0).abs() < 1e-9);
        assert_eq!(style.rotate, 0.0);

        assert_eq!(
            VisualStyle::default().to_css(),
            "opacity: 1.000; transform: translate3d(0.00px, 0.00px, 0) scale(1.0000) rotate(0.00deg);"
        );
    }

    #[test]
    fn test_tracker_reports_only_changes() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.update(0.25), Some(0.25));
        assert_eq!(tracker.update(0.25), None);
        // Sub-resolution jitter is swallowed
        assert_eq!(tracker.update(0.250_2), None);
        assert_eq!(tracker.update(0.3), Some(0.3));
        assert_eq!(tracker.update(f64::NAN), Some(0.0));
        assert_eq!(tracker.last(), Some(0.0));
    }
}
