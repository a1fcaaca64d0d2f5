// SPDX-License-Identifier: MPL-2.0
//! Section geometry inside the page scrollable and smooth scroll animation.
//!
//! Section heights are reported by the view as they are laid out. Until a
//! section has been measured its height is estimated, so offsets of later
//! sections converge as measurements arrive.

use crate::config::ESTIMATED_SECTION_HEIGHT_PX;
use crate::ui::section::Section;
use std::time::{Duration, Instant};

/// Measured section heights plus the current viewport of the page scrollable.
#[derive(Debug, Clone, Default)]
pub struct ScrollLayout {
    heights: [Option<f32>; Section::ALL.len()],
    offset: f32,
    viewport_height: f32,
    content_height: Option<f32>,
}

impl ScrollLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the laid-out height of `section`. Returns true if it changed.
    pub fn set_height(&mut self, section: Section, height: f32) -> bool {
        let slot = &mut self.heights[section.index()];
        if *slot == Some(height) {
            return false;
        }
        *slot = Some(height.max(0.0));
        true
    }

    /// Height of `section`, estimated when not yet measured.
    #[must_use]
    pub fn height(&self, section: Section) -> f32 {
        self.heights[section.index()].unwrap_or(ESTIMATED_SECTION_HEIGHT_PX)
    }

    #[must_use]
    pub fn is_measured(&self, section: Section) -> bool {
        self.heights[section.index()].is_some()
    }

    /// Distance from the top of the page to the top of `section`.
    #[must_use]
    pub fn offset_of(&self, section: Section) -> f32 {
        Section::ALL[..section.index()]
            .iter()
            .map(|s| self.height(*s))
            .sum()
    }

    /// Updates the viewport after the scrollable reported a scroll or resize.
    pub fn set_viewport(&mut self, offset: f32, viewport_height: f32, content_height: f32) {
        self.offset = offset.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        self.content_height = Some(content_height.max(0.0));
    }

    /// Updates the viewport height alone, e.g. on window resize.
    pub fn set_viewport_height(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height.max(0.0);
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[must_use]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Share of `section` inside the viewport, in `0.0..=1.0`.
    #[must_use]
    pub fn visible_fraction(&self, section: Section) -> f32 {
        let height = self.height(section);
        if height <= 0.0 {
            return 0.0;
        }

        let top = self.offset_of(section);
        let bottom = top + height;
        let view_top = self.offset;
        let view_bottom = self.offset + self.viewport_height;

        let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0.0);
        (overlap / height).clamp(0.0, 1.0)
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_offset(&self) -> f32 {
        let content = self.content_height.unwrap_or_else(|| {
            Section::ALL.iter().map(|s| self.height(*s)).sum::<f32>()
        });
        (content - self.viewport_height).max(0.0)
    }

    #[must_use]
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }
}

/// An in-flight scroll towards a section.
#[derive(Debug, Clone, Copy)]
pub struct SmoothScroll {
    target: Section,
    from: f32,
    started: Instant,
    duration: Duration,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(target: Section, from: f32, started: Instant, duration: Duration) -> Self {
        Self {
            target,
            from,
            started,
            duration,
        }
    }

    #[must_use]
    pub fn target(&self) -> Section {
        self.target
    }

    /// Offset to apply at `now` and whether the scroll has finished.
    ///
    /// The destination is read from `layout` on every call.
    #[must_use]
    pub fn offset_at(&self, now: Instant, layout: &ScrollLayout) -> (f32, bool) {
        let destination = layout.clamp(layout.offset_of(self.target));

        if self.duration.is_zero() {
            return (destination, true);
        }

        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        let eased = ease_in_out_cubic(t);

        let offset = self.from + (destination - self.from) * eased;
        (layout.clamp(offset), t >= 1.0)
    }
}

/// Cubic ease-in-out over `t` in `0.0..=1.0`.
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn measured(heights: [f32; 5], viewport: f32) -> ScrollLayout {
        let mut layout = ScrollLayout::new();
        for (section, height) in Section::ALL.into_iter().zip(heights) {
            layout.set_height(section, height);
        }
        layout.set_viewport(0.0, viewport, heights.iter().sum());
        layout
    }

    #[test]
    fn unmeasured_sections_use_estimate() {
        let layout = ScrollLayout::new();
        assert!(!layout.is_measured(Section::Thoughts));
        assert_abs_diff_eq!(
            layout.offset_of(Section::Thoughts),
            2.0 * ESTIMATED_SECTION_HEIGHT_PX
        );
    }

    #[test]
    fn offsets_accumulate_preceding_heights() {
        let layout = measured([800.0, 600.0, 500.0, 400.0, 300.0], 700.0);
        assert_abs_diff_eq!(layout.offset_of(Section::Home), 0.0);
        assert_abs_diff_eq!(layout.offset_of(Section::Projects), 800.0);
        assert_abs_diff_eq!(layout.offset_of(Section::Contact), 2300.0);
    }

    #[test]
    fn set_height_reports_changes_only() {
        let mut layout = ScrollLayout::new();
        assert!(layout.set_height(Section::Home, 500.0));
        assert!(!layout.set_height(Section::Home, 500.0));
        assert!(layout.set_height(Section::Home, 510.0));
    }

    #[test]
    fn visible_fraction_measures_overlap() {
        let mut layout = measured([800.0, 600.0, 500.0, 400.0, 300.0], 700.0);
        assert_abs_diff_eq!(layout.visible_fraction(Section::Home), 700.0 / 800.0);
        assert_abs_diff_eq!(layout.visible_fraction(Section::Projects), 0.0);

        layout.set_viewport(260.0, 700.0, 2600.0);
        assert_abs_diff_eq!(
            layout.visible_fraction(Section::Projects),
            160.0 / 600.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn fully_visible_section_is_one() {
        let mut layout = measured([800.0, 600.0, 500.0, 400.0, 300.0], 1000.0);
        layout.set_viewport(750.0, 1000.0, 2600.0);
        assert_abs_diff_eq!(layout.visible_fraction(Section::Projects), 1.0);
    }

    #[test]
    fn clamp_respects_scrollable_range() {
        let layout = measured([800.0, 600.0, 500.0, 400.0, 300.0], 700.0);
        assert_abs_diff_eq!(layout.max_offset(), 1900.0);
        assert_abs_diff_eq!(layout.clamp(-5.0), 0.0);
        assert_abs_diff_eq!(layout.clamp(5000.0), 1900.0);
    }

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_abs_diff_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_abs_diff_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_abs_diff_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!(ease_in_out_cubic(0.25) < 0.25);
        assert!(ease_in_out_cubic(0.75) > 0.75);
    }

    #[test]
    fn smooth_scroll_reaches_target() {
        let layout = measured([800.0, 600.0, 500.0, 400.0, 300.0], 700.0);
        let start = Instant::now();
        let scroll = SmoothScroll::new(
            Section::Thoughts,
            0.0,
            start,
            Duration::from_millis(400),
        );

        let (halfway, done) = scroll.offset_at(start + Duration::from_millis(200), &layout);
        assert!(!done);
        assert_abs_diff_eq!(halfway, 700.0, epsilon = 0.01);

        let (end, done) = scroll.offset_at(start + Duration::from_millis(500), &layout);
        assert!(done);
        assert_abs_diff_eq!(end, 1400.0);
    }

    #[test]
    fn smooth_scroll_follows_late_measurements() {
        let mut layout = ScrollLayout::new();
        layout.set_viewport(0.0, 700.0, 10_000.0);
        let start = Instant::now();
        let scroll = SmoothScroll::new(Section::Projects, 0.0, start, Duration::from_millis(100));

        let (before, _) = scroll.offset_at(start + Duration::from_millis(200), &layout);
        assert_abs_diff_eq!(before, ESTIMATED_SECTION_HEIGHT_PX);

        layout.set_height(Section::Home, 900.0);
        let (after, _) = scroll.offset_at(start + Duration::from_millis(200), &layout);
        assert_abs_diff_eq!(after, 900.0);
    }

    #[test]
    fn zero_duration_jumps() {
        let layout = measured([800.0, 600.0, 500.0, 400.0, 300.0], 700.0);
        let start = Instant::now();
        let scroll = SmoothScroll::new(Section::Projects, 0.0, start, Duration::ZERO);
        assert_eq!(scroll.offset_at(start, &layout), (800.0, true));
    }
}
