// SPDX-License-Identifier: MPL-2.0
//! One-shot fade and slide-in of sections as they first scroll into view.
//!
//! Opacity is drawn as a veil in the page background colour stacked over
//! the section, so nothing underneath needs to support alpha. The slide is
//! top padding balanced by bottom padding, keeping the section height stable
//! while it animates.

use crate::config::AnimationConfig;
use crate::ui::scroll::ScrollLayout;
use crate::ui::section::Section;
use iced::widget::{container, Container, Stack};
use iced::{Background, Color, Element, Length, Padding, Theme};
use std::time::{Duration, Instant};

/// How a section should be drawn at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// 0.0 hidden, 1.0 fully shown.
    pub opacity: f32,
    /// Current downward shift in pixels.
    pub offset: f32,
    /// Shift at the start of the animation.
    pub travel: f32,
}

impl RevealStyle {
    #[must_use]
    pub fn shown() -> Self {
        Self {
            opacity: 1.0,
            offset: 0.0,
            travel: 0.0,
        }
    }
}

/// Reveal state of a single section.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reveal {
    started_at: Option<Instant>,
}

impl Reveal {
    /// Starts the animation. Returns false if it had already started.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    /// Linear progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant, duration: Duration) -> f32 {
        match self.started_at {
            None => 0.0,
            Some(_) if duration.is_zero() => 1.0,
            Some(start) => {
                let elapsed = now.saturating_duration_since(start);
                (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
            }
        }
    }
}

/// Reveal state of every section plus the animation parameters.
#[derive(Debug, Clone)]
pub struct Reveals {
    entries: [Reveal; Section::ALL.len()],
    duration: Duration,
    travel: f32,
    threshold: f32,
}

impl Reveals {
    #[must_use]
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            entries: [Reveal::default(); Section::ALL.len()],
            duration: config.reveal_duration(),
            travel: config.reveal_offset(),
            threshold: config.reveal_threshold(),
        }
    }

    /// Triggers every animated section whose visible share has reached the
    /// threshold. Returns the sections triggered by this call.
    pub fn observe(&mut self, layout: &ScrollLayout, now: Instant) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| section.is_animated())
            .filter(|section| layout.visible_fraction(*section) >= self.threshold)
            .filter(|section| self.entries[section.index()].trigger(now))
            .collect()
    }

    #[must_use]
    pub fn is_triggered(&self, section: Section) -> bool {
        self.entries[section.index()].is_triggered()
    }

    #[must_use]
    pub fn style(&self, section: Section, now: Instant) -> RevealStyle {
        if !section.is_animated() {
            return RevealStyle::shown();
        }

        let progress = self.entries[section.index()].progress(now, self.duration);
        RevealStyle {
            opacity: progress,
            offset: (1.0 - progress) * self.travel,
            travel: self.travel,
        }
    }

    /// True while a triggered section has not finished its animation.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entries.iter().any(|reveal| {
            reveal.is_triggered() && reveal.progress(now, self.duration) < 1.0
        })
    }
}

/// Wraps `content` so it renders with `style`, veiled in `background`.
pub fn view<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    style: RevealStyle,
    background: Color,
) -> Element<'a, Message> {
    let shifted = Container::new(content)
        .width(Length::Fill)
        .padding(Padding {
            top: style.offset,
            bottom: (style.travel - style.offset).max(0.0),
            ..Padding::ZERO
        });

    if style.opacity >= 1.0 {
        return shifted.into();
    }

    let veil_color = Color {
        a: 1.0 - style.opacity,
        ..background
    };
    let veil = Container::new(iced::widget::Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(veil_color)),
            ..container::Style::default()
        });

    Stack::new().push(shifted).push(veil).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    fn config() -> AnimationConfig {
        AnimationConfig::default()
    }

    fn layout_with_projects_visible(fraction_px: f32) -> ScrollLayout {
        let mut layout = ScrollLayout::new();
        for section in Section::ALL {
            layout.set_height(section, 1000.0);
        }
        // Viewport ends `fraction_px` into the Projects section.
        layout.set_viewport(fraction_px, 1000.0, 5000.0);
        layout
    }

    #[test]
    fn reveal_triggers_once() {
        let mut reveal = Reveal::default();
        let now = Instant::now();
        assert!(reveal.trigger(now));
        assert!(!reveal.trigger(now + Duration::from_secs(1)));
    }

    #[test]
    fn progress_is_linear() {
        let mut reveal = Reveal::default();
        let start = Instant::now();
        reveal.trigger(start);
        let duration = Duration::from_millis(500);

        assert_abs_diff_eq!(reveal.progress(start, duration), 0.0);
        assert_abs_diff_eq!(
            reveal.progress(start + Duration::from_millis(250), duration),
            0.5,
            epsilon = F32_EPSILON
        );
        assert_abs_diff_eq!(
            reveal.progress(start + Duration::from_secs(3), duration),
            1.0
        );
    }

    #[test]
    fn untriggered_section_is_hidden_and_shifted() {
        let reveals = Reveals::new(&config());
        let style = reveals.style(Section::Projects, Instant::now());
        assert_abs_diff_eq!(style.opacity, 0.0);
        assert_abs_diff_eq!(style.offset, 50.0);
    }

    #[test]
    fn home_is_always_shown() {
        let reveals = Reveals::new(&config());
        assert_eq!(
            reveals.style(Section::Home, Instant::now()),
            RevealStyle::shown()
        );
    }

    #[test]
    fn threshold_gates_trigger() {
        let mut reveals = Reveals::new(&config());
        let now = Instant::now();

        assert!(reveals
            .observe(&layout_with_projects_visible(50.0), now)
            .is_empty());
        assert!(!reveals.is_triggered(Section::Projects));

        let triggered = reveals.observe(&layout_with_projects_visible(100.0), now);
        assert_eq!(triggered, vec![Section::Projects]);

        // Scrolling back and forth never re-triggers.
        assert!(reveals
            .observe(&layout_with_projects_visible(300.0), now)
            .is_empty());
    }

    #[test]
    fn style_interpolates_and_settles() {
        let mut reveals = Reveals::new(&config());
        let start = Instant::now();
        reveals.observe(&layout_with_projects_visible(500.0), start);

        let mid = reveals.style(Section::Projects, start + Duration::from_millis(250));
        assert_abs_diff_eq!(mid.opacity, 0.5, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(mid.offset, 25.0, epsilon = 1e-3);
        assert!(reveals.is_animating(start + Duration::from_millis(250)));

        let end = reveals.style(Section::Projects, start + Duration::from_millis(600));
        assert_abs_diff_eq!(end.opacity, 1.0);
        assert_abs_diff_eq!(end.offset, 0.0);
        assert!(!reveals.is_animating(start + Duration::from_millis(600)));
    }

    #[test]
    fn view_builds_for_partial_and_full_opacity() {
        let half = RevealStyle {
            opacity: 0.5,
            offset: 25.0,
            travel: 50.0,
        };
        let _hidden: Element<'_, ()> = view(iced::widget::text("a"), half, Color::WHITE);
        let _shown: Element<'_, ()> =
            view(iced::widget::text("b"), RevealStyle::shown(), Color::WHITE);
    }
}
