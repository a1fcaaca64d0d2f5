// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Each `handle_*` function receives an [`UpdateContext`] borrowing the parts
//! of [`App`](super::App) it may touch and returns the follow-up task.

use super::{paths, view, Message};
use crate::banner::{BannerImage, BannerState};
use crate::config::Config;
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, UserAction};
use crate::ui::assets::ImageStore;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::reveal::Reveals;
use crate::ui::scroll::{ScrollLayout, SmoothScroll};
use crate::ui::section::Section;
use iced::widget::image::Handle;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Id};
use iced::{window, Size, Task};
use std::time::Instant;

/// Context for update operations containing references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub banner: &'a mut BannerState,
    pub banner_handle: &'a mut Option<Handle>,
    pub images: &'a ImageStore,
    pub menu_open: &'a mut bool,
    pub window_size: &'a mut Size,
    pub layout: &'a mut ScrollLayout,
    pub smooth_scroll: &'a mut Option<SmoothScroll>,
    pub reveals: &'a mut Reveals,
    pub diagnostics: &'a mut DiagnosticsCollector,
    pub now: &'a mut Instant,
}

/// Handles navbar messages: menu toggling and section navigation.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::MenuToggled => {
            ctx.diagnostics.log_action(UserAction::ToggleMenu);
            Task::none()
        }
        NavbarEvent::ScrollTo(section) => start_scroll(ctx, section, Instant::now()),
    }
}

fn start_scroll(ctx: &mut UpdateContext<'_>, section: Section, now: Instant) -> Task<Message> {
    ctx.diagnostics.log_action(UserAction::NavigateTo {
        section: section.id().to_string(),
    });

    *ctx.now = now;
    *ctx.smooth_scroll = Some(SmoothScroll::new(
        section,
        ctx.layout.offset(),
        now,
        ctx.config.animation.scroll_duration(),
    ));

    advance_scroll(ctx, now)
}

/// Moves an in-flight smooth scroll to its position at `now`.
fn advance_scroll(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let Some(scroll) = *ctx.smooth_scroll else {
        return Task::none();
    };

    let (offset, finished) = scroll.offset_at(now, ctx.layout);
    if finished {
        *ctx.smooth_scroll = None;
    }

    snap_page_to(ctx.layout, offset)
}

/// Snaps the page scrollable to an absolute vertical offset.
fn snap_page_to(layout: &ScrollLayout, offset: f32) -> Task<Message> {
    let max_offset = layout.max_offset();
    let relative_y = if max_offset > 0.0 {
        (offset / max_offset).clamp(0.0, 1.0)
    } else {
        0.0
    };

    operation::snap_to(
        Id::new(view::PAGE_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: relative_y,
        },
    )
}

/// Applies the banner result, unless the page already resolved or unmounted.
pub fn handle_banner_resolved(ctx: &mut UpdateContext<'_>, image: BannerImage) -> Task<Message> {
    if !ctx.banner.accepts() {
        log::debug!("ignoring banner result after the page settled");
        return Task::none();
    }

    let (image, handle) = match ctx.images.banner_handle(&image) {
        Ok(handle) => (image, Some(handle)),
        Err(err) => {
            ctx.diagnostics
                .handle()
                .log_warning(format!("banner not displayable, using fallback: {err}"));
            (
                BannerImage::fallback(ctx.config.assets.fallback_banner()),
                ctx.images.fallback_banner(),
            )
        }
    };

    ctx.banner.resolve(image);
    *ctx.banner_handle = handle;
    ctx.diagnostics.process_pending();
    Task::none()
}

/// Records a section height and re-checks which sections are visible.
pub fn handle_section_measured(
    ctx: &mut UpdateContext<'_>,
    section: Section,
    size: Size,
) -> Task<Message> {
    if ctx.layout.set_height(section, size.height) {
        observe_reveals(ctx, Instant::now());
    }
    Task::none()
}

pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, viewport: Viewport) -> Task<Message> {
    let offset = viewport.absolute_offset();
    ctx.layout.set_viewport(
        offset.y,
        viewport.bounds().height,
        viewport.content_bounds().height,
    );
    observe_reveals(ctx, Instant::now());
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window_size = size;
    if view::is_desktop(size.width) {
        *ctx.menu_open = false;
    }

    // The scrollable reports its exact bounds on the next scroll event.
    ctx.layout
        .set_viewport_height(size.height - sizing::HEADER_HEIGHT);
    observe_reveals(ctx, Instant::now());
    Task::none()
}

/// Advances animations and drains diagnostics sent from background tasks.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    ctx.diagnostics.process_pending();
    advance_scroll(ctx, now)
}

/// Unmounts the page, optionally exports diagnostics, then closes the window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.banner.unmount();
    ctx.diagnostics.log_action(UserAction::CloseWindow);
    ctx.diagnostics.process_pending();

    if ctx.config.diagnostics.export_on_exit {
        export_diagnostics(ctx.diagnostics);
    }

    window::close(id)
}

fn export_diagnostics(diagnostics: &DiagnosticsCollector) {
    let Some(path) = paths::diagnostics_export_path() else {
        log::warn!("no data directory available, diagnostics not exported");
        return;
    };

    match diagnostics.export_to_file(&path) {
        Ok(written) => log::info!("diagnostics written to {}", written.display()),
        Err(err) => log::warn!("failed to export diagnostics: {err}"),
    }
}

fn observe_reveals(ctx: &mut UpdateContext<'_>, now: Instant) {
    *ctx.now = now;

    let revealed = ctx.reveals.observe(ctx.layout, now);
    if revealed.is_empty() {
        return;
    }

    let diagnostics = ctx.diagnostics.handle();
    for section in revealed {
        diagnostics.log_state(AppStateEvent::SectionRevealed {
            section: section.id().to_string(),
        });
    }
    ctx.diagnostics.process_pending();
}

#[cfg(test)]
mod tests {
    use super::super::App;
    use super::*;
    use crate::banner::BannerSource;
    use crate::diagnostics::DiagnosticEventKind;

    fn actions(app: &App) -> Vec<UserAction> {
        app.diagnostics
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::UserAction { action, .. } => Some(action.clone()),
                _ => None,
            })
            .collect()
    }

    fn states(app: &App) -> Vec<AppStateEvent> {
        app.diagnostics
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::AppState { state } => Some(state.clone()),
                _ => None,
            })
            .collect()
    }

    fn measured_app() -> App {
        let mut app = App::default();
        for section in Section::ALL {
            let _ = app.update(Message::SectionMeasured(
                section,
                Size::new(1024.0, 900.0),
            ));
        }
        app
    }

    #[test]
    fn navigating_starts_smooth_scroll_and_closes_menu() {
        let mut app = measured_app();
        app.menu_open = true;

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Section::Hobbies)));

        assert!(!app.menu_open);
        let scroll = app.smooth_scroll.expect("scroll should be running");
        assert_eq!(scroll.target(), Section::Hobbies);
        assert_eq!(
            actions(&app),
            vec![UserAction::NavigateTo {
                section: "hobbies".to_string()
            }]
        );
    }

    #[test]
    fn tick_after_scroll_duration_finishes_scroll() {
        let mut app = measured_app();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Section::Contact)));

        let later = Instant::now() + app.config.animation.scroll_duration() * 2;
        let _ = app.update(Message::Tick(later));

        assert!(app.smooth_scroll.is_none());
    }

    #[test]
    fn toggling_menu_is_recorded() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);
        assert_eq!(actions(&app), vec![UserAction::ToggleMenu]);
    }

    #[test]
    fn fallback_banner_resolves_to_preloaded_handle() {
        let mut app = App::default();
        let (images, _) = ImageStore::preload(&app.config.assets);
        app.images = images;

        let fallback = app.config.assets.fallback_banner();
        let _ = app.update(Message::BannerResolved(BannerImage::fallback(fallback)));

        assert!(!app.banner.is_loading());
        assert!(app.banner_handle.is_some());
    }

    #[test]
    fn undecodable_banner_uses_fallback_and_warns() {
        let mut app = App::default();
        let (images, _) = ImageStore::preload(&app.config.assets);
        app.images = images;

        let _ = app.update(Message::BannerResolved(BannerImage::generated("@@not-base64@@")));

        let resolved = app.banner.image().expect("banner resolved");
        assert_eq!(resolved.source(), BannerSource::Fallback);
        assert_eq!(resolved.locator(), app.config.assets.fallback_banner());
        assert!(app.banner_handle.is_some());
        assert!(app
            .diagnostics
            .iter()
            .any(|event| matches!(event.kind, DiagnosticEventKind::Warning { .. })));
    }

    #[test]
    fn second_banner_result_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::BannerResolved(BannerImage::generated("AAAA")));
        let _ = app.update(Message::BannerResolved(BannerImage::generated("BBBB")));

        assert_eq!(
            app.banner.image().map(BannerImage::locator),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn banner_result_after_close_is_dropped() {
        let mut app = App::default();
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        let _ = app.update(Message::BannerResolved(BannerImage::fallback("/a.png")));

        assert!(app.banner.is_loading());
        assert!(app.banner.image().is_none());
        assert!(actions(&app).contains(&UserAction::CloseWindow));
    }

    #[test]
    fn resizing_to_desktop_closes_menu() {
        let mut app = App::default();
        app.menu_open = true;

        let _ = app.update(Message::WindowResized(Size::new(500.0, 700.0)));
        assert!(app.menu_open);

        let _ = app.update(Message::WindowResized(Size::new(1200.0, 700.0)));
        assert!(!app.menu_open);
    }

    #[test]
    fn measuring_visible_section_triggers_reveal_once() {
        let mut app = App::default();
        // Home short enough that Projects starts inside the viewport.
        let _ = app.update(Message::SectionMeasured(
            Section::Home,
            Size::new(1024.0, 300.0),
        ));
        let _ = app.update(Message::SectionMeasured(
            Section::Projects,
            Size::new(1024.0, 600.0),
        ));
        let _ = app.update(Message::SectionMeasured(
            Section::Projects,
            Size::new(1024.0, 650.0),
        ));

        assert!(app.reveals.is_triggered(Section::Projects));
        let revealed: Vec<_> = states(&app)
            .into_iter()
            .filter(|state| {
                *state
                    == AppStateEvent::SectionRevealed {
                        section: "projects".to_string(),
                    }
            })
            .collect();
        assert_eq!(revealed.len(), 1);
    }
}
