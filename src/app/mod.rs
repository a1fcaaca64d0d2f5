// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the portfolio page.
//!
//! The `App` struct owns everything the page needs: localization, the banner
//! lifecycle, preloaded images, scroll geometry, reveal animations and the
//! diagnostics buffer. Section views only receive read-only slices of it.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::{is_desktop, PAGE_SCROLLABLE_ID};

use crate::banner::{self, BannerImage, BannerState};
use crate::config::{self, Config};
use crate::diagnostics::{
    AppStateEvent, BufferCapacity, DiagnosticsCollector, DiagnosticsHandle,
};
use crate::i18n::fluent::I18n;
use crate::infrastructure::ImagenClient;
use crate::ui::assets::ImageStore;
use crate::ui::design_tokens::sizing;
use crate::ui::footer;
use crate::ui::reveal::Reveals;
use crate::ui::scroll::{ScrollLayout, SmoothScroll};
use crate::ui::theming::AppTheme;
use iced::widget::image::Handle;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    banner: BannerState,
    /// Decoded banner, set once the banner resolves.
    banner_handle: Option<Handle>,
    images: ImageStore,
    /// Whether the narrow-layout menu is open.
    menu_open: bool,
    window_size: Size,
    layout: ScrollLayout,
    smooth_scroll: Option<SmoothScroll>,
    reveals: Reveals,
    diagnostics: DiagnosticsCollector,
    started_at: Instant,
    /// Instant of the last processed message, used for animations.
    now: Instant,
    year: i32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("banner_loading", &self.banner.is_loading())
            .field("menu_open", &self.menu_open)
            .field("scroll_offset", &self.layout.offset())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let now = Instant::now();
        let window_size = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);

        let mut layout = ScrollLayout::new();
        layout.set_viewport_height(window_size.height - sizing::HEADER_HEIGHT);

        Self {
            i18n: I18n::default(),
            theme: AppTheme::new(config.general.theme_mode),
            banner: BannerState::new(),
            banner_handle: None,
            images: ImageStore::default(),
            menu_open: false,
            window_size,
            layout,
            smooth_scroll: None,
            reveals: Reveals::new(&config.animation),
            diagnostics: DiagnosticsCollector::new(buffer_capacity(&config)),
            started_at: now,
            now,
            year: footer::current_year(),
            config,
        }
    }
}

fn buffer_capacity(config: &Config) -> BufferCapacity {
    BufferCapacity::new(
        config
            .diagnostics
            .buffer_capacity
            .unwrap_or(config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
    )
}

/// Starts the one banner request of this page load.
fn request_banner(config: &Config, diagnostics: DiagnosticsHandle) -> Task<Message> {
    let banner_config = config.banner.clone();
    let fallback = config.assets.fallback_banner();

    Task::perform(
        async move {
            match ImagenClient::new(&banner_config) {
                Ok(client) => banner::acquire(&client, &fallback, &diagnostics).await,
                Err(err) => {
                    diagnostics.log_warning(format!("banner client unavailable: {err}"));
                    diagnostics.log_state(AppStateEvent::BannerFallback {
                        reason: "transport".to_string(),
                    });
                    BannerImage::fallback(fallback)
                }
            }
        },
        Message::BannerResolved,
    )
}

impl App {
    /// Loads configuration and assets, then kicks off the banner request.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let mut app = App {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            reveals: Reveals::new(&config.animation),
            diagnostics: DiagnosticsCollector::new(buffer_capacity(&config)),
            ..Self::default()
        };

        let diagnostics = app.diagnostics.handle();
        if let Some(key) = config_warning {
            diagnostics.log_warning(app.i18n.tr(&key));
        }

        let (images, missing) = ImageStore::preload(&config.assets);
        for err in missing {
            diagnostics.log_warning(format!("image unavailable: {err}"));
        }
        app.images = images;
        log::debug!("preloaded {} images", app.images.len());

        app.config = config;

        let task = if app.banner.begin() {
            diagnostics.log_state(AppStateEvent::PageMounted);
            request_banner(&app.config, diagnostics)
        } else {
            Task::none()
        };
        app.diagnostics.process_pending();

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.banner.is_loading(),
            self.smooth_scroll.is_some(),
            self.reveals.is_animating(self.now),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &self.config,
            banner: &mut self.banner,
            banner_handle: &mut self.banner_handle,
            images: &self.images,
            menu_open: &mut self.menu_open,
            window_size: &mut self.window_size,
            layout: &mut self.layout,
            smooth_scroll: &mut self.smooth_scroll,
            reveals: &mut self.reveals,
            diagnostics: &mut self.diagnostics,
            now: &mut self.now,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::BannerResolved(image) => update::handle_banner_resolved(&mut ctx, image),
            Message::SectionMeasured(section, size) => {
                update::handle_section_measured(&mut ctx, section, size)
            }
            Message::Scrolled(viewport) => update::handle_scrolled(&mut ctx, viewport),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: self.theme.colors,
            banner: &self.banner,
            banner_handle: self.banner_handle.as_ref(),
            images: &self.images,
            menu_open: self.menu_open,
            window_size: self.window_size,
            reveals: &self.reveals,
            now: self.now,
            elapsed: self.now.saturating_duration_since(self.started_at),
            year: self.year,
        })
    }
}
