// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and detail views.
//!
//! The `App` struct wires together the gallery controller, localization and
//! settings, and drives the controller from user input and a periodic tick.
//! Images are decoded in the background at startup; until then a loading
//! screen is shown.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config, GalleryConfig};
use crate::gallery::ViewMode;
use crate::i18n::fluent::I18n;
use crate::manifest::Manifest;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Resolved once at startup, including system theme detection.
    theme: Theme,
    gallery_config: GalleryConfig,
    /// Time of the latest tick or user action, used to render animations.
    clock: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme", &self.theme)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 500;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and starts resolving the image manifest
    /// in the background.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            lang,
            manifest,
            paths,
            ..
        } = flags;
        let (config, config_warning) = config::load();
        let app = Self::with_config(lang, &config);
        if let Some(key) = config_warning {
            log::warn!("{}", app.i18n.tr(&key));
        }

        let gallery_config = config.gallery;
        let thumbnail_size = gallery_config.thumbnail_size();
        let task = Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    match Manifest::from_sources(&paths, manifest.as_deref(), &gallery_config) {
                        Ok(manifest) => manifest.resolve(thumbnail_size),
                        Err(error) => {
                            log::error!("Failed to read image manifest: {}", error);
                            Vec::new()
                        }
                    }
                })
                .await
                .unwrap_or_else(|error| {
                    log::error!("Image loading task failed: {}", error);
                    Vec::new()
                })
            },
            Message::GalleryLoaded,
        );

        (app, task)
    }

    /// Creates the application in its loading state from an already loaded config.
    fn with_config(lang: Option<String>, config: &Config) -> Self {
        let now = Instant::now();
        Self {
            i18n: I18n::new(lang, config),
            screen: Screen::Loading { started: now },
            theme: config.general.theme_mode.theme(),
            gallery_config: config.gallery.clone(),
            clock: now,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let detail_name = self
            .screen
            .gallery()
            .filter(|controller| controller.mode() == ViewMode::Detail)
            .and_then(|controller| controller.current())
            .map(|image| image.name.as_str());

        match detail_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mode = self
            .screen
            .gallery()
            .map_or(ViewMode::Grid, |controller| controller.mode());
        let is_spinning = self
            .screen
            .gallery()
            .is_some_and(|controller| controller.is_spinning());

        Subscription::batch([
            subscription::create_event_subscription(mode),
            subscription::create_tick_subscription(self.screen.is_loading(), is_spinning),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            clock: &mut self.clock,
            spin_settings: self.gallery_config.spin_settings(),
        };

        match message {
            Message::GalleryLoaded(images) => update::handle_gallery_loaded(&mut ctx, images),
            Message::Grid(grid_message) => update::handle_grid_message(&mut ctx, grid_message),
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut ctx, detail_message)
            }
            Message::KeyboardStep(direction) => update::handle_step(&mut ctx, direction),
            Message::KeyboardBack => update::handle_back(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: &self.screen,
            clock: self.clock,
            columns: self.gallery_config.columns(),
            thumbnail_size: self.gallery_config.thumbnail_size(),
            detail_width: self.gallery_config.detail_width(),
        })
    }
}
