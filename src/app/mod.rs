// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the viewer to localization and the persisted
//! configuration, and turns window lifecycle events into viewer teardown.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    viewer: component::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("viewer", &self.viewer)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings. Close requests are delivered to `update` so
/// the viewer is torn down before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure; the flags are cloned per call.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            viewer: component::State::default(),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Loads the configuration, resolves the locale and kicks off the catalog
    /// fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            tracing::warn!(key = %key, "{}", i18n.tr(&key));
        }

        let settings = component::Settings::from_config(&config)
            .with_overrides(flags.manifest.as_deref(), flags.image_base.as_deref());
        tracing::debug!(?settings, locale = %i18n.current_locale(), "starting viewer");

        let mut app = App {
            i18n,
            viewer: component::State::new(settings),
            theme_mode: config.general.theme_mode,
        };

        let task = app.viewer.start().map(Message::Viewer);
        (app, task)
    }

    fn title(&self) -> String {
        self.viewer.title(&self.i18n)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.viewer.accepts_input())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => self
                .viewer
                .handle_message(viewer_message)
                .map(Message::Viewer),
            Message::WindowCloseRequested(window_id) => {
                tracing::info!("window closing, tearing down viewer");
                self.viewer.teardown();
                window::close(window_id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: &self.viewer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::navigation::{Intent, Slide};
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = paths::env_test_lock();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn fabric(name: &str) -> CatalogEntry {
        CatalogEntry {
            filename: format!("{name}.jpg"),
            name: name.to_string(),
            quantity: 1,
        }
    }

    fn deliver_catalog(app: &mut App, entries: Vec<CatalogEntry>) {
        let ticket = app.viewer.pending_catalog().expect("catalog in flight");
        let _ = app.update(Message::Viewer(component::Message::CatalogLoaded {
            ticket,
            result: Ok(entries),
        }));
    }

    fn next(app: &mut App) {
        let _ = app.update(Message::Viewer(component::Message::Navigate(Intent::Next)));
    }

    #[test]
    fn new_starts_on_splash_with_fetch_in_flight() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.viewer.current_slide(), Slide::Splash);
            assert!(app.viewer.pending_catalog().is_some());
            assert!(app.viewer.accepts_input());
        });
    }

    #[test]
    fn cli_flags_override_catalog_locations() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                manifest: Some("https://example.org/pillowcases.json".into()),
                image_base: Some("https://example.org/img".into()),
                ..Flags::default()
            });
            assert!(app.viewer.settings().manifest.is_remote());
            assert!(app.viewer.settings().image_base.is_remote());
        });
    }

    #[test]
    fn settings_file_is_honored() {
        with_temp_config_dir(|dir| {
            std::fs::write(
                dir.join("settings.toml"),
                "[general]\ntheme_mode = \"light\"\n\n[viewer]\nshow_quantity = false\n",
            )
            .expect("write settings");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.theme(), Theme::Light);
            assert!(!app.viewer.settings().show_quantity);
        });
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "[viewer\nshow").expect("write settings");

            let (app, _task) = App::new(Flags::default());
            assert!(app.viewer.settings().show_quantity);
        });
    }

    #[test]
    fn title_shows_app_name_then_fabric_name() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(Flags {
                lang: Some("en-US".into()),
                ..Flags::default()
            });
            assert_eq!(app.title(), app.i18n.tr("window-title"));

            deliver_catalog(&mut app, vec![fabric("Gingham")]);
            next(&mut app);
            next(&mut app);
            assert!(app.title().contains("Gingham"));
        });
    }

    #[test]
    fn close_request_tears_down_viewer() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(Flags::default());
            let ticket = app.viewer.pending_catalog().expect("catalog in flight");

            let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
            assert!(app.viewer.is_torn_down());
            assert!(!app.viewer.accepts_input());

            let _ = app.update(Message::Viewer(component::Message::CatalogLoaded {
                ticket,
                result: Ok(vec![fabric("Gingham")]),
            }));
            assert!(app.viewer.catalog().is_pending());

            next(&mut app);
            assert_eq!(app.viewer.current_slide(), Slide::Splash);
        });
    }
}
