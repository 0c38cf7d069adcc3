// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages and the two
//! shared stores (localization and theme).
//!
//! The `App` struct wires together the localization store, the theme mode,
//! and the per-page view states, and translates messages into side effects
//! like preference persistence or the simulated form submission. Policy
//! decisions (window sizing, persistence, locale switching) stay close to
//! the main update loop so user-facing behavior is easy to audit.

mod message;
mod persistence;
mod screen;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::pages::{contact, portfolio};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the pages, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    portfolio: portfolio::State,
    contact: contact::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 650;

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

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            theme_mode: ThemeMode::default(),
            menu_open: false,
            portfolio: portfolio::State::default(),
            contact: contact::State::default(),
        }
    }
}

impl App {
    /// Initializes application state from persisted preferences and the
    /// startup `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme_mode = config
            .general
            .theme_mode
            .unwrap_or_else(ThemeMode::detect_default);

        if let Some(key) = config_warning {
            eprintln!("[WARN] {}", i18n.tr(key));
        }

        let app = App {
            i18n,
            theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar;

    #[test]
    fn default_app_starts_on_the_home_screen() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
        assert!(!app.menu_open);
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert_eq!(app.title(), "Vortex Agency");
    }

    #[test]
    fn theme_follows_the_mode() {
        let mut app = App::default();
        app.theme_mode = ThemeMode::Light;
        assert!(matches!(app.theme(), Theme::Light));
        app.theme_mode = ThemeMode::Dark;
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn navbar_navigation_switches_the_screen() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Pricing)));
        assert_eq!(app.screen, Screen::Pricing);
    }

    #[test]
    fn theme_toggle_message_flips_the_mode() {
        let mut app = App::default();
        let before = app.theme_mode;
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, before.toggled());
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, before);
    }

    #[test]
    fn language_toggle_message_flips_the_locale() {
        let mut app = App::default();
        app.i18n.set_locale("en".parse().unwrap()).unwrap();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleLanguage));
        assert_eq!(app.i18n.current_locale().to_string(), "ru");
        let _ = app.update(Message::Navbar(navbar::Message::ToggleLanguage));
        assert_eq!(app.i18n.current_locale().to_string(), "en");
    }
}
