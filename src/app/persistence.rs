// SPDX-License-Identifier: MPL-2.0
//! Preference persistence logic.
//!
//! This module saves the two persisted preferences (language, theme mode)
//! to disk. A failed save is a warning, never a user-facing error: the
//! in-memory state has already changed and keeps working for the session.

use super::Message;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Applies the newly selected locale and persists it to config.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the store directly rather than through persisted files.
pub fn apply_language_change(i18n: &mut I18n, locale: LanguageIdentifier) -> Task<Message> {
    if let Err(error) = i18n.set_locale(locale.clone()) {
        eprintln!("[WARN] Locale change rejected: {error}");
        return Task::none();
    }

    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    cfg.general.language = Some(locale.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}

/// Persists the current theme mode to config.
pub fn persist_theme_mode(mode: ThemeMode) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    cfg.general.theme_mode = Some(mode);

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }

    Task::none()
}
