// SPDX-License-Identifier: MPL-2.0
use tempfile::tempdir;
use vortex_agency::config::{self, Config, GeneralConfig};
use vortex_agency::domain::contact::ProjectType;
use vortex_agency::i18n::fluent::I18n;
use vortex_agency::ui::pages::contact::{self, Effect, Message, Phase, State};
use vortex_agency::ui::theming::ThemeMode;

#[test]
fn persisted_locale_survives_a_simulated_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial preference: ru
    let initial = Config {
        general: GeneralConfig {
            language: Some("ru".to_string()),
            theme_mode: None,
        },
    };
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config");

    let (loaded, warning) = config::load_from_path(&config_path);
    assert!(warning.is_none());
    let i18n_ru = I18n::new(None, &loaded);
    assert_eq!(i18n_ru.current_locale().to_string(), "ru");
    assert_eq!(i18n_ru.tr("nav-home"), "Главная");

    // 2. Switch to en, persist, "reload"
    let mut updated = loaded;
    updated.general.language = Some("en".to_string());
    config::save_to_path(&updated, &config_path).expect("Failed to write updated config");

    let (reloaded, _) = config::load_from_path(&config_path);
    let i18n_en = I18n::new(None, &reloaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en");
    assert_eq!(i18n_en.tr("nav-home"), "Home");
}

#[test]
fn cli_override_beats_the_persisted_locale() {
    let config = Config {
        general: GeneralConfig {
            language: Some("ru".to_string()),
            theme_mode: None,
        },
    };
    let i18n = I18n::new(Some("en".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en");
}

#[test]
fn persisted_theme_mode_survives_a_simulated_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            language: None,
            theme_mode: Some(ThemeMode::Light),
        },
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config");

    let (loaded, _) = config::load_from_path(&config_path);
    assert_eq!(loaded.general.theme_mode, Some(ThemeMode::Light));

    // Toggle, persist, reload: the flipped mode is restored.
    let mut updated = loaded;
    updated.general.theme_mode = updated.general.theme_mode.map(ThemeMode::toggled);
    config::save_to_path(&updated, &config_path).expect("Failed to write updated config");

    let (reloaded, _) = config::load_from_path(&config_path);
    assert_eq!(reloaded.general.theme_mode, Some(ThemeMode::Dark));
}

#[test]
fn missing_translation_keys_echo_for_both_locales() {
    let mut i18n = I18n::default();
    for locale in ["en", "ru"] {
        i18n.set_locale(locale.parse().unwrap()).unwrap();
        assert_eq!(i18n.tr("definitely-not-a-key"), "definitely-not-a-key");
    }
}

#[test]
fn contact_form_end_to_end_scenario() {
    let i18n = I18n::default();
    let mut state = State::default();

    // Fill the form with the canonical valid submission.
    contact::update(&mut state, Message::NameChanged("Jo".to_string()));
    contact::update(
        &mut state,
        Message::EmailChanged("jo@example.com".to_string()),
    );
    contact::update(
        &mut state,
        Message::ProjectTypeSelected(contact_option(ProjectType::Fintech, &i18n)),
    );
    contact::update(
        &mut state,
        Message::MessageChanged("Interested in your services".to_string()),
    );

    // Validation passes and the submission enters the in-flight state.
    assert_eq!(
        contact::update(&mut state, Message::SubmitPressed),
        Effect::StartSubmission
    );
    assert_eq!(state.phase(), Phase::Submitting);
    assert!(!state.errors().has_errors());

    // A second submit while in flight is rejected.
    assert_eq!(contact::update(&mut state, Message::SubmitPressed), Effect::None);

    // The simulated delay resolves: submitted, then reset scheduled.
    assert_eq!(
        contact::update(&mut state, Message::SubmissionCompleted),
        Effect::ScheduleReset
    );
    assert_eq!(state.phase(), Phase::Submitted);

    // After the reset delay the form returns to its initial empty state.
    contact::update(&mut state, Message::ResetRequested);
    assert_eq!(state.phase(), Phase::Editing);
    assert!(state.form().name.is_empty());
    assert!(state.form().email.is_empty());
    assert!(state.form().project_type.is_none());
    assert!(state.form().message.is_empty());
}

/// Reproduces the wrapper the pick list hands back from the view.
fn contact_option(value: ProjectType, i18n: &I18n) -> contact::ProjectTypeOption {
    contact::ProjectTypeOption::new(value, i18n)
}
