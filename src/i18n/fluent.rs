// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Fallback locale when neither CLI, config, nor the OS yields a usable one.
const DEFAULT_LOCALE: &str = "en";

/// Localization store: owns the translation bundles and the active locale.
///
/// There is exactly one instance per application session, created during
/// startup and threaded through every view as part of the root state.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    /// Builds the bundles from the embedded `.ftl` assets and resolves the
    /// initial locale (CLI override → config → OS locale → default).
    ///
    /// # Panics
    ///
    /// Panics if an embedded translation table is malformed or contains
    /// duplicate message ids. The tables are compiled in, so this can only
    /// fire on a bad commit, never from user input.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            if let Some(locale_str) = filename.strip_suffix(".ftl") {
                if let Ok(locale) = locale_str.parse::<LanguageIdentifier>() {
                    if let Some(content) = Asset::get(filename) {
                        let res = FluentResource::try_new(
                            String::from_utf8_lossy(content.data.as_ref()).to_string(),
                        )
                        .expect("Failed to parse FTL file.");
                        let mut bundle = FluentBundle::new(vec![locale.clone()]);
                        bundle.add_resource(res).expect("Failed to add resource.");
                        bundles.insert(locale.clone(), bundle);
                        available_locales.push(locale);
                    }
                }
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Switches the active locale. Lookups reflect the change immediately.
    ///
    /// Locales outside the supported set are rejected and leave the current
    /// locale untouched.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> Result<()> {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            Ok(())
        } else {
            Err(Error::Locale(locale.to_string()))
        }
    }

    /// Returns the other member of the two-locale set, which drives the
    /// navbar language switch.
    pub fn toggled(&self) -> LanguageIdentifier {
        self.available_locales
            .iter()
            .find(|locale| **locale != self.current_locale)
            .cloned()
            .unwrap_or_else(|| self.current_locale.clone())
    }

    /// Looks up `key` in the active locale's table.
    ///
    /// A missing key is never fatal: a warning is emitted and the key is
    /// echoed back so every page still renders visible text.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        eprintln!("[WARN] Translation missing for key: {key}");
        key.to_string()
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI override
    if let Some(lang_str) = cli_lang {
        if let Some(lang) = match_available(&lang_str, available) {
            return Some(lang);
        }
    }

    // 2. Persisted preference
    if let Some(lang_str) = &config.general.language {
        if let Some(lang) = match_available(lang_str, available) {
            return Some(lang);
        }
    }

    // 3. OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Some(lang) = match_available(&os_locale_str, available) {
            return Some(lang);
        }
    }

    None
}

/// Matches a BCP-47 string against the supported set by primary language
/// subtag, so an OS locale like `en-US` still selects `en`. Unparseable or
/// unknown values yield `None` (treated as absent).
fn match_available(lang_str: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let lang: LanguageIdentifier = lang_str.parse().ok()?;
    available
        .iter()
        .find(|candidate| candidate.language == lang.language)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GeneralConfig};

    fn config_with_language(lang: &str) -> Config {
        Config {
            general: GeneralConfig {
                language: Some(lang.to_string()),
                ..GeneralConfig::default()
            },
        }
    }

    #[test]
    fn loads_both_embedded_locales() {
        let i18n = I18n::default();
        let names: Vec<String> = i18n
            .available_locales
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(names, vec!["en", "ru"]);
    }

    #[test]
    fn tr_returns_registered_string_for_both_locales() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap()).unwrap();
        assert_eq!(i18n.tr("nav-home"), "Home");
        assert_eq!(i18n.tr("contact-form-submit"), "Send Message");

        i18n.set_locale("ru".parse().unwrap()).unwrap();
        assert_eq!(i18n.tr("nav-home"), "Главная");
        assert_eq!(i18n.tr("contact-form-submit"), "Отправить");
    }

    #[test]
    fn tr_echoes_missing_key_for_every_locale() {
        let mut i18n = I18n::default();
        for locale in ["en", "ru"] {
            i18n.set_locale(locale.parse().unwrap()).unwrap();
            assert_eq!(i18n.tr("no-such-key"), "no-such-key");
        }
    }

    #[test]
    fn set_locale_round_trips_for_both_members() {
        let mut i18n = I18n::default();
        for locale in ["en", "ru"] {
            let id: LanguageIdentifier = locale.parse().unwrap();
            i18n.set_locale(id.clone()).unwrap();
            assert_eq!(i18n.current_locale(), &id);
        }
    }

    #[test]
    fn set_locale_rejects_unsupported_locale() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap()).unwrap();
        let err = i18n.set_locale("fr".parse().unwrap()).unwrap_err();
        assert!(matches!(err, Error::Locale(_)));
        assert_eq!(i18n.current_locale().to_string(), "en");
    }

    #[test]
    fn toggled_flips_between_the_two_locales() {
        let mut i18n = I18n::default();
        i18n.set_locale("en".parse().unwrap()).unwrap();
        assert_eq!(i18n.toggled().to_string(), "ru");
        i18n.set_locale("ru".parse().unwrap()).unwrap();
        assert_eq!(i18n.toggled().to_string(), "en");
    }

    #[test]
    fn resolve_locale_prefers_cli_over_config() {
        let config = config_with_language("ru");
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "ru".parse().unwrap()];
        let lang = resolve_locale(Some("en".to_string()), &config, &available);
        assert_eq!(lang, Some("en".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_reads_config() {
        let config = config_with_language("ru");
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "ru".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("ru".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_treats_unknown_persisted_value_as_absent() {
        let config = config_with_language("tlh-Latn");
        let available: Vec<LanguageIdentifier> = vec!["en".parse().unwrap()];
        // Falls through to the OS locale, which is system dependent; either
        // way the result must come from the available set.
        if let Some(lang) = resolve_locale(None, &config, &available) {
            assert!(available.contains(&lang));
        }
    }

    #[test]
    fn region_qualified_locale_matches_by_language_subtag() {
        let available: Vec<LanguageIdentifier> =
            vec!["en".parse().unwrap(), "ru".parse().unwrap()];
        let lang = match_available("ru-RU", &available);
        assert_eq!(lang, Some("ru".parse().unwrap()));
    }
}
