use std::collections::HashMap;
use leptos::*;

/// Translation table for one language, embedded at compile time
type Translations = HashMap<String, String>;

pub const DEFAULT_LANGUAGE: &str = "en";

/// I18n context that provides translation functions
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub language: RwSignal<String>,
    translations: RwSignal<Translations>,
}

impl I18nContext {
    pub fn new(language: &str) -> Self {
        Self {
            language: create_rw_signal(normalize_language(language).to_string()),
            translations: create_rw_signal(load_translations(language)),
        }
    }

    /// Translate a key to the current language.
    /// Returns the key itself if translation is not found.
    pub fn t(&self, key: &str) -> String {
        self.translations
            .with(|t| t.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }

    /// Switches language; a no-op when it is already active.
    pub fn set_language(&self, lang: &str) {
        let lang = normalize_language(lang);
        if self.language.get_untracked() == lang {
            return;
        }
        self.language.set(lang.to_string());
        self.translations.set(load_translations(lang));
    }
}

/// Maps unsupported codes onto the default language.
pub fn normalize_language(lang: &str) -> &'static str {
    supported_languages()
        .into_iter()
        .map(|(code, _)| code)
        .find(|code| *code == lang)
        .unwrap_or(DEFAULT_LANGUAGE)
}

fn load_translations(lang: &str) -> Translations {
    let json = match normalize_language(lang) {
        "de" => include_str!("../translations/de.json"),
        _ => include_str!("../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_default()
}

pub fn provide_i18n(language: &str) -> I18nContext {
    let ctx = I18nContext::new(language);
    provide_context(ctx);
    ctx
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}

pub fn supported_languages() -> Vec<(&'static str, &'static str)> {
    vec![
        ("en", "English"),
        ("de", "Deutsch"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_translations_en() {
        let translations = load_translations("en");
        assert!(!translations.is_empty());
        assert_eq!(translations.get("weather.title").unwrap(), "Weather");
    }

    #[test]
    fn test_load_translations_de() {
        let translations = load_translations("de");
        assert!(!translations.is_empty());
        assert_eq!(translations.get("weather.title").unwrap(), "Wetter");
    }

    #[test]
    fn test_load_translations_fallback() {
        let translations = load_translations("fr");
        assert_eq!(translations.get("common.save").unwrap(), "Save");
    }

    #[test]
    fn test_languages_share_keys() {
        let en = load_translations("en");
        let de = load_translations("de");
        let mut missing: Vec<_> = en.keys().filter(|k| !de.contains_key(*k)).collect();
        missing.extend(de.keys().filter(|k| !en.contains_key(*k)));
        assert!(missing.is_empty(), "keys missing in one language: {:?}", missing);
    }

    #[test]
    fn test_every_label_key_is_translated() {
        let en = load_translations("en");
        for action in shared::EcoAction::all() {
            assert!(en.contains_key(&format!("eco.{}", action.as_str())));
        }
        for topic in shared::NotificationTopic::all() {
            assert!(en.contains_key(&format!("notifications.{}", topic.as_str())));
        }
        for role in shared::UserRole::all() {
            assert!(en.contains_key(&format!("role.{}", role.as_str())));
        }
        for label in ["Good", "Fair", "Moderate", "Poor", "Very Poor"] {
            assert!(en.contains_key(&format!("air.{}", label)));
        }
        for status in [
            shared::RsvpStatus::Going,
            shared::RsvpStatus::Maybe,
            shared::RsvpStatus::NotGoing,
        ] {
            assert!(en.contains_key(&format!("events.{}", status.as_str())));
        }
    }

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("de"), "de");
        assert_eq!(normalize_language("en"), "en");
        assert_eq!(normalize_language("klingon"), "en");
    }

    #[test]
    fn test_supported_languages() {
        let langs = supported_languages();
        assert_eq!(langs.len(), 2);
        assert!(langs.iter().any(|(code, _)| *code == "en"));
        assert!(langs.iter().any(|(code, _)| *code == "de"));
    }
}
