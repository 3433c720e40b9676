//! Locale registry: display metadata for every supported locale.
//!
//! The registry is a process-wide singleton built once behind a `OnceLock` and
//! never mutated afterwards, so it can be read from any rendering context.

use crate::i18n::Locale;
use serde::Serialize;
use std::sync::OnceLock;

/// Metadata for a supported locale.
///
/// Only the language selector consumes the names and flag; content resolution
/// looks at `enabled` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleConfig {
    pub locale: Locale,

    /// ISO 639-1 code (e.g., "en", "ja")
    pub code: &'static str,

    /// English name (e.g., "Japanese")
    pub name: &'static str,

    /// Native name (e.g., "日本語")
    pub native_name: &'static str,

    /// Flag glyph for the selector
    pub flag: &'static str,

    /// Whether this is the fallback locale (exactly one is)
    pub is_default: bool,

    /// Whether this locale is offered to visitors
    pub enabled: bool,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
}

static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry, initializing it on first call.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            locales: Locale::ALL.into_iter().map(default_config).collect(),
        })
    }

    /// Metadata for a locale.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        &self.locales[locale.index()]
    }

    /// Look a locale up by code (see `Locale::from_code` for the matching rules).
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        Locale::from_code(code).map(|locale| self.config(locale))
    }

    /// All enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|config| config.enabled).collect()
    }

    /// All locales, including disabled ones.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Metadata for the fallback locale.
    pub fn default_locale(&self) -> &LocaleConfig {
        self.config(Locale::DEFAULT)
    }

    /// Check if a code names a known, enabled locale.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|config| config.enabled)
            .unwrap_or(false)
    }
}

fn default_config(locale: Locale) -> LocaleConfig {
    let (name, native_name, flag) = match locale {
        Locale::En => ("English", "English", "🇺🇸"),
        Locale::Ja => ("Japanese", "日本語", "🇯🇵"),
        Locale::Zh => ("Chinese", "中文", "🇨🇳"),
        Locale::Es => ("Spanish", "Español", "🇪🇸"),
    };

    LocaleConfig {
        locale,
        code: locale.code(),
        name,
        native_name,
        flag,
        is_default: locale == Locale::DEFAULT,
        enabled: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LocaleRegistry::get();
        let registry2 = LocaleRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_config_english() {
        let config = LocaleRegistry::get().config(Locale::En);

        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_japanese() {
        let config = LocaleRegistry::get()
            .get_by_code("ja")
            .expect("ja should be registered");

        assert_eq!(config.locale, Locale::Ja);
        assert_eq!(config.native_name, "日本語");
        assert_eq!(config.flag, "🇯🇵");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LocaleRegistry::get().get_by_code("fr").is_none());
    }

    #[test]
    fn test_list_enabled_preserves_order() {
        let codes: Vec<_> = LocaleRegistry::get()
            .list_enabled()
            .iter()
            .map(|config| config.code)
            .collect();

        assert_eq!(codes, vec!["en", "ja", "zh", "es"]);
    }

    #[test]
    fn test_list_all_covers_every_locale() {
        assert_eq!(LocaleRegistry::get().list_all().len(), Locale::ALL.len());
    }

    #[test]
    fn test_exactly_one_default() {
        let defaults = LocaleRegistry::get()
            .list_all()
            .into_iter()
            .filter(|config| config.is_default)
            .count();

        assert_eq!(defaults, 1);
        assert_eq!(LocaleRegistry::get().default_locale().code, "en");
    }

    #[test]
    fn test_is_enabled() {
        let registry = LocaleRegistry::get();
        assert!(registry.is_enabled("es"));
        assert!(registry.is_enabled("zh-TW"));
        assert!(!registry.is_enabled("fr"));
    }
}
