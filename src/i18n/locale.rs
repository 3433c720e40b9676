//! Locale type: the closed set of languages the site is authored in.
//!
//! Content bundles are keyed by `Locale`, so adding a variant here forces every
//! exhaustive match over locales (most importantly the embedded content table)
//! to be extended before the crate compiles again.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::Serialize;
use std::fmt;

/// A supported site locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ja,
    Zh,
    Es,
}

impl Locale {
    /// Every locale, in registry order.
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Ja, Locale::Zh, Locale::Es];

    /// The locale every lookup falls back to.
    pub const DEFAULT: Locale = Locale::En;

    /// Parse a locale code.
    ///
    /// Matching is case-insensitive and only the primary subtag is considered,
    /// so `"ja"`, `"JA"` and `"ja-JP"` all yield `Locale::Ja`.
    ///
    /// # Returns
    /// * `Some(Locale)` if the primary subtag names a known locale
    /// * `None` for anything else (including the empty string)
    pub fn from_code(code: &str) -> Option<Locale> {
        let primary = code.trim().split(['-', '_']).next().unwrap_or_default();

        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(primary))
    }

    /// Get the ISO 639-1 code (e.g., "en", "ja").
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
            Locale::Es => "es",
        }
    }

    /// Position of this locale in `Locale::ALL`.
    pub(crate) fn index(self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Ja => 1,
            Locale::Zh => 2,
            Locale::Es => 3,
        }
    }

    /// Get the display metadata for this locale from the registry.
    pub fn config(self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(self)
    }

    /// English name of the locale (e.g., "Japanese").
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Name of the locale in its own language (e.g., "日本語").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }

    /// Flag glyph shown next to the locale in the language selector.
    pub fn flag(self) -> &'static str {
        self.config().flag
    }

    pub fn is_default(self) -> bool {
        self == Locale::DEFAULT
    }

    pub fn is_enabled(self) -> bool {
        self.config().enabled
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
