//! Locale selection: which locale the visitor is currently browsing in.
//!
//! The selection is an explicit object handed to whoever renders pages. Changes
//! go through `change_locale`, and interested parties subscribe for a
//! synchronous callback instead of observing shared global state.

use crate::content::ContentError;
use crate::i18n::{Locale, LocaleConfig, LocaleRegistry};
use std::sync::{PoisonError, RwLock};
use tracing::{info, warn};

type Listener = Box<dyn Fn(Locale) + Send + Sync>;

/// The current locale plus its change listeners.
pub struct LocaleSelection {
    current: RwLock<Locale>,
    listeners: RwLock<Vec<Listener>>,
}

impl LocaleSelection {
    pub fn new(initial: Locale) -> Self {
        Self {
            current: RwLock::new(initial),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Start from a locale code; unknown or disabled codes start in the default locale.
    pub fn from_code(code: &str) -> Self {
        let initial = match enabled_locale(code) {
            Some(locale) => locale,
            None => {
                warn!(code, "Unsupported initial locale, using default");
                Locale::DEFAULT
            }
        };
        Self::new(initial)
    }

    pub fn current(&self) -> Locale {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Display metadata for the current locale.
    pub fn current_config(&self) -> &'static LocaleConfig {
        self.current().config()
    }

    /// Locales the visitor may switch to, in registry order.
    pub fn available(&self) -> Vec<&'static LocaleConfig> {
        LocaleRegistry::get().list_enabled()
    }

    /// Switch to another locale and notify listeners.
    ///
    /// # Returns
    /// * `Ok(Locale)` with the new locale
    /// * `Err(ContentError::UnknownLocale)` if the code is not an enabled locale;
    ///   the current selection is left unchanged
    pub fn change_locale(&self, code: &str) -> Result<Locale, ContentError> {
        let Some(locale) = enabled_locale(code) else {
            warn!(code, "Rejected locale change");
            return Err(ContentError::UnknownLocale(code.to_string()));
        };

        let previous = {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *current, locale)
        };
        info!(from = %previous, to = %locale, "Locale changed");

        let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(locale);
        }

        Ok(locale)
    }

    /// Register a callback invoked after every successful locale change.
    pub fn subscribe(&self, listener: impl Fn(Locale) + Send + Sync + 'static) {
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }
}

impl Default for LocaleSelection {
    fn default() -> Self {
        Self::new(Locale::DEFAULT)
    }
}

impl std::fmt::Debug for LocaleSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let listeners = self
            .listeners
            .read()
            .map(|listeners| listeners.len())
            .unwrap_or_default();
        f.debug_struct("LocaleSelection")
            .field("current", &self.current())
            .field("listeners", &listeners)
            .finish()
    }
}

fn enabled_locale(code: &str) -> Option<Locale> {
    Locale::from_code(code).filter(|locale| locale.is_enabled())
}
