//! Content registry: every (bundle, locale) pair, resolved once at startup.
//!
//! The default locale is built first and must be complete. Every other locale
//! is normalized over it, and any document that is missing or unusable is
//! replaced by the default locale's bundle. After `build` returns nothing is
//! mutated, so lookups are plain map reads and need no locking.

use crate::content::normalize;
use crate::content::{
    AboutContent, AuctionsContent, Bundle, BundleId, ContentBundle, ContentError, ContentSource,
    EmbeddedContent, FooterContent, HeaderContent, HomeContent, InstantOfferContent,
    InvestContent, PricingContent,
};
use crate::i18n::Locale;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// A document as authored, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthoredDocument {
    Parsed(Value),
    Missing,
    /// Unreadable, invalid JSON, or not a JSON object
    Malformed(String),
}

/// Every typed bundle for one locale.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    pub header: HeaderContent,
    pub footer: FooterContent,
    pub home: HomeContent,
    pub about: AboutContent,
    pub invest: InvestContent,
    pub pricing: PricingContent,
    pub auctions: AuctionsContent,
    pub instant_offer: InstantOfferContent,
}

#[derive(Debug)]
struct LocaleEntry {
    bundles: HashMap<BundleId, ContentBundle>,
    catalog: LocaleCatalog,
}

/// Immutable mapping of bundle identifier × locale to resolved content.
#[derive(Debug)]
pub struct ContentRegistry {
    entries: HashMap<Locale, LocaleEntry>,
    authored: HashMap<(BundleId, Locale), AuthoredDocument>,
}

impl ContentRegistry {
    /// Build the registry from a content source.
    ///
    /// # Returns
    /// * `Ok(ContentRegistry)` once every pair has resolved content
    /// * `Err` only if a default-locale document is missing or invalid
    pub fn build(source: &dyn ContentSource) -> Result<Self, ContentError> {
        let mut authored = HashMap::new();
        let default_entry =
            EntryBuilder::new(source, Locale::DEFAULT, None, &mut authored).build()?;

        let mut entries = HashMap::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            if locale == Locale::DEFAULT {
                continue;
            }
            let entry =
                EntryBuilder::new(source, locale, Some(&default_entry), &mut authored).build()?;
            entries.insert(locale, entry);
        }
        entries.insert(Locale::DEFAULT, default_entry);

        let degraded = entries
            .iter()
            .flat_map(|(locale, entry)| entry.bundles.values().map(move |b| (locale, b)))
            .filter(|(locale, bundle)| bundle.locale != **locale)
            .count();

        info!(
            source = %source.describe(),
            locales = Locale::ALL.len(),
            bundles = BundleId::ALL.len(),
            degraded,
            "Content registry built"
        );

        Ok(Self { entries, authored })
    }

    /// Build the registry from the compiled-in documents.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::build(&EmbeddedContent)
    }

    /// The locale a requested code is served in.
    ///
    /// Unknown, malformed or disabled codes are expected input and silently
    /// map to the default locale.
    pub fn served_locale(&self, code: &str) -> Locale {
        match Locale::from_code(code) {
            Some(locale) if locale.is_enabled() => locale,
            _ => {
                debug!(code, "Unsupported locale requested, serving default");
                Locale::DEFAULT
            }
        }
    }

    /// Resolve a bundle for a locale code. Never fails.
    pub fn resolve(&self, bundle: BundleId, code: &str) -> &ContentBundle {
        &self.entry(self.served_locale(code)).bundles[&bundle]
    }

    /// Resolve a typed bundle for a locale code. Never fails.
    pub fn get<T: Bundle>(&self, code: &str) -> &T {
        T::from_catalog(self.catalog(code))
    }

    /// Every typed bundle for a locale code.
    pub fn catalog(&self, code: &str) -> &LocaleCatalog {
        &self.entry(self.served_locale(code)).catalog
    }

    /// The document as authored for a pair, before normalization.
    pub fn authored(&self, bundle: BundleId, locale: Locale) -> &AuthoredDocument {
        self.authored
            .get(&(bundle, locale))
            .unwrap_or(&AuthoredDocument::Missing)
    }

    fn entry(&self, locale: Locale) -> &LocaleEntry {
        &self.entries[&locale]
    }
}

struct EntryBuilder<'a> {
    source: &'a dyn ContentSource,
    locale: Locale,
    fallback: Option<&'a LocaleEntry>,
    bundles: HashMap<BundleId, ContentBundle>,
    authored: &'a mut HashMap<(BundleId, Locale), AuthoredDocument>,
}

impl<'a> EntryBuilder<'a> {
    fn new(
        source: &'a dyn ContentSource,
        locale: Locale,
        fallback: Option<&'a LocaleEntry>,
        authored: &'a mut HashMap<(BundleId, Locale), AuthoredDocument>,
    ) -> Self {
        Self {
            source,
            locale,
            fallback,
            bundles: HashMap::with_capacity(BundleId::ALL.len()),
            authored,
        }
    }

    fn build(mut self) -> Result<LocaleEntry, ContentError> {
        let catalog = LocaleCatalog {
            header: self.bundle()?,
            footer: self.bundle()?,
            home: self.bundle()?,
            about: self.bundle()?,
            invest: self.bundle()?,
            pricing: self.bundle()?,
            auctions: self.bundle()?,
            instant_offer: self.bundle()?,
        };

        Ok(LocaleEntry {
            bundles: self.bundles,
            catalog,
        })
    }

    fn bundle<T: Bundle>(&mut self) -> Result<T, ContentError> {
        let fallback = self.fallback;
        match fallback {
            None => self.default_bundle(),
            Some(fallback) => Ok(self.localized_bundle(fallback)),
        }
    }

    fn default_bundle<T: Bundle>(&mut self) -> Result<T, ContentError> {
        let (id, locale) = (T::ID, self.locale);

        let raw = self
            .source
            .load(id, locale)?
            .ok_or(ContentError::MissingDefault { bundle: id })?;
        let document: Value = serde_json::from_str(&raw)
            .map_err(|source| ContentError::InvalidDefault { bundle: id, source })?;
        if !document.is_object() {
            return Err(ContentError::NotAnObject { bundle: id, locale });
        }
        let typed = serde_json::from_value::<T>(document.clone())
            .map_err(|source| ContentError::InvalidDefault { bundle: id, source })?;

        self.authored
            .insert((id, locale), AuthoredDocument::Parsed(document.clone()));
        self.bundles.insert(
            id,
            ContentBundle {
                id,
                locale,
                document,
            },
        );
        Ok(typed)
    }

    fn localized_bundle<T: Bundle>(&mut self, fallback: &LocaleEntry) -> T {
        let (id, locale) = (T::ID, self.locale);
        let authored = read_authored(self.source, id, locale);
        let default_bundle = &fallback.bundles[&id];

        let resolved = match &authored {
            AuthoredDocument::Parsed(document) => {
                let merged = normalize::merge(&default_bundle.document, document);
                match serde_json::from_value::<T>(merged.clone()) {
                    Ok(typed) => Some((merged, typed)),
                    Err(err) => {
                        warn!(
                            bundle = %id,
                            %locale,
                            error = %err,
                            "Bundle does not fit its shape, serving default"
                        );
                        None
                    }
                }
            }
            AuthoredDocument::Missing => {
                warn!(bundle = %id, %locale, "Bundle not authored, serving default");
                None
            }
            AuthoredDocument::Malformed(reason) => {
                warn!(
                    bundle = %id,
                    %locale,
                    reason = %reason,
                    "Bundle is malformed, serving default"
                );
                None
            }
        };
        self.authored.insert((id, locale), authored);

        match resolved {
            Some((document, typed)) => {
                self.bundles.insert(
                    id,
                    ContentBundle {
                        id,
                        locale,
                        document,
                    },
                );
                typed
            }
            None => {
                self.bundles.insert(id, default_bundle.clone());
                T::from_catalog(&fallback.catalog).clone()
            }
        }
    }
}

fn read_authored(source: &dyn ContentSource, id: BundleId, locale: Locale) -> AuthoredDocument {
    match source.load(id, locale) {
        Ok(None) => AuthoredDocument::Missing,
        Ok(Some(raw)) => match serde_json::from_str::<Value>(&raw) {
            Ok(document) if document.is_object() => AuthoredDocument::Parsed(document),
            Ok(document) => AuthoredDocument::Malformed(format!(
                "root is {}, expected object",
                normalize::type_name(&document)
            )),
            Err(err) => AuthoredDocument::Malformed(err.to_string()),
        },
        Err(err) => AuthoredDocument::Malformed(err.to_string()),
    }
}
