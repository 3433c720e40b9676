//! Content sources: where raw bundle documents come from.

use crate::content::{BundleId, ContentError};
use crate::i18n::Locale;
use std::path::{Path, PathBuf};

/// Supplies the raw JSON text of a (bundle, locale) document.
pub trait ContentSource {
    /// Load one document.
    ///
    /// # Returns
    /// * `Ok(Some(text))` if the document exists
    /// * `Ok(None)` if it was never authored
    /// * `Err` if it exists but could not be read
    fn load(&self, bundle: BundleId, locale: Locale) -> Result<Option<String>, ContentError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Documents compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedContent;

macro_rules! content_file {
    ($locale:literal, $stem:literal) => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/content/",
            $locale,
            "/",
            $stem,
            ".json"
        ))
    };
}

/// The compiled-in document table.
///
/// The match is exhaustive over both enums, so a new locale or bundle does not
/// compile until its documents are listed here.
fn embedded_document(bundle: BundleId, locale: Locale) -> &'static str {
    use BundleId as B;
    use Locale as L;

    match (bundle, locale) {
        (B::Header, L::En) => content_file!("en", "header"),
        (B::Header, L::Ja) => content_file!("ja", "header"),
        (B::Header, L::Zh) => content_file!("zh", "header"),
        (B::Header, L::Es) => content_file!("es", "header"),

        (B::Footer, L::En) => content_file!("en", "footer"),
        (B::Footer, L::Ja) => content_file!("ja", "footer"),
        (B::Footer, L::Zh) => content_file!("zh", "footer"),
        (B::Footer, L::Es) => content_file!("es", "footer"),

        (B::Home, L::En) => content_file!("en", "home"),
        (B::Home, L::Ja) => content_file!("ja", "home"),
        (B::Home, L::Zh) => content_file!("zh", "home"),
        (B::Home, L::Es) => content_file!("es", "home"),

        (B::About, L::En) => content_file!("en", "about"),
        (B::About, L::Ja) => content_file!("ja", "about"),
        (B::About, L::Zh) => content_file!("zh", "about"),
        (B::About, L::Es) => content_file!("es", "about"),

        (B::Invest, L::En) => content_file!("en", "invest"),
        (B::Invest, L::Ja) => content_file!("ja", "invest"),
        (B::Invest, L::Zh) => content_file!("zh", "invest"),
        (B::Invest, L::Es) => content_file!("es", "invest"),

        (B::Pricing, L::En) => content_file!("en", "pricing"),
        (B::Pricing, L::Ja) => content_file!("ja", "pricing"),
        (B::Pricing, L::Zh) => content_file!("zh", "pricing"),
        (B::Pricing, L::Es) => content_file!("es", "pricing"),

        (B::Auctions, L::En) => content_file!("en", "auctions"),
        (B::Auctions, L::Ja) => content_file!("ja", "auctions"),
        (B::Auctions, L::Zh) => content_file!("zh", "auctions"),
        (B::Auctions, L::Es) => content_file!("es", "auctions"),

        (B::InstantOffer, L::En) => content_file!("en", "instant_offer"),
        (B::InstantOffer, L::Ja) => content_file!("ja", "instant_offer"),
        (B::InstantOffer, L::Zh) => content_file!("zh", "instant_offer"),
        (B::InstantOffer, L::Es) => content_file!("es", "instant_offer"),
    }
}

impl ContentSource for EmbeddedContent {
    fn load(&self, bundle: BundleId, locale: Locale) -> Result<Option<String>, ContentError> {
        Ok(Some(embedded_document(bundle, locale).to_string()))
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

/// Documents read from `<root>/<locale>/<bundle>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryContent {
    root: PathBuf,
}

impl DirectoryContent {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a (bundle, locale) document under the root.
    pub fn path_for(&self, bundle: BundleId, locale: Locale) -> PathBuf {
        self.root
            .join(locale.code())
            .join(format!("{}.json", bundle.stem()))
    }
}

impl ContentSource for DirectoryContent {
    fn load(&self, bundle: BundleId, locale: Locale) -> Result<Option<String>, ContentError> {
        let path = self.path_for(bundle, locale);

        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ContentError::Io { path, source }),
        }
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
