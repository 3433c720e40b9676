//! Localized content bundles and their registry.
//!
//! # Architecture
//!
//! - `bundles`: typed, shape-complete documents, one struct per `BundleId`
//! - `source`: where documents come from (compiled-in or a content directory)
//! - `normalize`: merges a locale's document over the default locale's
//! - `registry`: builds every (bundle, locale) pair once and resolves lookups
//!
//! # Example
//!
//! ```rust,ignore
//! use royalty_site::content::{BundleId, ContentRegistry, HomeContent};
//!
//! let registry = ContentRegistry::embedded()?;
//!
//! // Unknown codes quietly resolve to English
//! let footer = registry.resolve(BundleId::Footer, "fr");
//! let home: &HomeContent = registry.get("ja");
//! ```

mod bundles;
mod error;
pub mod normalize;
mod options;
mod registry;
mod source;

pub use bundles::*;
pub use error::ContentError;
pub use options::{AnnualIncome, CatalogSize, IncomeConsistency, RoyaltyType, YearsActive};
pub use registry::{AuthoredDocument, ContentRegistry, LocaleCatalog};
pub use source::{ContentSource, DirectoryContent, EmbeddedContent};

use crate::i18n::Locale;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// Identifier of a content document.
///
/// The set is closed: every page and chrome component names its bundle
/// statically, so an unknown identifier cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleId {
    Header,
    Footer,
    Home,
    About,
    Invest,
    Pricing,
    Auctions,
    InstantOffer,
}

impl BundleId {
    pub const ALL: [BundleId; 8] = [
        BundleId::Header,
        BundleId::Footer,
        BundleId::Home,
        BundleId::About,
        BundleId::Invest,
        BundleId::Pricing,
        BundleId::Auctions,
        BundleId::InstantOffer,
    ];

    /// File stem of the document (e.g., `instant_offer` for `instant_offer.json`).
    pub fn stem(self) -> &'static str {
        match self {
            BundleId::Header => "header",
            BundleId::Footer => "footer",
            BundleId::Home => "home",
            BundleId::About => "about",
            BundleId::Invest => "invest",
            BundleId::Pricing => "pricing",
            BundleId::Auctions => "auctions",
            BundleId::InstantOffer => "instant_offer",
        }
    }
}

impl fmt::Display for BundleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// A resolved, normalized content document.
///
/// `locale` is the locale actually served, which is the default locale when
/// the requested one was unavailable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBundle {
    pub id: BundleId,
    pub locale: Locale,
    pub document: serde_json::Value,
}

/// A typed view of one bundle identifier.
pub trait Bundle: DeserializeOwned + Clone + Send + Sync + 'static {
    const ID: BundleId;

    /// Borrow this bundle out of a locale's catalog.
    fn from_catalog(catalog: &LocaleCatalog) -> &Self;
}
