use crate::content::BundleId;
use crate::i18n::Locale;
use std::path::PathBuf;

/// Errors raised while building content or changing locale.
///
/// Resolution itself never fails; these only surface from registry
/// construction and from the locale-selection collaborator.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A default-locale document was not authored.
    #[error("default-locale bundle \"{bundle}\" is missing")]
    MissingDefault { bundle: BundleId },

    /// A default-locale document could not be parsed into its bundle type.
    #[error("default-locale bundle \"{bundle}\" is invalid: {source}")]
    InvalidDefault {
        bundle: BundleId,
        #[source]
        source: serde_json::Error,
    },

    /// A document parsed as JSON but its root is not an object.
    #[error("bundle \"{bundle}\" for locale \"{locale}\" is not a JSON object")]
    NotAnObject { bundle: BundleId, locale: Locale },

    /// A content file exists but could not be read.
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A locale change named a code outside the enabled set.
    #[error("unknown or disabled locale code: \"{0}\"")]
    UnknownLocale(String),
}
