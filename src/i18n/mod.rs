//! Internationalization (i18n) module for multi-locale support.
//!
//! This module owns everything locale-related that is independent of any one
//! content document: the set of locales, their display metadata, the visitor's
//! current selection, placeholder substitution and cross-locale validation.
//!
//! # Architecture
//!
//! - `locale`: closed `Locale` enum and code parsing
//! - `registry`: single source of truth for locale display metadata
//! - `selection`: the visitor's current locale with change notification
//! - `placeholder`: `{token}` substitution from the site configuration
//! - `validator`: shape and placeholder parity checks across locales
//!
//! # Example
//!
//! ```rust,ignore
//! use royalty_site::i18n::{substitute, Locale, LocaleSelection};
//!
//! let selection = LocaleSelection::from_code("ja");
//! selection.change_locale("es")?;
//!
//! let title = substitute("Welcome to {website.name}", &site);
//! ```

mod locale;
pub mod placeholder;
mod registry;
mod selection;
mod validator;

pub use locale::Locale;
pub use placeholder::{substitute, substitute_opt, Placeholder};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use selection::LocaleSelection;
pub use validator::{ContentValidator, ValidationReport};
