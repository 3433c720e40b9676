//! Content validation across locales.
//!
//! Every locale must author the same document shape as the default locale:
//! same keys, same array lengths, same JSON types. Localized strings must keep
//! the placeholders of the string they translate. The registry tolerates
//! violations at runtime by normalizing and falling back; this module reports
//! them so they can be fixed at the source.

use crate::content::normalize::{element_id, find_by_id, is_id_keyed, type_name};
use crate::content::{
    AnnualIncome, AuthoredDocument, BundleId, CatalogSize, ContentRegistry, IncomeConsistency,
    InstantOfferContent, OptionLabel, RoyaltyType, YearsActive,
};
use crate::i18n::placeholder::{placeholders_in, unknown_tokens_in};
use crate::i18n::Locale;
use serde_json::Value;

/// Validation report containing errors and warnings about authored content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Shape violations: content that had to be replaced or patched at runtime
    pub errors: Vec<String>,

    /// Suspicious content that still renders (extra keys, placeholder drift)
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for authored content.
pub struct ContentValidator;

impl ContentValidator {
    /// Validate every authored document in the registry against the default locale.
    pub fn validate(registry: &ContentRegistry) -> ValidationReport {
        let mut report = ValidationReport::new();

        for bundle in BundleId::ALL {
            let default = match registry.authored(bundle, Locale::DEFAULT) {
                AuthoredDocument::Parsed(document) => document,
                _ => {
                    report.errors.push(format!(
                        "{bundle}/{}: default document unavailable",
                        Locale::DEFAULT
                    ));
                    continue;
                }
            };
            let default_context = format!("{bundle}/{}", Locale::DEFAULT);
            check_unknown_tokens(&default_context, "", default, &mut report);

            for locale in Locale::ALL.into_iter().filter(|l| *l != Locale::DEFAULT) {
                let context = format!("{bundle}/{locale}");
                match registry.authored(bundle, locale) {
                    AuthoredDocument::Parsed(document) => {
                        compare(&context, "", default, document, &mut report);
                    }
                    AuthoredDocument::Missing => {
                        report.errors.push(format!("{context}: not authored"));
                    }
                    AuthoredDocument::Malformed(reason) => {
                        report.errors.push(format!("{context}: malformed ({reason})"));
                    }
                }
            }
        }

        for locale in Locale::ALL {
            let offer: &InstantOfferContent = registry.get(locale.code());
            check_offer_options(locale, offer, &mut report);
        }

        report
    }

    /// Compare one localized document against its default, outside a registry.
    pub fn validate_document(
        context: &str,
        default: &Value,
        localized: &Value,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        compare(context, "", default, localized, &mut report);
        report
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

fn compare(
    context: &str,
    path: &str,
    default: &Value,
    localized: &Value,
    report: &mut ValidationReport,
) {
    match (default, localized) {
        (Value::Object(base), Value::Object(other)) => {
            for (key, base_value) in base {
                let child = child_path(path, key);
                match other.get(key) {
                    Some(other_value) => compare(context, &child, base_value, other_value, report),
                    None => report.errors.push(format!("{context}: missing key {child}")),
                }
            }
            for key in other.keys().filter(|key| !base.contains_key(*key)) {
                report
                    .warnings
                    .push(format!("{context}: extra key {}", child_path(path, key)));
            }
        }
        (Value::Array(base), Value::Array(other)) if is_id_keyed(base) && is_id_keyed(other) => {
            for base_value in base {
                let id = element_id(base_value).unwrap_or_default();
                let child = format!("{path}[id={id}]");
                match find_by_id(other, Some(id)) {
                    Some(other_value) => compare(context, &child, base_value, other_value, report),
                    None => report.errors.push(format!("{context}: missing element {child}")),
                }
            }
            for other_value in other {
                let id = element_id(other_value).unwrap_or_default();
                if find_by_id(base, Some(id)).is_none() {
                    report
                        .warnings
                        .push(format!("{context}: extra element {path}[id={id}]"));
                }
            }
        }
        (Value::Array(base), Value::Array(other)) => {
            if base.len() != other.len() {
                report.errors.push(format!(
                    "{context}: array length mismatch at {}: default has {}, locale has {}",
                    display_path(path),
                    base.len(),
                    other.len()
                ));
            }
            for (index, (base_value, other_value)) in base.iter().zip(other).enumerate() {
                compare(context, &format!("{path}[{index}]"), base_value, other_value, report);
            }
        }
        (Value::String(base), Value::String(other)) => {
            let mut expected = placeholders_in(base);
            let mut found = placeholders_in(other);
            expected.sort_unstable();
            expected.dedup();
            found.sort_unstable();
            found.dedup();
            if expected != found {
                report.warnings.push(format!(
                    "{context}: placeholder mismatch at {}: default has {:?}, locale has {:?}",
                    display_path(path),
                    tokens(&expected),
                    tokens(&found)
                ));
            }
            check_unknown_tokens(context, path, localized, report);
        }
        _ if type_name(default) == type_name(localized) => {}
        _ => report.errors.push(format!(
            "{context}: type mismatch at {}: expected {}, found {}",
            display_path(path),
            type_name(default),
            type_name(localized)
        )),
    }
}

fn tokens(placeholders: &[crate::i18n::Placeholder]) -> Vec<String> {
    placeholders.iter().map(|p| p.token()).collect()
}

fn check_unknown_tokens(context: &str, path: &str, value: &Value, report: &mut ValidationReport) {
    match value {
        Value::String(text) => {
            let unknown = unknown_tokens_in(text);
            if !unknown.is_empty() {
                report.warnings.push(format!(
                    "{context}: unrecognized tokens at {}: {:?}",
                    display_path(path),
                    unknown
                ));
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                check_unknown_tokens(context, &child_path(path, key), child, report);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                check_unknown_tokens(context, &format!("{path}[{index}]"), child, report);
            }
        }
        _ => {}
    }
}

fn check_offer_options(locale: Locale, offer: &InstantOfferContent, report: &mut ValidationReport) {
    let options = &offer.options;
    let groups: [(&str, &[OptionLabel], Vec<&str>); 5] = [
        ("royaltyType", options.royalty_type.as_slice(), RoyaltyType::values()),
        ("catalogSize", options.catalog_size.as_slice(), CatalogSize::values()),
        ("annualIncome", options.annual_income.as_slice(), AnnualIncome::values()),
        ("incomeConsistency", options.income_consistency.as_slice(), IncomeConsistency::values()),
        ("yearsActive", options.years_active.as_slice(), YearsActive::values()),
    ];

    for (name, labels, expected) in groups {
        let values: Vec<&str> = labels.iter().map(|label| label.value.as_str()).collect();
        if values != expected {
            report.errors.push(format!(
                "{}/{locale}: options.{name} values {:?} do not match {:?}",
                BundleId::InstantOffer,
                values,
                expected
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(default: Value, localized: Value) -> ValidationReport {
        ContentValidator::validate_document("home/ja", &default, &localized)
    }

    // ==================== Shape Tests ====================

    #[test]
    fn test_identical_shape_is_clean() {
        let report = validate(
            json!({"hero": {"title": "Welcome to {website.name}"}, "items": ["a", "b"]}),
            json!({"hero": {"title": "{website.name}へようこそ"}, "items": ["あ", "い"]}),
        );
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn test_missing_key_is_error() {
        let report = validate(
            json!({"hero": {"title": "t", "cta": "c"}}),
            json!({"hero": {"title": "t"}}),
        );

        assert!(report.has_errors());
        assert_eq!(report.errors, vec!["home/ja: missing key hero.cta"]);
    }

    #[test]
    fn test_extra_key_is_warning() {
        let report = validate(json!({"title": "t"}), json!({"title": "t", "subtitle": "s"}));

        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("extra key subtitle"));
    }

    #[test]
    fn test_array_length_mismatch_is_error() {
        let report = validate(
            json!({"stats": [{"label": "a"}, {"label": "b"}]}),
            json!({"stats": [{"label": "a"}]}),
        );

        assert!(report.errors[0].contains("array length mismatch at stats"));
        assert!(report.errors[0].contains("default has 2, locale has 1"));
    }

    #[test]
    fn test_id_keyed_arrays_compare_by_id() {
        let report = validate(
            json!({"sections": [{"id": "a", "links": ["/x"]}, {"id": "b", "links": ["/y", "/z"]}]}),
            json!({"sections": [{"id": "b", "links": ["/y", "/z"]}, {"id": "a", "links": ["/x"]}]}),
        );

        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn test_missing_id_element_is_error() {
        let report = validate(
            json!({"sections": [{"id": "a", "title": "A"}, {"id": "b", "title": "B"}]}),
            json!({"sections": [{"id": "b"}, {"id": "c", "title": "C"}]}),
        );

        assert_eq!(
            report.errors,
            vec![
                "home/ja: missing element sections[id=a]",
                "home/ja: missing key sections[id=b].title",
            ]
        );
        assert_eq!(report.warnings, vec!["home/ja: extra element sections[id=c]"]);
    }

    #[test]
    fn test_type_mismatch_is_error() {
        let report = validate(json!({"options": ["a"]}), json!({"options": "a"}));

        assert!(report.errors[0]
            .contains("type mismatch at options: expected array, found string"));
    }

    #[test]
    fn test_nested_array_paths() {
        let report = validate(
            json!({"sections": [{"links": [{"label": "x", "path": "/"}]}]}),
            json!({"sections": [{"links": [{"label": "x"}]}]}),
        );

        assert_eq!(report.errors, vec!["home/ja: missing key sections[0].links[0].path"]);
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_dropped_placeholder_is_warning() {
        let report = validate(
            json!({"title": "Welcome to {website.name}"}),
            json!({"title": "Bienvenido"}),
        );

        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("placeholder mismatch at title"));
        assert!(report.warnings[0].contains("{website.name}"));
    }

    #[test]
    fn test_reordered_placeholders_are_fine() {
        let report = validate(
            json!({"title": "{website.name}: {website.slogan}"}),
            json!({"title": "{website.slogan} — {website.name}"}),
        );
        assert!(report.is_clean());
    }

    #[test]
    fn test_unknown_token_is_warning() {
        let report = validate(json!({"title": "Hi"}), json!({"title": "Hola {website.nmae}"}));

        assert!(report.warnings.iter().any(|w| w.contains("unrecognized tokens")));
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::default();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    // ==================== Registry Tests ====================

    #[test]
    fn test_shipped_content_is_clean() {
        let registry = ContentRegistry::embedded().expect("Embedded content should build");
        let report = ContentValidator::validate(&registry);

        assert!(report.is_clean(), "errors: {:?}\nwarnings: {:?}", report.errors, report.warnings);
    }
}
