//! Placeholder substitution for content strings.
//!
//! Content documents reference site identity through a closed set of
//! `{token}` markers. Substitution is a single left-to-right pass: inserted
//! values are never re-scanned, and braces that do not name a known token are
//! copied through untouched.

use crate::config::SiteConfig;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// A recognized placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    /// `{website.name}`
    WebsiteName,
    /// `{website.slogan}`
    WebsiteSlogan,
    /// `{primaryColor1}`
    PrimaryColor1,
    /// `{primaryColor3}`
    PrimaryColor3,
    /// `{websiteName}`, the spelling used by the header's logo alt text
    WebsiteNameAlias,
}

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_.]+)\}").expect("valid token regex"))
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::WebsiteName,
        Placeholder::WebsiteSlogan,
        Placeholder::PrimaryColor1,
        Placeholder::PrimaryColor3,
        Placeholder::WebsiteNameAlias,
    ];

    /// Token name as it appears between the braces.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::WebsiteName => "website.name",
            Placeholder::WebsiteSlogan => "website.slogan",
            Placeholder::PrimaryColor1 => "primaryColor1",
            Placeholder::PrimaryColor3 => "primaryColor3",
            Placeholder::WebsiteNameAlias => "websiteName",
        }
    }

    /// Full token including braces (e.g., `{website.name}`).
    pub fn token(self) -> String {
        format!("{{{}}}", self.name())
    }

    pub fn from_name(name: &str) -> Option<Placeholder> {
        Placeholder::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The configured value this token expands to.
    pub fn value(self, site: &SiteConfig) -> &str {
        match self {
            Placeholder::WebsiteName | Placeholder::WebsiteNameAlias => &site.name,
            Placeholder::WebsiteSlogan => &site.slogan,
            Placeholder::PrimaryColor1 => &site.colors.primary_color1,
            Placeholder::PrimaryColor3 => &site.colors.primary_color3,
        }
    }
}

/// Replace every recognized placeholder in `text` with its value from `site`.
///
/// Unrecognized `{...}` sequences are left as literal text. Never fails.
pub fn substitute(text: &str, site: &SiteConfig) -> String {
    if !text.contains('{') {
        return text.to_string();
    }

    token_regex()
        .replace_all(text, |caps: &Captures| match Placeholder::from_name(&caps[1]) {
            Some(placeholder) => placeholder.value(site).to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// `substitute` for optional text; absent text becomes the empty string.
pub fn substitute_opt(text: Option<&str>, site: &SiteConfig) -> String {
    text.map(|t| substitute(t, site)).unwrap_or_default()
}

/// Recognized placeholders in `text`, in order of appearance.
pub fn placeholders_in(text: &str) -> Vec<Placeholder> {
    token_regex()
        .captures_iter(text)
        .filter_map(|caps| Placeholder::from_name(&caps[1]))
        .collect()
}

/// Brace sequences in `text` that look like tokens but are not recognized.
pub fn unknown_tokens_in(text: &str) -> Vec<String> {
    token_regex()
        .captures_iter(text)
        .filter(|caps| Placeholder::from_name(&caps[1]).is_none())
        .map(|caps| caps[0].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorScheme;

    fn acme() -> SiteConfig {
        SiteConfig {
            name: "Acme".to_string(),
            slogan: "Trade Royalties".to_string(),
            colors: ColorScheme {
                primary_color1: "#4E3BCA".to_string(),
                primary_color3: "white".to_string(),
                ..ColorScheme::default()
            },
            ..SiteConfig::default()
        }
    }

    // ==================== substitute Tests ====================

    #[test]
    fn test_substitute_empty() {
        assert_eq!(substitute("", &acme()), "");
    }

    #[test]
    fn test_substitute_single_token() {
        assert_eq!(substitute("{website.name}", &acme()), "Acme");
    }

    #[test]
    fn test_substitute_multiple_tokens() {
        assert_eq!(
            substitute("Welcome to {website.name}, {website.slogan}", &acme()),
            "Welcome to Acme, Trade Royalties"
        );
    }

    #[test]
    fn test_substitute_repeated_token() {
        assert_eq!(
            substitute("{website.name} and {website.name}", &acme()),
            "Acme and Acme"
        );
    }

    #[test]
    fn test_substitute_colors() {
        assert_eq!(
            substitute("<span style=\"color:{primaryColor1}\">{primaryColor3}</span>", &acme()),
            "<span style=\"color:#4E3BCA\">white</span>"
        );
    }

    #[test]
    fn test_substitute_alias() {
        assert_eq!(substitute("{websiteName} logo", &acme()), "Acme logo");
    }

    #[test]
    fn test_unknown_token_passes_through() {
        assert_eq!(substitute("{unknownToken}", &acme()), "{unknownToken}");
        assert_eq!(
            substitute("{website.name} {website.url}", &acme()),
            "Acme {website.url}"
        );
    }

    #[test]
    fn test_unbalanced_braces_pass_through() {
        assert_eq!(substitute("{website.name", &acme()), "{website.name");
        assert_eq!(substitute("{} {{website.name}}", &acme()), "{} {Acme}");
    }

    #[test]
    fn test_unconfigured_value_is_empty() {
        let site = SiteConfig::default();
        assert_eq!(substitute("[{website.slogan}]", &site), "[]");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let site = SiteConfig {
            name: "{website.slogan}".to_string(),
            slogan: "never".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(substitute("{website.name}", &site), "{website.slogan}");
    }

    #[test]
    fn test_substitute_is_idempotent() {
        let once = substitute("Hi {website.name}, {nope}", &acme());
        assert_eq!(substitute(&once, &acme()), once);
    }

    #[test]
    fn test_substitute_opt() {
        assert_eq!(substitute_opt(None, &acme()), "");
        assert_eq!(substitute_opt(Some("{website.name}"), &acme()), "Acme");
    }

    // ==================== Token Scanning Tests ====================

    #[test]
    fn test_placeholders_in() {
        assert_eq!(
            placeholders_in("{website.slogan} by {website.name} {other}"),
            vec![Placeholder::WebsiteSlogan, Placeholder::WebsiteName]
        );
        assert!(placeholders_in("plain").is_empty());
    }

    #[test]
    fn test_unknown_tokens_in() {
        assert_eq!(
            unknown_tokens_in("{website.name} {websiteUrl} {x.y}"),
            vec!["{websiteUrl}", "{x.y}"]
        );
    }

    #[test]
    fn test_token_roundtrip() {
        for placeholder in Placeholder::ALL {
            assert_eq!(Placeholder::from_name(placeholder.name()), Some(placeholder));
            assert!(placeholder.token().starts_with('{'));
        }
    }
}
