//! Site header: logo, navigation, language selector and account actions.

use crate::content::HeaderContent;
use crate::i18n::LocaleRegistry;
use crate::pages::{LinkView, RenderContext};
use crate::session::AuthProvider;
use serde::Serialize;

pub const ROUTE_HOME: &str = "/";
pub const ROUTE_LISTINGS: &str = "/listings";
pub const ROUTE_GET_FUNDING: &str = "/get-funding";
pub const ROUTE_INVEST: &str = "/invest";
pub const ROUTE_BLOG: &str = "/blog";
pub const ROUTE_LOGIN: &str = "/login";
pub const ROUTE_SIGNUP: &str = "/signup";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub site_name: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub favicon: String,
    pub nav: Vec<LinkView>,
    pub language_selector: LanguageSelectorView,
    pub account: AccountView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSelectorView {
    pub heading: String,
    pub change_language_label: String,
    pub options: Vec<LanguageOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AccountView {
    SignedIn { name: String, logout_label: String },
    SignedOut { login: LinkView, signup: LinkView },
}

pub fn render(ctx: &RenderContext<'_>) -> HeaderView {
    let content: &HeaderContent = ctx.content();
    let nav = &content.nav;
    let current = ctx.served_locale();

    let options = LocaleRegistry::get()
        .list_enabled()
        .into_iter()
        .map(|config| LanguageOption {
            code: config.code,
            name: config.name,
            flag: config.flag,
            is_current: config.locale == current,
        })
        .collect();

    let account = match ctx.user {
        Some(user) if user.is_authenticated => AccountView::SignedIn {
            name: user.name.clone(),
            logout_label: ctx.text(&nav.logout),
        },
        _ => AccountView::SignedOut {
            login: LinkView::new(ctx, &nav.login, ROUTE_LOGIN),
            signup: LinkView::new(ctx, &nav.signup, ROUTE_SIGNUP),
        },
    };

    HeaderView {
        site_name: ctx.site.name.clone(),
        logo_src: ctx.site.logo.clone(),
        logo_alt: ctx.text(&content.logo_alt),
        favicon: ctx.site.favicon.clone(),
        nav: vec![
            LinkView::new(ctx, &nav.listings, ROUTE_LISTINGS),
            LinkView::new(ctx, &nav.get_funding, ROUTE_GET_FUNDING),
            LinkView::new(ctx, &nav.invest, ROUTE_INVEST),
            LinkView::new(ctx, &nav.blog, ROUTE_BLOG),
        ],
        language_selector: LanguageSelectorView {
            heading: ctx.text(&content.language_selector.heading),
            change_language_label: ctx.text(&content.language_selector.change_language_label),
            options,
        },
        account,
    }
}

/// Sign the visitor out and return the route to navigate to.
pub fn logout(auth: &dyn AuthProvider) -> &'static str {
    auth.logout();
    ROUTE_HOME
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentRegistry;
    use crate::session::{CurrentUser, SessionAuth};

    fn fixtures() -> (ContentRegistry, SiteConfig) {
        (
            ContentRegistry::embedded().expect("Embedded content should build"),
            SiteConfig::embedded().expect("Embedded site should load"),
        )
    }

    #[test]
    fn test_logo_alt_substitutes_site_name() {
        let (registry, site) = fixtures();
        let view = render(&RenderContext::new(&registry, &site, "en"));

        assert!(view.logo_alt.contains("Royalty Exchange"));
        assert!(!view.logo_alt.contains('{'));
        assert_eq!(view.site_name, "Royalty Exchange");
        assert_eq!(view.logo_src, site.logo);
    }

    #[test]
    fn test_nav_routes_are_fixed() {
        let (registry, site) = fixtures();

        for code in ["en", "ja"] {
            let view = render(&RenderContext::new(&registry, &site, code));
            let paths: Vec<_> = view.nav.iter().map(|l| l.path.as_str()).collect();
            assert_eq!(paths, vec![ROUTE_LISTINGS, ROUTE_GET_FUNDING, ROUTE_INVEST, ROUTE_BLOG]);
        }
    }

    #[test]
    fn test_language_selector_marks_current() {
        let (registry, site) = fixtures();
        let view = render(&RenderContext::new(&registry, &site, "zh"));

        let current: Vec<_> = view
            .language_selector
            .options
            .iter()
            .filter(|o| o.is_current)
            .map(|o| o.code)
            .collect();
        assert_eq!(current, vec!["zh"]);
        assert_eq!(view.language_selector.options.len(), 4);
    }

    #[test]
    fn test_unknown_locale_marks_default_current() {
        let (registry, site) = fixtures();
        let view = render(&RenderContext::new(&registry, &site, "ko"));

        let current = view.language_selector.options.iter().find(|o| o.is_current);
        assert_eq!(current.map(|o| o.code), Some("en"));
    }

    #[test]
    fn test_signed_out_account_actions() {
        let (registry, site) = fixtures();
        let view = render(&RenderContext::new(&registry, &site, "en"));

        match view.account {
            AccountView::SignedOut { login, signup } => {
                assert_eq!(login.path, ROUTE_LOGIN);
                assert_eq!(signup.path, ROUTE_SIGNUP);
            }
            other => panic!("Expected signed out, got {other:?}"),
        }
    }

    #[test]
    fn test_signed_in_account_actions() {
        let (registry, site) = fixtures();
        let user = CurrentUser {
            is_authenticated: true,
            name: "Ada".to_string(),
        };
        let ctx = RenderContext::new(&registry, &site, "es").with_user(Some(&user));
        let content: &HeaderContent = ctx.content();

        match render(&ctx).account {
            AccountView::SignedIn { name, logout_label } => {
                assert_eq!(name, "Ada");
                assert_eq!(logout_label, content.nav.logout);
            }
            other => panic!("Expected signed in, got {other:?}"),
        }
    }

    #[test]
    fn test_logout_returns_home() {
        let auth = SessionAuth::signed_in("Ada");
        assert_eq!(logout(&auth), ROUTE_HOME);
        assert!(auth.current_user().is_none());
    }
}
