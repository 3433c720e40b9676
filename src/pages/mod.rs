//! Page views built from resolved content.
//!
//! Each page resolves its own bundle through the `RenderContext`, substitutes
//! placeholders in every string it shows, and maps content lists 1:1 (in
//! source order) onto view items. Views are plain serializable data; markup and
//! animation belong to whatever draws them.

pub mod about;
pub mod auctions;
pub mod footer;
pub mod header;
pub mod home;
pub mod instant_offer;
pub mod invest;
pub mod pricing;

use crate::config::SiteConfig;
use crate::content::{Bundle, BundleId, ContentRegistry, FooterContent, NavLink, SocialLink};
use crate::i18n::{substitute, Locale};
use crate::session::CurrentUser;
use serde::Serialize;

/// Everything a page needs to render, borrowed for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub registry: &'a ContentRegistry,
    pub site: &'a SiteConfig,
    /// Requested locale code, exactly as supplied by the locale selection
    pub locale: &'a str,
    pub user: Option<&'a CurrentUser>,
}

impl<'a> RenderContext<'a> {
    pub fn new(registry: &'a ContentRegistry, site: &'a SiteConfig, locale: &'a str) -> Self {
        Self {
            registry,
            site,
            locale,
            user: None,
        }
    }

    pub fn with_user(self, user: Option<&'a CurrentUser>) -> Self {
        Self { user, ..self }
    }

    /// The typed bundle for this render's locale.
    pub fn content<T: Bundle>(&self) -> &'a T {
        self.registry.get(self.locale)
    }

    /// The locale content is actually served in.
    pub fn served_locale(&self) -> Locale {
        self.registry.served_locale(self.locale)
    }

    /// Substitute placeholders in one string.
    pub fn text(&self, text: &str) -> String {
        substitute(text, self.site)
    }

    /// Substitute placeholders in every string of a list, preserving order.
    pub fn texts(&self, items: &[String]) -> Vec<String> {
        items.iter().map(|item| self.text(item)).collect()
    }
}

/// A routed page of the site (the header and footer are chrome, not pages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Home,
    About,
    Invest,
    Pricing,
    Auctions,
    InstantOffer,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        PageKind::Home,
        PageKind::About,
        PageKind::Invest,
        PageKind::Pricing,
        PageKind::Auctions,
        PageKind::InstantOffer,
    ];

    pub fn route(self) -> &'static str {
        match self {
            PageKind::Home => "/",
            PageKind::About => "/about",
            PageKind::Invest => "/invest",
            PageKind::Pricing => "/pricing",
            PageKind::Auctions => "/auctions",
            PageKind::InstantOffer => "/instant-offer",
        }
    }

    /// The bundle this page's own content comes from.
    pub fn bundle(self) -> BundleId {
        match self {
            PageKind::Home => BundleId::Home,
            PageKind::About => BundleId::About,
            PageKind::Invest => BundleId::Invest,
            PageKind::Pricing => BundleId::Pricing,
            PageKind::Auctions => BundleId::Auctions,
            PageKind::InstantOffer => BundleId::InstantOffer,
        }
    }

    pub fn from_route(route: &str) -> Option<PageKind> {
        PageKind::ALL.into_iter().find(|page| page.route() == route)
    }

    /// Render the page view as JSON.
    pub fn render_json(self, ctx: &RenderContext<'_>) -> serde_json::Result<serde_json::Value> {
        match self {
            PageKind::Home => serde_json::to_value(home::render(ctx)),
            PageKind::About => serde_json::to_value(about::render(ctx)),
            PageKind::Invest => serde_json::to_value(invest::render(ctx)),
            PageKind::Pricing => serde_json::to_value(pricing::render(ctx)),
            PageKind::Auctions => serde_json::to_value(auctions::render(ctx)),
            PageKind::InstantOffer => serde_json::to_value(instant_offer::render(ctx)),
        }
    }
}

// ==================== Shared View Pieces ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub path: String,
}

impl LinkView {
    fn new(ctx: &RenderContext<'_>, label: &str, path: &str) -> Self {
        Self {
            label: ctx.text(label),
            path: path.to_string(),
        }
    }

    fn from_nav(ctx: &RenderContext<'_>, link: &NavLink) -> Self {
        Self::new(ctx, &link.label, &link.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSectionView {
    pub id: String,
    pub title: String,
    pub links: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialView {
    pub name: String,
    pub link: String,
}

impl From<&SocialLink> for SocialView {
    fn from(link: &SocialLink) -> Self {
        Self {
            name: link.name.clone(),
            link: link.link.clone(),
        }
    }
}

/// Link sidebar shown next to the invest and pricing content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub sections: Vec<LinkSectionView>,
    pub social: Vec<SocialView>,
    pub copyright: Vec<String>,
}

impl SidebarView {
    /// Built from the footer bundle, resolved for this render only.
    fn render(ctx: &RenderContext<'_>) -> Self {
        let footer: &FooterContent = ctx.content();

        Self {
            sections: footer
                .sections
                .iter()
                .map(|section| LinkSectionView {
                    id: section.id.clone(),
                    title: ctx.text(&section.title),
                    links: section.links.iter().map(|l| LinkView::from_nav(ctx, l)).collect(),
                })
                .collect(),
            social: footer.social.links.iter().map(SocialView::from).collect(),
            copyright: copyright_lines(ctx, footer),
        }
    }
}

/// Copyright notice, address, phone and terms, in that order.
fn copyright_lines(ctx: &RenderContext<'_>, footer: &FooterContent) -> Vec<String> {
    let copyright = &footer.copyright;
    vec![
        ctx.text(&copyright.text),
        ctx.text(&copyright.privacy),
        ctx.text(&copyright.cookies),
        ctx.text(&copyright.terms),
    ]
}

/// First `max` non-empty lines of a multi-line text.
fn leading_lines(text: &str, max: usize) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(max)
        .map(str::to_string)
        .collect()
}
