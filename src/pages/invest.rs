//! Invest page: asset listings and the pitch for royalty investing.

use crate::content::{InvestContent, TitledList, TitledText};
use crate::pages::{RenderContext, SidebarView};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestView {
    pub title: String,
    pub stats: Vec<StatView>,
    pub assets_title: String,
    pub assets: Vec<AssetView>,
    pub why_royalties: CardListView,
    pub membership: MembershipView,
    pub investing: CardListView,
    pub get_started: StepsView,
    pub exchange: CardView,
    pub sidebar: SidebarView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetView {
    pub title: String,
    pub description: String,
    pub term: String,
    pub royalty_type: String,
    pub price: String,
    pub multiple: String,
    #[serde(rename = "yield")]
    pub yield_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardListView {
    pub title: String,
    pub items: Vec<CardView>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipView {
    pub title: String,
    pub description: String,
    pub cta: String,
    pub quote: String,
    pub quote_source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepsView {
    pub title: String,
    pub items: Vec<String>,
    pub cta: String,
}

fn card(ctx: &RenderContext<'_>, item: &TitledText) -> CardView {
    CardView {
        title: ctx.text(&item.title),
        description: ctx.text(&item.description),
    }
}

fn card_list(ctx: &RenderContext<'_>, list: &TitledList) -> CardListView {
    CardListView {
        title: ctx.text(&list.title),
        items: list.items.iter().map(|item| card(ctx, item)).collect(),
        cta: ctx.text(&list.cta),
    }
}

pub fn render(ctx: &RenderContext<'_>) -> InvestView {
    let content: &InvestContent = ctx.content();
    let membership = &content.membership;

    InvestView {
        title: ctx.text(&content.hero.title),
        stats: content
            .stats
            .iter()
            .map(|stat| StatView {
                value: stat.value.clone(),
                label: ctx.text(&stat.label),
            })
            .collect(),
        assets_title: ctx.text(&content.assets.title),
        assets: content
            .assets
            .items
            .iter()
            .map(|asset| AssetView {
                title: ctx.text(&asset.title),
                description: ctx.text(&asset.description),
                term: ctx.text(&asset.term),
                royalty_type: ctx.text(&asset.royalty_type),
                price: asset.price.clone(),
                multiple: asset.multiple.clone(),
                yield_rate: asset.yield_rate.clone(),
            })
            .collect(),
        why_royalties: card_list(ctx, &content.why_royalties),
        membership: MembershipView {
            title: ctx.text(&membership.title),
            description: ctx.text(&membership.description),
            cta: ctx.text(&membership.cta),
            quote: ctx.text(&membership.quote.text),
            quote_source: ctx.text(&membership.quote.source),
        },
        investing: card_list(ctx, &content.investing),
        get_started: StepsView {
            title: ctx.text(&content.get_started.title),
            items: ctx.texts(&content.get_started.items),
            cta: ctx.text(&content.get_started.cta),
        },
        exchange: card(ctx, &content.exchange),
        sidebar: SidebarView::render(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{ContentRegistry, FooterContent};

    #[test]
    fn test_invest_assets_keep_figures() {
        let registry = ContentRegistry::embedded().expect("Embedded content should build");
        let site = SiteConfig::embedded().expect("Embedded site should load");
        let ctx = RenderContext::new(&registry, &site, "en");
        let content: &InvestContent = ctx.content();

        let view = render(&ctx);
        assert_eq!(view.assets.len(), content.assets.items.len());
        for (asset, source) in view.assets.iter().zip(&content.assets.items) {
            assert_eq!(asset.yield_rate, source.yield_rate);
            assert_eq!(asset.multiple, source.multiple);
        }
    }

    #[test]
    fn test_invest_sidebar_uses_footer_bundle() {
        let registry = ContentRegistry::embedded().expect("Embedded content should build");
        let site = SiteConfig::embedded().expect("Embedded site should load");
        let ctx = RenderContext::new(&registry, &site, "ja");
        let footer: &FooterContent = ctx.content();

        let view = render(&ctx);
        assert_eq!(view.sidebar.sections.len(), footer.sections.len());
        assert_eq!(view.sidebar.sections[0].title, footer.sections[0].title);
    }
}
