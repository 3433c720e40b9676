//! Landing page.

use crate::content::HomeContent;
use crate::pages::{LinkView, RenderContext};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub hero: HeroView,
    pub partners_title: String,
    pub stats_title: String,
    pub stats: Vec<StatView>,
    pub products: Vec<ProductView>,
    pub services: HeroView,
    pub dual_image: [PanelView; 2],
    pub feature: FeatureView,
    pub newsletter: NewsletterView,
    pub final_cta: FinalCtaView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatView {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub title: String,
    pub description: String,
    pub price: String,
    pub link: LinkView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureView {
    pub title: String,
    pub subtitles: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterView {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub options: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalCtaView {
    pub title: String,
    pub primary: String,
    pub secondary: String,
}

/// Label of the per-product link; not part of the authored copy.
const PRODUCT_LINK_LABEL: &str = "View Details";

pub fn render(ctx: &RenderContext<'_>) -> HomeView {
    let content: &HomeContent = ctx.content();
    let dual = &content.dual_image;
    let feature = &content.feature;
    let newsletter = &content.newsletter;

    HomeView {
        hero: HeroView {
            title: ctx.text(&content.hero.title),
            subtitle: ctx.text(&content.hero.subtitle),
            cta: ctx.text(&content.hero.cta),
        },
        partners_title: ctx.text(&content.partners.title),
        stats_title: ctx.text(&content.stats.title),
        stats: content
            .stats
            .stats
            .iter()
            .map(|stat| StatView {
                number: stat.number.clone(),
                label: ctx.text(&stat.label),
            })
            .collect(),
        products: content
            .products
            .items
            .iter()
            .map(|product| ProductView {
                title: ctx.text(&product.title),
                description: ctx.text(&product.description),
                price: product.price.clone(),
                link: LinkView::new(
                    ctx,
                    PRODUCT_LINK_LABEL,
                    if product.link.is_empty() { "#" } else { &product.link },
                ),
            })
            .collect(),
        services: HeroView {
            title: ctx.text(&content.services.title),
            subtitle: ctx.text(&content.services.description),
            cta: ctx.text(&content.services.cta),
        },
        dual_image: [
            PanelView {
                title: ctx.text(&dual.left_title),
                subtitle: ctx.text(&dual.left_subtitle),
                cta: ctx.text(&dual.left_cta),
            },
            PanelView {
                title: ctx.text(&dual.right_title),
                subtitle: ctx.text(&dual.right_subtitle),
                cta: ctx.text(&dual.right_cta),
            },
        ],
        feature: FeatureView {
            title: ctx.text(&feature.title),
            subtitles: vec![
                ctx.text(&feature.subtitle),
                ctx.text(&feature.subtitle1),
                ctx.text(&feature.subtitle2),
            ],
            cta: ctx.text(&feature.cta),
        },
        newsletter: NewsletterView {
            title: ctx.text(&newsletter.title),
            subtitle: ctx.text(&newsletter.subtitle),
            placeholder: ctx.text(&newsletter.placeholder),
            options: ctx.texts(&newsletter.options),
            cta: ctx.text(&newsletter.cta),
        },
        final_cta: FinalCtaView {
            title: ctx.text(&content.final_cta.title),
            primary: ctx.text(&content.final_cta.cta1),
            secondary: ctx.text(&content.final_cta.cta2),
        },
    }
}
