//! Auctions page.

use crate::content::AuctionsContent;
use crate::pages::RenderContext;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionsView {
    pub hero: AuctionsHeroView,
    pub live_title: String,
    pub auctions: Vec<AuctionView>,
    pub steps_title: String,
    pub steps: Vec<StepView>,
    pub benefits_title: String,
    pub benefits: Vec<BenefitView>,
    pub testimonials_title: String,
    pub testimonials: Vec<TestimonialView>,
    pub cta: CtaView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionsHeroView {
    pub title: String,
    pub description: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionView {
    pub title: String,
    pub description: String,
    pub image: String,
    pub status: String,
    pub current_bid_label: String,
    pub current_bid: String,
    pub time_left_label: String,
    pub time_left: String,
    pub bid_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepView {
    /// 1-based position in the list
    pub number: usize,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenefitView {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestimonialView {
    pub name: String,
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CtaView {
    pub title: String,
    pub description: String,
    pub button: String,
}

pub fn render(ctx: &RenderContext<'_>) -> AuctionsView {
    let content: &AuctionsContent = ctx.content();
    let hero = &content.hero;
    let live = &content.live_auctions;

    AuctionsView {
        hero: AuctionsHeroView {
            title: ctx.text(&hero.title),
            description: ctx.text(&hero.description),
            cta_primary: ctx.text(&hero.cta_primary),
            cta_secondary: ctx.text(&hero.cta_secondary),
        },
        live_title: ctx.text(&live.title),
        auctions: live
            .auctions
            .iter()
            .map(|auction| AuctionView {
                title: ctx.text(&auction.title),
                description: ctx.text(&auction.description),
                image: auction.image.clone(),
                status: ctx.text(&auction.status),
                current_bid_label: ctx.text(&live.current_bid),
                current_bid: auction.current_bid.clone(),
                time_left_label: ctx.text(&live.time_left),
                time_left: ctx.text(&auction.time_left),
                bid_label: ctx.text(&live.bid_now),
            })
            .collect(),
        steps_title: ctx.text(&content.how_it_works.title),
        steps: content
            .how_it_works
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| StepView {
                number: index + 1,
                title: ctx.text(&step.title),
                description: ctx.text(&step.description),
            })
            .collect(),
        benefits_title: ctx.text(&content.benefits.title),
        benefits: content
            .benefits
            .items
            .iter()
            .map(|benefit| BenefitView {
                title: ctx.text(&benefit.title),
                description: ctx.text(&benefit.description),
                icon: benefit.icon.clone(),
            })
            .collect(),
        testimonials_title: ctx.text(&content.testimonials.title),
        testimonials: content
            .testimonials
            .items
            .iter()
            .map(|item| TestimonialView {
                name: item.name.clone(),
                role: ctx.text(&item.role),
                text: ctx.text(&item.text),
            })
            .collect(),
        cta: CtaView {
            title: ctx.text(&content.cta.title),
            description: ctx.text(&content.cta.description),
            button: ctx.text(&content.cta.button),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentRegistry;

    #[test]
    fn test_steps_are_numbered_from_one() {
        let registry = ContentRegistry::embedded().expect("Embedded content should build");
        let site = SiteConfig::embedded().expect("Embedded site should load");
        let view = render(&RenderContext::new(&registry, &site, "en"));

        let numbers: Vec<_> = view.steps.iter().map(|s| s.number).collect();
        let expected: Vec<_> = (1..=view.steps.len()).collect();
        assert_eq!(numbers, expected);
        assert!(!numbers.is_empty());
    }

    #[test]
    fn test_auction_cards_share_labels() {
        let registry = ContentRegistry::embedded().expect("Embedded content should build");
        let site = SiteConfig::embedded().expect("Embedded site should load");
        let ctx = RenderContext::new(&registry, &site, "ja");
        let content: &AuctionsContent = ctx.content();

        let view = render(&ctx);
        assert_eq!(view.auctions.len(), content.live_auctions.auctions.len());
        assert!(view
            .auctions
            .iter()
            .all(|a| a.bid_label == content.live_auctions.bid_now));
    }
}
