//! Pricing page.

use crate::content::PricingContent;
use crate::pages::{leading_lines, LinkView, RenderContext, SidebarView};
use serde::Serialize;

/// Hero description lines shown.
const HERO_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingView {
    pub title: String,
    pub description_lines: Vec<String>,
    pub plans_title: String,
    pub plans: Vec<PlanView>,
    pub faq_title: String,
    pub faq: Vec<FaqView>,
    pub sidebar: SidebarView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanView {
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta: LinkView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqView {
    pub question: String,
    pub answer: String,
}

pub fn render(ctx: &RenderContext<'_>) -> PricingView {
    let content: &PricingContent = ctx.content();

    PricingView {
        title: ctx.text(&content.hero.title),
        description_lines: leading_lines(&ctx.text(&content.hero.description), HERO_LINES),
        plans_title: ctx.text(&content.plans.title),
        plans: content
            .plans
            .items
            .iter()
            .map(|plan| PlanView {
                name: ctx.text(&plan.name),
                price: plan.price.clone(),
                description: ctx.text(&plan.description),
                features: ctx.texts(&plan.features),
                cta: LinkView::new(ctx, &plan.cta_text, &plan.cta_link),
            })
            .collect(),
        faq_title: ctx.text(&content.faq.title),
        faq: content
            .faq
            .items
            .iter()
            .map(|item| FaqView {
                question: ctx.text(&item.question),
                answer: ctx.text(&item.answer),
            })
            .collect(),
        sidebar: SidebarView::render(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::ContentRegistry;

    #[test]
    fn test_pricing_plans_keep_features_in_order() {
        let registry = ContentRegistry::embedded().expect("Embedded content should build");
        let site = SiteConfig::embedded().expect("Embedded site should load");
        let ctx = RenderContext::new(&registry, &site, "es");
        let content: &PricingContent = ctx.content();

        let view = render(&ctx);
        assert_eq!(view.plans.len(), content.plans.items.len());
        for (plan, source) in view.plans.iter().zip(&content.plans.items) {
            assert_eq!(plan.features.len(), source.features.len());
            assert_eq!(plan.cta.path, source.cta_link);
        }
        assert_eq!(view.faq.len(), content.faq.items.len());
    }

    #[test]
    fn test_pricing_is_substituted() {
        let registry = ContentRegistry::embedded().expect("Embedded content should build");
        let site = SiteConfig {
            name: "Acme".to_string(),
            ..SiteConfig::default()
        };

        for code in ["en", "ja", "zh", "es"] {
            let view = render(&RenderContext::new(&registry, &site, code));
            let json = serde_json::to_string(&view).expect("Should serialize");
            assert!(!json.contains("{website.name}"), "locale {code}");
        }
    }
}
