//! Typed content bundles.
//!
//! Every struct mirrors one document shape. Fields are required: the default
//! locale must author all of them, and other locales inherit any gap through
//! normalization before they are deserialized here.

use crate::content::{Bundle, BundleId, LocaleCatalog};
use serde::{Deserialize, Serialize};

macro_rules! impl_bundle {
    ($ty:ty, $id:expr, $field:ident) => {
        impl Bundle for $ty {
            const ID: BundleId = $id;

            fn from_catalog(catalog: &LocaleCatalog) -> &Self {
                &catalog.$field
            }
        }
    };
}

impl_bundle!(HeaderContent, BundleId::Header, header);
impl_bundle!(FooterContent, BundleId::Footer, footer);
impl_bundle!(HomeContent, BundleId::Home, home);
impl_bundle!(AboutContent, BundleId::About, about);
impl_bundle!(InvestContent, BundleId::Invest, invest);
impl_bundle!(PricingContent, BundleId::Pricing, pricing);
impl_bundle!(AuctionsContent, BundleId::Auctions, auctions);
impl_bundle!(InstantOfferContent, BundleId::InstantOffer, instant_offer);

// ==================== Shared Shapes ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledText {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub path: String,
    pub label: String,
}

// ==================== Header ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderContent {
    /// Alt text for the logo; may contain `{websiteName}`
    pub logo_alt: String,
    pub nav: HeaderNav,
    pub language_selector: LanguageSelectorText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderNav {
    pub listings: String,
    pub get_funding: String,
    pub invest: String,
    pub blog: String,
    pub login: String,
    pub signup: String,
    pub logout: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSelectorText {
    pub heading: String,
    pub change_language_label: String,
}

// ==================== Footer ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub brand: FooterBrand,
    pub sections: Vec<FooterSection>,
    pub social: FooterSocial,
    pub copyright: FooterCopyright,
}

impl FooterContent {
    /// Look a link section up by its stable id.
    pub fn section(&self, id: &str) -> Option<&FooterSection> {
        self.sections.iter().find(|section| section.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterBrand {
    pub name_alt: String,
    pub slogan: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSection {
    /// Stable key ("investors", "creators", "company")
    pub id: String,
    pub title: String,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSocial {
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterCopyright {
    pub text: String,
    pub privacy: String,
    pub cookies: String,
    pub terms: String,
}

// ==================== Home ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub hero: HomeHero,
    pub partners: HomePartners,
    pub stats: HomeStats,
    pub products: HomeProducts,
    pub services: HomeServices,
    pub dual_image: HomeDualImage,
    pub feature: HomeFeature,
    pub newsletter: HomeNewsletter,
    pub final_cta: HomeFinalCta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeHero {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePartners {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeStats {
    pub title: String,
    pub stats: Vec<HomeStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeStat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeProducts {
    pub title: String,
    pub items: Vec<ProductCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCard {
    pub title: String,
    pub description: String,
    pub link: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeServices {
    pub title: String,
    pub description: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDualImage {
    pub left_title: String,
    pub left_subtitle: String,
    pub left_cta: String,
    pub right_title: String,
    pub right_subtitle: String,
    pub right_cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeFeature {
    pub title: String,
    pub subtitle: String,
    pub subtitle1: String,
    pub subtitle2: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeNewsletter {
    pub title: String,
    pub subtitle: String,
    pub placeholder: String,
    pub options: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeFinalCta {
    pub title: String,
    pub cta1: String,
    pub cta2: String,
}

// ==================== About ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub hero: TitledText,
    pub mission: String,
    pub team: AboutTeam,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutTeam {
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub image: String,
}

// ==================== Invest ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestContent {
    pub hero: InvestHero,
    pub stats: Vec<InvestStat>,
    pub assets: InvestAssets,
    pub why_royalties: TitledList,
    pub membership: InvestMembership,
    pub investing: TitledList,
    pub get_started: InvestGetStarted,
    pub exchange: TitledText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestHero {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestStat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestAssets {
    pub title: String,
    pub items: Vec<AssetCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetCard {
    pub title: String,
    pub description: String,
    pub term: String,
    pub royalty_type: String,
    pub price: String,
    pub multiple: String,
    #[serde(rename = "yield")]
    pub yield_rate: String,
}

/// A titled list of cards with a call to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledList {
    pub title: String,
    pub items: Vec<TitledText>,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestMembership {
    pub title: String,
    pub description: String,
    pub cta: String,
    pub quote: Quote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestGetStarted {
    pub title: String,
    pub items: Vec<String>,
    pub cta: String,
}

// ==================== Pricing ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingContent {
    pub hero: TitledText,
    pub plans: PricingPlans,
    pub faq: PricingFaq,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPlans {
    pub title: String,
    pub items: Vec<PricingPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub name: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingFaq {
    pub title: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

// ==================== Auctions ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionsContent {
    pub hero: AuctionsHero,
    pub live_auctions: LiveAuctions,
    pub how_it_works: HowItWorks,
    pub benefits: Benefits,
    pub testimonials: Testimonials,
    pub cta: AuctionsCta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionsHero {
    pub title: String,
    pub description: String,
    pub cta_primary: String,
    pub cta_secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveAuctions {
    pub title: String,
    pub current_bid: String,
    pub time_left: String,
    pub bid_now: String,
    pub auctions: Vec<AuctionCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionCard {
    pub title: String,
    pub description: String,
    pub image: String,
    pub status: String,
    pub current_bid: String,
    pub time_left: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HowItWorks {
    pub title: String,
    pub steps: Vec<TitledText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefits {
    pub title: String,
    pub items: Vec<BenefitCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitCard {
    pub title: String,
    pub description: String,
    /// SVG path data for the benefit icon
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonials {
    pub title: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionsCta {
    pub title: String,
    pub description: String,
    pub button: String,
}

// ==================== Instant Offer ====================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantOfferContent {
    pub hero: OfferHero,
    pub form: OfferFormText,
    pub options: OfferOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferHero {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferFormText {
    pub royalty_type: String,
    pub artist_name: String,
    pub artist_placeholder: String,
    pub catalog_size: String,
    pub annual_income: String,
    pub income_consistency: String,
    pub years_active: String,
    pub contact_heading: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub consent: String,
    pub submit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferOptions {
    pub royalty_type: Vec<OptionLabel>,
    pub catalog_size: Vec<OptionLabel>,
    pub annual_income: Vec<OptionLabel>,
    pub income_consistency: Vec<OptionLabel>,
    pub years_active: Vec<OptionLabel>,
}

/// A select option: submitted `value` plus localized `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionLabel {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn footer() -> FooterContent {
        serde_json::from_str(
            r#"{
                "brand": {"nameAlt": "RX", "slogan": ""},
                "sections": [
                    {
                        "id": "company",
                        "title": "Company",
                        "links": [{"path": "/about", "label": "About"}]
                    },
                    {"id": "creators", "title": "Music Creators", "links": []}
                ],
                "social": {"links": [{"name": "X", "link": "https://x.com"}]},
                "copyright": {"text": "c", "privacy": "p", "cookies": "k", "terms": "t"}
            }"#,
        )
        .expect("Should deserialize")
    }

    #[test]
    fn test_footer_section_lookup_by_id() {
        let footer = footer();

        let company = footer.section("company").expect("company section");
        assert_eq!(company.title, "Company");
        assert_eq!(company.links[0].path, "/about");
        assert_eq!(footer.section("creators").map(|s| s.title.as_str()), Some("Music Creators"));
    }

    #[test]
    fn test_footer_section_lookup_ignores_position() {
        // "company" is first here; lookups must not depend on order
        assert!(footer().section("investors").is_none());
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let result = serde_json::from_str::<HomeHero>(r#"{"title": "t", "subtitle": "s"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_asset_yield_field_name() {
        let asset: AssetCard = serde_json::from_str(
            r#"{"title": "t", "description": "d", "term": "Life of rights",
                "royaltyType": "Publishing", "price": "$1", "multiple": "5x", "yield": "12%"}"#,
        )
        .expect("Should deserialize");

        assert_eq!(asset.yield_rate, "12%");
        assert_eq!(asset.royalty_type, "Publishing");

        let json = serde_json::to_value(&asset).expect("Should serialize");
        assert_eq!(json["yield"], "12%");
    }
}
