//! Site footer.

use crate::content::FooterContent;
use crate::pages::{copyright_lines, LinkSectionView, LinkView, RenderContext};
use serde::Serialize;

/// Ids of the link sections the footer shows.
pub const FOOTER_SECTIONS: [&str; 2] = ["creators", "company"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub site_name: String,
    pub logo_src: String,
    pub sections: Vec<LinkSectionView>,
    pub copyright: Vec<String>,
}

pub fn render(ctx: &RenderContext<'_>) -> FooterView {
    let content: &FooterContent = ctx.content();

    let sections = content
        .sections
        .iter()
        .filter(|section| FOOTER_SECTIONS.contains(&section.id.as_str()))
        .map(|section| LinkSectionView {
            id: section.id.clone(),
            title: ctx.text(&section.title),
            links: section.links.iter().map(|l| LinkView::from_nav(ctx, l)).collect(),
        })
        .collect();

    FooterView {
        site_name: ctx.site.name.clone(),
        logo_src: ctx.site.logo.clone(),
        sections,
        copyright: copyright_lines(ctx, content),
    }
}
