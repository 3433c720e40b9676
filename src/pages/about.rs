//! About page.

use crate::content::AboutContent;
use crate::pages::{leading_lines, RenderContext};
use serde::Serialize;

/// Hero description lines shown; the rest of the paragraph is dropped.
const HERO_LINES: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub title: String,
    pub description_lines: Vec<String>,
    pub mission: String,
    pub team: Vec<TeamMemberView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMemberView {
    pub name: String,
    pub image: String,
}

pub fn render(ctx: &RenderContext<'_>) -> AboutView {
    let content: &AboutContent = ctx.content();

    AboutView {
        title: ctx.text(&content.hero.title),
        description_lines: leading_lines(&ctx.text(&content.hero.description), HERO_LINES),
        mission: ctx.text(&content.mission),
        team: content
            .team
            .members
            .iter()
            .map(|member| TeamMemberView {
                name: member.name.clone(),
                image: member.image.clone(),
            })
            .collect(),
    }
}
