// src/templates/community_kitchen.rs
use super::components::{gallery_thumbs, stats_grid};
use super::{html_escape, paragraphs, ContentPage, RenderContext};
use crate::models::CommunityKitchenDocument;
use crate::services::resources;
use crate::ui::ViewQuery;

const GALLERY_KEY: &str = "kitchen";

pub struct CommunityKitchenPage;

impl ContentPage for CommunityKitchenPage {
    type Data = CommunityKitchenDocument;

    const PATH: &'static str = "/community-kitchen";
    const RESOURCE: &'static str = resources::COMMUNITY_KITCHEN;
    const TITLE: &'static str = "Community Kitchen";
    const LABEL: &'static str = "community kitchen";

    fn render(data: &CommunityKitchenDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        let highlights = data
            .highlights
            .iter()
            .map(|h| format!("<li>{}</li>", html_escape(h)))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"
    <section class="section">
        <h2>{}</h2>
        {}
        {}
        <ul class="highlight-list">{}</ul>
    </section>

    <section class="section">
        <h2>From the kitchen</h2>
        {}
    </section>
    "#,
            html_escape(&data.title),
            paragraphs(&data.description),
            stats_grid(&data.stats),
            highlights,
            gallery_thumbs(GALLERY_KEY, &data.images, view, Self::PATH, ctx.fallback_image)
        )
    }

    fn gallery(data: &CommunityKitchenDocument, key: &str) -> Option<Vec<String>> {
        (key == GALLERY_KEY).then(|| data.images.clone())
    }
}
