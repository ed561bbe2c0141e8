// src/templates/media.rs
use super::components::{empty_state, pagination_nav};
use super::{html_escape, img, ContentPage, RenderContext};
use crate::models::MediaCoverageDocument;
use crate::services::resources;
use crate::ui::{Pagination, ViewQuery};

/// Every newspaper clipping, in document order.
const CLIPPINGS: &str = "clippings";

pub struct MediaCoveragePage;

impl ContentPage for MediaCoveragePage {
    type Data = MediaCoverageDocument;

    const PATH: &'static str = "/media-coverage";
    const RESOURCE: &'static str = resources::MEDIA_COVERAGE;
    const TITLE: &'static str = "Media Coverage";
    const LABEL: &'static str = "media coverage";

    fn render(data: &MediaCoverageDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        if data.articles.is_empty() {
            return empty_state("No press coverage yet.");
        }

        let pagination = Pagination::new(data.articles.len(), ctx.page_size, view.page());
        let cards = pagination
            .slice(&data.articles)
            .iter()
            .map(|article| {
                let link = article
                    .url
                    .as_deref()
                    .map(|url| {
                        format!(
                            r#"<a href="{}" target="_blank" rel="noopener">Read online</a>"#,
                            html_escape(url)
                        )
                    })
                    .unwrap_or_default();
                format!(
                    r#"<article class="media-card">
                <a href="{}">{}</a>
                <h3>{}</h3>
                <p class="media-meta">{} · {}</p>
                {}
            </article>"#,
                    html_escape(&view.with_show(CLIPPINGS, &article.image).href(Self::PATH)),
                    img(&article.image, &article.title, "clipping", ctx.fallback_image),
                    html_escape(&article.title),
                    html_escape(&article.outlet),
                    html_escape(&article.date),
                    link
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"
    <div class="card-grid media-grid">
        {}
    </div>
    {}
    "#,
            cards,
            pagination_nav(&pagination, view, Self::PATH)
        )
    }

    fn gallery(data: &MediaCoverageDocument, key: &str) -> Option<Vec<String>> {
        (key == CLIPPINGS).then(|| data.articles.iter().map(|a| a.image.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaArticle;

    const CTX: RenderContext<'static> = RenderContext {
        fallback_image: "/fallback.svg",
        page_size: 2,
    };

    fn doc() -> MediaCoverageDocument {
        MediaCoverageDocument {
            articles: ["a", "b", "c"]
                .iter()
                .map(|name| MediaArticle {
                    title: format!("Story {}", name),
                    outlet: "The Hindu".to_string(),
                    date: "2024-02-04".to_string(),
                    url: None,
                    image: format!("/clip-{}.jpg", name),
                })
                .collect(),
        }
    }

    #[test]
    fn test_thumbnail_opens_clipping_by_src() {
        let html = MediaCoveragePage::render(&doc(), &ViewQuery::default(), &CTX);
        assert!(html.contains("/media-coverage?gallery=clippings&amp;show=%2Fclip-a.jpg"));
        assert!(!html.contains("Story c"));
    }

    #[test]
    fn test_clippings_span_every_page() {
        let images = MediaCoveragePage::gallery(&doc(), "clippings").unwrap();
        assert_eq!(images, vec!["/clip-a.jpg", "/clip-b.jpg", "/clip-c.jpg"]);
        assert!(MediaCoveragePage::gallery(&doc(), "Story a").is_none());
    }
}
