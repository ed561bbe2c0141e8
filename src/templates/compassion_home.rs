// src/templates/compassion_home.rs
use super::components::{empty_state, gallery_thumbs, stats_grid};
use super::{html_escape, paragraphs, ContentPage, RenderContext};
use crate::models::CompassionHomeDocument;
use crate::services::resources;
use crate::ui::ViewQuery;

pub struct CompassionHomePage;

impl ContentPage for CompassionHomePage {
    type Data = CompassionHomeDocument;

    const PATH: &'static str = "/compassion-home";
    const RESOURCE: &'static str = resources::COMPASSION_HOME;
    const TITLE: &'static str = "Compassion Home";
    const LABEL: &'static str = "compassion home";

    fn render(data: &CompassionHomeDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        let stories = if data.stories.is_empty() {
            empty_state("Stories from the home will appear here.")
        } else {
            data.stories
                .iter()
                .map(|story| {
                    format!(
                        r#"<article class="story-card" id="{}">
                <h3>{}</h3>
                {}
                {}
            </article>"#,
                        html_escape(&story.id),
                        html_escape(&story.name),
                        paragraphs(&story.summary),
                        gallery_thumbs(&story.id, &story.images, view, Self::PATH, ctx.fallback_image)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            r#"
    <section class="section">
        <h2>{}</h2>
        {}
        {}
    </section>

    <section class="section">
        <h2>Stories of care</h2>
        <div class="story-list">{}</div>
    </section>
    "#,
            html_escape(&data.title),
            paragraphs(&data.description),
            stats_grid(&data.stats),
            stories
        )
    }

    fn gallery(data: &CompassionHomeDocument, key: &str) -> Option<Vec<String>> {
        data.stories
            .iter()
            .find(|story| story.id == key)
            .map(|story| story.images.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PatientStory;

    const CTX: RenderContext<'static> = RenderContext {
        fallback_image: "/fallback.svg",
        page_size: 6,
    };

    fn doc(stories: Vec<PatientStory>) -> CompassionHomeDocument {
        CompassionHomeDocument {
            title: "Compassion Home".to_string(),
            description: "Palliative care.".to_string(),
            stats: vec![],
            stories,
        }
    }

    #[test]
    fn test_gallery_by_story_id() {
        let data = doc(vec![PatientStory {
            id: "mary".to_string(),
            name: "Mary".to_string(),
            summary: "Back home after treatment.".to_string(),
            images: vec!["m.jpg".to_string()],
        }]);
        let html = CompassionHomePage::render(&data, &ViewQuery::default(), &CTX);
        assert!(html.contains("/compassion-home?gallery=mary&amp;show=m.jpg"));
        assert_eq!(CompassionHomePage::gallery(&data, "mary"), Some(vec!["m.jpg".to_string()]));
        assert!(CompassionHomePage::gallery(&data, "john").is_none());
    }

    #[test]
    fn test_no_stories() {
        let html = CompassionHomePage::render(&doc(vec![]), &ViewQuery::default(), &CTX);
        assert!(html.contains("Stories from the home will appear here."));
    }
}
