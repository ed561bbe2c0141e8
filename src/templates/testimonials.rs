// src/templates/testimonials.rs
use super::components::{empty_state, pagination_nav, record_modal};
use super::{html_escape, img, paragraphs, ContentPage, RenderContext};
use crate::models::{Testimonial, TestimonialsDocument};
use crate::services::resources;
use crate::ui::{Pagination, ViewQuery};

pub struct TestimonialsPage;

impl ContentPage for TestimonialsPage {
    type Data = TestimonialsDocument;

    const PATH: &'static str = "/testimonials";
    const RESOURCE: &'static str = resources::TESTIMONIALS;
    const TITLE: &'static str = "Testimonials";
    const LABEL: &'static str = "testimonials";

    fn render(data: &TestimonialsDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        if data.testimonials.is_empty() {
            return empty_state("No testimonials yet.");
        }

        let pagination = Pagination::new(data.testimonials.len(), ctx.page_size, view.page());
        let cards = pagination
            .slice(&data.testimonials)
            .iter()
            .map(|t| testimonial_card(t, view, ctx.fallback_image))
            .collect::<Vec<_>>()
            .join("\n");

        // selection is transient UI state, matched by id string
        let modal = view
            .selected
            .as_deref()
            .and_then(|id| data.testimonials.iter().find(|t| t.id.to_string() == id))
            .map(|t| {
                record_modal(
                    &view.without_selected().href(Self::PATH),
                    &testimonial_story(t, ctx.fallback_image),
                )
            })
            .unwrap_or_default();

        format!(
            r#"
    <div class="testimonial-grid">
        {}
    </div>
    {}
    {}
    "#,
            cards,
            pagination_nav(&pagination, view, Self::PATH),
            modal
        )
    }
}

pub fn testimonial_card(t: &Testimonial, view: &ViewQuery, fallback: &str) -> String {
    let more = if t.story.is_some() {
        format!(
            r#"<a href="{}" class="read-more">Read full story</a>"#,
            html_escape(&view.with_selected(&t.id.to_string()).href(TestimonialsPage::PATH))
        )
    } else {
        String::new()
    };

    format!(
        r#"<blockquote class="testimonial-card">
        {}
        <p class="quote">“{}”</p>
        <footer><strong>{}</strong><span>{}</span></footer>
        {}
    </blockquote>"#,
        img(&t.image, &t.name, "avatar", fallback),
        html_escape(&t.quote),
        html_escape(&t.name),
        html_escape(&t.role),
        more
    )
}

fn testimonial_story(t: &Testimonial, fallback: &str) -> String {
    format!(
        r#"<div class="testimonial-story">
        {}
        <h2>{}</h2>
        <p class="role">{}</p>
        {}
    </div>"#,
        img(&t.image, &t.name, "avatar-large", fallback),
        html_escape(&t.name),
        html_escape(&t.role),
        paragraphs(t.story.as_deref().unwrap_or(&t.quote))
    )
}
