// src/templates/program_detail.rs
use super::components::{gallery_modal, gallery_thumbs, stats_grid};
use super::{html_escape, img, paragraphs};
use crate::models::ProgramDetail;
use crate::ui::ViewQuery;

pub fn base_path(id: &str) -> String {
    format!("/program/{}", id)
}

/// Body of `/program/:id`, gallery overlay included. Section galleries are
/// keyed by section id.
pub fn render(detail: &ProgramDetail, view: &ViewQuery, fallback: &str) -> String {
    let base = base_path(&detail.id);

    let tagline = detail
        .tagline
        .as_deref()
        .map(|t| format!(r#"<p class="tagline">{}</p>"#, html_escape(t)))
        .unwrap_or_default();

    let sections = detail
        .sections
        .iter()
        .map(|section| {
            format!(
                r#"<section class="section detail-section" id="{}">
            <h3>{}</h3>
            {}
            {}
        </section>"#,
                html_escape(&section.id),
                html_escape(&section.title),
                paragraphs(&section.body),
                gallery_thumbs(&section.id, &section.images, view, &base, fallback)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let modal = view
        .gallery
        .as_deref()
        .and_then(|key| detail.sections.iter().find(|s| s.id == key))
        .map(|section| gallery_modal(section.images.clone(), view, &base, fallback))
        .unwrap_or_default();

    format!(
        r#"
    <div class="breadcrumb">
        <a href="/programs-services">← All programs</a>
    </div>

    <article class="program-detail">
        <h2 class="program-title">{}</h2>
        {}
        {}
        {}
        {}
    </article>
    {}
    {}
    "#,
        html_escape(&detail.title),
        tagline,
        img(&detail.hero_image, &detail.title, "program-hero", fallback),
        paragraphs(&detail.description),
        stats_grid(&detail.stats),
        sections,
        modal
    )
}
