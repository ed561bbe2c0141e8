// src/templates/programs.rs
use super::components::{empty_state, stats_grid};
use super::{html_escape, img, paragraphs, ContentPage, RenderContext};
use crate::models::{Program, ProgramsDocument};
use crate::services::resources;
use crate::ui::ViewQuery;

pub struct ProgramsPage;

impl ContentPage for ProgramsPage {
    type Data = ProgramsDocument;

    const PATH: &'static str = "/programs-services";
    const RESOURCE: &'static str = resources::PROGRAMS;
    const TITLE: &'static str = "Programs & Services";
    const LABEL: &'static str = "programs";

    fn render(data: &ProgramsDocument, _view: &ViewQuery, ctx: &RenderContext) -> String {
        let cards = if data.programs.is_empty() {
            empty_state("Programs will be announced soon.")
        } else {
            data.programs
                .iter()
                .map(|program| program_card(program, ctx.fallback_image))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            r#"
    <p class="subtitle">Every program is run by volunteers and funded by people like you.</p>
    <div class="card-grid programs-grid">
        {}
    </div>
    "#,
            cards
        )
    }
}

pub fn program_card(program: &Program, fallback: &str) -> String {
    format!(
        r#"<article class="program-card">
        {}
        <div class="program-card-body">
            <span class="program-icon icon-{}"></span>
            <h3><a href="/programs/{}">{}</a></h3>
            <p>{}</p>
            <a href="/programs/{}" class="btn btn-secondary">Learn more</a>
        </div>
    </article>"#,
        img(&program.image, &program.title, "program-image", fallback),
        html_escape(&program.icon),
        html_escape(&program.id),
        html_escape(&program.title),
        html_escape(&program.short_description),
        html_escape(&program.id)
    )
}

/// Body of `/programs/:id`.
pub fn render_program(program: &Program, fallback: &str) -> String {
    let features = if program.features.is_empty() {
        String::new()
    } else {
        format!(
            r#"<h3>What we do</h3><ul class="feature-list">{}</ul>"#,
            program
                .features
                .iter()
                .map(|f| format!("<li>{}</li>", html_escape(f)))
                .collect::<Vec<_>>()
                .join("\n")
        )
    };

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
        <div class="program-contact">
            <h3>Get in touch</h3>
            <p>{} · <a href="mailto:{}">{}</a></p>
        </div>
        <a href="/program/{}" class="btn btn-primary">See the full story</a>
    </article>
    "#,
        html_escape(&program.title),
        img(&program.image, &program.title, "program-hero", fallback),
        paragraphs(&program.full_description),
        stats_grid(&program.stats),
        features,
        html_escape(&program.contact_person),
        html_escape(&program.contact_email),
        html_escape(&program.contact_email),
        html_escape(&program.id)
    )
}
