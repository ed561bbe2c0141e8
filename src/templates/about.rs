// src/templates/about.rs
use super::components::{error_placeholder, loading_placeholder};
use super::page::LOADING_REFRESH_SECS;
use super::html_escape;
use crate::models::ProgramsDocument;
use crate::services::loader::LoadState;

pub fn render(site_name: &str, programs: &LoadState<ProgramsDocument>) -> (String, Option<u32>) {
    let program_list = match programs {
        LoadState::Loading => loading_placeholder("programs"),
        LoadState::Failed(_) => error_placeholder("programs"),
        LoadState::Ready(doc) => format!(
            r#"<ul class="program-list">{}</ul>"#,
            doc.programs
                .iter()
                .map(|p| {
                    format!(
                        r#"<li><a href="/programs/{}">{}</a> · {}</li>"#,
                        html_escape(&p.id),
                        html_escape(&p.title),
                        html_escape(&p.short_description)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        ),
    };

    let content = format!(
        r#"
    <div class="section">
        <h2>Who we are</h2>
        <p>
            {} is a volunteer-run charitable trust. We started with a single
            donated ambulance and a promise that no family in our district would
            be left alone with a medical emergency.
        </p>
    </div>

    <div class="section">
        <h2>Our mission</h2>
        <ul>
            <li><strong>Reach:</strong> free emergency transport, day and night</li>
            <li><strong>Prevent:</strong> cancer screening in the settlements that need it most</li>
            <li><strong>Shelter:</strong> a home for patients with nobody to care for them</li>
            <li><strong>Nourish:</strong> a kitchen that never turns anyone away</li>
        </ul>
    </div>

    <div class="section">
        <h2>Our programs</h2>
        {}
    </div>

    <div class="section">
        <h2>Get involved</h2>
        <p>
            Volunteer with a program, sponsor a meal, or <a href="/donate">make a donation</a>.
            Audited accounts are published under <a href="/documents">documents</a>.
        </p>
    </div>
    "#,
        html_escape(site_name),
        program_list
    );

    (content, programs.is_loading().then_some(LOADING_REFRESH_SECS))
}
