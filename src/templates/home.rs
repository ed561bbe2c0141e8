// src/templates/home.rs
use super::components::{empty_state, error_placeholder, loading_placeholder};
use super::page::LOADING_REFRESH_SECS;
use super::programs::program_card;
use super::testimonials::testimonial_card;
use super::{html_escape, RenderContext};
use crate::models::{ProgramsDocument, TestimonialsDocument};
use crate::services::loader::LoadState;
use crate::ui::ViewQuery;

const FEATURED_PROGRAMS: usize = 3;
const FEATURED_TESTIMONIALS: usize = 3;

/// Home body. The two sections load independently, so one can fail while
/// the other renders.
pub fn render(
    site_name: &str,
    programs: &LoadState<ProgramsDocument>,
    testimonials: &LoadState<TestimonialsDocument>,
    ctx: &RenderContext,
) -> (String, Option<u32>) {
    let programs_html = match programs {
        LoadState::Loading => loading_placeholder("programs"),
        LoadState::Failed(_) => error_placeholder("programs"),
        LoadState::Ready(doc) if doc.programs.is_empty() => {
            empty_state("Programs will be announced soon.")
        }
        LoadState::Ready(doc) => doc
            .programs
            .iter()
            .take(FEATURED_PROGRAMS)
            .map(|p| program_card(p, ctx.fallback_image))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    // cards link into the testimonials page, not back home
    let view = ViewQuery::default();
    let testimonials_html = match testimonials {
        LoadState::Loading => loading_placeholder("testimonials"),
        LoadState::Failed(_) => error_placeholder("testimonials"),
        LoadState::Ready(doc) if doc.testimonials.is_empty() => empty_state("No testimonials yet."),
        LoadState::Ready(doc) => doc
            .testimonials
            .iter()
            .take(FEATURED_TESTIMONIALS)
            .map(|t| testimonial_card(t, &view, ctx.fallback_image))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    let refresh = (programs.is_loading() || testimonials.is_loading()).then_some(LOADING_REFRESH_SECS);

    let body = format!(
        r#"
    <section class="hero">
        <h2>Care that reaches every doorstep</h2>
        <p>{} runs free ambulances, cancer awareness camps, a compassion home and
        a community kitchen for families who have nowhere else to turn.</p>
        <div class="hero-actions">
            <a href="/donate" class="btn btn-primary">Donate</a>
            <a href="/programs-services" class="btn btn-secondary">Our programs</a>
        </div>
    </section>

    <section class="section">
        <h2>What we do</h2>
        <div class="card-grid programs-grid">
            {}
        </div>
        <a href="/programs-services" class="see-all">All programs →</a>
    </section>

    <section class="section">
        <h2>Voices from the community</h2>
        <div class="testimonial-grid">
            {}
        </div>
        <a href="/testimonials" class="see-all">More stories →</a>
    </section>
    "#,
        html_escape(site_name),
        programs_html,
        testimonials_html
    );

    (body, refresh)
}
