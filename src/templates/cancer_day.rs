// src/templates/cancer_day.rs
use super::components::{accordion_panel, empty_state, gallery_thumbs};
use super::{html_escape, paragraphs, ContentPage, RenderContext};
use crate::models::CancerDayDocument;
use crate::services::resources;
use crate::ui::{AccordionState, PanelKey, ViewQuery};

const GROUP: &str = "events";

pub struct CancerDayPage;

impl ContentPage for CancerDayPage {
    type Data = CancerDayDocument;

    const PATH: &'static str = "/cancer-day";
    const RESOURCE: &'static str = resources::CANCER_DAY;
    const TITLE: &'static str = "World Cancer Day";
    const LABEL: &'static str = "cancer day events";

    fn render(data: &CancerDayDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        let state = AccordionState::new([(
            GROUP.to_string(),
            data.events
                .iter()
                .map(|e| e.year.to_string())
                .collect::<Vec<_>>(),
        )])
        .restore(view.open.as_deref());

        let events = if data.events.is_empty() {
            empty_state("No events yet.")
        } else {
            data.events
                .iter()
                .map(|event| {
                    let year = event.year.to_string();
                    let body = format!(
                        "{}{}",
                        paragraphs(&event.summary),
                        gallery_thumbs(&year, &event.images, view, Self::PATH, ctx.fallback_image)
                    );
                    accordion_panel(
                        &PanelKey::new(GROUP, year.as_str()),
                        &state,
                        view,
                        Self::PATH,
                        &format!("{} · {}", event.year, event.theme),
                        &body,
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
    </section>

    <section class="section">
        <div class="accordion">{}</div>
    </section>
    "#,
            html_escape(&data.title),
            paragraphs(&data.description),
            events
        )
    }

    fn gallery(data: &CancerDayDocument, key: &str) -> Option<Vec<String>> {
        let year: u16 = key.parse().ok()?;
        data.events
            .iter()
            .find(|event| event.year == year)
            .map(|event| event.images.clone())
    }
}
