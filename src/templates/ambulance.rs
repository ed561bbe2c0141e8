// src/templates/ambulance.rs
use super::components::{empty_state, gallery_thumbs, stats_grid};
use super::{html_escape, paragraphs, ContentPage, RenderContext};
use crate::models::AmbulanceDocument;
use crate::services::resources;
use crate::ui::ViewQuery;

pub struct AmbulancePage;

impl ContentPage for AmbulancePage {
    type Data = AmbulanceDocument;

    const PATH: &'static str = "/ambulance";
    const RESOURCE: &'static str = resources::AMBULANCE;
    const TITLE: &'static str = "Ambulance Services";
    const LABEL: &'static str = "ambulance services";

    fn render(data: &AmbulanceDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        let cars = if data.cars.is_empty() {
            empty_state("Our fleet will be listed here soon.")
        } else {
            data.cars
                .iter()
                .map(|car| {
                    let donor = car
                        .donated_by
                        .as_deref()
                        .map(|d| format!(r#"<p class="car-donor">Donated by {}</p>"#, html_escape(d)))
                        .unwrap_or_default();
                    format!(
                        r#"<article class="car-card" id="{}">
                <h3>{}</h3>
                <p class="car-registration">{}</p>
                {}
                {}
            </article>"#,
                        html_escape(&car.id),
                        html_escape(&car.name),
                        html_escape(&car.registration),
                        donor,
                        gallery_thumbs(&car.id, &car.images, view, Self::PATH, ctx.fallback_image)
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
        <h2>Our fleet</h2>
        <div class="card-grid">{}</div>
    </section>
    "#,
            html_escape(&data.title),
            paragraphs(&data.description),
            stats_grid(&data.stats),
            cars
        )
    }

    fn gallery(data: &AmbulanceDocument, key: &str) -> Option<Vec<String>> {
        data.cars
            .iter()
            .find(|car| car.id == key)
            .map(|car| car.images.clone())
    }
}
