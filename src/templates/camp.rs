// src/templates/camp.rs
use super::components::{accordion_panel, empty_state, gallery_thumbs, stats_grid};
use super::{html_escape, paragraphs, ContentPage, RenderContext};
use crate::models::{CampsDocument, Settlement};
use crate::services::resources;
use crate::ui::{AccordionState, PanelKey, ViewQuery};

pub struct CampPage;

/// Settlement galleries are keyed `camp/settlement`.
fn gallery_key(camp_id: &str, settlement_id: &str) -> String {
    format!("{}/{}", camp_id, settlement_id)
}

fn accordion(data: &CampsDocument, view: &ViewQuery) -> AccordionState {
    AccordionState::new(data.camps.iter().map(|camp| {
        (
            camp.id.clone(),
            camp.settlements
                .iter()
                .map(|s| s.id.clone())
                .collect::<Vec<_>>(),
        )
    }))
    .restore(view.open.as_deref())
}

fn settlement_body(
    camp_id: &str,
    settlement: &Settlement,
    view: &ViewQuery,
    ctx: &RenderContext,
) -> String {
    format!(
        "{}{}",
        stats_grid(&settlement.stats),
        gallery_thumbs(
            &gallery_key(camp_id, &settlement.id),
            &settlement.images,
            view,
            CampPage::PATH,
            ctx.fallback_image
        )
    )
}

impl ContentPage for CampPage {
    type Data = CampsDocument;

    const PATH: &'static str = "/cancer-awareness-camp";
    const RESOURCE: &'static str = resources::CANCER_AWARENESS_CAMP;
    const TITLE: &'static str = "Cancer Awareness Camps";
    const LABEL: &'static str = "cancer awareness camps";

    fn render(data: &CampsDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        let state = accordion(data, view);

        let camps = if data.camps.is_empty() {
            empty_state("No camps have been recorded yet.")
        } else {
            data.camps
                .iter()
                .map(|camp| {
                    let settlements = camp
                        .settlements
                        .iter()
                        .map(|settlement| {
                            accordion_panel(
                                &PanelKey::new(camp.id.as_str(), settlement.id.as_str()),
                                &state,
                                view,
                                Self::PATH,
                                &settlement.name,
                                &settlement_body(&camp.id, settlement, view, ctx),
                            )
                        })
                        .collect::<Vec<_>>()
                        .join("\n");

                    format!(
                        r#"<article class="camp-card" id="{}">
                <h3>{}</h3>
                <p class="camp-meta">{} · {}</p>
                <div class="accordion">{}</div>
            </article>"#,
                        html_escape(&camp.id),
                        html_escape(&camp.name),
                        html_escape(&camp.date),
                        html_escape(&camp.location),
                        settlements
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
        {}
    </section>
    "#,
            html_escape(&data.title),
            paragraphs(&data.description),
            camps
        )
    }

    fn gallery(data: &CampsDocument, key: &str) -> Option<Vec<String>> {
        let (camp_id, settlement_id) = key.split_once('/')?;
        data.camps
            .iter()
            .find(|camp| camp.id == camp_id)?
            .settlements
            .iter()
            .find(|s| s.id == settlement_id)
            .map(|s| s.images.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Camp;

    const CTX: RenderContext<'static> = RenderContext {
        fallback_image: "/fallback.svg",
        page_size: 6,
    };

    fn settlement(id: &str, images: &[&str]) -> Settlement {
        Settlement {
            id: id.to_string(),
            name: format!("Settlement {}", id),
            stats: vec![],
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn doc() -> CampsDocument {
        CampsDocument {
            title: "Camps".to_string(),
            description: "Screening camps".to_string(),
            camps: vec![Camp {
                id: "idukki-2023".to_string(),
                name: "Idukki 2023".to_string(),
                date: "2023-03-04".to_string(),
                location: "Idukki".to_string(),
                settlements: vec![
                    settlement("north", &["n1.jpg", "n2.jpg"]),
                    settlement("south", &["s1.jpg"]),
                    settlement("east", &[]),
                ],
            }],
        }
    }

    #[test]
    fn test_first_settlement_open_by_default() {
        let html = CampPage::render(&doc(), &ViewQuery::default(), &CTX);
        assert!(html.contains("n1.jpg"));
        assert!(!html.contains("s1.jpg"));
    }

    #[test]
    fn test_open_query_overrides_default() {
        let view = ViewQuery::default().with_open("idukki-2023/south".to_string());
        let html = CampPage::render(&doc(), &view, &CTX);
        assert!(!html.contains("n1.jpg"));
        assert!(html.contains("s1.jpg"));
    }

    #[test]
    fn test_gallery_lookup_by_composite_key() {
        let data = doc();
        assert_eq!(CampPage::gallery(&data, "idukki-2023/north").unwrap().len(), 2);
        assert_eq!(CampPage::gallery(&data, "idukki-2023/east"), Some(vec![]));
        assert!(CampPage::gallery(&data, "idukki-2023").is_none());
        assert!(CampPage::gallery(&data, "other/north").is_none());
    }
}
