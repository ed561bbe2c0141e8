// src/templates/mfi.rs
use super::components::{empty_state, gallery_thumbs, stats_grid};
use super::{html_escape, paragraphs, ContentPage, RenderContext};
use crate::models::MfiDocument;
use crate::services::resources;
use crate::ui::ViewQuery;

/// Microfinance for women's self-help groups.
pub struct MfiPage;

impl ContentPage for MfiPage {
    type Data = MfiDocument;

    const PATH: &'static str = "/mfi";
    const RESOURCE: &'static str = resources::MFI;
    const TITLE: &'static str = "Microfinance";
    const LABEL: &'static str = "microfinance groups";

    fn render(data: &MfiDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        let groups = if data.groups.is_empty() {
            empty_state("No groups yet.")
        } else {
            data.groups
                .iter()
                .map(|group| {
                    format!(
                        r#"<article class="group-card" id="{}">
                <h3>{}</h3>
                <dl class="group-facts">
                    <dt>Village</dt><dd>{}</dd>
                    <dt>Members</dt><dd>{}</dd>
                    <dt>Loan</dt><dd>{}</dd>
                </dl>
                {}
            </article>"#,
                        html_escape(&group.id),
                        html_escape(&group.name),
                        html_escape(&group.village),
                        group.members,
                        html_escape(&group.loan_amount),
                        gallery_thumbs(&group.id, &group.images, view, Self::PATH, ctx.fallback_image)
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
        <h2>Self-help groups</h2>
        <div class="card-grid">{}</div>
    </section>
    "#,
            html_escape(&data.title),
            paragraphs(&data.description),
            stats_grid(&data.stats),
            groups
        )
    }

    fn gallery(data: &MfiDocument, key: &str) -> Option<Vec<String>> {
        data.groups
            .iter()
            .find(|group| group.id == key)
            .map(|group| group.images.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MfiGroup;

    const CTX: RenderContext<'static> = RenderContext {
        fallback_image: "/fallback.svg",
        page_size: 6,
    };

    fn doc() -> MfiDocument {
        MfiDocument {
            title: "Microfinance".to_string(),
            description: "Small loans.".to_string(),
            stats: vec![],
            groups: vec![MfiGroup {
                id: "sneha".to_string(),
                name: "Sneha SHG".to_string(),
                village: "Kumily".to_string(),
                members: 12,
                loan_amount: "₹1,20,000".to_string(),
                images: vec!["g1.jpg".to_string(), "g2.jpg".to_string()],
            }],
        }
    }

    #[test]
    fn test_group_card_links_into_its_gallery() {
        let html = MfiPage::render(&doc(), &ViewQuery::default(), &CTX);
        assert!(html.contains("Sneha SHG"));
        assert!(html.contains("/mfi?gallery=sneha&amp;show=g2.jpg"));
    }

    #[test]
    fn test_gallery_by_group_id() {
        assert_eq!(MfiPage::gallery(&doc(), "sneha").map(|g| g.len()), Some(2));
        assert!(MfiPage::gallery(&doc(), "Sneha SHG").is_none());
    }
}
