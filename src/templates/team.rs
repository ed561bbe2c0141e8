// src/templates/team.rs
use super::components::{active_tab, empty_state, record_modal, tab_bar};
use super::{html_escape, img, paragraphs, ContentPage, RenderContext};
use crate::models::{TeamDocument, TeamMember};
use crate::services::resources;
use crate::ui::ViewQuery;

pub struct TeamPage;

impl ContentPage for TeamPage {
    type Data = TeamDocument;

    const PATH: &'static str = "/team";
    const RESOURCE: &'static str = resources::TEAM_MEMBERS;
    const TITLE: &'static str = "Our Team";
    const LABEL: &'static str = "team members";

    fn render(data: &TeamDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        let departments = data.departments();
        let Some(active) = active_tab(&departments, view.tab.as_deref()) else {
            return empty_state("Our team page is being updated.");
        };

        let cards = data
            .members
            .iter()
            .filter(|m| m.department == active)
            .map(|m| member_card(m, view, ctx.fallback_image))
            .collect::<Vec<_>>()
            .join("\n");

        let modal = view
            .selected
            .as_deref()
            .and_then(|id| data.members.iter().find(|m| m.id.to_string() == id))
            .map(|m| {
                record_modal(
                    &view.without_selected().href(Self::PATH),
                    &member_profile(m, ctx.fallback_image),
                )
            })
            .unwrap_or_default();

        format!(
            r#"
    {}
    <div class="team-grid">
        {}
    </div>
    {}
    "#,
            tab_bar(&departments, active, view, Self::PATH),
            cards,
            modal
        )
    }
}

fn member_card(member: &TeamMember, view: &ViewQuery, fallback: &str) -> String {
    format!(
        r#"<a href="{}" class="team-card">
        {}
        <h3>{}</h3>
        <p>{}</p>
    </a>"#,
        html_escape(&view.with_selected(&member.id.to_string()).href(TeamPage::PATH)),
        img(&member.image, &member.name, "team-photo", fallback),
        html_escape(&member.name),
        html_escape(&member.role)
    )
}

fn member_profile(member: &TeamMember, fallback: &str) -> String {
    let email = member
        .email
        .as_deref()
        .map(|e| format!(r#"<p><a href="mailto:{0}">{0}</a></p>"#, html_escape(e)))
        .unwrap_or_default();

    format!(
        r#"<div class="team-profile">
        {}
        <h2>{}</h2>
        <p class="role">{} · {}</p>
        {}
        {}
    </div>"#,
        img(&member.image, &member.name, "team-photo-large", fallback),
        html_escape(&member.name),
        html_escape(&member.role),
        html_escape(&member.department),
        paragraphs(&member.bio),
        email
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    const CTX: RenderContext<'static> = RenderContext {
        fallback_image: "/fallback.svg",
        page_size: 6,
    };

    fn doc() -> TeamDocument {
        let member = |id: &str, name: &str, dept: &str| TeamMember {
            id: RecordId::Text(id.to_string()),
            name: name.to_string(),
            role: "Trustee".to_string(),
            department: dept.to_string(),
            bio: format!("Bio of {}", name),
            image: String::new(),
            email: None,
        };
        TeamDocument {
            members: vec![
                member("t1", "Asha", "Board"),
                member("t2", "Biju", "Medical"),
                member("t3", "Chitra", "Board"),
            ],
        }
    }

    #[test]
    fn test_first_department_is_default_tab() {
        let html = TeamPage::render(&doc(), &ViewQuery::default(), &CTX);
        assert!(html.contains("Asha") && html.contains("Chitra"));
        assert!(!html.contains("<h3>Biju</h3>"));
    }

    #[test]
    fn test_tab_selects_department() {
        let html = TeamPage::render(&doc(), &ViewQuery::default().with_tab("Medical"), &CTX);
        assert!(html.contains("<h3>Biju</h3>"));
        assert!(!html.contains("<h3>Asha</h3>"));
    }

    #[test]
    fn test_selected_member_modal() {
        let html = TeamPage::render(&doc(), &ViewQuery::default().with_selected("t3"), &CTX);
        assert!(html.contains("Bio of Chitra"));
    }
}
