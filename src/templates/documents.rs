// src/templates/documents.rs
use super::components::{empty_state, pagination_nav};
use super::{html_escape, ContentPage, RenderContext};
use crate::models::DocumentsDocument;
use crate::services::resources;
use crate::ui::{Pagination, ViewQuery};

/// Registration certificates, annual reports and audits.
pub struct DocumentsPage;

impl ContentPage for DocumentsPage {
    type Data = DocumentsDocument;

    const PATH: &'static str = "/documents";
    const RESOURCE: &'static str = resources::DOCUMENTS;
    const TITLE: &'static str = "Documents";
    const LABEL: &'static str = "documents";

    fn render(data: &DocumentsDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        if data.documents.is_empty() {
            return empty_state("No documents published yet.");
        }

        let pagination = Pagination::new(data.documents.len(), ctx.page_size, view.page());
        let rows = pagination
            .slice(&data.documents)
            .iter()
            .map(|doc| {
                format!(
                    r#"<tr>
                <td>{}</td>
                <td>{}</td>
                <td>{}</td>
                <td><a href="{}" target="_blank" rel="noopener">View</a></td>
            </tr>"#,
                    html_escape(&doc.title),
                    html_escape(&doc.category),
                    doc.year,
                    html_escape(&doc.url)
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"
    <table class="documents-table">
        <thead>
            <tr><th>Title</th><th>Category</th><th>Year</th><th></th></tr>
        </thead>
        <tbody>
            {}
        </tbody>
    </table>
    <p class="table-summary">Page {} of {} · {} documents</p>
    {}
    "#,
            rows,
            pagination.current(),
            pagination.page_count(),
            data.documents.len(),
            pagination_nav(&pagination, view, Self::PATH)
        )
    }
}
