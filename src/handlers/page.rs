// src/handlers/page.rs
//! Handlers shared by every page: the generic content page and the shell's
//! contact lookup.

use axum::{
    extract::{Query, State},
    response::Html,
};
use std::sync::Arc;

use crate::models::ContactInfo;
use crate::services::loader::LoadState;
use crate::services::resources;
use crate::templates::page::render_content_page;
use crate::templates::ContentPage;
use crate::ui::ViewQuery;
use crate::AppState;

/// Malformed UI state in the query string falls back to the default view
/// rather than rejecting the request.
pub fn view_or_default(query: Option<Query<ViewQuery>>) -> ViewQuery {
    query.map(|Query(view)| view).unwrap_or_default()
}

/// Contact info for the shell. A failure only costs the shell its contact
/// details.
pub async fn load_contact(state: &AppState) -> LoadState<ContactInfo> {
    let contact = state.loader.load_state::<ContactInfo>(resources::FOOTER).await;
    if let LoadState::Failed(err) = &contact {
        tracing::warn!(error = %err, "rendering shell without contact details");
    }
    contact
}

pub async fn serve<P: ContentPage>(
    State(state): State<Arc<AppState>>,
    query: Option<Query<ViewQuery>>,
) -> Html<String> {
    let view = view_or_default(query);

    let (data, contact) = tokio::join!(
        state.loader.load_state::<P::Data>(P::RESOURCE),
        load_contact(&state),
    );

    let shell = state.shell(contact.ready(), P::PATH);
    Html(render_content_page::<P>(
        &data,
        &view,
        &state.render_context(),
        &shell,
    ))
}
