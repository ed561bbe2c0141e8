// src/handlers/web.rs
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use super::page::{load_contact, view_or_default};
use crate::models::{ProgramDetail, ProgramsDocument, TestimonialsDocument};
use crate::services::loader::LoadState;
use crate::services::resources;
use crate::templates::{self, page::LOADING_REFRESH_SECS, ContentPage};
use crate::ui::ViewQuery;
use crate::utils::validation::is_valid_slug;
use crate::AppState;

const PROGRAM_LISTING: &str = templates::programs::ProgramsPage::PATH;

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let (programs, testimonials, contact) = tokio::join!(
        state.loader.load_state::<ProgramsDocument>(resources::PROGRAMS),
        state.loader.load_state::<TestimonialsDocument>(resources::TESTIMONIALS),
        load_contact(&state),
    );

    let (body, refresh) = templates::home::render(
        &state.config.site_name,
        &programs,
        &testimonials,
        &state.render_context(),
    );
    let shell = state.shell(contact.ready(), "/");
    Html(templates::render_document("Home", &body, &shell, refresh))
}

pub async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    let (programs, contact) = tokio::join!(
        state.loader.load_state::<ProgramsDocument>(resources::PROGRAMS),
        load_contact(&state),
    );

    let (body, refresh) = templates::about::render(&state.config.site_name, &programs);
    let shell = state.shell(contact.ready(), "/about");
    Html(templates::render_document("About Us", &body, &shell, refresh))
}

/// `/programs/:id`, looked up in the programs listing. An id that matches
/// nothing goes back to the listing.
pub async fn program(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    if !is_valid_slug(&id) {
        tracing::info!(id = %id, "rejected program id");
        return Redirect::to(PROGRAM_LISTING).into_response();
    }

    let (programs, contact) = tokio::join!(
        state.loader.load_state::<ProgramsDocument>(resources::PROGRAMS),
        load_contact(&state),
    );
    let shell = state.shell(contact.ready(), PROGRAM_LISTING);
    let fallback = &state.config.fallback_image;

    match &programs {
        LoadState::Ready(doc) => match doc.find(&id) {
            Some(program) => Html(templates::render_page(
                &program.title,
                &templates::programs::render_program(program, fallback),
                &shell,
            ))
            .into_response(),
            None => {
                tracing::info!(id = %id, "unknown program, redirecting to listing");
                Redirect::to(PROGRAM_LISTING).into_response()
            }
        },
        LoadState::Loading => Html(templates::render_document(
            "Programs",
            &templates::components::loading_placeholder("program"),
            &shell,
            Some(LOADING_REFRESH_SECS),
        ))
        .into_response(),
        LoadState::Failed(_) => Html(templates::render_page(
            "Programs",
            &templates::components::error_placeholder("program"),
            &shell,
        ))
        .into_response(),
    }
}

/// `/program/:id`, backed by its own detail document.
pub async fn program_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    query: Option<Query<ViewQuery>>,
) -> Response {
    if !is_valid_slug(&id) {
        tracing::info!(id = %id, "rejected program id");
        return Redirect::to(PROGRAM_LISTING).into_response();
    }

    let view = view_or_default(query);
    let path = resources::program_detail(&id);
    let (detail, contact) = tokio::join!(
        state.loader.load_state::<ProgramDetail>(&path),
        load_contact(&state),
    );
    let shell = state.shell(contact.ready(), PROGRAM_LISTING);

    match &detail {
        LoadState::Ready(detail) => Html(templates::render_page(
            &detail.title,
            &templates::program_detail::render(detail, &view, &state.config.fallback_image),
            &shell,
        ))
        .into_response(),
        LoadState::Failed(err) if err.is_not_found() => {
            tracing::info!(id = %id, "no detail document, redirecting to listing");
            Redirect::to(PROGRAM_LISTING).into_response()
        }
        LoadState::Failed(_) => Html(templates::render_page(
            "Programs",
            &templates::components::error_placeholder("program details"),
            &shell,
        ))
        .into_response(),
        LoadState::Loading => Html(templates::render_document(
            "Programs",
            &templates::components::loading_placeholder("program details"),
            &shell,
            Some(LOADING_REFRESH_SECS),
        ))
        .into_response(),
    }
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "source": state.loader.describe_source(),
        "cached_resources": state.loader.cached_entries().await,
    }))
}

pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> impl IntoResponse {
    let contact = load_contact(&state).await;
    let shell = state.shell(contact.ready(), uri.path());
    (
        StatusCode::NOT_FOUND,
        Html(templates::render_page(
            "Page Not Found",
            &templates::not_found::render(uri.path()),
            &shell,
        )),
    )
}
