// src/handlers/admin_web.rs
//! Demo admin area. The credential check is a plain comparison against the
//! configured pair; there is no session, so the dashboard is only shown in
//! the response to a successful login.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tokio::task::JoinSet;

use super::page::load_contact;
use crate::services::resources;
use crate::templates::{self, admin::ResourceRow};
use crate::AppState;

const ADMIN_PATH: &str = "/admin";

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

fn credentials_match(form: &LoginForm, username: &str, password: &str) -> bool {
    let user_ok = form.username.as_bytes().ct_eq(username.as_bytes());
    let pass_ok = form.password.as_bytes().ct_eq(password.as_bytes());
    (user_ok & pass_ok).into()
}

/// Fetch and check every resource concurrently, each bounded by the render
/// deadline. Rows come back in table order.
async fn check_resources(state: &AppState) -> Vec<ResourceRow> {
    let deadline = state.config.load_deadline;
    let mut checks = JoinSet::new();

    for (index, resource) in resources::ALL.iter().copied().enumerate() {
        let loader = state.loader.clone();
        checks.spawn(async move {
            let verified = tokio::time::timeout(deadline, loader.verify(resource.path, resource.check));
            let outcome = match verified.await {
                Ok(result) => result.map_err(|err| err.to_string()),
                Err(_) => Err("still loading".to_string()),
            };
            (
                index,
                ResourceRow {
                    label: resource.label,
                    path: resource.path,
                    outcome,
                },
            )
        });
    }

    let mut rows = Vec::with_capacity(resources::ALL.len());
    while let Some(joined) = checks.join_next().await {
        match joined {
            Ok(row) => rows.push(row),
            Err(err) => tracing::error!(error = %err, "resource check task failed"),
        }
    }
    rows.sort_by_key(|(index, _)| *index);
    rows.into_iter().map(|(_, row)| row).collect()
}

pub async fn login_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let contact = load_contact(&state).await;
    let shell = state.shell(contact.ready(), ADMIN_PATH);
    Html(templates::render_page(
        "Admin",
        &templates::admin::render_login(None),
        &shell,
    ))
}

pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Response {
    let contact = load_contact(&state).await;

    if !credentials_match(
        &form,
        &state.config.admin_username,
        &state.config.admin_password,
    ) {
        tracing::warn!(username = %form.username, "failed admin login");
        let shell = state.shell(contact.ready(), ADMIN_PATH);
        return (
            StatusCode::UNAUTHORIZED,
            Html(templates::render_page(
                "Admin",
                &templates::admin::render_login(Some("Invalid username or password")),
                &shell,
            )),
        )
            .into_response();
    }

    tracing::info!(username = %form.username, "admin login");

    let rows = check_resources(&state).await;
    let cached = state.loader.cached_entries().await;

    let shell = state.shell(contact.ready(), ADMIN_PATH);
    Html(templates::render_page(
        "Admin Dashboard",
        &templates::admin::render_dashboard(
            &form.username,
            &rows,
            &state.loader.describe_source(),
            cached,
        ),
        &shell,
    ))
    .into_response()
}
