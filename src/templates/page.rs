// src/templates/page.rs
//! The generic fetch-render page.
//!
//! A page is a data source descriptor plus a render function. Loading and
//! error placeholders, the shell and the gallery overlay are handled here
//! once for every page.

use serde::de::DeserializeOwned;
use validator::Validate;

use super::components::{error_placeholder, gallery_modal, loading_placeholder};
use super::{render_document, Shell};
use crate::services::loader::LoadState;
use crate::ui::ViewQuery;

/// Seconds before the loading placeholder asks the browser to retry.
pub const LOADING_REFRESH_SECS: u32 = 1;

/// Render-time settings shared by every page.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub fallback_image: &'a str,
    pub page_size: usize,
}

pub trait ContentPage {
    type Data: DeserializeOwned + Validate + Send + 'static;

    /// Route the page is mounted on; also the base for its own links.
    const PATH: &'static str;
    const RESOURCE: &'static str;
    const TITLE: &'static str;
    /// What is being loaded, as in "Error loading {LABEL}".
    const LABEL: &'static str;

    fn render(data: &Self::Data, view: &ViewQuery, ctx: &RenderContext) -> String;

    /// Image set behind a gallery key, if the page has galleries.
    fn gallery(_data: &Self::Data, _key: &str) -> Option<Vec<String>> {
        None
    }
}

/// Body for one load state. Exactly one branch renders; the second value
/// asks for an auto-refresh while loading.
pub fn render_state<P: ContentPage>(
    state: &LoadState<P::Data>,
    view: &ViewQuery,
    ctx: &RenderContext,
) -> (String, Option<u32>) {
    match state {
        LoadState::Loading => (loading_placeholder(P::LABEL), Some(LOADING_REFRESH_SECS)),
        LoadState::Failed(_) => (error_placeholder(P::LABEL), None),
        LoadState::Ready(data) => {
            let mut body = P::render(data, view, ctx);
            if let Some(images) = view.gallery.as_deref().and_then(|key| P::gallery(data, key)) {
                body.push_str(&gallery_modal(images, view, P::PATH, ctx.fallback_image));
            }
            (body, None)
        }
    }
}

pub fn render_content_page<P: ContentPage>(
    state: &LoadState<P::Data>,
    view: &ViewQuery,
    ctx: &RenderContext,
    shell: &Shell,
) -> String {
    let (body, refresh) = render_state::<P>(state, view, ctx);
    render_document(P::TITLE, &body, shell, refresh)
}
