// src/templates/components.rs
//! Markup shared by the page templates.

use super::{html_escape, img};
use crate::models::Stat;
use crate::ui::{AccordionState, Pagination, PanelKey, ViewQuery, PAGE_WINDOW};

pub fn loading_placeholder(label: &str) -> String {
    format!(
        r#"<div class="status-placeholder loading" role="status">Loading {}...</div>"#,
        html_escape(label)
    )
}

pub fn error_placeholder(label: &str) -> String {
    format!(
        r#"<div class="status-placeholder error" role="alert">Error loading {}</div>"#,
        html_escape(label)
    )
}

pub fn empty_state(message: &str) -> String {
    format!(r#"<p class="empty-state">{}</p>"#, html_escape(message))
}

pub fn stats_grid(stats: &[Stat]) -> String {
    if stats.is_empty() {
        return String::new();
    }
    let cards = stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat-card">
                <div class="stat-value">{}</div>
                <div class="stat-label">{}</div>
            </div>"#,
                html_escape(&stat.value),
                html_escape(&stat.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<div class="stats-grid">{}</div>"#, cards)
}

/// Thumbnail strip; each thumbnail opens the modal on itself by src.
pub fn gallery_thumbs(
    key: &str,
    images: &[String],
    view: &ViewQuery,
    base: &str,
    fallback: &str,
) -> String {
    if images.is_empty() {
        return empty_state("Photos coming soon.");
    }
    let thumbs = images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            format!(
                r#"<a href="{}" class="gallery-thumb">{}</a>"#,
                html_escape(&view.with_show(key, src).href(base)),
                img(src, &format!("Photo {}", i + 1), "thumb", fallback)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<div class="gallery-strip">{}</div>"#, thumbs)
}

/// Overlay for the image set the query string points at.
pub fn gallery_modal(images: Vec<String>, view: &ViewQuery, base: &str, fallback: &str) -> String {
    let Some(key) = view.gallery.as_deref() else {
        return String::new();
    };
    let navigator = view.gallery_session(images);
    let close = html_escape(&view.without_gallery().href(base));

    let Some(frame) = navigator.current() else {
        return format!(
            r#"<div class="modal gallery-modal open">
            <div class="modal-content">
                <a href="{}" class="modal-close" aria-label="Close">×</a>
                {}
            </div>
        </div>"#,
            close,
            empty_state("No photos in this collection yet.")
        );
    };

    let stepper = |target: Option<usize>, class: &str, label: &str| -> String {
        match target {
            Some(index) if frame.total > 1 => format!(
                r#"<a href="{}" class="{}" aria-label="{}">{}</a>"#,
                html_escape(&view.with_image(key, index).href(base)),
                class,
                label,
                if class == "gallery-prev" { "‹" } else { "›" }
            ),
            _ => String::new(),
        }
    };

    format!(
        r#"<div class="modal gallery-modal open" role="dialog" aria-modal="true">
        <div class="modal-content">
            <a href="{}" class="modal-close" aria-label="Close">×</a>
            {}
            {}
            {}
            <div class="gallery-counter">{} / {}</div>
        </div>
    </div>"#,
        close,
        stepper(navigator.peek_previous(), "gallery-prev", "Previous image"),
        img(frame.src, &format!("Image {}", frame.index + 1), "gallery-image", fallback),
        stepper(navigator.peek_next(), "gallery-next", "Next image"),
        frame.index + 1,
        frame.total
    )
}

pub fn pagination_nav(pagination: &Pagination, view: &ViewQuery, base: &str) -> String {
    if pagination.page_count() <= 1 {
        return String::new();
    }

    let mut buttons = Vec::new();
    if pagination.has_previous() {
        buttons.push(format!(
            r#"<a href="{}" class="page-btn">Previous</a>"#,
            html_escape(&view.with_page(pagination.current() - 1).href(base))
        ));
    }
    for page in pagination.window(PAGE_WINDOW) {
        let class = if page == pagination.current() { "page-btn active" } else { "page-btn" };
        buttons.push(format!(
            r#"<a href="{}" class="{}">{}</a>"#,
            html_escape(&view.with_page(page).href(base)),
            class,
            page
        ));
    }
    if pagination.has_next() {
        buttons.push(format!(
            r#"<a href="{}" class="page-btn">Next</a>"#,
            html_escape(&view.with_page(pagination.current() + 1).href(base))
        ));
    }

    format!(r#"<nav class="pagination">{}</nav>"#, buttons.join("\n"))
}

/// Picks the requested tab when it exists, else the first one.
pub fn active_tab<'a>(tabs: &[&'a str], requested: Option<&str>) -> Option<&'a str> {
    requested
        .and_then(|want| tabs.iter().copied().find(|tab| *tab == want))
        .or_else(|| tabs.first().copied())
}

pub fn tab_bar(tabs: &[&str], active: &str, view: &ViewQuery, base: &str) -> String {
    let links = tabs
        .iter()
        .map(|tab| {
            format!(
                r#"<a href="{}" class="{}">{}</a>"#,
                html_escape(&view.with_tab(tab).href(base)),
                if *tab == active { "tab active" } else { "tab" },
                html_escape(tab)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(r#"<div class="tab-bar">{}</div>"#, links)
}

pub fn accordion_panel(
    key: &PanelKey,
    state: &AccordionState,
    view: &ViewQuery,
    base: &str,
    title: &str,
    body: &str,
) -> String {
    let open = state.is_open(key);
    let toggle = view.with_open(state.toggled(key).encode());
    format!(
        r#"<div class="accordion-item{}">
        <a href="{}" class="accordion-header" aria-expanded="{}">
            <span>{}</span><span class="accordion-icon">{}</span>
        </a>
        {}
    </div>"#,
        if open { " open" } else { "" },
        html_escape(&toggle.href(base)),
        open,
        html_escape(title),
        if open { "−" } else { "+" },
        if open {
            format!(r#"<div class="accordion-body">{}</div>"#, body)
        } else {
            String::new()
        }
    )
}

/// Overlay for one selected record.
pub fn record_modal(close_href: &str, body: &str) -> String {
    format!(
        r#"<div class="modal record-modal open" role="dialog" aria-modal="true">
        <div class="modal-content">
            <a href="{}" class="modal-close" aria-label="Close">×</a>
            {}
        </div>
    </div>"#,
        html_escape(close_href),
        body
    )
}
