// src/ui/view.rs
//! Per-request UI state carried in the query string.
//!
//! Every interactive control on a page is a link back to the same page with
//! one of these fields changed, so the state lives exactly as long as the
//! request that renders it.

use serde::Deserialize;
use url::form_urlencoded;

use super::gallery::GalleryNavigator;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ViewQuery {
    /// 1-based page number for paginated lists.
    pub page: Option<usize>,
    pub tab: Option<String>,
    /// Encoded accordion open set, see `AccordionState::encode`.
    pub open: Option<String>,
    /// Key of the image set shown in the modal.
    pub gallery: Option<String>,
    pub image: Option<usize>,
    /// Thumbnail src that was clicked; wins over `image`.
    pub show: Option<String>,
    /// Record shown in the detail modal.
    pub selected: Option<String>,
}

impl ViewQuery {
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    /// Switching tab starts the list again from page one.
    pub fn with_tab(&self, tab: &str) -> Self {
        Self {
            tab: Some(tab.to_string()),
            page: None,
            ..self.clone()
        }
    }

    pub fn with_open(&self, encoded: String) -> Self {
        Self {
            open: Some(encoded),
            ..self.clone()
        }
    }

    pub fn with_image(&self, gallery: &str, index: usize) -> Self {
        Self {
            gallery: Some(gallery.to_string()),
            image: Some(index),
            show: None,
            ..self.clone()
        }
    }

    pub fn with_show(&self, gallery: &str, src: &str) -> Self {
        Self {
            gallery: Some(gallery.to_string()),
            image: None,
            show: Some(src.to_string()),
            ..self.clone()
        }
    }

    pub fn without_gallery(&self) -> Self {
        Self {
            gallery: None,
            image: None,
            show: None,
            ..self.clone()
        }
    }

    pub fn with_selected(&self, id: &str) -> Self {
        Self {
            selected: Some(id.to_string()),
            ..self.clone()
        }
    }

    pub fn without_selected(&self) -> Self {
        Self {
            selected: None,
            ..self.clone()
        }
    }

    /// A fresh navigator positioned from `image` / `show`.
    pub fn gallery_session(&self, images: Vec<String>) -> GalleryNavigator {
        let mut navigator = GalleryNavigator::new();
        navigator.open(images, self.image.unwrap_or(0));
        if let Some(src) = &self.show {
            navigator.select(src);
        }
        navigator
    }

    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(page) = self.page {
            serializer.append_pair("page", &page.to_string());
        }
        if let Some(tab) = &self.tab {
            serializer.append_pair("tab", tab);
        }
        if let Some(open) = &self.open {
            serializer.append_pair("open", open);
        }
        if let Some(gallery) = &self.gallery {
            serializer.append_pair("gallery", gallery);
        }
        if let Some(image) = self.image {
            serializer.append_pair("image", &image.to_string());
        }
        if let Some(show) = &self.show {
            serializer.append_pair("show", show);
        }
        if let Some(selected) = &self.selected {
            serializer.append_pair("selected", selected);
        }
        serializer.finish()
    }

    /// Link to `base` carrying this state.
    pub fn href(&self, base: &str) -> String {
        let query = self.query_string();
        if query.is_empty() {
            base.to_string()
        } else {
            format!("{}?{}", base, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_links_to_bare_path() {
        assert_eq!(ViewQuery::default().href("/gallery"), "/gallery");
    }

    #[test]
    fn test_href_round_trips_through_query_parsing() {
        let view = ViewQuery::default()
            .with_tab("Health Camps")
            .with_page(3)
            .with_open("camp%2Fa/north".to_string())
            .with_image("camp-a/north", 2)
            .with_selected("7");

        let href = view.href("/cancer-awareness-camp");
        let query = href.split_once('?').unwrap().1;
        let parsed: ViewQuery = serde_urlencoded_parse(query);
        assert_eq!(parsed, view);
    }

    #[test]
    fn test_tab_change_resets_page() {
        let view = ViewQuery::default().with_page(4).with_tab("Board");
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn test_show_overrides_image_index() {
        let view = ViewQuery::default().with_show("g", "b.jpg");
        let nav = view.gallery_session(vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()]);
        assert_eq!(nav.current().unwrap().index, 1);
    }

    fn serde_urlencoded_parse(query: &str) -> ViewQuery {
        let uri: axum::http::Uri = format!("/x?{}", query).parse().unwrap();
        axum::extract::Query::<ViewQuery>::try_from_uri(&uri).unwrap().0
    }
}
