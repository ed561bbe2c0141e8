// src/templates/gallery.rs
use super::components::{active_tab, empty_state, pagination_nav, tab_bar};
use super::{html_escape, img, ContentPage, RenderContext};
use crate::models::{GalleryDocument, GalleryItem};
use crate::services::resources;
use crate::ui::{Pagination, ViewQuery};

/// Photo gallery; the modal walks every photo in the active category, not
/// just the visible page.
pub struct GalleryPage;

fn in_category<'a>(data: &'a GalleryDocument, category: &str) -> Vec<&'a GalleryItem> {
    data.items
        .iter()
        .filter(|item| item.category == category)
        .collect()
}

impl ContentPage for GalleryPage {
    type Data = GalleryDocument;

    const PATH: &'static str = "/gallery";
    const RESOURCE: &'static str = resources::GALLERY_ITEMS;
    const TITLE: &'static str = "Gallery";
    const LABEL: &'static str = "gallery";

    fn render(data: &GalleryDocument, view: &ViewQuery, ctx: &RenderContext) -> String {
        let categories = data.categories();
        let Some(active) = active_tab(&categories, view.tab.as_deref()) else {
            return empty_state("Photos will be added soon.");
        };

        let items = in_category(data, active);
        let pagination = Pagination::new(items.len(), ctx.page_size, view.page());

        let tiles = pagination
            .slice(&items)
            .iter()
            .map(|item| {
                let caption = item
                    .caption
                    .as_deref()
                    .map(|c| format!("<p>{}</p>", html_escape(c)))
                    .unwrap_or_default();
                format!(
                    r#"<figure class="gallery-tile">
                <a href="{}">{}</a>
                <figcaption><strong>{}</strong>{}</figcaption>
            </figure>"#,
                    html_escape(&view.with_show(active, &item.image).href(Self::PATH)),
                    img(&item.image, &item.title, "tile-image", ctx.fallback_image),
                    html_escape(&item.title),
                    caption
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"
    {}
    <div class="gallery-grid">
        {}
    </div>
    {}
    "#,
            tab_bar(&categories, active, view, Self::PATH),
            tiles,
            pagination_nav(&pagination, view, Self::PATH)
        )
    }

    fn gallery(data: &GalleryDocument, key: &str) -> Option<Vec<String>> {
        let items = in_category(data, key);
        if items.is_empty() {
            return None;
        }
        Some(items.into_iter().map(|item| item.image.clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    const CTX: RenderContext<'static> = RenderContext {
        fallback_image: "/fallback.svg",
        page_size: 2,
    };

    fn doc() -> GalleryDocument {
        let item = |id: u64, category: &str| GalleryItem {
            id: RecordId::Number(id),
            title: format!("Photo {}", id),
            category: category.to_string(),
            image: format!("/img/{}.jpg", id),
            caption: None,
        };
        GalleryDocument {
            items: vec![
                item(1, "Camps"),
                item(2, "Camps"),
                item(3, "Kitchen"),
                item(4, "Camps"),
            ],
        }
    }

    #[test]
    fn test_category_tab_and_paging() {
        let html = GalleryPage::render(&doc(), &ViewQuery::default().with_page(2), &CTX);
        assert!(html.contains("Photo 4"));
        assert!(!html.contains("Photo 1<"));
        assert!(!html.contains("Photo 3"));
    }

    #[test]
    fn test_modal_spans_whole_category() {
        let images = GalleryPage::gallery(&doc(), "Camps").unwrap();
        assert_eq!(images, vec!["/img/1.jpg", "/img/2.jpg", "/img/4.jpg"]);
        assert!(GalleryPage::gallery(&doc(), "Nope").is_none());
    }
}
