// src/ui/pagination.rs
use std::ops::RangeInclusive;

/// Number of page buttons shown around the current page.
pub const PAGE_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    total_items: usize,
    page_size: usize,
    current: usize,
}

impl Pagination {
    /// `requested` is 1-based and clamped into `[1, page_count]`. A zero page
    /// size is treated as one item per page.
    pub fn new(total_items: usize, page_size: usize, requested: usize) -> Self {
        let page_size = page_size.max(1);
        let pages = total_items.div_ceil(page_size);
        let current = requested.clamp(1, pages.max(1));
        Self {
            total_items,
            page_size,
            current,
        }
    }

    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.page_count()
    }

    /// Items on the current page: `[(page-1)*size, page*size)`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = ((self.current - 1) * self.page_size).min(items.len());
        let end = (self.current * self.page_size).min(items.len());
        &items[start..end]
    }

    /// Up to `width` page numbers centred on the current page, shifted to
    /// stay inside `[1, page_count]`. Empty when there are no pages.
    pub fn window(&self, width: usize) -> RangeInclusive<usize> {
        let pages = self.page_count();
        if pages == 0 || width == 0 {
            return 1..=0;
        }
        let width = width.min(pages);
        let start = self.current.saturating_sub(width / 2).max(1);
        let end = (start + width - 1).min(pages);
        let start = end + 1 - width;
        start..=end
    }
}
