// src/ui/gallery.rs
//! Index over an ordered image list with wraparound stepping.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryFrame<'a> {
    pub src: &'a str,
    pub index: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Default)]
pub struct GalleryNavigator {
    images: Vec<String>,
    current: usize,
    open: bool,
}

impl GalleryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a modal session. An out-of-range `start` wraps like any other
    /// step. Opening an empty list leaves the navigator without a frame.
    pub fn open(&mut self, images: Vec<String>, start: usize) {
        self.current = if images.is_empty() { 0 } else { start % images.len() };
        self.images = images;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.images.clear();
        self.current = 0;
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// No-op on an empty list.
    pub fn next(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + 1) % len;
    }

    /// No-op on an empty list.
    pub fn previous(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + len - 1) % len;
    }

    /// Jump to the first image equal to `src`. Returns false and leaves the
    /// index alone when it is not in the list.
    pub fn select(&mut self, src: &str) -> bool {
        match self.images.iter().position(|image| image == src) {
            Some(index) => {
                self.current = index;
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<GalleryFrame<'_>> {
        if !self.open {
            return None;
        }
        self.images.get(self.current).map(|src| GalleryFrame {
            src,
            index: self.current,
            total: self.images.len(),
        })
    }

    /// Index `next()` would land on, without moving.
    pub fn peek_next(&self) -> Option<usize> {
        let mut ahead = self.clone();
        ahead.next();
        ahead.current().map(|frame| frame.index)
    }

    /// Index `previous()` would land on, without moving.
    pub fn peek_previous(&self) -> Option<usize> {
        let mut behind = self.clone();
        behind.previous();
        behind.current().map(|frame| frame.index)
    }
}
