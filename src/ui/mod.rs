// src/ui/mod.rs
//! Request-scoped UI state: galleries, pagination, accordions and the
//! query string that carries them.

pub mod accordion;
pub mod gallery;
pub mod pagination;
pub mod view;

pub use accordion::{AccordionState, PanelKey};
pub use pagination::{Pagination, PAGE_WINDOW};
pub use view::ViewQuery;
