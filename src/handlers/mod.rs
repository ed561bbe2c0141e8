pub mod admin_web;
pub mod page;
pub mod web;
