// src/storage/mod.rs
//! Read-only access to the Asset Data Store.
//!
//! Resources are addressed by their site path (`/assets/data/programs.json`).
//! A source only has to answer GET with either the body bytes or a
//! [`FetchError`]; status discrimination happens here, parsing does not.

pub mod dir;
pub mod http;

use axum::async_trait;

use crate::error::FetchError;

pub use dir::DirSource;
pub use http::HttpSource;

#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Fetch the raw body of `path`.
    async fn get(&self, path: &str) -> Result<Vec<u8>, FetchError>;

    /// Human readable location, for logs and the admin dashboard.
    fn describe(&self) -> String;
}
