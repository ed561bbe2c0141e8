// src/storage/dir.rs
use std::io::ErrorKind;
use std::path::PathBuf;

use axum::async_trait;

use super::AssetSource;
use crate::error::FetchError;
use crate::utils::validation::is_safe_path;

/// Serves assets from a local directory laid out like the public site
/// (`<root>/assets/data/...`).
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = path.trim_start_matches('/');
        if !is_safe_path(relative) {
            return Err(FetchError::InvalidPath(path.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl AssetSource for DirSource {
    async fn get(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let file = self.resolve(path)?;
        match tokio::fs::read(&file).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(FetchError::Status {
                path: path.to_string(),
                status: 404,
            }),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(FetchError::Status {
                path: path.to_string(),
                status: 403,
            }),
            Err(e) => Err(FetchError::Unavailable {
                path: path.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
