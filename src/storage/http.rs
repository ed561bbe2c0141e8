// src/storage/http.rs
use std::time::Duration;

use axum::async_trait;
use url::Url;

use super::AssetSource;
use crate::error::FetchError;

/// Fetches assets from a remote static host with plain GET requests.
pub struct HttpSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpSource {
    pub fn new(base: &str, timeout: Duration) -> anyhow::Result<Self> {
        let mut base = Url::parse(base)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("karuna/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base })
    }

    /// Resource paths are site-absolute; they are resolved under the base so
    /// a base of `https://cdn.example.org/site/` keeps its prefix.
    pub fn url_for(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|_| FetchError::InvalidPath(path.to_string()))
    }
}

#[async_trait]
impl AssetSource for HttpSource {
    async fn get(&self, path: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.url_for(path)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Unavailable {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Unavailable {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        format!("http {}", self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_keeps_base_prefix() {
        let source = HttpSource::new("https://cdn.example.org/site", Duration::from_secs(5)).unwrap();
        let url = source.url_for("/assets/data/programs.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.org/site/assets/data/programs.json"
        );
    }

    #[test]
    fn test_rejects_bad_base() {
        assert!(HttpSource::new("not a url", Duration::from_secs(5)).is_err());
    }
}
