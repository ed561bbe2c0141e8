// src/services/loader.rs
//! Memoizing loader over the Asset Data Store.
//!
//! Raw bodies are cached per resource path for the life of the process; the
//! source is static, so good entries are never invalidated. Failures are not
//! cached: a body that fails to parse or validate is dropped again so the
//! next load goes back to the source. Any problem collapses into
//! [`LoadState::Failed`].

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{FetchError, LoadError};
use crate::storage::AssetSource;

/// Three-state result a page renders from.
#[derive(Debug)]
pub enum LoadState<T> {
    /// The fetch was still running at the render deadline.
    Loading,
    Failed(LoadError),
    Ready(T),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed(_))
    }
}

impl<T> From<Result<T, LoadError>> for LoadState<T> {
    fn from(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready(data),
            Err(err) => LoadState::Failed(err),
        }
    }
}

#[derive(Clone)]
pub struct DataLoader {
    source: Arc<dyn AssetSource>,
    cache: Cache<String, Arc<Vec<u8>>>,
    deadline: Duration,
}

impl DataLoader {
    pub fn new(source: Arc<dyn AssetSource>, capacity: u64, deadline: Duration) -> Self {
        Self {
            source,
            cache: Cache::builder().max_capacity(capacity).build(),
            deadline,
        }
    }

    pub fn describe_source(&self) -> String {
        self.source.describe()
    }

    /// Read-through fetch. Concurrent first requests for one path share a
    /// single call into the source.
    pub async fn fetch(&self, path: &str) -> Result<Arc<Vec<u8>>, FetchError> {
        let source = self.source.clone();
        let key = path.to_string();

        self.cache
            .try_get_with(path.to_string(), async move {
                tracing::debug!(path = %key, "fetching asset");
                source.get(&key).await.map(Arc::new)
            })
            .await
            .map_err(|err| (*err).clone())
    }

    /// Load for rendering. Gives up waiting at the render deadline and
    /// reports [`LoadState::Loading`]; the fetch keeps running detached and
    /// fills the cache for the next request.
    pub async fn load_state<T>(&self, path: &str) -> LoadState<T>
    where
        T: DeserializeOwned + Validate,
    {
        if let Some(bytes) = self.cache.get(path).await {
            let outcome = self.decode_cached(path, &bytes).await;
            return self.finish(path, outcome);
        }

        let loader = self.clone();
        let key = path.to_string();
        let task = tokio::spawn(async move { loader.fetch(&key).await });

        let fetched = match tokio::time::timeout(self.deadline, task).await {
            Err(_) => {
                tracing::info!(path, deadline_ms = self.deadline.as_millis() as u64, "load still pending at render deadline");
                return LoadState::Loading;
            }
            Ok(Err(join_err)) => {
                tracing::error!(path, error = %join_err, "load task failed");
                Err(LoadError::Aborted(path.to_string()))
            }
            Ok(Ok(fetched)) => fetched.map_err(LoadError::from),
        };

        let outcome = match fetched {
            Ok(bytes) => self.decode_cached(path, &bytes).await,
            Err(err) => Err(err),
        };
        self.finish(path, outcome)
    }

    /// Decode a body that is in the cache, evicting it when it is bad.
    async fn decode_cached<T>(&self, path: &str, bytes: &[u8]) -> Result<T, LoadError>
    where
        T: DeserializeOwned + Validate,
    {
        let decoded = decode(path, bytes);
        if decoded.is_err() {
            self.discard(path).await;
        }
        decoded
    }

    /// Fetch `path` and run `check` over the body. A body that fails the
    /// check is not kept. Returns the body size.
    pub async fn verify(
        &self,
        path: &str,
        check: fn(&str, &[u8]) -> Result<(), LoadError>,
    ) -> Result<usize, LoadError> {
        let bytes = self.fetch(path).await?;
        if let Err(err) = check(path, &bytes) {
            self.discard(path).await;
            return Err(err);
        }
        Ok(bytes.len())
    }

    /// Drop a cached body so the next load refetches it.
    pub async fn discard(&self, path: &str) {
        self.cache.invalidate(path).await;
    }

    fn finish<T>(&self, path: &str, outcome: Result<T, LoadError>) -> LoadState<T> {
        if let Err(err) = &outcome {
            if err.is_not_found() {
                tracing::info!(path, "resource not found");
            } else {
                tracing::warn!(path, error = %err, "resource failed to load");
            }
        }
        outcome.into()
    }

    pub async fn is_cached(&self, path: &str) -> bool {
        self.cache.get(path).await.is_some()
    }

    pub async fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    /// Fill the cache for `paths`; failures are logged and left uncached.
    pub async fn prefetch(&self, paths: &[&str]) {
        for path in paths {
            match self.fetch(path).await {
                Ok(bytes) => tracing::info!(path, bytes = bytes.len(), "prefetched"),
                Err(err) => tracing::warn!(path, error = %err, "prefetch failed"),
            }
        }
    }
}

/// Parse and validate one document. Fails closed.
pub fn decode<T>(path: &str, bytes: &[u8]) -> Result<T, LoadError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })?;

    value.validate().map_err(|source| LoadError::Invalid {
        path: path.to_string(),
        source,
    })?;

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgramsDocument;
    use crate::storage::testing::MemorySource;

    const PROGRAMS: &str = "/assets/data/programs.json";

    const VALID: &str = r#"{
        "programs": [{
            "id": "ambulance-services",
            "title": "Ambulance Services",
            "shortDescription": "Round-the-clock emergency transport.",
            "fullDescription": "Free ambulance transport for patients.",
            "icon": "ambulance",
            "image": "/assets/images/ambulance.jpg",
            "features": ["24x7 availability"],
            "stats": [{ "value": "1200+", "label": "Trips" }],
            "contactPerson": "Ravi Kumar",
            "contactEmail": "ambulance@karuna.org"
        }]
    }"#;

    fn loader(source: MemorySource) -> (DataLoader, Arc<MemorySource>) {
        let source = Arc::new(source);
        let loader = DataLoader::new(source.clone(), 16, Duration::from_millis(500));
        (loader, source)
    }

    #[tokio::test]
    async fn test_valid_document_becomes_ready() {
        let (loader, _) = loader(MemorySource::new().with_json(PROGRAMS, VALID));

        let state = loader.load_state::<ProgramsDocument>(PROGRAMS).await;
        let doc = state.ready().expect("should be ready");
        let expected: ProgramsDocument = serde_json::from_str(VALID).unwrap();
        assert_eq!(doc, &expected);
    }

    #[tokio::test]
    async fn test_server_error_becomes_failed() {
        let (loader, _) = loader(MemorySource::new().with_status(PROGRAMS, 500));

        let state = loader.load_state::<ProgramsDocument>(PROGRAMS).await;
        assert!(state.is_failed());
        assert!(state.ready().is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_becomes_failed() {
        let (loader, _) = loader(MemorySource::new().with_json(PROGRAMS, "{ not json"));

        match loader.load_state::<ProgramsDocument>(PROGRAMS).await {
            LoadState::Failed(LoadError::Parse { .. }) => {}
            other => panic!("expected parse failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_schema_violation_fails_closed() {
        let bad_email = VALID.replace("ambulance@karuna.org", "not-an-email");
        let (loader, _) = loader(MemorySource::new().with_json(PROGRAMS, &bad_email));

        match loader.load_state::<ProgramsDocument>(PROGRAMS).await {
            LoadState::Failed(LoadError::Invalid { .. }) => {}
            other => panic!("expected validation failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_field_fails_closed() {
        let (loader, _) = loader(MemorySource::new().with_json(PROGRAMS, r#"{"programs":[{"id":"x"}]}"#));

        let state = loader.load_state::<ProgramsDocument>(PROGRAMS).await;
        assert!(state.is_failed());
    }

    #[tokio::test]
    async fn test_successful_fetch_is_memoized() {
        let (loader, source) = loader(MemorySource::new().with_json(PROGRAMS, VALID));

        for _ in 0..3 {
            assert!(loader.load_state::<ProgramsDocument>(PROGRAMS).await.ready().is_some());
        }
        assert_eq!(source.calls(), 1);
        assert!(loader.is_cached(PROGRAMS).await);
        assert_eq!(loader.cached_entries().await, 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let (loader, source) = loader(MemorySource::new().with_status(PROGRAMS, 503));

        assert!(loader.load_state::<ProgramsDocument>(PROGRAMS).await.is_failed());
        assert!(loader.load_state::<ProgramsDocument>(PROGRAMS).await.is_failed());
        assert_eq!(source.calls(), 2);
        assert!(!loader.is_cached(PROGRAMS).await);
    }

    #[tokio::test]
    async fn test_undecodable_body_is_refetched() {
        let (loader, source) = loader(MemorySource::new().with_json(PROGRAMS, "{ not json"));

        assert!(loader.load_state::<ProgramsDocument>(PROGRAMS).await.is_failed());
        assert!(!loader.is_cached(PROGRAMS).await);
        assert!(loader.load_state::<ProgramsDocument>(PROGRAMS).await.is_failed());
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_invalid_document_is_refetched() {
        let bad_email = VALID.replace("ambulance@karuna.org", "not-an-email");
        let (loader, source) = loader(MemorySource::new().with_json(PROGRAMS, &bad_email));

        assert!(loader.load_state::<ProgramsDocument>(PROGRAMS).await.is_failed());
        assert!(loader.load_state::<ProgramsDocument>(PROGRAMS).await.is_failed());
        assert_eq!(source.calls(), 2);
        assert_eq!(loader.cached_entries().await, 0);
    }

    #[tokio::test]
    async fn test_slow_fetch_reports_loading_then_ready() {
        let source = Arc::new(
            MemorySource::new()
                .with_json(PROGRAMS, VALID)
                .with_delay(Duration::from_millis(200)),
        );
        let loader = DataLoader::new(source.clone(), 16, Duration::from_millis(20));

        let first = loader.load_state::<ProgramsDocument>(PROGRAMS).await;
        assert!(first.is_loading());

        tokio::time::sleep(Duration::from_millis(400)).await;

        let second = loader.load_state::<ProgramsDocument>(PROGRAMS).await;
        assert!(second.ready().is_some());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_not_found_is_distinguishable() {
        let (loader, _) = loader(MemorySource::new());

        match loader.load_state::<ProgramsDocument>(PROGRAMS).await {
            LoadState::Failed(err) => assert!(err.is_not_found()),
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
