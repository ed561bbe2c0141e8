// src/error.rs
use thiserror::Error;

/// Failure to obtain the raw bytes of an asset.
///
/// `Clone` because the shared cache hands failures back behind an `Arc`
/// to every caller that was waiting on the same fetch.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The store answered with a non-2xx status.
    #[error("asset store returned status {status} for {path}")]
    Status { path: String, status: u16 },

    /// The store could not be reached or the read failed.
    #[error("asset store unavailable for {path}: {reason}")]
    Unavailable { path: String, reason: String },

    /// The resource path was rejected before any I/O happened.
    #[error("invalid asset path: {0}")]
    InvalidPath(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}

/// Anything that keeps a resource from reaching the Ready state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} failed validation: {source}")]
    Invalid {
        path: String,
        #[source]
        source: validator::ValidationErrors,
    },

    /// The detached fetch task panicked or was aborted.
    #[error("load task for {0} did not complete")]
    Aborted(String),
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::Fetch(fetch) if fetch.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let missing = LoadError::from(FetchError::Status {
            path: "/assets/data/x.json".to_string(),
            status: 404,
        });
        assert!(missing.is_not_found());

        let broken = LoadError::from(FetchError::Status {
            path: "/assets/data/x.json".to_string(),
            status: 500,
        });
        assert!(!broken.is_not_found());
        assert!(broken.to_string().contains("500"));
    }
}
