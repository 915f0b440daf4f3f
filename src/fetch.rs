//! Resource fetching for language files.

use std::future::Future;
use std::io::ErrorKind;

use thiserror::Error;

/// Errors raised while retrieving a language resource.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The resource does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),
    /// Any other I/O failure while reading the resource
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Retrieves the full text of a resource by path.
///
/// Failures of any kind are absorbed by the store, so implementations only
/// need to report them.
pub trait Fetch: Send + Sync {
    /// Fetch the resource at `path`.
    fn fetch_data(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Reads language files from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl Fetch for FileFetcher {
    async fn fetch_data(&self, path: &str) -> Result<String, FetchError> {
        tracing::debug!(path, "Reading language file");

        tokio::fs::read_to_string(path).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                FetchError::NotFound(path.to_string())
            } else {
                FetchError::Io { path: path.to_string(), source }
            }
        })
    }
}
