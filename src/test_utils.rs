//! Test utilities shared by several test modules.
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use crate::fetch::{
    Fetch,
    FetchError,
};
use crate::types::LocaleTable;

/// In-memory fetcher that serves fixed texts and records every request.
#[derive(Debug, Default)]
pub(crate) struct MapFetcher {
    /// Path to file contents
    files: HashMap<String, String>,
    /// Paths requested so far, in order
    requests: Mutex<Vec<String>>,
}

impl MapFetcher {
    /// Add a resource served at `path`.
    pub(crate) fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Paths requested so far.
    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for MapFetcher {
    async fn fetch_data(&self, path: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(path.to_string());
        self.files.get(path).cloned().ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}

/// Build a table from `(key, value)` pairs.
pub(crate) fn table(pairs: &[(&str, &str)]) -> LocaleTable {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}
