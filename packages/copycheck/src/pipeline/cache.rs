//! Time-bounded cache over download + extraction.
//!
//! Keyed by document identifier; at most one live entry per identifier,
//! last-write-wins. There is no single-flight de-duplication: concurrent
//! callers observing a miss may both download, which is acceptable because
//! the download is idempotent and side-effect-free on the remote store.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, info};

use crate::error::Result;
use crate::extract::extract_text;
use crate::traits::DocumentStore;
use crate::types::{config::default_ttl, DocumentId};

/// A cached extracted-text value.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Extracted reference text
    pub text: String,

    /// When the underlying document was downloaded
    pub fetched_at: DateTime<Utc>,
}

/// TTL cache over a [`DocumentStore`] and the text extractor.
///
/// Repeated [`get`](ReferenceCache::get) calls within the validity window
/// return the cached text without touching the store. Failures from either
/// the download or the extraction are propagated and never cached.
///
/// # Example
///
/// ```rust,ignore
/// let cache = ReferenceCache::new(DriveSource::new(credentials));
/// let text = cache.get(&DocumentId::new("doc-1")).await?;
/// ```
pub struct ReferenceCache<S: DocumentStore> {
    store: S,
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl<S: DocumentStore> ReferenceCache<S> {
    /// Create a cache with the default TTL (1 hour).
    pub fn new(store: S) -> Self {
        Self {
            store,
            ttl: default_ttl(),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Set the time-to-live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Get the reference text for `id`, refreshing if the entry is missing
    /// or older than the TTL.
    pub async fn get(&self, id: &DocumentId) -> Result<String> {
        if let Some(text) = self.live_entry(id) {
            debug!(id = %id, "cache hit");
            return Ok(text);
        }

        debug!(id = %id, store = self.store.name(), "cache miss, downloading");
        let raw = self.store.download(id).await?;
        let text = extract_text(&raw.bytes, raw.kind)?;

        info!(id = %id, chars = text.len(), "reference document refreshed");
        self.entries.write().unwrap().insert(
            id.as_str().to_string(),
            CacheEntry {
                text: text.clone(),
                fetched_at: Utc::now(),
            },
        );

        Ok(text)
    }

    /// Drop the entry for `id`, forcing a refresh on the next get.
    pub fn invalidate(&self, id: &DocumentId) {
        self.entries.write().unwrap().remove(id.as_str());
    }

    /// Drop all entries.
    pub fn clear(&self) {
        self.entries.write().unwrap().clear();
    }

    /// Number of entries currently held (live or expired).
    pub fn entry_count(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    fn live_entry(&self, id: &DocumentId) -> Option<String> {
        let entries = self.entries.read().unwrap();
        entries
            .get(id.as_str())
            .filter(|e| Utc::now() - e.fetched_at < self.ttl)
            .map(|e| e.text.clone())
    }

    /// Age the entry for `id` by `by`, as if it had been fetched earlier.
    #[cfg(test)]
    pub(crate) fn backdate(&self, id: &DocumentId, by: Duration) {
        if let Some(entry) = self.entries.write().unwrap().get_mut(id.as_str()) {
            entry.fetched_at = entry.fetched_at - by;
        }
    }
}
