//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the screening core
//! without making real document-store or model calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{AnalysisError, AnalysisResult, FetchError, FetchResult};
use crate::traits::{DocumentStore, GenerativeModel};
use crate::types::{DocumentId, RawDocument};

/// Failure kinds a [`MockStore`] can be told to produce.
///
/// Stored as a kind rather than a constructed error because
/// [`FetchError`] is not `Clone`; the mock builds a fresh error per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// Produce [`FetchError::Unauthorized`]
    Unauthorized,
    /// Produce [`FetchError::NotFound`]
    NotFound,
    /// Produce [`FetchError::TransientIo`]
    Transient,
}

/// A mock document store for testing.
///
/// Serves predefined documents by identifier, with per-identifier failure
/// injection and call counting for cache assertions. State is `Arc`-shared,
/// so a clone kept outside the pipeline observes calls made through it.
#[derive(Default, Clone)]
pub struct MockStore {
    documents: Arc<RwLock<HashMap<String, RawDocument>>>,
    failures: Arc<RwLock<HashMap<String, MockFailure>>>,
    downloads: Arc<RwLock<Vec<String>>>,
}

impl MockStore {
    /// Create a new empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined document.
    pub fn with_document(self, id: impl Into<String>, doc: RawDocument) -> Self {
        self.documents.write().unwrap().insert(id.into(), doc);
        self
    }

    /// Add a plain-text document from a string.
    pub fn with_plain_text(self, id: impl Into<String>, text: &str) -> Self {
        self.with_document(id, RawDocument::plain_text(text.as_bytes().to_vec()))
    }

    /// Make downloads of `id` fail.
    pub fn with_failure(self, id: impl Into<String>, failure: MockFailure) -> Self {
        self.failures.write().unwrap().insert(id.into(), failure);
        self
    }

    /// Replace the document served for `id` (e.g. mid-test).
    pub fn set_document(&self, id: impl Into<String>, doc: RawDocument) {
        self.documents.write().unwrap().insert(id.into(), doc);
    }

    /// Replace the plain-text document served for `id`.
    pub fn set_plain_text(&self, id: impl Into<String>, text: &str) {
        self.set_document(id, RawDocument::plain_text(text.as_bytes().to_vec()));
    }

    /// Stop failing downloads of `id`.
    pub fn clear_failure(&self, id: &str) {
        self.failures.write().unwrap().remove(id);
    }

    /// All download calls, in order, by identifier.
    pub fn downloads(&self) -> Vec<String> {
        self.downloads.read().unwrap().clone()
    }

    /// Number of download calls for `id`.
    pub fn download_count(&self, id: &str) -> usize {
        self.downloads
            .read()
            .unwrap()
            .iter()
            .filter(|d| *d == id)
            .count()
    }
}

#[async_trait]
impl DocumentStore for MockStore {
    async fn download(&self, id: &DocumentId) -> FetchResult<RawDocument> {
        self.downloads
            .write()
            .unwrap()
            .push(id.as_str().to_string());

        if let Some(failure) = self.failures.read().unwrap().get(id.as_str()) {
            return Err(match failure {
                MockFailure::Unauthorized => FetchError::Unauthorized,
                MockFailure::NotFound => FetchError::NotFound { id: id.clone() },
                MockFailure::Transient => FetchError::TransientIo(Box::new(
                    std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "mock refused"),
                )),
            });
        }

        self.documents
            .read()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| FetchError::NotFound { id: id.clone() })
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Record of a call made to the mock model.
#[derive(Debug, Clone)]
pub struct MockModelCall {
    /// System instruction the analyzer sent
    pub system: String,
    /// Formatted prompt the analyzer sent
    pub prompt: String,
}

/// A mock generative model for testing.
///
/// Returns a canned response and records every call for assertions.
/// Clones share state, like [`MockStore`].
#[derive(Default, Clone)]
pub struct MockModel {
    response: Arc<RwLock<String>>,
    failure: Arc<RwLock<Option<String>>>,
    calls: Arc<RwLock<Vec<MockModelCall>>>,
}

impl MockModel {
    /// Create a mock model returning an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canned response.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        *self.response.write().unwrap() = response.into();
        self
    }

    /// Make every call fail with [`AnalysisError::Service`].
    pub fn failing(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }

    /// All calls made to this mock.
    pub fn calls(&self) -> Vec<MockModelCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for MockModel {
    async fn generate(&self, system: &str, prompt: &str) -> AnalysisResult<String> {
        self.calls.write().unwrap().push(MockModelCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });

        if let Some(message) = self.failure.read().unwrap().as_ref() {
            return Err(AnalysisError::Service(message.clone()));
        }

        Ok(self.response.read().unwrap().clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_store_serves_documents() {
        let store = MockStore::new().with_plain_text("doc-1", "Rule A");

        let doc = store.download(&DocumentId::new("doc-1")).await.unwrap();
        assert_eq!(doc.bytes, b"Rule A");
        assert_eq!(store.download_count("doc-1"), 1);
    }

    #[tokio::test]
    async fn test_mock_store_unknown_id_is_not_found() {
        let store = MockStore::new();
        let result = store.download(&DocumentId::new("missing")).await;
        assert!(matches!(result, Err(FetchError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_mock_store_failure_injection() {
        let store = MockStore::new()
            .with_plain_text("doc-1", "Rule A")
            .with_failure("doc-1", MockFailure::Unauthorized);

        let result = store.download(&DocumentId::new("doc-1")).await;
        assert!(matches!(result, Err(FetchError::Unauthorized)));

        // Failure cleared: the document is served again
        store.clear_failure("doc-1");
        assert!(store.download(&DocumentId::new("doc-1")).await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_model_records_calls() {
        let model = MockModel::new().with_response("report body");

        let out = model.generate("system", "prompt").await.unwrap();
        assert_eq!(out, "report body");

        let calls = model.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system, "system");
        assert_eq!(calls[0].prompt, "prompt");
    }

    #[tokio::test]
    async fn test_mock_model_failing() {
        let model = MockModel::new().failing("boom");
        let result = model.generate("s", "p").await;
        assert!(matches!(result, Err(AnalysisError::Service(_))));
    }
}
