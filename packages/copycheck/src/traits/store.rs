//! DocumentStore trait for remote document retrieval.

use async_trait::async_trait;

use crate::error::FetchResult;
use crate::types::{DocumentId, RawDocument};

/// Remote document store abstraction.
///
/// Implementations open an authenticated, read-only session to a cloud
/// document store and download whole documents into memory. One outbound
/// call per invocation; no internal retry loop — retries are the caller's
/// decision because [`FetchError::TransientIo`](crate::error::FetchError)
/// is distinguishable from the permanent variants.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Download the full document named by `id`.
    ///
    /// The returned [`RawDocument`] carries the declared content kind so
    /// the extractor knows how to decode it.
    async fn download(&self, id: &DocumentId) -> FetchResult<RawDocument>;

    /// Get the store name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
