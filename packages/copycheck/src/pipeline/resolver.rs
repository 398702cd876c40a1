//! Two-tier reference resolution: cloud path first, manual upload second.

use tracing::warn;

use crate::error::Result;
use crate::extract::extract_text;
use crate::pipeline::cache::ReferenceCache;
use crate::traits::DocumentStore;
use crate::types::{DocumentId, RawDocument};

/// Resolves the reference text through the cache, falling back to a manual
/// upload only when the cloud path has failed.
///
/// The cloud store is authoritative: the manual upload is never consulted
/// while the cloud path succeeds, even when one is supplied.
pub struct FallbackResolver<S: DocumentStore> {
    cache: ReferenceCache<S>,
}

impl<S: DocumentStore> FallbackResolver<S> {
    /// Create a resolver over the given cache.
    pub fn new(cache: ReferenceCache<S>) -> Self {
        Self { cache }
    }

    /// Resolve the reference text.
    ///
    /// - Cloud path succeeds: cloud-derived text, manual upload ignored.
    /// - Cloud path fails, manual upload present: extract the upload
    ///   directly, uncached.
    /// - Cloud path fails, no manual upload: the cloud-path error.
    pub async fn resolve(
        &self,
        id: &DocumentId,
        manual: Option<&RawDocument>,
    ) -> Result<String> {
        match self.cache.get(id).await {
            Ok(text) => Ok(text),
            Err(cloud_err) => match manual {
                Some(doc) => {
                    warn!(id = %id, error = %cloud_err, "cloud reference unavailable, using manual upload");
                    Ok(extract_text(&doc.bytes, doc.kind)?)
                }
                None => Err(cloud_err),
            },
        }
    }

    /// The underlying cache (for invalidation or introspection).
    pub fn cache(&self) -> &ReferenceCache<S> {
        &self.cache
    }
}
