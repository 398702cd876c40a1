//! Configuration for a screening session.

use chrono::Duration;

use crate::types::DocumentId;

/// Configuration for the compliance screening core.
///
/// Holds only non-secret settings; credential material lives in
/// [`CredentialBundle`](crate::security::CredentialBundle) and
/// [`ModelCredentials`](crate::security::ModelCredentials) so this type
/// stays safely `Debug`-printable.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Identifier of the reference document in the remote store.
    pub document_id: DocumentId,

    /// Maximum age of cached reference text before it must be refreshed.
    ///
    /// Default: 1 hour.
    pub ttl: Duration,
}

impl CoreConfig {
    /// Create a config for the given reference document.
    pub fn new(document_id: impl Into<DocumentId>) -> Self {
        Self {
            document_id: document_id.into(),
            ttl: default_ttl(),
        }
    }

    /// Set the cache time-to-live.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

/// Default cache time-to-live: 1 hour.
pub fn default_ttl() -> Duration {
    Duration::hours(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ttl_is_one_hour() {
        let config = CoreConfig::new("doc-1");
        assert_eq!(config.ttl, Duration::hours(1));
        assert_eq!(config.document_id.as_str(), "doc-1");
    }

    #[test]
    fn test_with_ttl_overrides() {
        let config = CoreConfig::new("doc-1").with_ttl(Duration::minutes(5));
        assert_eq!(config.ttl, Duration::minutes(5));
    }
}
