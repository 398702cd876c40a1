//! Google Drive document store adapter.
//!
//! Downloads a file by identifier over the Drive v3 REST API using a
//! read-only bearer token. The whole body is buffered into memory before
//! returning; there is no streamed extraction and no internal retry loop.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{FetchError, FetchResult};
use crate::security::CredentialBundle;
use crate::traits::DocumentStore;
use crate::types::{ContentKind, DocumentId, RawDocument};

/// Operator placeholder that ships in example configs and must be replaced.
const PLACEHOLDER_ID: &str = "YOUR-FILE-ID";

/// Default Drive v3 API base URL.
const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

/// Returns true if the content type or leading bytes indicate a PDF.
///
/// - Content-Type contains `application/pdf` (case-insensitive)
/// - Magic bytes: `%PDF-`
pub fn is_pdf(content_type: Option<&str>, head: &[u8]) -> bool {
    let ct = content_type.unwrap_or("").to_ascii_lowercase();
    ct.contains("application/pdf") || head.starts_with(b"%PDF-")
}

/// Document store backed by Google Drive.
///
/// # Example
///
/// ```rust,ignore
/// use copycheck::{CredentialBundle, DriveSource, DocumentStore, DocumentId};
///
/// let store = DriveSource::new(CredentialBundle::from_env()?);
/// let doc = store.download(&DocumentId::new("10rpQ...")).await?;
/// ```
pub struct DriveSource {
    client: reqwest::Client,
    credentials: CredentialBundle,
    base_url: String,
}

impl DriveSource {
    /// Create a new Drive source with default settings.
    pub fn new(credentials: CredentialBundle) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for tests or proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn validate_id(id: &DocumentId) -> FetchResult<()> {
        if id.is_empty() {
            return Err(FetchError::Misconfigured {
                reason: "document identifier is empty".to_string(),
            });
        }
        if id.as_str().contains(PLACEHOLDER_ID) {
            return Err(FetchError::Misconfigured {
                reason: "document identifier is still the placeholder value".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for DriveSource {
    async fn download(&self, id: &DocumentId) -> FetchResult<RawDocument> {
        Self::validate_id(id)?;

        debug!(id = %id, "drive download starting");

        // alt=media returns the file content rather than its metadata.
        let url = format!("{}/files/{}?alt=media", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(self.credentials.token().expose())
            .send()
            .await
            .map_err(|e| {
                warn!(id = %id, error = %e, "drive request failed");
                FetchError::TransientIo(Box::new(e))
            })?;

        let status = response.status();
        match status.as_u16() {
            401 | 403 => return Err(FetchError::Unauthorized),
            404 => return Err(FetchError::NotFound { id: id.clone() }),
            _ if !status.is_success() => {
                return Err(FetchError::TransientIo(Box::new(std::io::Error::other(
                    format!("HTTP {}", status),
                ))));
            }
            _ => {}
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::TransientIo(Box::new(e)))?;

        let kind = if is_pdf(content_type.as_deref(), &bytes) {
            ContentKind::Pdf
        } else {
            ContentKind::PlainText
        };

        debug!(id = %id, bytes = bytes.len(), ?kind, "drive download complete");

        Ok(RawDocument::new(bytes.to_vec(), kind))
    }

    fn name(&self) -> &str {
        "drive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_id_is_misconfigured() {
        let store = DriveSource::new(CredentialBundle::new("token"));
        let result = store.download(&DocumentId::new("")).await;
        assert!(matches!(result, Err(FetchError::Misconfigured { .. })));
    }

    #[tokio::test]
    async fn test_placeholder_id_is_misconfigured() {
        let store = DriveSource::new(CredentialBundle::new("token"));
        let result = store.download(&DocumentId::new("YOUR-FILE-ID")).await;
        assert!(matches!(result, Err(FetchError::Misconfigured { .. })));
    }

    #[test]
    fn test_is_pdf_by_content_type() {
        assert!(is_pdf(Some("application/pdf"), b""));
        assert!(is_pdf(Some("Application/PDF; charset=binary"), b""));
        assert!(!is_pdf(Some("text/plain"), b"hello"));
    }

    #[test]
    fn test_is_pdf_by_magic_bytes() {
        assert!(is_pdf(None, b"%PDF-1.7 ..."));
        assert!(!is_pdf(None, b"plain text here"));
    }
}
