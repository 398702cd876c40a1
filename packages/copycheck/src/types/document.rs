//! Document identifiers and raw document payloads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier naming a document in the remote store.
///
/// Supplied at configuration time and never interpreted by the core
/// beyond placeholder validation in the store adapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a new document identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the identifier is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Declared content kind of a raw document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// Paginated PDF container
    Pdf,
    /// UTF-8 plain text
    PlainText,
}

/// An undecoded document: bytes plus declared content kind.
///
/// Produced by a [`DocumentStore`](crate::traits::DocumentStore) or a manual
/// upload; consumed by [`extract_text`](crate::extract::extract_text). The
/// whole document is always materialized in memory before parsing.
#[derive(Clone)]
pub struct RawDocument {
    /// Undecoded document bytes
    pub bytes: Vec<u8>,

    /// Declared content kind
    pub kind: ContentKind,
}

impl RawDocument {
    /// Create a raw document from bytes and a content kind.
    pub fn new(bytes: impl Into<Vec<u8>>, kind: ContentKind) -> Self {
        Self {
            bytes: bytes.into(),
            kind,
        }
    }

    /// Create a PDF document.
    pub fn pdf(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(bytes, ContentKind::Pdf)
    }

    /// Create a plain-text document.
    pub fn plain_text(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(bytes, ContentKind::PlainText)
    }

    /// Document size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check whether the document has no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for RawDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawDocument")
            .field("kind", &self.kind)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_display() {
        let id = DocumentId::new("doc-1");
        assert_eq!(id.to_string(), "doc-1");
        assert_eq!(id.as_str(), "doc-1");
        assert!(!id.is_empty());
        assert!(DocumentId::new("").is_empty());
    }

    #[test]
    fn test_raw_document_constructors() {
        let pdf = RawDocument::pdf(b"%PDF-1.7".to_vec());
        assert_eq!(pdf.kind, ContentKind::Pdf);
        assert_eq!(pdf.len(), 8);

        let text = RawDocument::plain_text(b"hello".to_vec());
        assert_eq!(text.kind, ContentKind::PlainText);
        assert!(!text.is_empty());
    }

    #[test]
    fn test_raw_document_debug_omits_bytes() {
        let doc = RawDocument::plain_text(b"secret contents".to_vec());
        let debug = format!("{:?}", doc);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("PlainText"));
    }
}
