//! Text extraction from raw document bytes.
//!
//! Pure functions, no side effects beyond parsing. The extractor never maps
//! an unreadable document to an empty string: failures are typed so callers
//! can tell "empty but valid" apart from "failed".

mod pdf;

use crate::error::ExtractResult;
use crate::types::ContentKind;

/// Extract text from a raw document according to its declared kind.
///
/// - [`ContentKind::Pdf`]: parse as a paginated container, extract visible
///   text per page in order, join pages with a single newline. A page that
///   yields no text contributes nothing; a document where every page is
///   empty fails with [`ExtractionError::NoText`](crate::error::ExtractionError::NoText).
/// - [`ContentKind::PlainText`]: decode as UTF-8; invalid byte sequences
///   fail with [`ExtractionError::Encoding`](crate::error::ExtractionError).
pub fn extract_text(bytes: &[u8], kind: ContentKind) -> ExtractResult<String> {
    match kind {
        ContentKind::Pdf => pdf::extract_pdf_text(bytes),
        ContentKind::PlainText => extract_plain_text(bytes),
    }
}

fn extract_plain_text(bytes: &[u8]) -> ExtractResult<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
