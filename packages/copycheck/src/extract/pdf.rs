//! PDF text extraction via `lopdf`.
//!
//! A page whose text extraction yields nothing (or errors) contributes
//! nothing to the output — the page is skipped silently. A document where
//! *every* page comes back empty is escalated to
//! [`ExtractionError::NoText`] instead of returning an empty string, so a
//! scanned or image-only PDF is a visible failure rather than a silently
//! blank reference.

use lopdf::Document;
use tracing::debug;

use crate::error::{ExtractResult, ExtractionError};

/// Extract visible text from PDF bytes, pages joined with a single newline.
pub(crate) fn extract_pdf_text(bytes: &[u8]) -> ExtractResult<String> {
    let doc = Document::load_mem(bytes).map_err(|e| ExtractionError::Malformed(e.to_string()))?;

    if doc.is_encrypted() {
        return Err(ExtractionError::Malformed(
            "document is encrypted".to_string(),
        ));
    }

    let mut pages = Vec::new();
    for (page_number, _object_id) in doc.get_pages() {
        match doc.extract_text(&[page_number]) {
            Ok(text) => {
                let text = text.trim();
                if !text.is_empty() {
                    pages.push(text.to_string());
                }
            }
            Err(e) => {
                // Unextractable page: emit nothing for it, keep going.
                debug!(page = page_number, error = %e, "skipping page with no extractable text");
            }
        }
    }

    if pages.is_empty() {
        return Err(ExtractionError::NoText);
    }

    Ok(pages.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a minimal single-font PDF with one page per input string.
    /// An empty string produces a page with no text operations.
    fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for text in page_texts {
            let mut operations = Vec::new();
            if !text.is_empty() {
                operations = vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![100.into(), 600.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ];
            }
            let content = Content { operations };
            let content_id = doc.add_object(Stream::new(
                dictionary! {},
                content.encode().unwrap(),
            ));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        doc.save_to(&mut buf).unwrap();
        buf
    }

    #[test]
    fn test_single_page_text() {
        let bytes = pdf_with_pages(&["Rule A"]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("Rule A"));
    }

    #[test]
    fn test_pages_joined_with_newline() {
        let bytes = pdf_with_pages(&["First page", "Second page"]);
        let text = extract_pdf_text(&bytes).unwrap();
        let first = text.find("First page").unwrap();
        let second = text.find("Second page").unwrap();
        assert!(first < second);
        assert!(text[first..second].contains('\n'));
    }

    #[test]
    fn test_empty_page_is_skipped_not_fatal() {
        let bytes = pdf_with_pages(&["Before", "", "After"]);
        let text = extract_pdf_text(&bytes).unwrap();
        assert!(text.contains("Before"));
        assert!(text.contains("After"));
    }

    #[test]
    fn test_all_pages_empty_is_typed_failure() {
        let bytes = pdf_with_pages(&["", ""]);
        let result = extract_pdf_text(&bytes);
        assert!(matches!(result, Err(ExtractionError::NoText)));
    }

    #[test]
    fn test_corrupt_container_is_malformed() {
        let result = extract_pdf_text(b"%PDF-1.7 this is not really a pdf");
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }

    #[test]
    fn test_garbage_bytes_are_malformed() {
        let result = extract_pdf_text(b"definitely not a pdf");
        assert!(matches!(result, Err(ExtractionError::Malformed(_))));
    }
}
