//! PDF text extraction
//!
//! Two extraction strategies run in order: a page-by-page pass that
//! preserves page boundaries with marker lines, then a whole-document
//! fallback for files the first strategy cannot read. Extraction
//! failure is not an error; an unreadable document yields no text and
//! the caller falls back to baseline parameters.

use lopdf::Document;

/// Result of attempting to pull text out of an uploaded PDF
#[derive(Debug, Clone)]
pub struct DocumentText {
    /// Extracted text, `None` when both strategies failed
    pub text: Option<String>,
    /// Number of pages in the document, 0 when unreadable
    pub page_count: usize,
}

pub struct DocumentTextLoader;

impl DocumentTextLoader {
    /// Extract text from PDF bytes, trying the page-aware strategy
    /// first and the whole-document strategy second
    pub fn extract_text(bytes: &[u8]) -> DocumentText {
        match Self::extract_by_page(bytes) {
            Some(result) => result,
            None => Self::extract_whole(bytes),
        }
    }

    /// Page-by-page extraction with `--- Page N ---` markers between
    /// pages, matching the shape downstream parsing was tuned on
    fn extract_by_page(bytes: &[u8]) -> Option<DocumentText> {
        let doc = match Document::load_mem(bytes) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!("Primary PDF parse failed: {}", e);
                return None;
            }
        };

        let pages = doc.get_pages();
        let page_count = pages.len();
        let mut text = String::new();

        for (page_no, _) in pages.iter() {
            match doc.extract_text(&[*page_no]) {
                Ok(page_text) => {
                    text.push_str(&format!("\n--- Page {} ---\n{}", page_no, page_text));
                }
                Err(e) => {
                    tracing::warn!("Failed to extract text from page {}: {}", page_no, e);
                }
            }
        }

        if text.trim().is_empty() {
            return None;
        }

        Some(DocumentText {
            text: Some(text),
            page_count,
        })
    }

    /// Whole-document fallback for PDFs the page-aware pass rejects
    fn extract_whole(bytes: &[u8]) -> DocumentText {
        match pdf_extract::extract_text_from_mem(bytes) {
            Ok(text) if !text.trim().is_empty() => DocumentText {
                text: Some(text),
                page_count: 1,
            },
            Ok(_) => {
                tracing::warn!("Fallback PDF extraction produced no text");
                DocumentText {
                    text: None,
                    page_count: 0,
                }
            }
            Err(e) => {
                tracing::warn!("Fallback PDF extraction failed: {}", e);
                DocumentText {
                    text: None,
                    page_count: 0,
                }
            }
        }
    }
}
