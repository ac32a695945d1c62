//! Document parameter extraction service
//!
//! Orchestrates the PDF-to-parameters pipeline: pull text out of the
//! uploaded document, recover whatever prediction parameters the text
//! mentions, validate them, and merge them over the baseline defaults
//! so the caller always gets a complete prefill.

use serde::Serialize;
use shared::{
    extract_parameters, validate_parameters, ParameterRecord, ResolvedParameters, ValidationReport,
};

use crate::external::document::DocumentTextLoader;

/// Everything the extraction pipeline produced for one document
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionOutcome {
    /// Pages seen in the document, 0 when it was unreadable
    pub page_count: usize,
    /// Whether any text at all came out of the document
    pub text_found: bool,
    /// The raw extraction result, fields absent where nothing matched
    pub parameters: ParameterRecord,
    /// Validation over the extracted fields only
    pub validation: ValidationReport,
    /// Extracted values merged over the baseline defaults
    pub prefill: ResolvedParameters,
}

#[derive(Clone, Default)]
pub struct ExtractionService;

impl ExtractionService {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline over uploaded PDF bytes. An unreadable or
    /// unrecognizable document is not an error; it yields an empty record
    /// and a prefill equal to the baseline.
    pub fn extract_from_pdf(&self, bytes: &[u8]) -> ExtractionOutcome {
        let document = DocumentTextLoader::extract_text(bytes);

        let parameters = match &document.text {
            Some(text) => extract_parameters(text),
            None => ParameterRecord::default(),
        };

        if !parameters.any_present() {
            tracing::info!(
                page_count = document.page_count,
                "No prediction parameters recognized in document"
            );
        }

        let validation = validate_parameters(&parameters);
        let prefill = parameters.resolve(&ResolvedParameters::default());

        ExtractionOutcome {
            page_count: document.page_count,
            text_found: document.text.is_some(),
            parameters,
            validation,
            prefill,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_document_yields_baseline_prefill() {
        let outcome = ExtractionService::new().extract_from_pdf(b"not a pdf at all");
        assert!(!outcome.text_found);
        assert_eq!(outcome.page_count, 0);
        assert!(!outcome.parameters.any_present());
        assert!(outcome.validation.overall_valid);
        assert_eq!(outcome.prefill, ResolvedParameters::default());
    }
}
