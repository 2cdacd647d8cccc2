//! Error types for the document model

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// Navigation handed us a key the deck does not contain. Page keys are
    /// always drawn from the deck itself, so this is an invariant
    /// violation rather than a recoverable condition.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Section index {index} out of range for page {page}")]
    SectionOutOfRange { page: String, index: usize },
}
