// Chunk: docs/chunks/document_buffer - Typed mutation errors

use thiserror::Error;

/// Errors returned by document mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("range {position}..{position}+{span} is outside the document (length {len})")]
    OutOfBounds {
        position: usize,
        span: usize,
        len: usize,
    },
}
