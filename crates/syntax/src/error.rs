// Chunk: docs/chunks/incremental_restyle - Typed edit/config errors

use std::io;

use thiserror::Error;

/// Errors returned by [`Highlighter::on_edit`](crate::Highlighter::on_edit).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HighlightError {
    /// The edit does not fit the style sequence or the text it claims to
    /// describe. The highlighter has already resynchronized when this is
    /// returned.
    #[error(
        "edit at {position} (+{inserted}/-{deleted}) is inconsistent with \
         {style_len} styled characters and {text_len} text characters"
    )]
    Range {
        position: usize,
        inserted: usize,
        deleted: usize,
        style_len: usize,
        text_len: usize,
    },
}

/// Errors loading or validating a [`HighlightConfig`](crate::HighlightConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_word_len must be at least 1 (got {0})")]
    InvalidWordLimit(usize),
}
