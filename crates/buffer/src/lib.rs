// Chunk: docs/chunks/document_buffer - Offset-addressed document text with gap buffer backing
// Chunk: docs/chunks/highlight_theme - Styled line types consumed by renderers

//! hilite-buffer: document text and style storage for the hilite highlighter.
//!
//! This crate provides the authoritative text a highlighter reads from and
//! the storage its style sequence lives in.
//!
//! # Overview
//!
//! - [`Document`]: offset-addressed text with `insert` / `delete` / `replace`,
//!   `text_range`, and `line_start` / `line_end` queries. Every mutation
//!   returns the [`TextEdit`] describing it.
//! - [`GapBuffer`]: the storage behind the document, generic over its element
//!   so the parallel style sequence can use the same structure.
//! - [`BufferView`], [`Style`], [`Span`], [`StyledLine`]: what a renderer
//!   consumes.
//!
//! # Example
//!
//! ```
//! use hilite_buffer::{Document, TextEdit};
//!
//! let mut doc = Document::from_str("int x;\n");
//! let edit = doc.insert(6, "\nint y;").unwrap();
//! assert_eq!(edit, TextEdit::insertion(6, 7));
//! assert_eq!(doc.line_count(), 3);
//! assert_eq!(doc.line_start(9), 7);
//! assert_eq!(doc.line_end(9), 13);
//! ```
//!
//! # Dirty Line Tracking
//!
//! [`DirtyLines`] describes which lines need redrawing and merges across
//! events, so a renderer can draw once after several edits:
//!
//! - `DirtyLines::None` - No visual change
//! - `DirtyLines::Single(line)` - Only one line changed
//! - `DirtyLines::FromLineToEnd(line)` - All lines from `line` to the end changed

mod buffer_view;
mod document;
mod error;
mod gap_buffer;
mod line_index;
mod types;

pub use buffer_view::{BufferView, Color, NamedColor, Span, Style, StyledLine};
pub use document::Document;
pub use error::BufferError;
pub use gap_buffer::GapBuffer;
pub use types::{DirtyLines, TextEdit};
