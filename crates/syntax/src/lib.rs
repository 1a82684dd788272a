// Chunk: docs/chunks/lexical_classifier - Single-pass lexical classifier
// Chunk: docs/chunks/incremental_restyle - Line-window incremental restyling

//! hilite-syntax: incremental lexical highlighting.
//!
//! This crate tags every character of a document as plain text, comment,
//! string, preprocessor directive, builtin type or keyword, and keeps those
//! tags current as the document is edited without rescanning the whole text
//! on every keystroke.
//!
//! # Overview
//!
//! The main types are:
//!
//! - [`classify`] / [`Classifier`]: the pure single-pass classifier. Given a
//!   character slice and an entry [`LexState`] it returns one [`Tag`] per
//!   character and the exit state.
//!
//! - [`Highlighter`]: owns the style sequence for one document. The owner of
//!   the document reports each applied edit through
//!   [`Highlighter::on_edit`]; the highlighter reclassifies the touched lines
//!   and, when the state carried out of them changed, the rest of the
//!   document.
//!
//! - [`SyntaxTheme`] and [`HighlightedView`]: map tags to styles and present
//!   the result as a [`hilite_buffer::BufferView`].
//!
//! - [`HighlightConfig`]: the word-length cap and theme, loaded from JSON.
//!
//! # Example
//!
//! ```
//! use hilite_buffer::Document;
//! use hilite_syntax::{Highlighter, Tag};
//!
//! let mut doc = Document::from_str("int x;\nint y;\n");
//! let mut hl = Highlighter::new();
//! hl.attach(&doc);
//! hl.rehighlight_all(&doc);
//!
//! // Open a block comment on the first line: the second line follows.
//! let edit = doc.insert(0, "/*").unwrap();
//! let restyle = hl.on_edit(&doc, edit).unwrap().unwrap();
//! assert!(restyle.tail);
//! assert_eq!(hl.tag_at(9), Some(Tag::BlockComment));
//! ```

mod classify;
mod config;
mod error;
mod highlighter;
mod keywords;
mod source;
#[cfg(feature = "perf-instrumentation")]
mod stats;
mod style_buffer;
mod tag;
mod theme;
mod view;

pub use classify::{classify, Classifier, DEFAULT_MAX_WORD_LEN};
pub use config::{config_file_path, HighlightConfig, ThemeName};
pub use error::{ConfigError, HighlightError};
pub use highlighter::{Highlighter, Restyle};
pub use keywords::{lookup as lookup_word, KEYWORDS, TYPES};
pub use source::TextSource;
#[cfg(feature = "perf-instrumentation")]
pub use stats::HighlightStats;
pub use style_buffer::StyleBuffer;
pub use tag::{tag_codes, LexState, Tag};
pub use theme::SyntaxTheme;
pub use view::HighlightedView;
