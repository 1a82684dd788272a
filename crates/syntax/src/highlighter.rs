// Chunk: docs/chunks/incremental_restyle - Line-window incremental restyling

//! Incremental highlighter.
//!
//! The `Highlighter` owns the style sequence for one document and keeps it
//! in step with the text as edits arrive. Each edit is handled in one
//! synchronous call:
//!
//! 1. Resize the style sequence over the edited span (placeholder tags).
//! 2. Mark the edited span as selected for the renderer.
//! 3. Reclassify the lines touched by the edit, including the newline that
//!    terminates the last of them.
//! 4. If the tag of the window's last character changed, the state carried
//!    into the following lines changed too: reclassify from the window start
//!    to the end of the document.
//!
//! ## Performance
//!
//! A typical keystroke reclassifies one line. Opening or closing a
//! multi-line construct costs one pass over the rest of the document.

use hilite_buffer::{DirtyLines, TextEdit};

use crate::classify::Classifier;
use crate::config::HighlightConfig;
use crate::error::HighlightError;
use crate::source::TextSource;
use crate::style_buffer::StyleBuffer;
use crate::tag::{LexState, Tag};

#[cfg(feature = "perf-instrumentation")]
use crate::stats::HighlightStats;

/// The character range an `on_edit` call rewrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restyle {
    pub start: usize,
    pub end: usize,
    /// True when the rewrite ran on to the end of the document.
    pub tail: bool,
}

impl Restyle {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Keeps a style sequence synchronized with a document.
///
/// The document itself is not owned: every call borrows a [`TextSource`]
/// that must already reflect the edit being reported. Edits must be
/// reported in the order they were applied.
///
/// # Example
///
/// ```
/// use hilite_buffer::Document;
/// use hilite_syntax::{Highlighter, Tag};
///
/// let mut doc = Document::new();
/// let mut hl = Highlighter::new();
/// hl.attach(&doc);
///
/// let edit = doc.insert(0, "int x;").unwrap();
/// hl.on_edit(&doc, edit).unwrap();
/// assert_eq!(hl.tag_at(0), Some(Tag::Type));
/// assert_eq!(hl.tag_at(4), Some(Tag::Plain));
/// ```
#[derive(Debug, Clone)]
pub struct Highlighter {
    classifier: Classifier,
    styles: StyleBuffer,
    dirty: DirtyLines,
    #[cfg(feature = "perf-instrumentation")]
    stats: HighlightStats,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the default classifier and an empty style
    /// sequence.
    pub fn new() -> Self {
        Self::with_classifier(Classifier::default())
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        Self {
            classifier,
            styles: StyleBuffer::new(),
            dirty: DirtyLines::None,
            #[cfg(feature = "perf-instrumentation")]
            stats: HighlightStats::new(),
        }
    }

    pub fn with_config(config: &HighlightConfig) -> Self {
        Self::with_classifier(config.classifier())
    }

    // ==================== Accessors ====================

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn styles(&self) -> &StyleBuffer {
        &self.styles
    }

    pub fn tag_at(&self, pos: usize) -> Option<Tag> {
        self.styles.get(pos)
    }

    /// The span of the most recent edit, if still selected.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.styles.selection()
    }

    /// Drains the lines restyled since the last call.
    pub fn take_dirty(&mut self) -> DirtyLines {
        std::mem::replace(&mut self.dirty, DirtyLines::None)
    }

    #[cfg(feature = "perf-instrumentation")]
    pub fn stats(&self) -> &HighlightStats {
        &self.stats
    }

    // ==================== Whole-document operations ====================

    /// Starts a session over `text`: every character is stamped `Plain`.
    ///
    /// No classification happens until the first edit (or an explicit
    /// [`rehighlight_all`](Self::rehighlight_all)).
    pub fn attach<S: TextSource + ?Sized>(&mut self, text: &S) {
        self.styles.reset(text.len());
        self.dirty.merge(DirtyLines::FromLineToEnd(0));
    }

    /// Classifies the whole document from `Plain`.
    pub fn rehighlight_all<S: TextSource + ?Sized>(&mut self, text: &S) -> Restyle {
        let len = text.len();
        if self.styles.len() != len {
            self.styles.reset(len);
        }
        self.rescan(text, 0, len, LexState::Plain);
        self.dirty.merge(DirtyLines::FromLineToEnd(0));
        Restyle {
            start: 0,
            end: len,
            tail: true,
        }
    }

    // ==================== Edits ====================

    /// Brings the style sequence up to date after `edit` was applied to `text`.
    ///
    /// Returns the rewritten range, or `None` for the empty `(0, 0)` edit,
    /// which only clears the selection.
    ///
    /// # Errors
    ///
    /// [`HighlightError::Range`] if the edit does not fit the style sequence
    /// or does not account for the current text length. The whole document
    /// is reclassified before the error is returned, so the style sequence
    /// is still one tag per character.
    pub fn on_edit<S: TextSource + ?Sized>(
        &mut self,
        text: &S,
        edit: TextEdit,
    ) -> Result<Option<Restyle>, HighlightError> {
        #[cfg(feature = "perf-instrumentation")]
        let started = std::time::Instant::now();

        let result = self.apply_edit(text, edit);

        #[cfg(feature = "perf-instrumentation")]
        {
            self.stats.record_latency(started.elapsed());
        }

        result
    }

    fn apply_edit<S: TextSource + ?Sized>(
        &mut self,
        text: &S,
        edit: TextEdit,
    ) -> Result<Option<Restyle>, HighlightError> {
        if edit.is_empty() {
            self.styles.unselect();
            #[cfg(feature = "perf-instrumentation")]
            {
                self.stats.selection_clears += 1;
            }
            return Ok(None);
        }

        if let Err(err) = self.check_edit(text.len(), edit) {
            self.rehighlight_all(text);
            #[cfg(feature = "perf-instrumentation")]
            {
                self.stats.range_errors += 1;
            }
            return Err(err);
        }

        #[cfg(feature = "perf-instrumentation")]
        {
            self.stats.edits += 1;
        }

        let TextEdit {
            position,
            inserted_len,
            deleted_len,
        } = edit;

        if inserted_len > 0 {
            self.styles
                .splice_placeholders(position, deleted_len, inserted_len);
        } else {
            self.styles.remove(position, deleted_len);
        }

        let edit_end = (position + inserted_len).saturating_sub(deleted_len);
        self.styles.select(position, edit_end);

        let (start, end) = window(text, position, edit_end, position + inserted_len);
        if start == end {
            self.dirty.merge(DirtyLines::Single(text.line_of(start)));
            return Ok(Some(Restyle {
                start,
                end,
                tail: false,
            }));
        }

        let last_before = self.styles.get(end - 1);
        let entry = self.entry_state(text, start);
        self.rescan(text, start, end, entry);
        #[cfg(feature = "perf-instrumentation")]
        {
            self.stats.window_rescans += 1;
        }

        let len = text.len();
        if end < len && self.styles.get(end - 1) != last_before {
            self.rescan(text, start, len, entry);
            #[cfg(feature = "perf-instrumentation")]
            {
                self.stats.tail_rescans += 1;
            }
            self.dirty
                .merge(DirtyLines::FromLineToEnd(text.line_of(start)));
            return Ok(Some(Restyle {
                start,
                end: len,
                tail: true,
            }));
        }

        self.dirty
            .merge(DirtyLines::lines(text.line_of(start), text.line_of(end - 1)));
        Ok(Some(Restyle {
            start,
            end,
            tail: false,
        }))
    }

    /// Checks that `edit` fits the style sequence and explains `text_len`.
    fn check_edit(&self, text_len: usize, edit: TextEdit) -> Result<(), HighlightError> {
        let style_len = self.styles.len();
        let fits = edit
            .position
            .checked_add(edit.deleted_len)
            .map_or(false, |end| end <= style_len);
        let consistent =
            fits && (style_len - edit.deleted_len).checked_add(edit.inserted_len) == Some(text_len);

        if consistent {
            Ok(())
        } else {
            Err(HighlightError::Range {
                position: edit.position,
                inserted: edit.inserted_len,
                deleted: edit.deleted_len,
                style_len,
                text_len,
            })
        }
    }

    /// The lexical state in effect just before `start`.
    fn entry_state<S: TextSource + ?Sized>(&self, text: &S, start: usize) -> LexState {
        if start == 0 {
            return LexState::Plain;
        }
        let tag = self.styles.get(start - 1).unwrap_or_default();
        let ch = text
            .text_range(start - 1, start)
            .first()
            .copied()
            .unwrap_or('\n');
        LexState::after(tag, ch)
    }

    /// Classifies `[start, end)` from `entry` and writes the tags.
    fn rescan<S: TextSource + ?Sized>(
        &mut self,
        text: &S,
        start: usize,
        end: usize,
        entry: LexState,
    ) -> LexState {
        let chars = text.text_range(start, end);
        let (tags, exit) = self.classifier.classify(&chars, entry);
        self.styles.write(start, &tags);
        #[cfg(feature = "perf-instrumentation")]
        {
            self.stats.chars_classified += tags.len() as u64;
        }
        exit
    }
}

/// The line-aligned range to reclassify after an edit.
///
/// Covers every line between `a`, `b` and `c` and takes the newline that
/// terminates the last of them, so the window's final tag reflects the
/// state carried into the next line.
fn window<S: TextSource + ?Sized>(text: &S, a: usize, b: usize, c: usize) -> (usize, usize) {
    let len = text.len();
    let lo = a.min(b).min(c).min(len);
    let hi = a.max(b).max(c).min(len);

    let start = text.line_start(lo);
    let end = text.line_end(hi);
    (start, if end < len { end + 1 } else { end })
}
