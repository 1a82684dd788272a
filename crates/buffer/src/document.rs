// Chunk: docs/chunks/document_buffer - Offset-addressed document text with gap buffer backing

//! `Document` is the authoritative text the highlighter reads from.
//!
//! It combines a gap buffer (for character storage) with a line index (for
//! line-boundary queries). All positions are character offsets. Every
//! mutation returns the `TextEdit` describing it, which the owner forwards to
//! the highlighter in the order the mutations were applied.

use crate::error::BufferError;
use crate::gap_buffer::GapBuffer;
use crate::line_index::LineIndex;
use crate::types::TextEdit;

/// Document text with line tracking.
///
/// The document maintains:
/// - Content storage via a gap buffer
/// - Line boundary tracking for `line_start` / `line_end` queries
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: GapBuffer<char>,
    line_index: LineIndex,
    /// Mutation counter for sampling the line index check (debug builds only).
    #[cfg(debug_assertions)]
    debug_mutation_count: u64,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document initialized with the given content.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut line_index = LineIndex::new();
        line_index.rebuild(content.chars());

        Self {
            text: content.chars().collect(),
            line_index,
            #[cfg(debug_assertions)]
            debug_mutation_count: 0,
        }
    }

    // ==================== Accessors ====================

    /// Returns the total character count.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the entire content as a String.
    pub fn content(&self) -> String {
        self.text.to_string()
    }

    /// Returns the character at `pos`, if any.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos)
    }

    /// Returns the characters in `[start, end)`, clamped to the document.
    pub fn text_range(&self, start: usize, end: usize) -> Vec<char> {
        self.text.range(start, end)
    }

    /// Returns the number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Returns the line containing `pos` (clamped to the document).
    pub fn line_of(&self, pos: usize) -> usize {
        self.line_index.line_at_offset(pos.min(self.len()))
    }

    /// Returns the offset of the first character of the line containing `pos`.
    pub fn line_start(&self, pos: usize) -> usize {
        let line = self.line_of(pos);
        self.line_index.line_start(line).unwrap_or(0)
    }

    /// Returns the offset of the newline ending the line containing `pos`,
    /// or the document length for the last line.
    pub fn line_end(&self, pos: usize) -> usize {
        let line = self.line_of(pos);
        self.line_index
            .line_end(line, self.len())
            .unwrap_or_else(|| self.len())
    }

    /// Returns `(start, end)` offsets of a line, excluding its newline.
    pub fn line_bounds(&self, line: usize) -> Option<(usize, usize)> {
        let start = self.line_index.line_start(line)?;
        let end = self.line_index.line_end(line, self.len())?;
        Some((start, end))
    }

    /// Returns the content of the specified line without its newline.
    ///
    /// Returns an empty string if the line index is out of bounds.
    pub fn line_content(&self, line: usize) -> String {
        match self.line_bounds(line) {
            Some((start, end)) => self.text.range(start, end).into_iter().collect(),
            None => String::new(),
        }
    }

    /// Returns the length of the specified line (excluding newline).
    pub fn line_len(&self, line: usize) -> usize {
        self.line_index.line_len(line, self.len()).unwrap_or(0)
    }

    // ==================== Mutations ====================

    /// Inserts `text` at `position`.
    pub fn insert(&mut self, position: usize, text: &str) -> Result<TextEdit, BufferError> {
        self.replace(position, 0, text)
    }

    /// Deletes `len` characters starting at `position`.
    pub fn delete(&mut self, position: usize, len: usize) -> Result<TextEdit, BufferError> {
        self.replace(position, len, "")
    }

    /// Replaces `deleted_len` characters at `position` with `text`.
    ///
    /// The range must lie inside the document; on error nothing changes.
    pub fn replace(
        &mut self,
        position: usize,
        deleted_len: usize,
        text: &str,
    ) -> Result<TextEdit, BufferError> {
        let len = self.len();
        if position.checked_add(deleted_len).map_or(true, |end| end > len) {
            return Err(BufferError::OutOfBounds {
                position,
                span: deleted_len,
                len,
            });
        }

        let inserted: Vec<char> = text.chars().collect();
        self.text.splice(position, deleted_len, inserted.iter().copied());
        self.line_index.splice(position, deleted_len, &inserted);
        self.assert_line_index_consistent();

        Ok(TextEdit::new(position, inserted.len(), deleted_len))
    }

    /// Replaces the entire content, reported as one edit covering the old text.
    pub fn set_content(&mut self, content: &str) -> TextEdit {
        let old_len = self.len();
        self.text = content.chars().collect();
        self.line_index.rebuild(content.chars());
        TextEdit::new(0, self.len(), old_len)
    }

    /// Checks the spliced line index against a fresh rebuild, every 64th
    /// mutation. Compiled out in release builds.
    #[cfg(debug_assertions)]
    fn assert_line_index_consistent(&mut self) {
        self.debug_mutation_count += 1;
        if self.debug_mutation_count % 64 != 0 {
            return;
        }
        let mut expected = LineIndex::new();
        expected.rebuild(self.text.iter());
        assert_eq!(
            self.line_index.line_starts(),
            expected.line_starts(),
            "line index drift after {} mutations (len {})",
            self.debug_mutation_count,
            self.len(),
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_line_index_consistent(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_content(0), "");
    }

    #[test]
    fn test_from_str_lines() {
        let doc = Document::from_str("int x;\nint y;\n");
        assert_eq!(doc.len(), 14);
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_content(0), "int x;");
        assert_eq!(doc.line_content(1), "int y;");
        assert_eq!(doc.line_content(2), "");
    }

    #[test]
    fn test_line_start_and_end_by_offset() {
        let doc = Document::from_str("ab\ncde\nf");
        assert_eq!(doc.line_start(4), 3);
        assert_eq!(doc.line_end(4), 6);
        // The newline belongs to the line it ends
        assert_eq!(doc.line_start(2), 0);
        assert_eq!(doc.line_end(2), 2);
        // Last line ends at the document length
        assert_eq!(doc.line_end(7), 8);
        assert_eq!(doc.line_end(100), 8);
    }

    #[test]
    fn test_insert_returns_edit() {
        let mut doc = Document::from_str("ac");
        let edit = doc.insert(1, "b").unwrap();
        assert_eq!(edit, TextEdit::insertion(1, 1));
        assert_eq!(doc.content(), "abc");
    }

    #[test]
    fn test_insert_multiline_updates_lines() {
        let mut doc = Document::from_str("start end");
        doc.insert(5, "\nmiddle\n").unwrap();
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_content(1), "middle");
        assert_eq!(doc.line_content(2), " end");
    }

    #[test]
    fn test_delete_joins_lines() {
        let mut doc = Document::from_str("hello\nworld");
        let edit = doc.delete(5, 1).unwrap();
        assert_eq!(edit, TextEdit::deletion(5, 1));
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.content(), "helloworld");
    }

    #[test]
    fn test_replace_counts_chars_not_bytes() {
        let mut doc = Document::from_str("a\u{e9}b");
        let edit = doc.replace(1, 1, "\u{1F600}\u{1F600}").unwrap();
        assert_eq!(edit, TextEdit::new(1, 2, 1));
        assert_eq!(doc.len(), 4);
    }

    #[test]
    fn test_out_of_bounds_leaves_document_untouched() {
        let mut doc = Document::from_str("abc");
        let err = doc.delete(2, 5).unwrap_err();
        assert_eq!(
            err,
            BufferError::OutOfBounds {
                position: 2,
                span: 5,
                len: 3
            }
        );
        assert!(doc.insert(4, "x").is_err());
        assert_eq!(doc.content(), "abc");
    }

    #[test]
    fn test_text_range_clamps() {
        let doc = Document::from_str("hello");
        assert_eq!(doc.text_range(3, 50), vec!['l', 'o']);
        assert!(doc.text_range(9, 12).is_empty());
    }

    #[test]
    fn test_set_content_reports_whole_replacement() {
        let mut doc = Document::from_str("old");
        let edit = doc.set_content("brand\nnew");
        assert_eq!(edit, TextEdit::new(0, 9, 3));
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line_content(1), "new");
    }

    #[test]
    fn test_char_at() {
        let mut doc = Document::from_str("ab\ncd");
        assert_eq!(doc.char_at(0), Some('a'));
        assert_eq!(doc.char_at(2), Some('\n'));
        assert_eq!(doc.char_at(5), None);

        doc.delete(0, 3).unwrap();
        assert_eq!(doc.char_at(0), Some('c'));
        assert_eq!(doc.char_at(2), None);
    }

    #[test]
    fn test_many_replaces_keep_line_index_consistent() {
        let mut doc = Document::from_str("one\ntwo\nthree\n");
        for i in 0..200 {
            let len = doc.len();
            let pos = (i * 7) % (len + 1);
            let deleted = if i % 3 == 0 { (len - pos).min(2) } else { 0 };
            let text = if i % 2 == 0 { "x\ny" } else { "\n" };
            doc.replace(pos, deleted, text).unwrap();
        }

        let rebuilt = Document::from_str(&doc.content());
        assert_eq!(doc.line_count(), rebuilt.line_count());
        for line in 0..doc.line_count() {
            assert_eq!(doc.line_content(line), rebuilt.line_content(line));
        }
    }
}
