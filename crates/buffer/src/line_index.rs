// Chunk: docs/chunks/document_buffer - Offset-addressed document text with gap buffer backing

//! Line index for tracking line boundaries in the document.
//!
//! Maintains an array of line start offsets for O(1) line count and
//! O(log n) offset-to-line lookup. Supports incremental updates when a range
//! of characters is replaced.

/// Tracks line boundaries in a document.
///
/// The line index maintains a list of character offsets where each line starts.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Character offsets where each line starts. line_starts[0] = 0 always.
    /// Every other entry is the offset immediately after a '\n'.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new line index with a single empty line.
    pub fn new() -> Self {
        Self {
            line_starts: vec![0],
        }
    }

    /// Rebuilds the line index from the given content.
    ///
    /// O(n) in the content length; used when a document is created from text.
    pub fn rebuild<I>(&mut self, content: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.line_starts.clear();
        self.line_starts.push(0);

        let mut offset = 0;
        for ch in content {
            offset += 1;
            if ch == '\n' {
                self.line_starts.push(offset);
            }
        }
    }

    /// Returns the number of lines. A document always has at least one line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Returns the character offset where the given line starts.
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Returns the character offset of the end of the given line.
    ///
    /// For all lines except the last, this points at the newline character.
    /// For the last line, this equals `total_len`.
    pub fn line_end(&self, line: usize, total_len: usize) -> Option<usize> {
        if line >= self.line_count() {
            return None;
        }

        if line + 1 < self.line_count() {
            Some(self.line_starts[line + 1] - 1)
        } else {
            Some(total_len)
        }
    }

    /// Returns the length of the given line (excluding the newline character).
    pub fn line_len(&self, line: usize, total_len: usize) -> Option<usize> {
        let start = self.line_start(line)?;
        let end = self.line_end(line, total_len)?;
        Some(end - start)
    }

    /// Returns the line number containing the given character offset.
    ///
    /// A newline belongs to the line it terminates.
    pub fn line_at_offset(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        }
    }

    /// Updates the index after `removed` characters at `pos` were replaced by `inserted`.
    ///
    /// Lines whose terminating newline fell inside the removed range are
    /// dropped, lines created by newlines in `inserted` are added, and every
    /// line starting after the removed range is shifted by the length delta.
    pub fn splice(&mut self, pos: usize, removed: usize, inserted: &[char]) {
        let old_end = pos + removed;
        let first_affected = self.line_starts.partition_point(|&start| start <= pos);

        // A line starting at X was created by the newline at X - 1; it survives
        // only if that newline lies at or after old_end.
        let tail: Vec<usize> = self.line_starts[first_affected..]
            .iter()
            .filter(|&&start| start > old_end)
            .map(|&start| start - removed + inserted.len())
            .collect();

        self.line_starts.truncate(first_affected);
        self.line_starts.extend(
            inserted
                .iter()
                .enumerate()
                .filter(|(_, ch)| **ch == '\n')
                .map(|(i, _)| pos + i + 1),
        );
        self.line_starts.extend(tail);
    }

    /// Returns the raw line_starts array (for debug validation).
    #[cfg(any(debug_assertions, test))]
    pub fn line_starts(&self) -> &[usize] {
        &self.line_starts
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(text: &str) -> LineIndex {
        let mut index = LineIndex::new();
        index.rebuild(text.chars());
        index
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_new() {
        let index = LineIndex::new();
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_start(0), Some(0));
    }

    #[test]
    fn test_rebuild_multiple_lines() {
        let index = index_of("hello\nworld\n");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_starts(), &[0, 6, 12]);
    }

    #[test]
    fn test_line_end() {
        let index = index_of("hello\nworld");
        assert_eq!(index.line_end(0, 11), Some(5));
        assert_eq!(index.line_end(1, 11), Some(11));
        assert_eq!(index.line_end(2, 11), None);
    }

    #[test]
    fn test_line_len() {
        let index = index_of("hello\nworld");
        assert_eq!(index.line_len(0, 11), Some(5));
        assert_eq!(index.line_len(1, 11), Some(5));
    }

    #[test]
    fn test_line_at_offset() {
        let index = index_of("hello\nworld\nfoo");
        assert_eq!(index.line_at_offset(0), 0);
        assert_eq!(index.line_at_offset(5), 0); // '\n'
        assert_eq!(index.line_at_offset(6), 1);
        assert_eq!(index.line_at_offset(11), 1);
        assert_eq!(index.line_at_offset(12), 2);
        assert_eq!(index.line_at_offset(99), 2);
    }

    #[test]
    fn test_splice_insert_newline() {
        let mut index = index_of("helloworld");
        index.splice(5, 0, &chars("\n"));
        assert_eq!(index.line_starts(), &[0, 6]);
    }

    #[test]
    fn test_splice_insert_plain_text_shifts_following_lines() {
        let mut index = index_of("a\nb\nc");
        index.splice(0, 0, &chars("xyz"));
        assert_eq!(index.line_starts(), &[0, 5, 7]);
    }

    #[test]
    fn test_splice_delete_newline_joins_lines() {
        let mut index = index_of("hello\nworld\nfoo");
        index.splice(5, 1, &[]);
        assert_eq!(index.line_starts(), &[0, 11]);
    }

    #[test]
    fn test_splice_delete_across_lines() {
        let mut index = index_of("ab\ncd\nef\ngh");
        // Remove "b\ncd\ne" (positions 1..7)
        index.splice(1, 6, &[]);
        assert_eq!(index.line_starts(), &[0, 3]);
    }

    #[test]
    fn test_splice_replace_with_multiline_text() {
        let mut index = index_of("one\ntwo\nthree");
        // Replace "two" with "2\n2"
        index.splice(4, 3, &chars("2\n2"));
        assert_eq!(index.line_starts(), &[0, 4, 6, 8]);
    }

    #[test]
    fn test_splice_matches_rebuild() {
        let mut index = index_of("int x;\n/* c\nontinued\n");
        index.splice(7, 4, &chars("//\n\nz"));
        let expected = index_of("int x;\n//\n\nz\nontinued\n");
        assert_eq!(index.line_starts(), expected.line_starts());
    }
}
