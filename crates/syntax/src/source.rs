// Chunk: docs/chunks/incremental_restyle - Read access to the authoritative text

use hilite_buffer::Document;

/// Read access to the text the highlighter follows.
///
/// Positions are character offsets. `line_start` / `line_end` return the
/// bounds of the line containing `pos`, where `line_end` is the offset of
/// the terminating newline (or the text length on the last line).
pub trait TextSource {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Characters in `[start, end)`, clamped to the text.
    fn text_range(&self, start: usize, end: usize) -> Vec<char>;

    fn line_start(&self, pos: usize) -> usize;

    fn line_end(&self, pos: usize) -> usize;

    /// Zero-based line containing `pos`.
    fn line_of(&self, pos: usize) -> usize;
}

impl TextSource for Document {
    fn len(&self) -> usize {
        Document::len(self)
    }

    fn text_range(&self, start: usize, end: usize) -> Vec<char> {
        Document::text_range(self, start, end)
    }

    fn line_start(&self, pos: usize) -> usize {
        Document::line_start(self, pos)
    }

    fn line_end(&self, pos: usize) -> usize {
        Document::line_end(self, pos)
    }

    fn line_of(&self, pos: usize) -> usize {
        Document::line_of(self, pos)
    }
}
