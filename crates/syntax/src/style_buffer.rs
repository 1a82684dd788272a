// Chunk: docs/chunks/style_buffer - Tag storage parallel to the document text

//! The style sequence: one [`Tag`] per document character, plus the
//! selection marker a renderer flashes over the most recent edit.

use hilite_buffer::GapBuffer;

use crate::tag::Tag;

/// Tag storage kept splice-for-splice in step with the document text.
#[derive(Debug, Clone, Default)]
pub struct StyleBuffer {
    tags: GapBuffer<Tag>,
    /// Selected range `[start, end)`, never empty.
    selection: Option<(usize, usize)>,
}

impl StyleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer of `len` placeholder tags.
    pub fn with_len(len: usize) -> Self {
        Self {
            tags: std::iter::repeat(Tag::Plain).take(len).collect(),
            selection: None,
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<Tag> {
        self.tags.get(pos)
    }

    /// Tags in `[start, end)`, clamped to the buffer.
    pub fn range(&self, start: usize, end: usize) -> Vec<Tag> {
        self.tags.range(start, end)
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.tags.iter()
    }

    /// Replaces `removed` tags at `pos` with `inserted` placeholder tags.
    pub fn splice_placeholders(&mut self, pos: usize, removed: usize, inserted: usize) {
        self.tags
            .splice(pos, removed, std::iter::repeat(Tag::Plain).take(inserted));
    }

    /// Removes `count` tags at `pos`.
    pub fn remove(&mut self, pos: usize, count: usize) {
        self.tags.remove(pos, count);
    }

    /// Overwrites tags starting at `start`. Returns how many were written.
    pub fn write(&mut self, start: usize, tags: &[Tag]) -> usize {
        self.tags.overwrite(start, tags)
    }

    /// Replaces every tag with `Plain` placeholders, resizing to `len`.
    pub fn reset(&mut self, len: usize) {
        self.tags = std::iter::repeat(Tag::Plain).take(len).collect();
        self.selection = None;
    }

    // ==================== Selection ====================

    /// Marks `[a, b)` (in either order) as selected, clamped to the buffer.
    ///
    /// An empty range clears the selection.
    pub fn select(&mut self, a: usize, b: usize) {
        let len = self.len();
        let (start, end) = (a.min(b).min(len), a.max(b).min(len));
        self.selection = (start < end).then_some((start, end));
    }

    pub fn unselect(&mut self) {
        self.selection = None;
    }

    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Returns true if `pos` lies inside the selection.
    pub fn is_selected(&self, pos: usize) -> bool {
        self.selection
            .map_or(false, |(start, end)| (start..end).contains(&pos))
    }
}
