// Chunk: docs/chunks/document_buffer - Gap buffer shared by document text and style storage

//! Gap buffer implementation for efficient text and style editing.
//!
//! A gap buffer is an array with a movable gap at the edit position.
//! Splices at the gap are O(edit size); moving the gap is O(gap_distance)
//! but amortizes well for typical editing patterns (locality of edits).
//!
//! The buffer is generic over its element so that the document text
//! (`GapBuffer<char>`) and the parallel style sequence (`GapBuffer<Tag>`)
//! share one storage implementation and stay splice-for-splice identical.

const INITIAL_GAP_SIZE: usize = 64;
const GAP_GROWTH_FACTOR: usize = 2;

/// A gap buffer for efficient storage and manipulation of a sequence.
///
/// The buffer stores elements with a "gap" - an empty region that can be moved
/// to any position. Operations at the gap position are cheap, making it ideal
/// for editing where insertions and deletions are localized.
#[derive(Debug, Clone)]
pub struct GapBuffer<T> {
    /// The underlying storage. Contains [pre-gap content | gap | post-gap content].
    data: Vec<T>,
    /// Index where the gap starts (first unused position).
    gap_start: usize,
    /// Index where the gap ends (first used position after gap).
    gap_end: usize,
}

impl<T: Copy + Default> GapBuffer<T> {
    /// Creates a new empty gap buffer.
    pub fn new() -> Self {
        Self {
            data: vec![T::default(); INITIAL_GAP_SIZE],
            gap_start: 0,
            gap_end: INITIAL_GAP_SIZE,
        }
    }

    /// Returns the logical length of the buffer (excluding the gap).
    pub fn len(&self) -> usize {
        self.data.len() - self.gap_len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn gap_len(&self) -> usize {
        self.gap_end - self.gap_start
    }

    /// Returns the current gap position in logical coordinates.
    #[cfg(test)]
    fn gap_position(&self) -> usize {
        self.gap_start
    }

    /// Moves the gap to the specified logical position.
    ///
    /// This is O(distance) where distance is the absolute difference between
    /// the current gap position and the target position.
    pub fn move_gap_to(&mut self, pos: usize) {
        let pos = pos.min(self.len());

        if pos < self.gap_start {
            let shift = self.gap_start - pos;
            self.data.copy_within(pos..self.gap_start, self.gap_end - shift);
            self.gap_start = pos;
            self.gap_end -= shift;
        } else if pos > self.gap_start {
            let shift = pos - self.gap_start;
            self.data.copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Ensures the gap is at least the specified size.
    ///
    /// Grows the gap in place so that the gap position is preserved;
    /// `splice` relies on the gap staying where `move_gap_to` left it.
    fn ensure_gap(&mut self, min_size: usize) {
        if self.gap_len() >= min_size {
            return;
        }

        let needed = min_size - self.gap_len();
        let growth = needed.max(self.data.len() * GAP_GROWTH_FACTOR);

        let old_gap_end = self.gap_end;
        let old_len = self.data.len();
        let post_gap_len = old_len - old_gap_end;

        let new_size = old_len + growth;
        self.data.resize(new_size, T::default());

        if post_gap_len > 0 {
            let new_post_gap_start = new_size - post_gap_len;
            self.data.copy_within(old_gap_end..old_len, new_post_gap_start);
        }

        self.gap_end = new_size - post_gap_len;
    }

    /// Replaces `removed` elements starting at `pos` with `items`.
    ///
    /// `pos` is clamped to the buffer length and `removed` to the elements
    /// available after it. Returns the number of elements actually removed.
    pub fn splice<I>(&mut self, pos: usize, removed: usize, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let pos = pos.min(self.len());
        let removed = removed.min(self.len() - pos);

        self.move_gap_to(pos);
        // Deleting after the gap is just widening it.
        self.gap_end += removed;

        let items = items.into_iter();
        let (lower, _) = items.size_hint();
        self.ensure_gap(lower);
        for item in items {
            self.ensure_gap(1);
            self.data[self.gap_start] = item;
            self.gap_start += 1;
        }

        removed
    }

    /// Removes `count` elements starting at `pos`, returning how many were removed.
    pub fn remove(&mut self, pos: usize, count: usize) -> usize {
        self.splice(pos, count, std::iter::empty())
    }

    /// Returns the element at the given logical position.
    pub fn get(&self, pos: usize) -> Option<T> {
        if pos >= self.len() {
            return None;
        }
        let physical = if pos < self.gap_start {
            pos
        } else {
            pos + self.gap_len()
        };
        Some(self.data[physical])
    }

    /// Overwrites elements starting at `pos` with `items`, without changing the length.
    ///
    /// Elements that would land past the end are dropped. Returns the number written.
    pub fn overwrite(&mut self, pos: usize, items: &[T]) -> usize {
        let mut written = 0;
        for (offset, item) in items.iter().enumerate() {
            let logical = pos + offset;
            if logical >= self.len() {
                break;
            }
            let physical = if logical < self.gap_start {
                logical
            } else {
                logical + self.gap_len()
            };
            self.data[physical] = *item;
            written += 1;
        }
        written
    }

    /// Returns an iterator over all elements in the buffer.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Returns the elements of a range, clamped to the buffer.
    pub fn range(&self, start: usize, end: usize) -> Vec<T> {
        let end = end.min(self.len());
        let start = start.min(end);
        let front = &self.data[..self.gap_start];
        let back = &self.data[self.gap_end..];

        let mut out = Vec::with_capacity(end - start);
        if start < front.len() {
            out.extend_from_slice(&front[start..end.min(front.len())]);
        }
        if end > front.len() {
            let from = start.max(front.len()) - front.len();
            out.extend_from_slice(&back[from..end - front.len()]);
        }
        out
    }
}

impl<T: Copy + Default> FromIterator<T> for GapBuffer<T> {
    /// Creates a gap buffer initialized with the given elements, gap at the end.
    fn from_iter<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut data: Vec<T> = items.into_iter().collect();
        let len = data.len();
        let capacity = len + INITIAL_GAP_SIZE;
        data.resize(capacity, T::default());

        Self {
            data,
            gap_start: len,
            gap_end: capacity,
        }
    }
}

impl<T: Copy + Default> Default for GapBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GapBuffer<char> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for ch in self.iter() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> GapBuffer<char> {
        GapBuffer::from_iter(s.chars())
    }

    #[test]
    fn test_new_empty() {
        let buf: GapBuffer<char> = GapBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_from_iter() {
        let buf = chars("hello");
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.to_string(), "hello");
        assert_eq!(buf.gap_position(), 5);
    }

    #[test]
    fn test_splice_insert_at_middle() {
        let mut buf = chars("ac");
        let removed = buf.splice(1, 0, "b".chars());
        assert_eq!(removed, 0);
        assert_eq!(buf.to_string(), "abc");
    }

    #[test]
    fn test_splice_replace() {
        let mut buf = chars("hello world");
        let removed = buf.splice(6, 5, "there".chars());
        assert_eq!(removed, 5);
        assert_eq!(buf.to_string(), "hello there");
    }

    #[test]
    fn test_splice_clamps_removal_past_end() {
        let mut buf = chars("abc");
        let removed = buf.splice(2, 10, std::iter::empty());
        assert_eq!(removed, 1);
        assert_eq!(buf.to_string(), "ab");
    }

    #[test]
    fn test_remove_at_start() {
        let mut buf = chars("abcdef");
        assert_eq!(buf.remove(0, 2), 2);
        assert_eq!(buf.to_string(), "cdef");
    }

    #[test]
    fn test_move_gap_preserves_content() {
        let mut buf = chars("abcdef");
        buf.move_gap_to(3);
        assert_eq!(buf.gap_position(), 3);
        assert_eq!(buf.to_string(), "abcdef");

        buf.move_gap_to(0);
        assert_eq!(buf.to_string(), "abcdef");

        buf.move_gap_to(6);
        assert_eq!(buf.to_string(), "abcdef");
    }

    #[test]
    fn test_get_with_gap_in_middle() {
        let mut buf = chars("hello");
        buf.move_gap_to(2);
        let collected: Vec<char> = (0..5).filter_map(|i| buf.get(i)).collect();
        assert_eq!(collected, vec!['h', 'e', 'l', 'l', 'o']);
        assert_eq!(buf.get(5), None);
    }

    #[test]
    fn test_overwrite_across_gap() {
        let mut buf = chars("abcdef");
        buf.move_gap_to(3);
        assert_eq!(buf.overwrite(2, &['X', 'Y']), 2);
        assert_eq!(buf.to_string(), "abXYef");
    }

    #[test]
    fn test_overwrite_stops_at_end() {
        let mut buf = chars("abc");
        assert_eq!(buf.overwrite(2, &['X', 'Y', 'Z']), 1);
        assert_eq!(buf.to_string(), "abX");
    }

    #[test]
    fn test_range() {
        let buf = chars("hello world");
        assert_eq!(buf.range(0, 5), "hello".chars().collect::<Vec<_>>());
        assert_eq!(buf.range(6, 100), "world".chars().collect::<Vec<_>>());
        assert!(buf.range(8, 3).is_empty());
    }

    #[test]
    fn test_non_char_elements() {
        let mut buf: GapBuffer<u8> = GapBuffer::from_iter([1, 2, 3]);
        buf.splice(1, 1, [7, 7, 7]);
        assert_eq!(buf.iter().collect::<Vec<_>>(), vec![1, 7, 7, 7, 3]);
    }

    #[test]
    fn test_large_insert_grows_gap() {
        let mut buf: GapBuffer<char> = GapBuffer::new();
        let text: String = (0..1000).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        buf.splice(0, 0, text.chars());
        assert_eq!(buf.len(), 1000);
        assert_eq!(buf.to_string(), text);
    }
}
