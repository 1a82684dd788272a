// Chunk: docs/chunks/document_buffer - Offset-addressed document text with gap buffer backing
// Chunk: docs/chunks/incremental_restyle - Edit records and dirty line reporting

/// A single mutation of the document, in the shape the highlighter consumes.
///
/// `deleted_len` characters starting at `position` were replaced by
/// `inserted_len` characters. Both lengths are zero for the "nothing changed"
/// notification, which only clears the renderer's selection marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextEdit {
    pub position: usize,
    pub inserted_len: usize,
    pub deleted_len: usize,
}

impl TextEdit {
    pub fn new(position: usize, inserted_len: usize, deleted_len: usize) -> Self {
        Self {
            position,
            inserted_len,
            deleted_len,
        }
    }

    /// An edit that inserted `len` characters at `position`.
    pub fn insertion(position: usize, len: usize) -> Self {
        Self::new(position, len, 0)
    }

    /// An edit that deleted `len` characters at `position`.
    pub fn deletion(position: usize, len: usize) -> Self {
        Self::new(position, 0, len)
    }

    /// Returns true if the edit changed no characters.
    pub fn is_empty(&self) -> bool {
        self.inserted_len == 0 && self.deleted_len == 0
    }

    /// Signed change in document length caused by this edit.
    pub fn len_delta(&self) -> isize {
        self.inserted_len as isize - self.deleted_len as isize
    }
}

/// Information about which lines were dirtied by a mutation.
/// Used by the renderer to decide what to redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirtyLines {
    /// No lines changed.
    None,
    /// A single line changed.
    Single(usize),
    /// A range of lines changed [from, to).
    Range { from: usize, to: usize },
    /// Everything from a line to the end of the document changed.
    /// Reported when a restyle ran to the end of the document.
    FromLineToEnd(usize),
}

impl DirtyLines {
    /// Dirty region covering lines `first..=last`.
    pub fn lines(first: usize, last: usize) -> Self {
        let (first, last) = (first.min(last), first.max(last));
        if first == last {
            DirtyLines::Single(first)
        } else {
            DirtyLines::Range {
                from: first,
                to: last + 1,
            }
        }
    }

    /// Returns true if no lines were dirtied.
    pub fn is_none(&self) -> bool {
        matches!(self, DirtyLines::None)
    }

    /// Returns the starting line of the dirty region, if any.
    pub fn start_line(&self) -> Option<usize> {
        match self {
            DirtyLines::None => None,
            DirtyLines::Single(line) => Some(*line),
            DirtyLines::Range { from, .. } => Some(*from),
            DirtyLines::FromLineToEnd(line) => Some(*line),
        }
    }

    /// Returns true if `line` falls inside the dirty region.
    pub fn contains(&self, line: usize) -> bool {
        match self {
            DirtyLines::None => false,
            DirtyLines::Single(l) => *l == line,
            DirtyLines::Range { from, to } => (*from..*to).contains(&line),
            DirtyLines::FromLineToEnd(from) => line >= *from,
        }
    }

    /// Merges another dirty region into this one, producing the smallest
    /// region that covers both.
    ///
    /// Each edit produces a `DirtyLines`; they are merged together so the
    /// renderer redraws once covering everything that changed.
    pub fn merge(&mut self, other: DirtyLines) {
        *self = match (&*self, &other) {
            (DirtyLines::None, _) => other,
            (_, DirtyLines::None) => return,

            (DirtyLines::FromLineToEnd(a), b) | (b, DirtyLines::FromLineToEnd(a)) => {
                let start = b.start_line().map_or(*a, |b| (*a).min(b));
                DirtyLines::FromLineToEnd(start)
            }

            (DirtyLines::Single(a), DirtyLines::Single(b)) => DirtyLines::lines(*a, *b),

            (DirtyLines::Single(a), DirtyLines::Range { from, to })
            | (DirtyLines::Range { from, to }, DirtyLines::Single(a)) => DirtyLines::Range {
                from: (*from).min(*a),
                to: (*to).max(*a + 1),
            },

            (DirtyLines::Range { from: a, to: b }, DirtyLines::Range { from: c, to: d }) => {
                DirtyLines::Range {
                    from: (*a).min(*c),
                    to: (*b).max(*d),
                }
            }
        };
    }
}
