// Chunk: docs/chunks/highlight_theme - Highlighted buffer view for renderers

//! Wrapper that presents a highlighted document as a `BufferView`.
//!
//! `HighlightedView` pairs a `Document` with the `Highlighter` following it
//! and a `SyntaxTheme`. Styled lines are built straight from the style
//! sequence: adjacent characters with the same style share a span, and the
//! selection marker renders in the theme's selection style.

use hilite_buffer::{BufferView, DirtyLines, Document, StyledLine};

use crate::highlighter::Highlighter;
use crate::theme::SyntaxTheme;

/// A view over a `Document` that applies its highlighter's tags.
pub struct HighlightedView<'a> {
    document: &'a Document,
    highlighter: &'a mut Highlighter,
    theme: &'a SyntaxTheme,
}

impl<'a> HighlightedView<'a> {
    pub fn new(
        document: &'a Document,
        highlighter: &'a mut Highlighter,
        theme: &'a SyntaxTheme,
    ) -> Self {
        Self {
            document,
            highlighter,
            theme,
        }
    }
}

impl<'a> BufferView for HighlightedView<'a> {
    fn line_count(&self) -> usize {
        self.document.line_count()
    }

    fn styled_line(&self, line: usize) -> Option<StyledLine> {
        let (start, end) = self.document.line_bounds(line)?;
        let styles = self.highlighter.styles();

        let mut styled = StyledLine::empty();
        for (offset, ch) in self.document.text_range(start, end).into_iter().enumerate() {
            let pos = start + offset;
            let tag = styles.get(pos).unwrap_or_default();
            let style = if styles.is_selected(pos) {
                self.theme.selection_style(tag)
            } else {
                self.theme.style_for(tag)
            };
            styled.push_char(ch, style);
        }
        Some(styled)
    }

    fn line_len(&self, line: usize) -> usize {
        self.document.line_len(line)
    }

    fn take_dirty(&mut self) -> DirtyLines {
        self.highlighter.take_dirty()
    }
}
