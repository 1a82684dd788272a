// Chunk: docs/chunks/highlight_theme - Styled line types consumed by renderers
//!
//! Buffer view abstraction for rendering.
//!
//! This module defines the `BufferView` trait a renderer draws from, and the
//! styling vocabulary it is expressed in:
//! - [`Color`]: Named (16 ANSI), indexed (256), and RGB
//! - [`Style`]: foreground/background plus font attributes
//! - [`Span`]: A run of text with uniform styling
//! - [`StyledLine`]: A sequence of spans comprising a single line

use crate::types::DirtyLines;

// =============================================================================
// Color Types
// =============================================================================

/// The 16 standard ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Color representation.
///
/// - Default (let the renderer/theme decide)
/// - Named ANSI colors (16 colors)
/// - Indexed (256-color palette)
/// - True color RGB (24-bit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Default foreground/background.
    #[default]
    Default,
    /// Named ANSI colors (0-15).
    Named(NamedColor),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit RGB color.
    Rgb { r: u8, g: u8, b: u8 },
}

// =============================================================================
// Style
// =============================================================================

/// Text styling attributes for one character class.
///
/// The default style is unstyled text: default colors, no attributes.
///
/// # Example
///
/// ```
/// use hilite_buffer::{Style, Color, NamedColor};
///
/// let keyword = Style {
///     fg: Color::Named(NamedColor::Blue),
///     bold: true,
///     ..Style::default()
/// };
/// assert!(!keyword.italic);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    /// Inverse video (swap fg/bg at render time).
    pub inverse: bool,
}

// =============================================================================
// Span and StyledLine
// =============================================================================

/// A contiguous run of text with uniform styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// The text content of this span.
    pub text: String,
    /// The style applied to this text.
    pub style: Style,
}

impl Span {
    /// Creates a new span with the given text and style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Creates an unstyled span (default style).
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }
}

/// A line as the renderer sees it: a sequence of styled spans.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledLine {
    /// The spans comprising this line.
    pub spans: Vec<Span>,
}

impl StyledLine {
    /// Creates a new styled line from spans.
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// Creates a line with a single unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::plain(text)],
        }
    }

    /// Creates an empty line.
    pub fn empty() -> Self {
        Self { spans: vec![] }
    }

    /// Returns true if the line has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the total character count across all spans.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    /// Returns the concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Appends a character, extending the last span when the style matches.
    pub fn push_char(&mut self, ch: char, style: Style) {
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push(ch),
            _ => self.spans.push(Span::new(ch.to_string(), style)),
        }
    }
}

// =============================================================================
// BufferView Trait
// =============================================================================

/// A buffer as seen by the renderer.
///
/// This trait is object-safe: it can be used as `&dyn BufferView` or
/// `Box<dyn BufferView>`.
///
/// # Example
///
/// ```ignore
/// fn render_buffer(view: &dyn BufferView) {
///     for line_idx in 0..view.line_count() {
///         if let Some(styled_line) = view.styled_line(line_idx) {
///             for span in styled_line.spans {
///                 render_span(&span);
///             }
///         }
///     }
/// }
/// ```
pub trait BufferView {
    /// Returns the total number of lines available for display.
    fn line_count(&self) -> usize;

    /// Returns a styled representation of the given line.
    ///
    /// Returns `None` if the line index is out of bounds.
    fn styled_line(&self, line: usize) -> Option<StyledLine>;

    /// Returns the length of the specified line in characters.
    ///
    /// Returns 0 if the line index is out of bounds.
    fn line_len(&self, line: usize) -> usize;

    /// Drains accumulated dirty state since last call.
    fn take_dirty(&mut self) -> DirtyLines;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default(), Color::Default);
    }

    #[test]
    fn test_color_equality() {
        assert_ne!(Color::Default, Color::Indexed(0));
        assert_ne!(
            Color::Named(NamedColor::Red),
            Color::Named(NamedColor::Blue)
        );
        assert_eq!(
            Color::Rgb { r: 1, g: 2, b: 3 },
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }

    #[test]
    fn test_style_default_is_unstyled() {
        let style = Style::default();
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold && !style.italic && !style.inverse);
    }

    #[test]
    fn test_styled_line_plain() {
        let line = StyledLine::plain("hello");
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.char_count(), 5);
        assert_eq!(line.text(), "hello");
    }

    #[test]
    fn test_push_char_merges_equal_styles() {
        let bold = Style {
            bold: true,
            ..Style::default()
        };
        let mut line = StyledLine::empty();
        line.push_char('a', bold);
        line.push_char('b', bold);
        line.push_char('c', Style::default());
        assert_eq!(
            line.spans,
            vec![Span::new("ab", bold), Span::plain("c")]
        );
    }

    #[test]
    fn test_char_count_multibyte() {
        let line = StyledLine::new(vec![Span::plain("\u{e9}t\u{e9}"), Span::plain("!")]);
        assert_eq!(line.char_count(), 4);
    }

    struct EmptyView;

    impl BufferView for EmptyView {
        fn line_count(&self) -> usize {
            0
        }
        fn styled_line(&self, _line: usize) -> Option<StyledLine> {
            None
        }
        fn line_len(&self, _line: usize) -> usize {
            0
        }
        fn take_dirty(&mut self) -> DirtyLines {
            DirtyLines::None
        }
    }

    #[test]
    fn test_buffer_view_is_object_safe() {
        let mut view = EmptyView;
        let dyn_view: &mut dyn BufferView = &mut view;
        assert_eq!(dyn_view.line_count(), 0);
        assert!(dyn_view.styled_line(0).is_none());
        assert!(dyn_view.take_dirty().is_none());
    }
}
