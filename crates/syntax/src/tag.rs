// Chunk: docs/chunks/lexical_classifier - Character tags and carried lexical state

//! Per-character style tags and the lexical state carried between scans.

use std::fmt;

/// The style classification of one character.
///
/// Tags carry no ordering; the highlighter only ever compares them for
/// equality. The default tag is `Plain`, which is also the placeholder
/// stamped over freshly inserted text before it is classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tag {
    #[default]
    Plain,
    LineComment,
    BlockComment,
    String,
    Directive,
    Type,
    Keyword,
}

impl Tag {
    /// All tags, in style-table order.
    pub const ALL: [Tag; 7] = [
        Tag::Plain,
        Tag::LineComment,
        Tag::BlockComment,
        Tag::String,
        Tag::Directive,
        Tag::Type,
        Tag::Keyword,
    ];

    /// Position of this tag in [`Tag::ALL`]; themes index their tables with it.
    pub const fn index(self) -> usize {
        match self {
            Tag::Plain => 0,
            Tag::LineComment => 1,
            Tag::BlockComment => 2,
            Tag::String => 3,
            Tag::Directive => 4,
            Tag::Type => 5,
            Tag::Keyword => 6,
        }
    }

    /// Single-letter code (`'A'..='G'`), handy for dumping a style run.
    pub const fn code(self) -> char {
        match self {
            Tag::Plain => 'A',
            Tag::LineComment => 'B',
            Tag::BlockComment => 'C',
            Tag::String => 'D',
            Tag::Directive => 'E',
            Tag::Type => 'F',
            Tag::Keyword => 'G',
        }
    }

    /// Inverse of [`Tag::code`].
    pub fn from_code(code: char) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.code() == code)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tag::Plain => "plain",
            Tag::LineComment => "line-comment",
            Tag::BlockComment => "block-comment",
            Tag::String => "string",
            Tag::Directive => "directive",
            Tag::Type => "type",
            Tag::Keyword => "keyword",
        };
        f.write_str(name)
    }
}

/// Renders a tag run as its letter codes, e.g. `"AAAGG"`.
pub fn tag_codes(tags: &[Tag]) -> String {
    tags.iter().map(|tag| tag.code()).collect()
}

/// The lexical state carried across a scan boundary.
///
/// Only constructs that can stay open past a line end need carrying.
/// Directives, types and keywords always collapse back to `Plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LexState {
    #[default]
    Plain,
    LineComment,
    BlockComment,
    String,
}

impl LexState {
    /// The state in effect after a character tagged `tag` has been scanned.
    ///
    /// A newline closes line comments (and directives, which already
    /// project to `Plain`).
    pub fn after(tag: Tag, ch: char) -> LexState {
        match tag {
            Tag::LineComment if ch == '\n' => LexState::Plain,
            Tag::LineComment => LexState::LineComment,
            Tag::BlockComment => LexState::BlockComment,
            Tag::String => LexState::String,
            Tag::Plain | Tag::Directive | Tag::Type | Tag::Keyword => LexState::Plain,
        }
    }

    /// The tag characters scanned in this state receive by default.
    pub const fn tag(self) -> Tag {
        match self {
            LexState::Plain => Tag::Plain,
            LexState::LineComment => Tag::LineComment,
            LexState::BlockComment => Tag::BlockComment,
            LexState::String => Tag::String,
        }
    }
}
