// Chunk: docs/chunks/lexical_classifier - Single-pass lexical classifier

//! The lexical classifier.
//!
//! A single left-to-right pass over a character slice that assigns every
//! character a [`Tag`]. The pass carries a current mode, a column counter
//! (only used to spot `#` at the start of a line) and an "inside a word"
//! flag that stops the tail of an identifier from being looked up as a
//! fresh word.
//!
//! Classification is total: any input produces a tag sequence of the same
//! length. Unterminated constructs simply leave the exit state open.
//!
//! Escapes are recognized by the literal pair `\"` only. `\\"` is therefore
//! read as an escaped quote and does not close a string.

use crate::keywords;
use crate::tag::{LexState, Tag};

/// Longest lowercase run that is looked up in the type and keyword tables.
pub const DEFAULT_MAX_WORD_LEN: usize = 254;

/// Scanner mode. `Directive` lives only inside a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Plain,
    LineComment,
    BlockComment,
    String,
    Directive,
}

impl Mode {
    fn tag(self) -> Tag {
        match self {
            Mode::Plain => Tag::Plain,
            Mode::LineComment => Tag::LineComment,
            Mode::BlockComment => Tag::BlockComment,
            Mode::String => Tag::String,
            Mode::Directive => Tag::Directive,
        }
    }

    fn exit_state(self) -> LexState {
        match self {
            Mode::Plain | Mode::Directive => LexState::Plain,
            Mode::LineComment => LexState::LineComment,
            Mode::BlockComment => LexState::BlockComment,
            Mode::String => LexState::String,
        }
    }
}

impl From<LexState> for Mode {
    fn from(state: LexState) -> Self {
        match state {
            LexState::Plain => Mode::Plain,
            LexState::LineComment => Mode::LineComment,
            LexState::BlockComment => Mode::BlockComment,
            LexState::String => Mode::String,
        }
    }
}

/// A configured classifier.
///
/// The only knob is the word-length cap: lowercase runs longer than
/// `max_word_len` are never looked up and fall back to plain tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    max_word_len: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

impl Classifier {
    /// Creates a classifier with the given word-length cap (at least 1).
    pub fn new(max_word_len: usize) -> Self {
        Self {
            max_word_len: max_word_len.max(1),
        }
    }

    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Classifies `text` starting in `entry`, returning one tag per character
    /// and the state in effect after the last character.
    pub fn classify(&self, text: &[char], entry: LexState) -> (Vec<Tag>, LexState) {
        let mut tags = vec![Tag::Plain; text.len()];
        let exit = self.classify_into(text, &mut tags, entry);
        (tags, exit)
    }

    /// Classifies `text` into an existing tag slice.
    ///
    /// Only the first `min(text.len(), out.len())` characters are scanned.
    pub fn classify_into(&self, text: &[char], out: &mut [Tag], entry: LexState) -> LexState {
        let text = &text[..text.len().min(out.len())];
        let mut mode = Mode::from(entry);
        let mut col = 0usize;
        let mut in_word = false;
        let mut i = 0;

        while i < text.len() {
            let ch = text[i];
            let next = text.get(i + 1).copied();

            match mode {
                Mode::Plain => {
                    if col == 0 && ch == '#' {
                        mode = Mode::Directive;
                    } else if ch == '/' && next == Some('/') {
                        mode = Mode::LineComment;
                    } else if ch == '/' && next == Some('*') {
                        mode = Mode::BlockComment;
                    } else if ch == '\\' && next == Some('"') {
                        out[i..i + 2].fill(Tag::Plain);
                        i += 2;
                        col += 2;
                        continue;
                    } else if ch == '"' {
                        mode = Mode::String;
                    } else if !in_word && ch.is_ascii_lowercase() {
                        if let Some((len, tag)) = self.match_word(&text[i..]) {
                            out[i..i + len].fill(tag);
                            i += len;
                            col += len;
                            in_word = true;
                            continue;
                        }
                    }
                }
                Mode::BlockComment if ch == '*' && next == Some('/') => {
                    out[i..i + 2].fill(Tag::BlockComment);
                    i += 2;
                    col += 2;
                    mode = Mode::Plain;
                    continue;
                }
                Mode::String if ch == '\\' && next == Some('"') => {
                    out[i..i + 2].fill(Tag::String);
                    i += 2;
                    col += 2;
                    continue;
                }
                Mode::String if ch == '"' => {
                    out[i] = Tag::String;
                    i += 1;
                    col += 1;
                    mode = Mode::Plain;
                    continue;
                }
                _ => {}
            }

            out[i] = if mode == Mode::Plain && (ch == '{' || ch == '}') {
                Tag::Keyword
            } else {
                mode.tag()
            };
            col += 1;
            in_word = ch.is_ascii_alphanumeric() || ch == '.';

            if ch == '\n' {
                col = 0;
                if matches!(mode, Mode::LineComment | Mode::Directive) {
                    mode = Mode::Plain;
                }
            }
            i += 1;
        }

        mode.exit_state()
    }

    /// Matches the lowercase run at the start of `rest` against the tables.
    ///
    /// Returns the run length and its tag on a hit.
    fn match_word(&self, rest: &[char]) -> Option<(usize, Tag)> {
        let run = rest
            .iter()
            .take(self.max_word_len.saturating_add(1))
            .take_while(|c| c.is_ascii_lowercase())
            .count();
        if run > self.max_word_len {
            return None;
        }
        let word: String = rest[..run].iter().collect();
        keywords::lookup(&word).map(|tag| (run, tag))
    }
}

/// Classifies `text` with the default classifier.
///
/// ```
/// use hilite_syntax::{classify, tag_codes, LexState};
///
/// let text: Vec<char> = "int x; // y".chars().collect();
/// let (tags, exit) = classify(&text, LexState::Plain);
/// assert_eq!(tag_codes(&tags), "FFFAAAABBBB");
/// assert_eq!(exit, LexState::LineComment);
/// ```
pub fn classify(text: &[char], entry: LexState) -> (Vec<Tag>, LexState) {
    Classifier::default().classify(text, entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::tag_codes;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    /// Classifies from `Plain` and returns the letter codes.
    fn codes(s: &str) -> String {
        let (tags, _) = classify(&chars(s), LexState::Plain);
        tag_codes(&tags)
    }

    fn exit_of(s: &str, entry: LexState) -> LexState {
        classify(&chars(s), entry).1
    }

    // ==================== Words ====================

    #[test]
    fn test_keyword_tags_whole_word() {
        assert_eq!(codes("class"), "GGGGG");
        assert_eq!(codes("return;"), "GGGGGGA");
    }

    #[test]
    fn test_type_tags_whole_word() {
        assert_eq!(codes("int x;"), "FFFAAA");
        assert_eq!(codes("(int)"), "AFFFA");
    }

    #[test]
    fn test_underscore_breaks_run_so_size_t_never_matches() {
        assert_eq!(codes("size_t"), "AAAAAA");
    }

    #[test]
    fn test_word_inside_identifier_is_not_matched() {
        assert_eq!(codes("xint"), "AAAA");
        assert_eq!(codes("intint"), "AAAAAA");
        assert_eq!(codes("a.int"), "AAAAA");
        assert_eq!(codes("1int"), "AAAA");
    }

    #[test]
    fn test_word_must_be_lowercase() {
        assert_eq!(codes("Int If"), "AAAAAA");
    }

    #[test]
    fn test_partial_word_at_end_of_text() {
        assert_eq!(codes("retur"), "AAAAA");
        assert_eq!(codes("a if"), "AAGG");
    }

    #[test]
    fn test_non_ascii_neighbour_does_not_start_word() {
        assert_eq!(codes("\u{e9} int"), "AAFFF");
    }

    #[test]
    fn test_run_over_cap_falls_back_to_plain() {
        let short = Classifier::new(4);
        let (tags, _) = short.classify(&chars("class int"), LexState::Plain);
        assert_eq!(tag_codes(&tags), "AAAAAAFFF");
    }

    #[test]
    fn test_very_long_identifier_does_not_crash() {
        let long = "a".repeat(1000);
        let (tags, exit) = classify(&chars(&long), LexState::Plain);
        assert_eq!(tags.len(), 1000);
        assert!(tags.iter().all(|t| *t == Tag::Plain));
        assert_eq!(exit, LexState::Plain);
    }

    #[test]
    fn test_cap_is_at_least_one() {
        assert_eq!(Classifier::new(0).max_word_len(), 1);
        assert_eq!(Classifier::default().max_word_len(), DEFAULT_MAX_WORD_LEN);
    }

    // ==================== Directives ====================

    #[test]
    fn test_directive_only_at_column_zero() {
        assert_eq!(codes("#define X"), "EEEEEEEEE");
        assert_eq!(codes("  #define X"), "AAAGGGGGGAA");
    }

    #[test]
    fn test_directive_ends_at_newline() {
        assert_eq!(codes("#define X\nint"), "EEEEEEEEEEFFF");
        assert_eq!(codes("x\n#if"), "AAEEE");
    }

    #[test]
    fn test_directive_exit_projects_to_plain() {
        assert_eq!(exit_of("#include <x>", LexState::Plain), LexState::Plain);
    }

    // ==================== Comments ====================

    #[test]
    fn test_line_comment_runs_to_newline() {
        assert_eq!(codes("// int\nint"), "BBBBBBBFFF");
        assert_eq!(exit_of("x // y", LexState::Plain), LexState::LineComment);
        assert_eq!(exit_of("// y\n", LexState::Plain), LexState::Plain);
    }

    #[test]
    fn test_block_comment_spans_lines() {
        assert_eq!(codes("a /* b\nc */ d"), "AACCCCCCCCCAA");
        assert_eq!(exit_of("/* open\nstill", LexState::Plain), LexState::BlockComment);
    }

    #[test]
    fn test_slash_star_slash_opens_and_closes() {
        assert_eq!(codes("/*/x"), "CCCA");
        assert_eq!(exit_of("/*/", LexState::Plain), LexState::Plain);
    }

    #[test]
    fn test_entry_in_block_comment() {
        let (tags, exit) = classify(&chars("a */ int"), LexState::BlockComment);
        assert_eq!(tag_codes(&tags), "CCCCAFFF");
        assert_eq!(exit, LexState::Plain);
    }

    #[test]
    fn test_entry_in_line_comment_ends_at_newline() {
        let (tags, exit) = classify(&chars("x\nif"), LexState::LineComment);
        assert_eq!(tag_codes(&tags), "BBGG");
        assert_eq!(exit, LexState::Plain);
    }

    // ==================== Strings ====================

    #[test]
    fn test_string_literal() {
        assert_eq!(codes("x = \"int\";"), "AAAADDDDDA");
    }

    #[test]
    fn test_escaped_quote_stays_in_string() {
        let (tags, exit) = classify(&chars("\"a\\\"b\""), LexState::Plain);
        assert_eq!(tag_codes(&tags), "DDDDDD");
        assert_eq!(exit, LexState::Plain);
    }

    #[test]
    fn test_escaped_backslash_before_quote_is_misread() {
        // "\\" followed by x: the second backslash pairs with the quote, so
        // the string never closes.
        let (tags, exit) = classify(&chars("\"\\\\\"x"), LexState::Plain);
        assert_eq!(tag_codes(&tags), "DDDDD");
        assert_eq!(exit, LexState::String);
    }

    #[test]
    fn test_escaped_quote_outside_string_is_plain() {
        assert_eq!(codes("\\\"int"), "AAFFF");
    }

    #[test]
    fn test_string_spans_newline() {
        assert_eq!(exit_of("\"abc\ndef", LexState::Plain), LexState::String);
        let (tags, _) = classify(&chars("ab\" int"), LexState::String);
        assert_eq!(tag_codes(&tags), "DDDAFFF");
    }

    #[test]
    fn test_closing_quote_keeps_word_flag() {
        // The word flag from 'x' survives the closing quote.
        assert_eq!(codes("\"x\"int"), "DDDAAA");
    }

    // ==================== Braces ====================

    #[test]
    fn test_braces_are_keywords_in_plain() {
        assert_eq!(codes("{x}"), "GAG");
        assert_eq!(codes("\"x\"{"), "DDDG");
    }

    #[test]
    fn test_braces_inside_comments_and_strings_keep_mode() {
        assert_eq!(codes("{/*}*/}"), "GCCCCCG");
        assert_eq!(codes("\"{}\""), "DDDD");
    }

    #[test]
    fn test_braces_beside_lone_delimiter_characters() {
        assert_eq!(codes("/{*}"), "AGAG");
        assert_eq!(codes("*{/"), "AGA");
    }

    // ==================== Properties ====================

    const CORPUS: &[&str] = &[
        "",
        "#include <stdio.h>\nint main() {\n  return 0;\n}\n",
        "/* a */ int x = 1; // trailing\nchar c = '\"';",
        "\"unterminated\nstring {",
        "class A : public B { virtual void f(); };",
        "\\\\\\\"\"/*//*/**/",
        "\u{1F600} if \u{e9}t\u{e9} while",
    ];

    #[test]
    fn test_output_length_matches_input() {
        for text in CORPUS {
            for entry in [
                LexState::Plain,
                LexState::LineComment,
                LexState::BlockComment,
                LexState::String,
            ] {
                let input = chars(text);
                let (tags, _) = classify(&input, entry);
                assert_eq!(tags.len(), input.len(), "{:?}", text);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        for text in CORPUS {
            let input = chars(text);
            assert_eq!(
                classify(&input, LexState::Plain),
                classify(&input, LexState::Plain)
            );
        }
    }

    #[test]
    fn test_balanced_constructs_exit_plain() {
        let text = "/* a\nb */ \"s\\\"t\" x;\n/**/ \"\"\n";
        assert_eq!(exit_of(text, LexState::Plain), LexState::Plain);
    }

    #[test]
    fn test_classify_into_short_output_slice() {
        let mut out = [Tag::Keyword; 3];
        let exit = Classifier::default().classify_into(&chars("int x"), &mut out, LexState::Plain);
        assert_eq!(out, [Tag::Type; 3]);
        assert_eq!(exit, LexState::Plain);
    }
}
