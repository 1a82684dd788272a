// Chunk: docs/chunks/lexical_classifier - Type and keyword tables

use crate::tag::Tag;

/// Builtin type names. Must stay sorted for binary search.
pub const TYPES: &[&str] = &[
    "bool", "char", "double", "float", "int", "long", "short", "size_t", "void",
];

/// Reserved words. Must stay sorted for binary search.
pub const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "define",
    "delete",
    "else",
    "for",
    "if",
    "include",
    "namespace",
    "new",
    "private",
    "protected",
    "public",
    "return",
    "struct",
    "switch",
    "template",
    "try",
    "virtual",
    "while",
];

/// Looks a word up in the type table, then the keyword table.
pub fn lookup(word: &str) -> Option<Tag> {
    if TYPES.binary_search(&word).is_ok() {
        Some(Tag::Type)
    } else if KEYWORDS.binary_search(&word).is_ok() {
        Some(Tag::Keyword)
    } else {
        None
    }
}
