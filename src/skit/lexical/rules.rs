//! Lexical grammar rules
//!
//!     The character sets and reserved words below are the grammar. Regular expressions
//!     are compiled from these constants on first use, so the data stays the single
//!     source of truth.
//!
//!     Excluded characters (`EXCLUDED_SYMBOLS` plus any whitespace) are allowed inside an
//!     identifier but carry no meaning: normalization collapses each run of them to a
//!     single `-`. Disallowed characters are rejected outright, since the statement
//!     grammar uses them as separators.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words the statement grammar reserves. Matched as whole words, ignoring ASCII case only.
pub const RESERVED_WORDS: &[&str] = &[
    "and", "or", "when", "not", "is", "are", "enters", "enter", "exits", "exit", "leads", "to",
    "set", "clear", "jump",
];

/// Characters that may never appear in an identifier.
pub const DISALLOWED_CHARACTERS: &[char] = &[',', '(', ')'];

/// Punctuation that normalization folds into `-`. Whitespace is excluded as well.
pub const EXCLUDED_SYMBOLS: &str = ":!?'\"{}@*/\\&#%`+<=>|$.";

/// Separator written in place of each run of excluded characters.
pub const NORMALIZED_SEPARATOR: &str = "-";

static RESERVED_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternatives = RESERVED_WORDS
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    // Case folding is ASCII-only; word boundaries stay Unicode-aware.
    Regex::new(&format!(r"\b(?i-u:{})\b", alternatives)).expect("reserved word pattern")
});

static EXCLUDED_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"[{}\s]+", regex::escape(EXCLUDED_SYMBOLS)))
        .expect("excluded character pattern")
});

/// Whether `c` is folded away by normalization.
pub fn is_excluded(c: char) -> bool {
    c.is_whitespace() || EXCLUDED_SYMBOLS.contains(c)
}

/// Whether `c` is forbidden in an identifier.
pub fn is_disallowed(c: char) -> bool {
    DISALLOWED_CHARACTERS.contains(&c)
}

/// Returns the first reserved word found in `text`, as written there.
///
/// A reserved word only counts when it stands on its own: `and` matches in
/// `"Romeo and Juliet"` but not in `"Andromeda"` or `"Band"`.
pub fn find_reserved_word(text: &str) -> Option<&str> {
    RESERVED_WORD_REGEX.find(text).map(|m| m.as_str())
}

/// Returns the first disallowed character in `text`.
pub fn find_disallowed_character(text: &str) -> Option<char> {
    text.chars().find(|&c| is_disallowed(c))
}

/// Whether `text` contains at least one character that survives normalization.
pub fn has_significant_character(text: &str) -> bool {
    text.chars().any(|c| !is_excluded(c))
}

/// Lower-cases `text` and collapses every run of excluded characters to a single `-`.
///
/// Leading and trailing separators are kept: `"!Example"` normalizes to `"-example"`.
pub fn normalize(text: &str) -> String {
    EXCLUDED_RUN_REGEX
        .replace_all(&text.to_lowercase(), NORMALIZED_SEPARATOR)
        .into_owned()
}
