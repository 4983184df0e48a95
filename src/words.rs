//! Embedded vocabulary and the startup word-list contract
//!
//! Every candidate word carries exactly one hole marker. The contract is
//! checked once when a session is built; the engine never re-validates it.

use std::fmt;

/// The letter the falling drop must land in place of
pub const HOLE_MARKER: char = 'ё';
/// How the hole is shown inside the scrolling word
pub const HOLE_CELL: char = '_';

const LIST: &[&str] = &[
    "ёлка",
    "ёжик",
    "мёд",
    "лёд",
    "лён",
    "клён",
    "орёл",
    "осёл",
    "котёнок",
    "утёнок",
    "щётка",
    "тёрка",
    "свёкла",
    "самолёт",
    "вертолёт",
    "костёр",
    "ковёр",
    "актёр",
    "шофёр",
    "плёнка",
    "тёплый",
    "зелёный",
    "жёлтый",
    "чёрный",
    "весёлый",
];

/// The built-in vocabulary, ready to hand to a session
pub fn list() -> Vec<String> {
    LIST.iter().map(|s| (*s).to_string()).collect()
}

/// A word list that violates the construction contract
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
    /// A word with zero or several hole markers
    BadHoleCount { word: String, count: usize },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordListError::Empty => write!(f, "word list is empty"),
            WordListError::BadHoleCount { word, count } => write!(
                f,
                "word {word:?} has {count} hole markers ({HOLE_MARKER:?}), expected exactly one"
            ),
        }
    }
}

impl std::error::Error for WordListError {}

/// Check the startup contract: non-empty list, one hole marker per word
pub fn validate(words: &[String]) -> Result<(), WordListError> {
    if words.is_empty() {
        return Err(WordListError::Empty);
    }
    for word in words {
        let count = word.chars().filter(|&c| c == HOLE_MARKER).count();
        if count != 1 {
            return Err(WordListError::BadHoleCount {
                word: word.clone(),
                count,
            });
        }
    }
    Ok(())
}
