use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the raw idiom dump. Keys other than these three
/// (`derivation`, `example`, `abbreviation`, ...) are ignored on load.
///
/// Only `word` is required up front. `pinyin` and `explanation` are checked
/// once the record is known to be an idiom, so a malformed entry that gets
/// filtered out anyway does not fail the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIdiomRecord {
    pub word: String,
    #[serde(default)]
    pub pinyin: Option<Value>,
    #[serde(default)]
    pub explanation: Option<Value>,
}

impl RawIdiomRecord {
    pub fn new(
        word: impl Into<String>,
        pinyin: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            pinyin: Some(Value::String(pinyin.into())),
            explanation: Some(Value::String(explanation.into())),
        }
    }

    pub fn pinyin(&self) -> Option<&str> {
        self.pinyin.as_ref().and_then(Value::as_str)
    }

    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_ref().and_then(Value::as_str)
    }
}

/// A cleaned idiom, with pinyin in tone-number notation (`a1 bi2 di4 yu4`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdiomRecord {
    pub word: String,
    pub pinyin: String,
    pub explanation: String,
}

impl IdiomRecord {
    pub fn new(
        word: impl Into<String>,
        pinyin: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            pinyin: pinyin.into(),
            explanation: explanation.into(),
        }
    }
}

/// word -> index of its first occurrence in the cleaned list
pub(crate) type ReverseIndex<'a> = AHashMap<&'a str, usize>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub total: usize,
    pub kept: usize,
    pub dropped: usize,
    /// syllables still carrying a tone mark after the single substitution
    pub partially_marked: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighFrequencyReport {
    pub candidates: usize,
    pub lines_scanned: usize,
    pub blank_lines: usize,
    pub selected: usize,
    pub limit_reached: bool,
}
