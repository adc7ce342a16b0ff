use crate::MIN_WORD_LENGTH;
use once_cell::sync::Lazy;
use regex::Regex;
use std::{borrow::Borrow, fmt, ops::Deref};

static LETTERS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+$").unwrap());

/// A lowercase ASCII word of at least [`MIN_WORD_LENGTH`] letters. Only
/// [`normalize`] builds one.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedWord(String);

impl NormalizedWord {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for NormalizedWord {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NormalizedWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets word sets be queried with a plain `&str`.
impl Borrow<str> for NormalizedWord {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub word: NormalizedWord,
    pub title_case: bool,
}

impl Candidate {
    pub fn from_token(token: &str) -> Option<Self> {
        normalize(token).map(|word| Self {
            word,
            title_case: is_title_case(token),
        })
    }
}

// Rejects phrases, non-ASCII-letters and anything under MIN_WORD_LENGTH.
pub fn normalize(token: &str) -> Option<NormalizedWord> {
    if token.contains('_') || !LETTERS_ONLY.is_match(token) || token.len() < MIN_WORD_LENGTH {
        return None;
    }
    Some(NormalizedWord(token.to_ascii_lowercase()))
}

// `Paris` but not `NASA`
pub fn is_title_case(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(first), Some(second)) if first.is_uppercase() && second.is_lowercase()
    )
}
