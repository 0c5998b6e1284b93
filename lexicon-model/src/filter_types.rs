//! Filter inputs collected from the alphabet bar, search box and scope toggle.

use crate::error::{ModelError, Result};
use std::fmt;

/// A single uppercase ASCII letter used by the alphabet filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "char", into = "char"))]
pub struct Letter(char);

impl Letter {
    /// Letters offered by the alphabet bar, in display order.
    pub const ALPHABET: [char; 26] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N',
        'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ];

    /// Lowercase input is normalized; anything outside `A..=Z` is rejected.
    pub fn new(raw: char) -> Result<Self> {
        let upper = raw.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Letter(upper))
        } else {
            Err(ModelError::InvalidLetter(raw.to_string()))
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        let mut chars = raw.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(ModelError::InvalidLetter(raw.to_string())),
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        Self::ALPHABET.iter().map(|&c| Letter(c))
    }
}

impl TryFrom<char> for Letter {
    type Error = ModelError;

    fn try_from(value: char) -> Result<Self> {
        Letter::new(value)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether filtering covers the whole catalog or only favorited entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum FilterScope {
    #[default]
    All,
    FavoritesOnly,
}

/// Transient filter state recomputed from user input.
///
/// An active search text suppresses the letter filter; see
/// [`FilterQuery::effective_letter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterQuery {
    pub search_text: String,
    pub letter: Option<Letter>,
    pub scope: FilterScope,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_letter(mut self, letter: Letter) -> Self {
        self.letter = Some(letter);
        self
    }

    pub fn with_scope(mut self, scope: FilterScope) -> Self {
        self.scope = scope;
        self
    }

    /// Search text exactly as typed, `None` when empty. Whitespace is
    /// part of the needle.
    pub fn search_term(&self) -> Option<&str> {
        if self.search_text.is_empty() {
            None
        } else {
            Some(&self.search_text)
        }
    }

    pub fn is_search_active(&self) -> bool {
        self.search_term().is_some()
    }

    /// The letter that actually applies: none while a search is active.
    pub fn effective_letter(&self) -> Option<Letter> {
        if self.is_search_active() {
            None
        } else {
            self.letter
        }
    }

    /// True when the query leaves the catalog untouched.
    pub fn is_unfiltered(&self) -> bool {
        self.scope == FilterScope::All
            && !self.is_search_active()
            && self.letter.is_none()
    }
}
