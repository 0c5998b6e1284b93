use crate::ids::EntryId;

/// One vocabulary item of the static catalog.
///
/// Entries are loaded once at startup and never mutated afterwards, so the
/// engine hands out shared references rather than clones.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VocabularyEntry {
    pub id: EntryId,
    pub word: String,
    /// Comma-separated alternatives are allowed, e.g. `"meninggalkan, membuang"`.
    pub translation: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub part_of_speech: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub example: Option<String>,
}

impl VocabularyEntry {
    pub fn new(
        id: impl Into<EntryId>,
        word: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
            translation: translation.into(),
            part_of_speech: None,
            example: None,
        }
    }

    pub fn with_part_of_speech(mut self, part: impl Into<String>) -> Self {
        self.part_of_speech = Some(part.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    /// Individual translation alternatives, trimmed, empties skipped.
    pub fn translations(&self) -> impl Iterator<Item = &str> {
        self.translation
            .split(',')
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
    }

    /// First character of the word, uppercased.
    pub fn initial(&self) -> Option<char> {
        self.word.chars().next().map(|c| c.to_ascii_uppercase())
    }
}
