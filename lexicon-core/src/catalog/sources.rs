//! Catalog sources: in-memory, JSON dumps and tab-separated word lists.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use lexicon_contracts::{CatalogError, CatalogSource};
use lexicon_model::{EntryId, VocabularyEntry};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// On-disk catalog layouts understood by [`open_source`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// Pick by file extension, JSON otherwise.
    #[default]
    Auto,
    Json,
    Tsv,
}

impl CatalogFormat {
    pub fn resolve(self, path: &Path) -> CatalogFormat {
        match self {
            CatalogFormat::Auto => {
                match path.extension().and_then(|ext| ext.to_str()) {
                    Some("tsv") | Some("txt") | Some("md") => CatalogFormat::Tsv,
                    _ => CatalogFormat::Json,
                }
            }
            explicit => explicit,
        }
    }
}

pub fn open_source(
    path: impl Into<PathBuf>,
    format: CatalogFormat,
) -> Box<dyn CatalogSource> {
    let path = path.into();
    match format.resolve(&path) {
        CatalogFormat::Tsv => Box::new(TsvCatalogSource::new(path)),
        _ => Box::new(JsonCatalogSource::new(path)),
    }
}

/// Catalog compiled into the host or built by hand.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<VocabularyEntry>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<VocabularyEntry>) -> Self {
        Self { entries }
    }
}

impl CatalogSource for StaticCatalog {
    fn load(&self) -> Result<Vec<VocabularyEntry>, CatalogError> {
        Ok(self.entries.clone())
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: Option<u32>,
    word: String,
    #[serde(alias = "definition")]
    translation: String,
    #[serde(default, alias = "partOfSpeech")]
    part_of_speech: Option<String>,
    #[serde(default)]
    example: Option<String>,
}

/// JSON array of `{ word, translation | definition, example?, part_of_speech?, id? }`.
///
/// Entries without an id get their 1-based position in the file.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(contents: &str) -> Result<Vec<VocabularyEntry>, CatalogError> {
        let raw: Vec<RawEntry> =
            serde_json::from_str(contents).map_err(|err| CatalogError::Parse {
                line: err.line(),
                message: err.to_string(),
            })?;

        Ok(raw
            .into_iter()
            .enumerate()
            .map(|(position, raw)| VocabularyEntry {
                id: EntryId(raw.id.unwrap_or(position as u32 + 1)),
                word: raw.word,
                translation: raw.translation,
                part_of_speech: raw.part_of_speech.filter(|p| !p.trim().is_empty()),
                example: raw.example.filter(|e| !e.trim().is_empty()),
            })
            .collect())
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<Vec<VocabularyEntry>, CatalogError> {
        debug!(path = %self.path.display(), "loading json catalog");
        let contents = fs::read_to_string(&self.path)?;
        Self::parse(&contents)
    }
}

/// Tab-separated word list: each line holds `EN \t translation` pairs,
/// repeated any number of times. Header rows start with `EN`.
///
/// Words are title-cased, sorted, and de-duplicated (first translation
/// wins); ids follow the sorted order starting at 1.
#[derive(Debug, Clone)]
pub struct TsvCatalogSource {
    path: PathBuf,
}

impl TsvCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn parse(contents: &str) -> Vec<VocabularyEntry> {
        let mut pairs: Vec<(String, String)> = Vec::new();

        for line in contents.lines() {
            let parts: Vec<&str> = line
                .split('\t')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect();

            if parts.first().is_none_or(|first| *first == "EN") {
                continue;
            }

            for pair in parts.chunks(2) {
                if let [word, translation] = pair
                    && *word != "EN"
                {
                    pairs.push((title_case(word), (*translation).to_string()));
                }
            }
        }

        // Stable sort keeps the first translation of a duplicate word first.
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut seen = HashSet::new();
        let before = pairs.len();
        let entries: Vec<VocabularyEntry> = pairs
            .into_iter()
            .filter(|(word, _)| seen.insert(word.clone()))
            .enumerate()
            .map(|(position, (word, translation))| {
                VocabularyEntry::new(position as u32 + 1, word, translation)
            })
            .collect();

        if entries.len() < before {
            warn!(
                dropped = before - entries.len(),
                "duplicate words dropped from word list"
            );
        }
        entries
    }
}

impl CatalogSource for TsvCatalogSource {
    fn load(&self) -> Result<Vec<VocabularyEntry>, CatalogError> {
        debug!(path = %self.path.display(), "loading tab-separated catalog");
        let contents = fs::read_to_string(&self.path)?;
        Ok(Self::parse(&contents))
    }
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest.
fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut previous_cased = false;
    for c in word.chars() {
        if previous_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        previous_cased = c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("abandon"), "Abandon");
        assert_eq!(title_case("LOOK UP"), "Look Up");
        assert_eq!(title_case("well-known"), "Well-Known");
    }

    #[test]
    fn json_assigns_missing_ids_by_position() {
        let entries = JsonCatalogSource::parse(
            r#"[
                {"word": "Abandon", "definition": "leave", "example": "They abandoned ship."},
                {"id": 42, "word": "Ability", "translation": "kemampuan", "partOfSpeech": "noun"},
                {"word": "Able", "definition": "mampu", "example": ""}
            ]"#,
        )
        .unwrap();

        let ids: Vec<u32> = entries.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 42, 3]);
        assert_eq!(entries[0].translation, "leave");
        assert_eq!(entries[1].part_of_speech.as_deref(), Some("noun"));
        assert_eq!(entries[2].example, None);
    }

    #[test]
    fn json_parse_error_reports_line() {
        let err = JsonCatalogSource::parse("[\n{\"word\": }\n]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { line: 2, .. }));
    }

    #[test]
    fn tsv_pairs_are_title_cased_sorted_and_deduplicated() {
        let contents = "EN\tIDN\tEN\tIDN\n\
                        zebra\tkuda belang\tapple\tapel\n\
                        \n\
                        Apple\tbuah apel\tmango\tmangga\tdangling\n";
        let entries = TsvCatalogSource::parse(contents);
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["Apple", "Mango", "Zebra"]);
        assert_eq!(entries[0].translation, "apel");
        assert_eq!(entries[0].id, EntryId(1));
        assert_eq!(entries[2].id, EntryId(3));
    }

    #[test]
    fn format_resolves_from_extension() {
        assert_eq!(
            CatalogFormat::Auto.resolve(Path::new("words.tsv")),
            CatalogFormat::Tsv
        );
        assert_eq!(
            CatalogFormat::Auto.resolve(Path::new("vocab_dump.json")),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::Tsv.resolve(Path::new("vocab_dump.json")),
            CatalogFormat::Tsv
        );
    }
}
