//! Pure catalog filtering.
//!
//! Precedence, applied in this order:
//!
//! 1. scope: `FavoritesOnly` keeps only favorited ids;
//! 2. search text: case-insensitive substring of word or translation;
//! 3. letter: case-insensitive first letter of the word, only when no search
//!    text is active.
//!
//! The result keeps catalog order. Cheap enough to run on every keystroke.

use std::collections::BTreeSet;

use lexicon_model::{EntryId, FilterQuery, FilterScope, Letter, VocabularyEntry};

pub fn filter_catalog<'a>(
    entries: &'a [VocabularyEntry],
    query: &FilterQuery,
    favorites: &BTreeSet<EntryId>,
) -> Vec<&'a VocabularyEntry> {
    let needle = query.search_term().map(str::to_lowercase);
    let letter = query.effective_letter();

    entries
        .iter()
        .filter(|entry| match query.scope {
            FilterScope::All => true,
            FilterScope::FavoritesOnly => favorites.contains(&entry.id),
        })
        .filter(|entry| match (&needle, letter) {
            (Some(needle), _) => matches_search(entry, needle),
            (None, Some(letter)) => starts_with_letter(entry, letter),
            (None, None) => true,
        })
        .collect()
}

/// `needle` must already be lowercased.
pub fn matches_search(entry: &VocabularyEntry, needle: &str) -> bool {
    entry.word.to_lowercase().contains(needle)
        || entry.translation.to_lowercase().contains(needle)
}

pub fn starts_with_letter(entry: &VocabularyEntry, letter: Letter) -> bool {
    entry.initial() == Some(letter.as_char())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<VocabularyEntry> {
        vec![
            VocabularyEntry::new(1, "Abandon", "meninggalkan"),
            VocabularyEntry::new(2, "brave", "berani"),
            VocabularyEntry::new(3, "Bread", "roti"),
            VocabularyEntry::new(4, "Cabin", "pondok, kabin"),
            VocabularyEntry::new(5, "dance", "menari"),
        ]
    }

    fn ids(result: &[&VocabularyEntry]) -> Vec<u32> {
        result.iter().map(|e| e.id.get()).collect()
    }

    #[test]
    fn empty_query_returns_catalog_in_order() {
        let entries = sample();
        let result = filter_catalog(&entries, &FilterQuery::new(), &BTreeSet::new());
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn search_matches_word_or_translation_case_insensitively() {
        let entries = sample();
        let query = FilterQuery::new().with_search("BR");
        assert_eq!(ids(&filter_catalog(&entries, &query, &BTreeSet::new())), vec![2, 3]);

        let query = FilterQuery::new().with_search("kabin");
        assert_eq!(ids(&filter_catalog(&entries, &query, &BTreeSet::new())), vec![4]);
    }

    #[test]
    fn letter_filter_is_case_insensitive() {
        let entries = sample();
        let query = FilterQuery::new().with_letter(Letter::new('b').unwrap());
        assert_eq!(ids(&filter_catalog(&entries, &query, &BTreeSet::new())), vec![2, 3]);
    }

    #[test]
    fn search_takes_precedence_over_letter() {
        let entries = sample();
        let with_letter = FilterQuery::new()
            .with_search("an")
            .with_letter(Letter::new('B').unwrap());
        let search_only = FilterQuery::new().with_search("an");
        assert_eq!(
            ids(&filter_catalog(&entries, &with_letter, &BTreeSet::new())),
            ids(&filter_catalog(&entries, &search_only, &BTreeSet::new())),
        );
        assert_eq!(
            ids(&filter_catalog(&entries, &search_only, &BTreeSet::new())),
            vec![1, 2, 5]
        );
    }

    #[test]
    fn favorites_scope_applies_before_search() {
        let entries = sample();
        let favorites: BTreeSet<_> = [EntryId(3), EntryId(5)].into();
        let query = FilterQuery::new()
            .with_scope(FilterScope::FavoritesOnly)
            .with_search("r");
        assert_eq!(ids(&filter_catalog(&entries, &query, &favorites)), vec![3, 5]);

        let query = query.with_search("");
        assert_eq!(ids(&filter_catalog(&entries, &query, &favorites)), vec![3, 5]);
    }

    #[test]
    fn whitespace_in_search_is_matched_literally() {
        let entries = vec![
            VocabularyEntry::new(1, "Ball", "bola"),
            VocabularyEntry::new(2, "Cabin", "pondok, kabin"),
            VocabularyEntry::new(3, "Bat", "kelelawar"),
        ];
        let none = BTreeSet::new();

        let spaces = FilterQuery::new().with_search(" ");
        assert_eq!(ids(&filter_catalog(&entries, &spaces, &none)), vec![2]);

        let with_letter = spaces.clone().with_letter(Letter::new('B').unwrap());
        assert_eq!(ids(&filter_catalog(&entries, &with_letter, &none)), vec![2]);

        let trailing = FilterQuery::new().with_search("bola ");
        assert!(filter_catalog(&entries, &trailing, &none).is_empty());
    }

    #[test]
    fn favorites_scope_without_favorites_is_empty() {
        let entries = sample();
        let query = FilterQuery::new().with_scope(FilterScope::FavoritesOnly);
        assert!(filter_catalog(&entries, &query, &BTreeSet::new()).is_empty());
    }
}
