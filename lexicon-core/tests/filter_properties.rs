use std::collections::BTreeSet;

use lexicon_core::{PaginationState, filter_catalog, paginate, preserved_offset};
use lexicon_model::{EntryId, FilterQuery, FilterScope, Letter, VocabularyEntry};
use proptest::prelude::*;

fn entries() -> impl Strategy<Value = Vec<VocabularyEntry>> {
    prop::collection::vec(("[a-zA-Z]{1,8}", "[a-z ,]{0,12}"), 0..40).prop_map(
        |pairs| {
            pairs
                .into_iter()
                .enumerate()
                .map(|(i, (word, translation))| {
                    VocabularyEntry::new(i as u32 + 1, word, translation)
                })
                .collect()
        },
    )
}

fn letter() -> impl Strategy<Value = Letter> {
    (0usize..26).prop_map(|i| Letter::new(Letter::ALPHABET[i]).unwrap())
}

fn contains_ignoring_case(entry: &VocabularyEntry, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    entry.word.to_lowercase().contains(&needle)
        || entry.translation.to_lowercase().contains(&needle)
}

fn ids(entries: &[&VocabularyEntry]) -> Vec<EntryId> {
    entries.iter().map(|entry| entry.id).collect()
}

proptest! {
    #[test]
    fn prop_empty_query_keeps_catalog(catalog in entries()) {
        let filtered = filter_catalog(&catalog, &FilterQuery::default(), &BTreeSet::new());
        let all: Vec<EntryId> = catalog.iter().map(|entry| entry.id).collect();
        prop_assert_eq!(ids(&filtered), all);
    }

    #[test]
    fn prop_search_results_match_and_exclusions_do_not(
        catalog in entries(),
        needle in "[a-zA-Z ,]{1,3}",
    ) {
        let query = FilterQuery::new().with_search(needle.clone());
        let filtered = filter_catalog(&catalog, &query, &BTreeSet::new());
        let kept: BTreeSet<EntryId> = filtered.iter().map(|entry| entry.id).collect();

        for entry in &catalog {
            prop_assert_eq!(kept.contains(&entry.id), contains_ignoring_case(entry, &needle));
        }
    }

    #[test]
    fn prop_search_ignores_letter(
        catalog in entries(),
        needle in "[a-z ,]{1,3}",
        letter in letter(),
    ) {
        let search_only = FilterQuery::new().with_search(needle.clone());
        let both = search_only.clone().with_letter(letter);
        prop_assert_eq!(
            ids(&filter_catalog(&catalog, &both, &BTreeSet::new())),
            ids(&filter_catalog(&catalog, &search_only, &BTreeSet::new()))
        );
    }

    #[test]
    fn prop_favorites_scope_is_a_subset(
        catalog in entries(),
        favorites in prop::collection::btree_set(1u32..50, 0..20),
    ) {
        let favorites: BTreeSet<EntryId> = favorites.into_iter().map(EntryId).collect();
        let query = FilterQuery::new().with_scope(FilterScope::FavoritesOnly);
        let filtered = filter_catalog(&catalog, &query, &favorites);
        prop_assert!(filtered.iter().all(|entry| favorites.contains(&entry.id)));
    }

    #[test]
    fn prop_pages_partition_the_items(len in 0usize..200, size in 1usize..30) {
        let items: Vec<usize> = (0..len).collect();
        let mut state = PaginationState::new(size).unwrap();
        let total = state.total_pages(len);
        let mut seen = Vec::new();

        for page in 1..=total {
            state.set_page(page, len);
            let current = paginate(&items, &state);
            prop_assert_eq!(current.total_pages, total);
            if page == total && len > 0 {
                prop_assert!(!current.items.is_empty() && current.items.len() <= size);
            }
            seen.extend_from_slice(current.items);
        }

        prop_assert_eq!(seen, items);
        if len == 0 {
            prop_assert_eq!(total, 1);
        }
    }

    #[test]
    fn prop_set_page_clamps(len in 0usize..100, size in 1usize..20, page in 0usize..50) {
        let mut state = PaginationState::new(size).unwrap();
        let selected = state.set_page(page, len);
        prop_assert!(selected >= 1 && selected <= state.total_pages(len));
    }

    #[test]
    fn prop_preserved_offset_never_negative(
        old_height in 0.0f64..10_000.0,
        old_offset in 0.0f64..10_000.0,
        new_height in 0.0f64..10_000.0,
    ) {
        let offset = preserved_offset(old_height, old_offset, new_height);
        prop_assert!(offset >= 0.0);
        let raw = old_offset + (new_height - old_height);
        if raw >= 0.0 {
            prop_assert_eq!(offset, raw);
        }
    }
}
