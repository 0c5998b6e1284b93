use lexicon_model::Letter;

/// Shown in place of the list when no entry survives the filters.
pub const EMPTY_RESULTS_MESSAGE: &str = "No words found matching your criteria.";
/// Label of the action that resets search and letter.
pub const CLEAR_FILTERS_LABEL: &str = "Clear all filters";

/// `Showing N words[ starting with "X"][ matching "q"]`.
pub fn results_summary(
    count: usize,
    letter: Option<Letter>,
    search: Option<&str>,
) -> String {
    let mut summary = format!("Showing {count} words");
    if let Some(letter) = letter {
        summary.push_str(&format!(" starting with \"{letter}\""));
    }
    if let Some(search) = search {
        summary.push_str(&format!(" matching \"{search}\""));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_variants() {
        assert_eq!(results_summary(30, None, None), "Showing 30 words");

        let b = Letter::new('b').unwrap();
        assert_eq!(
            results_summary(5, Some(b), None),
            "Showing 5 words starting with \"B\""
        );
        assert_eq!(
            results_summary(2, None, Some("rumah")),
            "Showing 2 words matching \"rumah\""
        );
        assert_eq!(
            results_summary(0, Some(b), Some("x")),
            "Showing 0 words starting with \"B\" matching \"x\""
        );
    }
}
