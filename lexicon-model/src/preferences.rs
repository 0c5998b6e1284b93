//! Display preferences and the storage keys they persist under.

use crate::error::{ModelError, Result};

/// Entries per page when nothing has been stored yet.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Page sizes offered by the page-size selector.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [6, 12, 24, 48];

/// Boolean display switches the user can flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DisplayToggle {
    Examples,
    Speaker,
    Translation,
    AutoScroll,
}

impl DisplayToggle {
    pub const ALL: [DisplayToggle; 4] = [
        DisplayToggle::Examples,
        DisplayToggle::Speaker,
        DisplayToggle::Translation,
        DisplayToggle::AutoScroll,
    ];

    pub fn key(self) -> PreferenceKey {
        match self {
            DisplayToggle::Examples => PreferenceKey::ShowExamples,
            DisplayToggle::Speaker => PreferenceKey::ShowSpeaker,
            DisplayToggle::Translation => PreferenceKey::ShowTranslation,
            DisplayToggle::AutoScroll => PreferenceKey::AutoScroll,
        }
    }
}

/// Durable storage key of each independently persisted preference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    ShowExamples,
    ShowSpeaker,
    ShowTranslation,
    AutoScroll,
    PageSize,
}

impl PreferenceKey {
    pub const ALL: [PreferenceKey; 5] = [
        PreferenceKey::ShowExamples,
        PreferenceKey::ShowSpeaker,
        PreferenceKey::ShowTranslation,
        PreferenceKey::AutoScroll,
        PreferenceKey::PageSize,
    ];

    pub fn storage_key(self) -> &'static str {
        match self {
            PreferenceKey::ShowExamples => "showExamples",
            PreferenceKey::ShowSpeaker => "showSpeaker",
            PreferenceKey::ShowTranslation => "showTranslation",
            PreferenceKey::AutoScroll => "autoScroll",
            PreferenceKey::PageSize => "itemsPerPage",
        }
    }
}

/// Display toggles plus the selected page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceSet {
    pub show_examples: bool,
    pub show_speaker: bool,
    pub show_translation: bool,
    pub auto_scroll: bool,
    pub page_size: usize,
}

impl Default for PreferenceSet {
    fn default() -> Self {
        Self {
            show_examples: true,
            show_speaker: true,
            show_translation: true,
            auto_scroll: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PreferenceSet {
    pub fn get(&self, toggle: DisplayToggle) -> bool {
        match toggle {
            DisplayToggle::Examples => self.show_examples,
            DisplayToggle::Speaker => self.show_speaker,
            DisplayToggle::Translation => self.show_translation,
            DisplayToggle::AutoScroll => self.auto_scroll,
        }
    }

    pub fn set(&mut self, toggle: DisplayToggle, value: bool) {
        let slot = match toggle {
            DisplayToggle::Examples => &mut self.show_examples,
            DisplayToggle::Speaker => &mut self.show_speaker,
            DisplayToggle::Translation => &mut self.show_translation,
            DisplayToggle::AutoScroll => &mut self.auto_scroll,
        };
        *slot = value;
    }

    /// Flip a toggle and return its new value.
    pub fn flip(&mut self, toggle: DisplayToggle) -> bool {
        let next = !self.get(toggle);
        self.set(toggle, next);
        next
    }

    /// Literal string form of a field as written to durable storage.
    pub fn stored_value(&self, key: PreferenceKey) -> String {
        match key {
            PreferenceKey::ShowExamples => self.show_examples.to_string(),
            PreferenceKey::ShowSpeaker => self.show_speaker.to_string(),
            PreferenceKey::ShowTranslation => self.show_translation.to_string(),
            PreferenceKey::AutoScroll => self.auto_scroll.to_string(),
            PreferenceKey::PageSize => self.page_size.to_string(),
        }
    }
}

/// Reject a zero page size before it reaches the paginator.
pub fn validate_page_size(size: usize) -> Result<usize> {
    if size == 0 {
        Err(ModelError::InvalidPageSize(size))
    } else {
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_on() {
        let prefs = PreferenceSet::default();
        for toggle in DisplayToggle::ALL {
            assert!(prefs.get(toggle), "{toggle:?} should default to true");
        }
        assert_eq!(prefs.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn flip_returns_new_value() {
        let mut prefs = PreferenceSet::default();
        assert!(!prefs.flip(DisplayToggle::Speaker));
        assert!(!prefs.show_speaker);
        assert!(prefs.flip(DisplayToggle::Speaker));
    }

    #[test]
    fn stored_values_are_literals() {
        let mut prefs = PreferenceSet::default();
        prefs.auto_scroll = false;
        prefs.page_size = 24;
        assert_eq!(prefs.stored_value(PreferenceKey::AutoScroll), "false");
        assert_eq!(prefs.stored_value(PreferenceKey::PageSize), "24");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert_eq!(validate_page_size(0), Err(ModelError::InvalidPageSize(0)));
        assert_eq!(validate_page_size(12), Ok(12));
    }
}
