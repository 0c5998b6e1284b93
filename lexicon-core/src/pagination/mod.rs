//! Page slicing over the filtered catalog.
//!
//! Pagination is a pure view over an in-memory slice: no server paging, no
//! cursors. The only state is [`PaginationState`]; the scroll side effects of
//! a page change live in [`scroll`].

pub mod scroll;

use std::ops::Range;

use lexicon_model::{ModelResult, validate_page_size};

pub use scroll::{PageTransition, ScrollSnapshot, preserved_offset};

/// Number of pages needed for `len` items; never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    current_page: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> ModelResult<Self> {
        Ok(Self {
            page_size: validate_page_size(page_size)?,
            current_page: 1,
        })
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, len: usize) -> usize {
        total_pages(len, self.page_size)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Changing the page size always returns to the first page.
    pub fn set_page_size(&mut self, page_size: usize) -> ModelResult<()> {
        self.page_size = validate_page_size(page_size)?;
        self.current_page = 1;
        Ok(())
    }

    /// Move to `page`, clamped into `[1, total_pages]`. Returns the page
    /// actually selected.
    pub fn set_page(&mut self, page: usize, len: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages(len));
        self.current_page
    }

    /// Reset to page 1 when the current page no longer exists for `len`
    /// items. Returns `true` if the page changed.
    pub fn revalidate(&mut self, len: usize) -> bool {
        if self.current_page > self.total_pages(len) {
            self.current_page = 1;
            true
        } else {
            false
        }
    }

    /// Current page as seen by `len` items: a page that no longer exists
    /// reads as page 1.
    pub fn effective_page(&self, len: usize) -> usize {
        if self.current_page > self.total_pages(len) {
            1
        } else {
            self.current_page
        }
    }

    /// Index range of the current page within `len` items.
    pub fn range(&self, len: usize) -> Range<usize> {
        let page = self.effective_page(len);
        let start = ((page - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current_page < self.total_pages(len)
    }
}

/// One page of a filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<T> Page<'_, T> {
    /// Page controls are hidden when everything fits on one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn paginate<'a, T>(filtered: &'a [T], state: &PaginationState) -> Page<'a, T> {
    let len = filtered.len();

    Page {
        items: &filtered[state.range(len)],
        current_page: state.effective_page(len),
        total_pages: state.total_pages(len),
        total_items: len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages(0, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(30, 12), 3);
    }

    #[test]
    fn slices_follow_page_number() {
        let items: Vec<u32> = (1..=30).collect();
        let mut state = PaginationState::new(12).unwrap();

        assert_eq!(paginate(&items, &state).items, &items[0..12]);
        state.set_page(3, items.len());
        let page = paginate(&items, &state);
        assert_eq!(page.items, &items[24..30]);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn set_page_clamps_out_of_range_requests() {
        let mut state = PaginationState::new(12).unwrap();
        assert_eq!(state.set_page(0, 30), 1);
        assert_eq!(state.set_page(99, 30), 3);
        assert_eq!(state.set_page(2, 0), 1);
    }

    #[test]
    fn empty_input_yields_one_empty_page() {
        let items: Vec<u32> = Vec::new();
        let state = PaginationState::new(12).unwrap();
        let page = paginate(&items, &state);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert!(!page.is_visible());
    }

    #[test]
    fn shrinking_input_resets_to_first_page() {
        let mut state = PaginationState::new(12).unwrap();
        state.set_page(3, 30);
        assert!(state.revalidate(5));
        assert_eq!(state.current_page(), 1);
        assert!(!state.revalidate(5));
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = PaginationState::new(12).unwrap();
        state.set_page(2, 30);
        state.set_page_size(24).unwrap();
        assert_eq!(state.current_page(), 1);
        assert!(state.set_page_size(0).is_err());
        assert_eq!(state.page_size(), 24);
    }

    #[test]
    fn neighbours_respect_edges() {
        let mut state = PaginationState::new(10).unwrap();
        assert!(!state.has_previous());
        assert!(state.has_next(25));
        state.set_page(3, 25);
        assert!(state.has_previous());
        assert!(!state.has_next(25));
    }
}
