//! Plain-text rendering of a page for the terminal.

use std::fmt::Write as _;

use lexicon_contracts::{ScrollBehavior, ScrollSurface};
use lexicon_core::view::CLEAR_FILTERS_LABEL;
use lexicon_core::{CatalogRenderer, NoticeLevel, PageView};
use tracing::debug;

/// Collects the last rendered page; scrolling is measured in lines.
#[derive(Debug, Default)]
pub struct Terminal {
    last: Option<PageView>,
    lines: usize,
    offset: f64,
}

impl Terminal {
    pub fn take(&mut self) -> Option<PageView> {
        self.last.take()
    }
}

impl CatalogRenderer for Terminal {
    fn render(&mut self, view: &PageView) {
        self.lines = format_page(view).lines().count();
        self.last = Some(view.clone());
    }
}

impl ScrollSurface for Terminal {
    fn document_height(&self) -> f64 {
        self.lines as f64
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        debug!(offset, ?behavior, "scroll");
        self.offset = offset;
    }

    fn scroll_anchor_into_view(&mut self, anchor: &str, behavior: ScrollBehavior) {
        debug!(anchor, ?behavior, "scroll to anchor");
        self.offset = 0.0;
    }
}

pub fn format_page(view: &PageView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.summary);
    if view.show_pagination {
        let _ = writeln!(out, "Page {} of {}", view.current_page, view.total_pages);
    }
    let _ = writeln!(out);

    if let Some(message) = view.empty_message {
        let _ = writeln!(out, "{message}");
        let _ = writeln!(out, "{CLEAR_FILTERS_LABEL}: rerun without --search/--letter");
        return out;
    }

    for rendered in &view.entries {
        let entry = &rendered.entry;
        let marker = if rendered.favorite { "*" } else { " " };
        let _ = write!(out, "[{marker}] {:>4}. {}", entry.id.get(), entry.word);
        if let Some(part) = &entry.part_of_speech {
            let _ = write!(out, " ({part})");
        }
        if rendered.display.show_translation {
            let _ = write!(out, " - {}", entry.translation);
        }
        let _ = writeln!(out);
        if rendered.display.show_examples
            && let Some(example) = &entry.example
        {
            let _ = writeln!(out, "         e.g. {example}");
        }
    }
    out
}

pub fn format_notices(view: &PageView) -> String {
    let mut out = String::new();
    for notice in &view.notices {
        let prefix = match notice.level {
            NoticeLevel::Info => "note",
            NoticeLevel::Error => "error",
        };
        let _ = writeln!(out, "{prefix}: {}", notice.message);
    }
    out
}
