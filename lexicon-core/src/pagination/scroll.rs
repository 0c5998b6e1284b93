//! Scroll handling around a page change.
//!
//! With auto-scroll on, the results anchor is scrolled into view smoothly
//! once the new page is in place. With auto-scroll off, the reader's place
//! is kept through a measure / mutate / re-measure / jump protocol:
//!
//! 1. [`PageTransition::begin`] snapshots document height and scroll offset
//!    before the page content is replaced;
//! 2. the caller swaps the content and lets layout finish;
//! 3. [`PageTransition::finish`] re-measures and applies one instant jump of
//!    `old_offset + (new_height - old_height)` before the next paint.

use lexicon_contracts::{ScrollBehavior, ScrollSurface};
use tracing::trace;

/// Offset that keeps the reader in place after the document height changed
/// from `old_height` to `new_height`. Never negative.
pub fn preserved_offset(old_height: f64, old_offset: f64, new_height: f64) -> f64 {
    (old_offset + (new_height - old_height)).max(0.0)
}

/// Layout metrics captured before a content swap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub document_height: f64,
    pub scroll_offset: f64,
}

impl ScrollSnapshot {
    pub fn capture<S>(surface: &S) -> Self
    where
        S: ScrollSurface + ?Sized,
    {
        Self {
            document_height: surface.document_height(),
            scroll_offset: surface.scroll_offset(),
        }
    }

    /// Re-measure `surface` and jump to the preserved offset.
    pub fn restore<S>(&self, surface: &mut S) -> f64
    where
        S: ScrollSurface + ?Sized,
    {
        let new_height = surface.document_height();
        let offset =
            preserved_offset(self.document_height, self.scroll_offset, new_height);
        trace!(
            old_height = self.document_height,
            new_height,
            old_offset = self.scroll_offset,
            offset,
            "restoring scroll offset"
        );
        surface.scroll_to(offset, ScrollBehavior::Instant);
        offset
    }
}

/// Scroll work pending across one page change.
#[derive(Debug, Clone, PartialEq)]
pub enum PageTransition {
    Anchor(String),
    Preserve(ScrollSnapshot),
}

impl PageTransition {
    /// Call before the page content is replaced.
    pub fn begin<S>(surface: &S, auto_scroll: bool, anchor: &str) -> Self
    where
        S: ScrollSurface + ?Sized,
    {
        if auto_scroll {
            PageTransition::Anchor(anchor.to_string())
        } else {
            PageTransition::Preserve(ScrollSnapshot::capture(surface))
        }
    }

    /// Call once the new page has been laid out.
    pub fn finish<S>(self, surface: &mut S)
    where
        S: ScrollSurface + ?Sized,
    {
        match self {
            PageTransition::Anchor(anchor) => {
                surface.scroll_anchor_into_view(&anchor, ScrollBehavior::Smooth);
            }
            PageTransition::Preserve(snapshot) => {
                snapshot.restore(surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeSurface {
        height: f64,
        offset: f64,
        jumps: Vec<(f64, ScrollBehavior)>,
        anchors: Vec<(String, ScrollBehavior)>,
    }

    impl ScrollSurface for FakeSurface {
        fn document_height(&self) -> f64 {
            self.height
        }

        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
            self.offset = offset;
            self.jumps.push((offset, behavior));
        }

        fn scroll_anchor_into_view(&mut self, anchor: &str, behavior: ScrollBehavior) {
            self.anchors.push((anchor.to_string(), behavior));
        }
    }

    #[test]
    fn preserved_offset_follows_height_delta() {
        assert_eq!(preserved_offset(3000.0, 1200.0, 2800.0), 1000.0);
        assert_eq!(preserved_offset(3000.0, 1200.0, 3150.0), 1350.0);
        assert_eq!(preserved_offset(3000.0, 100.0, 2500.0), 0.0);
    }

    #[test]
    fn preserve_mode_jumps_once_without_animation() {
        let mut surface = FakeSurface {
            height: 3000.0,
            offset: 1200.0,
            ..Default::default()
        };

        let transition = PageTransition::begin(&surface, false, "results-top");
        surface.height = 2800.0;
        transition.finish(&mut surface);

        assert_eq!(surface.jumps, vec![(1000.0, ScrollBehavior::Instant)]);
        assert!(surface.anchors.is_empty());
    }

    #[test]
    fn auto_scroll_targets_anchor_smoothly() {
        let mut surface = FakeSurface::default();
        let transition = PageTransition::begin(&surface, true, "results-top");
        transition.finish(&mut surface);

        assert_eq!(
            surface.anchors,
            vec![("results-top".to_string(), ScrollBehavior::Smooth)]
        );
        assert!(surface.jumps.is_empty());
    }
}
