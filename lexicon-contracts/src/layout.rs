/// How a scroll request should move the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Animated motion towards the target.
    Smooth,
    /// Single jump with no animation.
    Instant,
}

/// Minimal view of the scrolling document the results are rendered into.
///
/// Heights and offsets share one unit (CSS pixels in a browser, rows in a
/// terminal); the engine never interprets them beyond arithmetic.
pub trait ScrollSurface {
    fn document_height(&self) -> f64;

    fn scroll_offset(&self) -> f64;

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Bring the element registered under `anchor` into view.
    fn scroll_anchor_into_view(&mut self, anchor: &str, behavior: ScrollBehavior);
}
