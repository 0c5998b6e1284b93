//! Tunables shared by the engine components.

use std::time::Duration;

use lexicon_model::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};

/// Press duration that turns a press into a favorite toggle.
pub const DEFAULT_HOLD_THRESHOLD_MS: u64 = 800;
/// Pointer travel that turns a press into a drag/scroll.
pub const DEFAULT_DRAG_SLOP: f64 = 10.0;
/// Lifetime of a transient notice.
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 3_000;
/// Element the results list scrolls back to on page change.
pub const DEFAULT_RESULTS_ANCHOR: &str = "results-top";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Page size used until the user picks one.
    pub default_page_size: usize,
    pub hold_threshold_ms: u64,
    pub drag_slop: f64,
    pub notice_duration_ms: u64,
    pub results_anchor: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            hold_threshold_ms: DEFAULT_HOLD_THRESHOLD_MS,
            drag_slop: DEFAULT_DRAG_SLOP,
            notice_duration_ms: DEFAULT_NOTICE_DURATION_MS,
            results_anchor: DEFAULT_RESULTS_ANCHOR.to_string(),
        }
    }
}

impl EngineSettings {
    pub fn hold_threshold(&self) -> Duration {
        Duration::from_millis(self.hold_threshold_ms)
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}
