//! Press-and-hold and double-activation recognition for catalog entries.
//!
//! A press starts a hold timer owned by the detector. Release, pointer
//! leave, touch cancel, or travel beyond the drag slop all end the press
//! through [`GestureDetector::cancel`]. Each press gets a sequence number;
//! a timer that wakes for a press that is no longer active does nothing.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use lexicon_model::EntryId;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::settings::{
    DEFAULT_DRAG_SLOP, DEFAULT_HOLD_THRESHOLD_MS, EngineSettings,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureIntent {
    ToggleFavorite(EntryId),
}

/// Why a pending press ended without firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    Release,
    PointerLeave,
    TouchCancel,
    /// Pointer travelled past the drag slop (a scroll or drag).
    Moved,
    /// A new press or a double activation took over.
    Superseded,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    pub hold_threshold: Duration,
    pub drag_slop: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            hold_threshold: Duration::from_millis(DEFAULT_HOLD_THRESHOLD_MS),
            drag_slop: DEFAULT_DRAG_SLOP,
        }
    }
}

impl From<&EngineSettings> for GestureConfig {
    fn from(settings: &EngineSettings) -> Self {
        Self {
            hold_threshold: settings.hold_threshold(),
            drag_slop: settings.drag_slop,
        }
    }
}

struct ActivePress {
    sequence: u64,
    entry: EntryId,
    origin: (f64, f64),
    timer: JoinHandle<()>,
}

pub struct GestureDetector {
    config: GestureConfig,
    next_sequence: u64,
    active: Arc<Mutex<Option<ActivePress>>>,
    intents: mpsc::UnboundedSender<GestureIntent>,
}

impl fmt::Debug for GestureDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = match self.active.try_lock() {
            Some(guard) => guard
                .as_ref()
                .map(|press| format!("{} (#{})", press.entry, press.sequence)),
            None => Some("<locked>".to_string()),
        };
        f.debug_struct("GestureDetector")
            .field("config", &self.config)
            .field("pending", &pending)
            .finish()
    }
}

impl GestureDetector {
    /// Build a detector and the receiver its intents are delivered on.
    pub fn new(
        config: GestureConfig,
    ) -> (Self, mpsc::UnboundedReceiver<GestureIntent>) {
        let (intents, rx) = mpsc::unbounded_channel();
        let detector = Self {
            config,
            next_sequence: 0,
            active: Arc::new(Mutex::new(None)),
            intents,
        };
        (detector, rx)
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn is_pending(&self) -> bool {
        self.active.lock().is_some()
    }

    /// Start a press on `entry` at `(x, y)`. Must be called inside a tokio
    /// runtime.
    pub fn press(&mut self, entry: EntryId, x: f64, y: f64) {
        self.cancel(CancelReason::Superseded);

        self.next_sequence += 1;
        let sequence = self.next_sequence;
        let threshold = self.config.hold_threshold;

        let mut guard = self.active.lock();
        let active = Arc::clone(&self.active);
        let intents = self.intents.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(threshold).await;
            let fired = {
                let mut guard = active.lock();
                let current = guard
                    .as_ref()
                    .is_some_and(|press| press.sequence == sequence);
                if current {
                    guard.take().map(|press| press.entry)
                } else {
                    None
                }
            };
            if let Some(entry) = fired {
                debug!(entry = %entry, "hold threshold reached");
                emit(&intents, GestureIntent::ToggleFavorite(entry));
            }
        });
        *guard = Some(ActivePress {
            sequence,
            entry,
            origin: (x, y),
            timer,
        });
    }

    /// Track pointer travel; cancels the press once it leaves the slop.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let moved = self.active.lock().as_ref().is_some_and(|press| {
            let (ox, oy) = press.origin;
            (x - ox).hypot(y - oy) > self.config.drag_slop
        });
        if moved {
            self.cancel(CancelReason::Moved);
        }
    }

    pub fn release(&mut self) {
        self.cancel(CancelReason::Release);
    }

    pub fn pointer_leave(&mut self) {
        self.cancel(CancelReason::PointerLeave);
    }

    pub fn touch_cancel(&mut self) {
        self.cancel(CancelReason::TouchCancel);
    }

    /// End the pending press, if any, without firing. Returns whether a
    /// press was pending.
    pub fn cancel(&mut self, reason: CancelReason) -> bool {
        let Some(press) = self.active.lock().take() else {
            return false;
        };
        press.timer.abort();
        debug!(entry = %press.entry, ?reason, "press cancelled");
        true
    }

    /// Double click or double tap: fires immediately.
    pub fn double_activate(&mut self, entry: EntryId) {
        self.cancel(CancelReason::Superseded);
        debug!(entry = %entry, "double activation");
        emit(&self.intents, GestureIntent::ToggleFavorite(entry));
    }
}

impl Drop for GestureDetector {
    fn drop(&mut self) {
        if let Some(press) = self.active.lock().take() {
            press.timer.abort();
        }
    }
}

fn emit(intents: &mpsc::UnboundedSender<GestureIntent>, intent: GestureIntent) {
    if intents.send(intent).is_err() {
        debug!(?intent, "gesture receiver dropped");
    }
}
