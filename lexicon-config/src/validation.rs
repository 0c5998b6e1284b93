use lexicon_model::PAGE_SIZE_OPTIONS;
use thiserror::Error;

use crate::models::LexiconConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("engine.default_page_size must be greater than zero")]
    ZeroPageSize,
    #[error("engine.hold_threshold_ms must be greater than zero")]
    ZeroHoldThreshold,
    #[error("engine.drag_slop must be a finite, non-negative distance (got {0})")]
    InvalidDragSlop(f64),
    #[error("engine.results_anchor must not be empty")]
    EmptyResultsAnchor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

pub fn apply_guard_rails(
    config: &LexiconConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let engine = &config.engine;
    let mut warnings = ConfigWarnings::default();

    if engine.default_page_size == 0 {
        return Err(ConfigGuardRailError::ZeroPageSize);
    }
    if engine.hold_threshold_ms == 0 {
        return Err(ConfigGuardRailError::ZeroHoldThreshold);
    }
    if !engine.drag_slop.is_finite() || engine.drag_slop < 0.0 {
        return Err(ConfigGuardRailError::InvalidDragSlop(engine.drag_slop));
    }
    if engine.results_anchor.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyResultsAnchor);
    }

    if !PAGE_SIZE_OPTIONS.contains(&engine.default_page_size) {
        warnings.push_with_hint(
            format!(
                "default page size {} is not one of the offered sizes",
                engine.default_page_size
            ),
            format!("Use one of {PAGE_SIZE_OPTIONS:?}"),
        );
    }
    if engine.notice_duration_ms == 0 {
        warnings.push("notice_duration_ms is 0; notices will never be visible");
    }

    Ok(warnings)
}
