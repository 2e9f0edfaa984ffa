//! Animation and timer durations.
//!
//! DESIGN
//! ======
//! The defaults match the keyframe durations in the stylesheet. Hosts that
//! ship a customised stylesheet can load matching values from JSON; any
//! field left out keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODAL_EXIT_MS: u32 = 200;
pub const DEFAULT_PAGE_EXIT_MS: u32 = 300;
pub const DEFAULT_COLOR_CYCLE_MS: u32 = 3000;
pub const DEFAULT_SCROLLBAR_HIDE_MS: u32 = 1000;

/// Errors produced while loading [`Timings`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("timings parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A repeating period of zero would fire continuously.
    #[error("{field} must be greater than zero")]
    ZeroPeriod { field: &'static str },
}

/// Durations used by the overlay controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Modal exit animation; removal is deferred by this much.
    pub modal_exit_ms: u32,
    /// Page exit animation; removal is deferred by this much.
    pub page_exit_ms: u32,
    /// Period of the page border color cycle.
    pub color_cycle_ms: u32,
    /// Delay after the last scroll before the page scrollbar hides again.
    pub scrollbar_hide_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            modal_exit_ms: DEFAULT_MODAL_EXIT_MS,
            page_exit_ms: DEFAULT_PAGE_EXIT_MS,
            color_cycle_ms: DEFAULT_COLOR_CYCLE_MS,
            scrollbar_hide_ms: DEFAULT_SCROLLBAR_HIDE_MS,
        }
    }
}

impl Timings {
    /// Parse timings from a JSON object such as `{"page_exit_ms": 450}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::ZeroPeriod`] when `color_cycle_ms` is zero.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let timings: Self = serde_json::from_str(raw)?;
        if timings.color_cycle_ms == 0 {
            return Err(ConfigError::ZeroPeriod { field: "color_cycle_ms" });
        }
        Ok(timings)
    }

    /// Color cycle period; a zero period falls back to the default.
    #[must_use]
    pub fn color_cycle_period_ms(&self) -> u32 {
        if self.color_cycle_ms == 0 { DEFAULT_COLOR_CYCLE_MS } else { self.color_cycle_ms }
    }
}

/// Milliseconds as a CSS time value in seconds, e.g. `200` -> `0.2s`.
#[must_use]
pub fn css_seconds(ms: u32) -> String {
    let whole = ms / 1000;
    let frac = ms % 1000;
    if frac == 0 {
        return format!("{whole}s");
    }
    let frac = format!("{frac:03}");
    format!("{whole}.{}s", frac.trim_end_matches('0'))
}
