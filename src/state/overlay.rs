//! Overlay lifecycle record shared by the modal and page controllers.
//!
//! DESIGN
//! ======
//! `Unmounted -> Shown -> Closing -> Closed`. Every flag the controller needs
//! to answer "may this happen again?" lives here explicitly: the open phase,
//! whether a color timer is running, whether removal was scheduled and
//! whether `on_close` already fired. Double-close and post-close guards are
//! checks on this record, nothing more.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use std::fmt;

use uuid::Uuid;

/// Errors returned by `show()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OverlayError {
    /// The overlay is already attached.
    #[error("overlay is already shown")]
    AlreadyShown,

    /// The overlay was closed; instances are single-use.
    #[error("overlay has been closed")]
    Closed,
}

/// Lifecycle phase of one overlay instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    /// Constructed, not yet attached.
    #[default]
    Unmounted,
    /// Attached and accepting dismissal triggers.
    Shown,
    /// Exit animation running; removal is pending.
    Closing,
    /// Detached. Terminal.
    Closed,
}

/// User or programmatic interaction that may dismiss an overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayTrigger {
    /// Click on the dimmed backdrop outside the content panel.
    Backdrop,
    /// Click inside the content panel. Never dismisses.
    Content,
    /// Click on the dedicated close button.
    CloseButton,
    /// Escape key.
    Escape,
}

impl OverlayTrigger {
    /// Whether this trigger dismisses an overlay with the given setting for
    /// outside interaction (backdrop click and Escape).
    #[must_use]
    pub fn dismisses(self, close_on_outside: bool) -> bool {
        match self {
            Self::Content => false,
            Self::CloseButton => true,
            Self::Backdrop | Self::Escape => close_on_outside,
        }
    }
}

/// Identity of one overlay instance, used for DOM ids and log correlation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(Uuid);

impl OverlayId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// DOM id of the overlay root element.
    #[must_use]
    pub fn root_id(&self) -> String {
        format!("blocky-overlay-{}", self.0)
    }

    /// DOM id of a named element inside the overlay, e.g. `content`.
    #[must_use]
    pub fn part_id(&self, part: &str) -> String {
        format!("{}-{part}", self.root_id())
    }
}

impl Default for OverlayId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Explicit lifecycle record for one overlay instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub phase: OverlayPhase,
    /// A repeating timer owned by this overlay is running.
    pub has_timer: bool,
    /// An Escape subscription is registered.
    pub escape_bound: bool,
    /// Deferred removal has been scheduled.
    pub removal_scheduled: bool,
    /// The `on_close` callback has been invoked.
    pub on_close_fired: bool,
}

impl OverlayState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == OverlayPhase::Shown
    }

    /// `Unmounted -> Shown`.
    ///
    /// # Errors
    ///
    /// [`OverlayError::AlreadyShown`] from `Shown`, [`OverlayError::Closed`]
    /// from `Closing` or `Closed`.
    pub fn begin_show(&mut self) -> Result<(), OverlayError> {
        match self.phase {
            OverlayPhase::Unmounted => {
                self.phase = OverlayPhase::Shown;
                Ok(())
            }
            OverlayPhase::Shown => Err(OverlayError::AlreadyShown),
            OverlayPhase::Closing | OverlayPhase::Closed => Err(OverlayError::Closed),
        }
    }

    /// `Shown -> Closing`. Returns `false` (and changes nothing) from any
    /// other phase, so removal and `on_close` happen at most once.
    pub fn begin_close(&mut self) -> bool {
        if self.phase != OverlayPhase::Shown {
            return false;
        }
        self.phase = OverlayPhase::Closing;
        self.has_timer = false;
        self.escape_bound = false;
        self.removal_scheduled = true;
        self.on_close_fired = true;
        true
    }

    /// `Closing -> Closed`, run by the deferred removal.
    pub fn finish_removal(&mut self) -> bool {
        if self.phase != OverlayPhase::Closing {
            return false;
        }
        self.phase = OverlayPhase::Closed;
        true
    }
}
