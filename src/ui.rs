//! Factory facade binding a host and timings.
//!
//! [`BlockyUi`] creates modal and page controllers that share one
//! [`Host`] and one set of [`Timings`], and shows the canned dialogs. The
//! free functions use [`BlockyUi::default`], i.e. the browser under
//! `hydrate` and default durations.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::fmt;
use std::rc::Rc;

use crate::components::dialogs;
use crate::components::modal::{ModalController, ModalOptions};
use crate::components::page::{PageController, PageOptions};
use crate::config::Timings;
use crate::handler::Handler;
use crate::host::{Host, default_host};

#[derive(Clone)]
pub struct BlockyUi {
    host: Rc<dyn Host>,
    timings: Timings,
}

impl Default for BlockyUi {
    fn default() -> Self {
        Self::new(default_host(), Timings::default())
    }
}

impl fmt::Debug for BlockyUi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockyUi").field("timings", &self.timings).finish_non_exhaustive()
    }
}

impl BlockyUi {
    pub fn new(host: Rc<dyn Host>, timings: Timings) -> Self {
        Self { host, timings }
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    #[must_use]
    pub fn create_modal(&self, options: ModalOptions) -> ModalController {
        ModalController::with_host(options, Rc::clone(&self.host), self.timings)
    }

    #[must_use]
    pub fn create_page(&self, options: PageOptions) -> PageController {
        PageController::with_host(options, Rc::clone(&self.host), self.timings)
    }

    /// Show a Cancel/Confirm modal. Each button runs its handler once and
    /// closes the modal.
    pub fn show_confirmation(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_confirm: impl Fn() + 'static,
        on_cancel: Option<Handler>,
    ) -> ModalController {
        let options = dialogs::confirmation(title, message, Handler::action(on_confirm), on_cancel);
        self.show_modal(options)
    }

    /// Show a modal with a single OK button.
    pub fn show_notification(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_close: Option<Handler>,
    ) -> ModalController {
        self.show_modal(dialogs::notification(title, message, on_close))
    }

    /// Show a modal with a single danger OK button.
    pub fn show_error(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        on_close: Option<Handler>,
    ) -> ModalController {
        self.show_modal(dialogs::error(title, message, on_close))
    }

    fn show_modal(&self, options: ModalOptions) -> ModalController {
        let modal = self.create_modal(options);
        // A fresh instance is always Unmounted.
        if let Err(err) = modal.show() {
            log::warn!("modal {}: dialog not shown: {err}", modal.id());
        }
        modal
    }
}

/// [`BlockyUi::show_confirmation`] on the default host.
pub fn show_confirmation(
    title: impl Into<String>,
    message: impl Into<String>,
    on_confirm: impl Fn() + 'static,
    on_cancel: Option<Handler>,
) -> ModalController {
    BlockyUi::default().show_confirmation(title, message, on_confirm, on_cancel)
}

/// [`BlockyUi::show_notification`] on the default host.
pub fn show_notification(
    title: impl Into<String>,
    message: impl Into<String>,
    on_close: Option<Handler>,
) -> ModalController {
    BlockyUi::default().show_notification(title, message, on_close)
}

/// [`BlockyUi::show_error`] on the default host.
pub fn show_error(title: impl Into<String>, message: impl Into<String>, on_close: Option<Handler>) -> ModalController {
    BlockyUi::default().show_error(title, message, on_close)
}
