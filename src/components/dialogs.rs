//! Canned modal layouts: confirmation, notification and error.

#[cfg(test)]
#[path = "dialogs_test.rs"]
mod dialogs_test;

use super::button::ButtonOptions;
use super::modal::ModalOptions;
use crate::content::Content;
use crate::handler::Handler;
use crate::theme::Variant;

/// Cancel (secondary) then Confirm (danger). Either button closes the modal
/// after its handler runs.
pub fn confirmation(
    title: impl Into<String>,
    message: impl Into<String>,
    on_confirm: Handler,
    on_cancel: Option<Handler>,
) -> ModalOptions {
    let cancel = ButtonOptions { on_click: on_cancel, ..ButtonOptions::new("Cancel").variant(Variant::Secondary) };
    let confirm = ButtonOptions { on_click: Some(on_confirm), ..ButtonOptions::new("Confirm").variant(Variant::Danger) };
    ModalOptions::new(title, Content::markup(message)).button(cancel).button(confirm)
}

/// Single OK button. `on_close` runs once whichever way the modal closes.
pub fn notification(title: impl Into<String>, message: impl Into<String>, on_close: Option<Handler>) -> ModalOptions {
    ModalOptions { on_close, ..ModalOptions::new(title, Content::markup(message)).button(ButtonOptions::new("OK")) }
}

/// Single danger OK button. `on_close` runs once whichever way the modal
/// closes.
pub fn error(title: impl Into<String>, message: impl Into<String>, on_close: Option<Handler>) -> ModalOptions {
    let ok = ButtonOptions::new("OK").variant(Variant::Danger);
    ModalOptions { on_close, ..ModalOptions::new(title, Content::markup(message)).button(ok) }
}
