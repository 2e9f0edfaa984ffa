//! Modal dialog: titled panel over a dimmed backdrop with footer buttons.
//!
//! DESIGN
//! ======
//! [`ModalController`] owns one overlay instance. `show()` mounts the view
//! on `<body>`, `close()` fades it out and removes it once the exit
//! animation finishes. Footer buttons run their own handler first and then
//! close the modal, unless their class carries `no-auto-close`.
//!
//! With `close_on_overlay_click` disabled neither the backdrop nor Escape
//! dismisses the modal; the close button and footer buttons still do.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use std::rc::Rc;

use leptos::prelude::*;

use super::button::{BlockyButton, ButtonOptions};
use super::overlay::{ExitAnimation, OverlayController, OverlaySettings, mount_view};
use crate::config::{Timings, css_seconds};
use crate::content::{Content, content_region};
use crate::handler::{Handler, run_optional};
use crate::host::{Host, Mount, default_host};
use crate::state::overlay::{OverlayError, OverlayId, OverlayPhase, OverlayState, OverlayTrigger};
use crate::theme::{Variant, class, class_list};

#[derive(Clone, Debug)]
pub struct ModalOptions {
    pub title: String,
    pub content: Content,
    /// Footer buttons in order; no footer is rendered when empty.
    pub buttons: Vec<ButtonOptions>,
    pub show_close_button: bool,
    /// Backdrop click and Escape dismiss the modal.
    pub close_on_overlay_click: bool,
    pub on_close: Option<Handler>,
    pub class_name: Option<String>,
}

impl ModalOptions {
    pub fn new(title: impl Into<String>, content: impl Into<Content>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            buttons: Vec::new(),
            show_close_button: true,
            close_on_overlay_click: true,
            on_close: None,
            class_name: None,
        }
    }

    #[must_use]
    pub fn button(mut self, button: ButtonOptions) -> Self {
        self.buttons.push(button);
        self
    }

    #[must_use]
    pub fn buttons(mut self, buttons: Vec<ButtonOptions>) -> Self {
        self.buttons = buttons;
        self
    }

    #[must_use]
    pub fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    #[must_use]
    pub fn close_on_overlay_click(mut self, enabled: bool) -> Self {
        self.close_on_overlay_click = enabled;
        self
    }

    #[must_use]
    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Handler::action(f));
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Class of the content panel inside the wrapper.
    #[must_use]
    pub fn content_class(&self) -> String {
        class_list(&[class::CONTENT], self.class_name.as_deref())
    }

    /// Structure the view renders for these options.
    #[must_use]
    pub fn layout(&self) -> ModalLayout {
        ModalLayout {
            title: self.title.clone(),
            close_button: self.show_close_button,
            footer: self
                .buttons
                .iter()
                .map(|button| FooterButton {
                    text: button.text.clone(),
                    variant: button.variant,
                    auto_close: button.auto_closes(),
                    disabled: button.disabled,
                })
                .collect(),
        }
    }
}

/// Rendered structure of a modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalLayout {
    pub title: String,
    pub close_button: bool,
    pub footer: Vec<FooterButton>,
}

impl ModalLayout {
    #[must_use]
    pub fn has_footer(&self) -> bool {
        !self.footer.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterButton {
    pub text: String,
    pub variant: Variant,
    pub auto_close: bool,
    pub disabled: bool,
}

/// Handle to one modal instance. Clones share the instance.
#[derive(Clone)]
pub struct ModalController {
    overlay: OverlayController,
    options: Rc<ModalOptions>,
}

impl ModalController {
    /// Modal on the default host with default timings.
    #[must_use]
    pub fn create(options: ModalOptions) -> Self {
        Self::with_host(options, default_host(), Timings::default())
    }

    #[must_use]
    pub fn with_host(options: ModalOptions, host: Rc<dyn Host>, timings: Timings) -> Self {
        let id = OverlayId::new();
        let settings = OverlaySettings {
            kind: "modal",
            close_on_outside: options.close_on_overlay_click,
            exit: ExitAnimation {
                duration_ms: timings.modal_exit_ms,
                styles: vec![(
                    id.root_id(),
                    format!("modalFadeIn {} ease-out reverse", css_seconds(timings.modal_exit_ms)),
                )],
            },
            on_close: options.on_close.clone(),
        };
        Self { overlay: OverlayController::new(id, settings, host), options: Rc::new(options) }
    }

    #[must_use]
    pub fn id(&self) -> OverlayId {
        self.overlay.id()
    }

    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.overlay.phase()
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.overlay.state()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    #[must_use]
    pub fn options(&self) -> &ModalOptions {
        &self.options
    }

    #[must_use]
    pub fn layout(&self) -> ModalLayout {
        self.options.layout()
    }

    /// Attach the modal to `<body>`.
    ///
    /// # Errors
    ///
    /// [`OverlayError::AlreadyShown`] when already shown,
    /// [`OverlayError::Closed`] once closed; instances are single-use.
    pub fn show(&self) -> Result<(), OverlayError> {
        let controller = self.clone();
        let mount = Mount::new(self.id(), move || mount_view(move || controller.view()));
        self.overlay.show(mount)
    }

    /// Start the exit animation and run `on_close`. Returns `false` when
    /// the modal was not open.
    pub fn close(&self) -> bool {
        self.overlay.close()
    }

    /// Route a backdrop, content, close-button or Escape interaction.
    pub fn dispatch(&self, trigger: OverlayTrigger) -> bool {
        self.overlay.dispatch(trigger)
    }

    /// Press the footer button at `index`: run its handler, then close
    /// unless it opts out. Ignored when the modal is not open, the index is
    /// out of range or the button is disabled.
    pub fn press_button(&self, index: usize) -> bool {
        let Some(button) = self.options.buttons.get(index) else {
            log::warn!("modal {}: no footer button {index}", self.id());
            return false;
        };
        if button.disabled || !self.is_open() {
            return false;
        }
        run_optional(button.on_click.as_ref(), ());
        if button.auto_closes() {
            self.close();
        }
        true
    }

    /// Root element once mounted.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn element(&self) -> Option<web_sys::HtmlElement> {
        super::overlay::root_element(self.id())
    }

    /// Overlay view for this instance.
    pub fn view(&self) -> impl IntoView + use<> {
        let id = self.id();
        let options = &self.options;
        let content_class = options.content_class();
        let wrapper_class = class_list(&[class::MODAL_WRAPPER, class::GRADIENT, class::THREE_D], None);
        let backdrop = self.clone();
        let close_button = options.show_close_button.then(|| {
            let controller = self.clone();
            view! {
                <button
                    class=class::CLOSE_BUTTON
                    aria-label="Close"
                    on:click=move |_| {
                        controller.dispatch(OverlayTrigger::CloseButton);
                    }
                ></button>
            }
        });
        let footer = (!options.buttons.is_empty()).then(|| {
            let buttons = options
                .buttons
                .iter()
                .enumerate()
                .map(|(index, button)| {
                    let controller = self.clone();
                    let button = ButtonOptions {
                        on_click: Some(Handler::action(move || {
                            controller.press_button(index);
                        })),
                        ..button.clone()
                    };
                    view! { <BlockyButton options=button /> }
                })
                .collect_view();
            view! { <div class=class::MODAL_FOOTER>{buttons}</div> }
        });

        view! {
            <div
                id=id.root_id()
                class=class::MODAL_OVERLAY
                on:click=move |_| {
                    backdrop.dispatch(OverlayTrigger::Backdrop);
                }
            >
                <div class=wrapper_class on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                    {close_button}
                    <div class=content_class>
                        <div class=class::HEADER_BORDERED>
                            <h2 class=class::TITLE_ENHANCED>{options.title.clone()}</h2>
                        </div>
                        {content_region(class::MODAL_BODY.to_owned(), options.content.clone())}
                        {footer}
                    </div>
                </div>
            </div>
        }
    }
}
