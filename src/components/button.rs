//! Blocky button.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::prelude::*;

use crate::handler::{Handler, run_optional};
use crate::theme::{Variant, class, class_list};

/// Options for [`BlockyButton`]; also describes modal footer buttons.
#[derive(Clone, Debug, Default)]
pub struct ButtonOptions {
    pub text: String,
    pub variant: Variant,
    pub on_click: Option<Handler>,
    pub disabled: bool,
    pub class_name: Option<String>,
}

impl ButtonOptions {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Handler::action(f));
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Class attribute of the `<button>` element.
    #[must_use]
    pub fn button_class(&self) -> String {
        class_list(
            &[class::BUTTON, class::GRADIENT, class::THREE_D, self.variant.as_str()],
            self.class_name.as_deref(),
        )
    }

    /// Whether pressing this button inside a modal footer closes the modal.
    #[must_use]
    pub fn auto_closes(&self) -> bool {
        !self
            .class_name
            .as_deref()
            .is_some_and(|name| name.contains(class::NO_AUTO_CLOSE))
    }
}

/// Button inside a `blocky-btn-wrapper`.
#[component]
pub fn BlockyButton(options: ButtonOptions) -> impl IntoView {
    let button_class = options.button_class();
    let on_click = options.on_click;

    view! {
        <div class=class::BUTTON_WRAPPER>
            <button
                class=button_class
                disabled=options.disabled
                on:click=move |_| run_optional(on_click.as_ref(), ())
            >
                {options.text}
            </button>
        </div>
    }
}
