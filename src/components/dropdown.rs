//! Blocky `<select>` with an optional label.

#[cfg(test)]
#[path = "dropdown_test.rs"]
mod dropdown_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::handler::{Handler, run_optional};
use crate::theme::{Variant, class, class_list};

/// One `<option>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

#[derive(Clone, Debug, Default)]
pub struct DropdownOptions {
    pub options: Vec<DropdownOption>,
    pub label: Option<String>,
    /// Initially selected value; the first option when absent or unknown.
    pub value: Option<String>,
    pub variant: Variant,
    pub on_change: Option<Handler<String>>,
    pub disabled: bool,
    pub class_name: Option<String>,
}

impl DropdownOptions {
    pub fn new(options: Vec<DropdownOption>) -> Self {
        Self { options, ..Self::default() }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn on_change(mut self, f: impl Fn(String) + 'static) -> Self {
        self.on_change = Some(Handler::new(f));
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

    #[must_use]
    pub fn select_class(&self) -> String {
        class_list(
            &[class::DROPDOWN, class::GRADIENT, class::THREE_D, self.variant.as_str()],
            self.class_name.as_deref(),
        )
    }

    /// Index of the option rendered as selected.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        if self.options.is_empty() {
            return None;
        }
        let matched = self
            .value
            .as_deref()
            .and_then(|value| self.options.iter().position(|option| option.value == value));
        Some(matched.unwrap_or(0))
    }
}

#[component]
pub fn BlockyDropdown(options: DropdownOptions) -> impl IntoView {
    let select_class = options.select_class();
    let selected = options.selected_index();
    let on_change = options.on_change;
    let label = options.label.map(|label| view! { <label class=class::DROPDOWN_LABEL>{label}</label> });
    let choices = options
        .options
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let is_selected = selected == Some(index);
            view! {
                <option value=option.value selected=is_selected>
                    {option.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class=class::DROPDOWN_WRAPPER>
            {label}
            <select
                class=select_class
                disabled=options.disabled
                on:change=move |ev| run_optional(on_change.as_ref(), event_target_value(&ev))
            >
                {choices}
            </select>
        </div>
    }
}
