//! Info overlay: a lightweight popup with a color-themed header.
//!
//! Unlike modals and pages the info overlay has no controller. The caller
//! places the view wherever it likes; a backdrop click runs `on_close` and
//! removes the overlay element from its parent.

#[cfg(test)]
#[path = "info_test.rs"]
mod info_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::content::{Content, content_region};
use crate::handler::{Handler, run_optional};
use crate::theme::{TitleColor, class, class_list};

#[derive(Clone, Debug)]
pub struct InfoOptions {
    pub content: Content,
    pub title: Option<String>,
    pub title_color: Option<TitleColor>,
    pub on_close: Option<Handler>,
    pub class_name: Option<String>,
}

impl InfoOptions {
    pub fn new(content: impl Into<Content>) -> Self {
        Self { content: content.into(), title: None, title_color: None, on_close: None, class_name: None }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn title_color(mut self, color: TitleColor) -> Self {
        self.title_color = Some(color);
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

    #[must_use]
    pub fn wrapper_class(&self) -> String {
        let theme = self.title_color.map(TitleColor::theme_class);
        class_list(&[class::INFO_WRAPPER, class::GRADIENT, class::THREE_D], theme.as_deref())
    }

    #[must_use]
    pub fn content_class(&self) -> String {
        class_list(&[class::CONTENT], self.class_name.as_deref())
    }
}

#[component]
pub fn BlockyInfo(options: InfoOptions) -> impl IntoView {
    let wrapper_class = options.wrapper_class();
    let content_class = options.content_class();
    let on_close = options.on_close;
    let title_class = class_list(&[class::INFO_TITLE, class::TITLE_ENHANCED], None);
    let header = options.title.map(|title| {
        view! {
            <div class=class::HEADER_BORDERED>
                <h2 class=title_class>{title}</h2>
            </div>
        }
    });

    view! {
        <div
            class=class::INFO_OVERLAY
            on:click=move |ev: leptos::ev::MouseEvent| dismiss(on_close.as_ref(), || remove_target(&ev))
        >
            <div class=wrapper_class on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <div class=content_class>
                    {header}
                    {content_region(class::INFO_BODY.to_owned(), options.content)}
                </div>
            </div>
        </div>
    }
}

/// Backdrop click: run `on_close`, then detach the overlay.
fn dismiss(on_close: Option<&Handler>, detach: impl FnOnce()) {
    run_optional(on_close, ());
    detach();
}

/// Detach the element the listener is registered on.
#[cfg(feature = "hydrate")]
fn remove_target(ev: &leptos::ev::MouseEvent) {
    let Some(target) = ev.current_target() else {
        return;
    };
    match target.dyn_into::<web_sys::Element>() {
        Ok(element) => element.remove(),
        Err(_) => log::warn!("info overlay click target is not an element"),
    }
}

#[cfg(not(feature = "hydrate"))]
fn remove_target(_ev: &leptos::ev::MouseEvent) {}
