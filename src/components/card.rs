//! Blocky card: optional title over a content region.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

use crate::content::{Content, content_region};
use crate::theme::{Variant, class, class_list};

#[derive(Clone, Debug)]
pub struct CardOptions {
    pub content: Content,
    pub title: Option<String>,
    pub variant: Variant,
    pub class_name: Option<String>,
}

impl CardOptions {
    pub fn new(content: impl Into<Content>) -> Self {
        Self { content: content.into(), title: None, variant: Variant::Default, class_name: None }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// The default variant adds no class to the wrapper.
    #[must_use]
    pub fn wrapper_class(&self) -> String {
        let variant = match self.variant {
            Variant::Default => "",
            other => other.as_str(),
        };
        class_list(&[class::CARD_WRAPPER, class::GRADIENT, class::THREE_D, variant], None)
    }

    #[must_use]
    pub fn card_class(&self) -> String {
        class_list(&[class::CARD], self.class_name.as_deref())
    }
}

#[component]
pub fn BlockyCard(options: CardOptions) -> impl IntoView {
    let wrapper_class = options.wrapper_class();
    let card_class = options.card_class();
    let title = options.title.map(|title| view! { <h3 class=class::CARD_TITLE>{title}</h3> });

    view! {
        <div class=wrapper_class>
            <div class=card_class>
                {title}
                {content_region(class::CARD_CONTENT.to_owned(), options.content)}
            </div>
        </div>
    }
}
