//! Blocky tag: compact element with an optional header.

#[cfg(test)]
#[path = "tag_test.rs"]
mod tag_test;

use leptos::prelude::*;

use crate::content::{Content, content_region};
use crate::theme::{Variant, class, class_list};

#[derive(Clone, Debug)]
pub struct TagOptions {
    pub content: Content,
    pub title: Option<String>,
    pub variant: Variant,
    pub class_name: Option<String>,
}

impl TagOptions {
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

    #[must_use]
    pub fn wrapper_class(&self) -> String {
        class_list(&[class::TAG_WRAPPER, class::GRADIENT, class::THREE_D, self.variant.as_str()], None)
    }

    #[must_use]
    pub fn content_class(&self) -> String {
        class_list(&[class::TAG_CONTENT], self.class_name.as_deref())
    }
}

#[component]
pub fn BlockyTag(options: TagOptions) -> impl IntoView {
    let wrapper_class = options.wrapper_class();
    let content_class = options.content_class();
    let header = options.title.map(|title| {
        view! {
            <div class=class::TAG_HEADER>
                <h3 class=class::TAG_TITLE>{title}</h3>
            </div>
        }
    });

    view! {
        <div class=wrapper_class>
            <div class=content_class>
                {header}
                {content_region(class::TAG_BODY.to_owned(), options.content)}
            </div>
        </div>
    }
}
