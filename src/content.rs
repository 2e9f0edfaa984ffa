//! Body content accepted by every factory.
//!
//! Content is either preformatted markup (inserted as inner HTML) or a view
//! builder. The enum makes the two mutually exclusive, so a region never
//! receives both.

use std::fmt;

use leptos::either::Either;
use leptos::prelude::*;

#[derive(Clone)]
pub enum Content {
    /// Raw HTML inserted with `inner_html`.
    Markup(String),
    /// Constructed view, built when the region renders.
    View(ViewFn),
}

impl Content {
    pub fn markup(html: impl Into<String>) -> Self {
        Self::Markup(html.into())
    }

    pub fn view<F, V>(build: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
        V: IntoView + 'static,
    {
        Self::View(ViewFn::from(build))
    }

    /// Markup string, when this is markup content.
    #[must_use]
    pub fn as_markup(&self) -> Option<&str> {
        match self {
            Self::Markup(html) => Some(html),
            Self::View(_) => None,
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup(html) => f.debug_tuple("Markup").field(html).finish(),
            Self::View(_) => f.write_str("View(..)"),
        }
    }
}

impl From<&str> for Content {
    fn from(html: &str) -> Self {
        Self::Markup(html.to_owned())
    }
}

impl From<String> for Content {
    fn from(html: String) -> Self {
        Self::Markup(html)
    }
}

/// Render `content` inside a `<div>` with the given class.
pub(crate) fn content_region(class: String, content: Content) -> impl IntoView {
    match content {
        Content::Markup(html) => Either::Left(view! { <div class=class inner_html=html></div> }),
        Content::View(build) => Either::Right(view! { <div class=class>{build.run()}</div> }),
    }
}
