//! Browser host: gloo-timers, document `keydown` listeners and Leptos
//! mounting on `<body>`.
//!
//! Every failing `web_sys` call is logged at `warn` and otherwise ignored;
//! a missing element or a detached node is never an error for the caller.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::Closure;

use super::{Attachment, Host, Mount, ScopedHandle, Subscription, Timer};

/// [`Host`] backed by the real `window` and `document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl Host for BrowserHost {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timer {
        let timeout = Timeout::new(delay_ms, callback);
        ScopedHandle::new(move || drop(timeout))
    }

    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Timer {
        let interval = Interval::new(period_ms, callback);
        ScopedHandle::new(move || drop(interval))
    }

    fn on_key(&self, key: &'static str, mut callback: Box<dyn FnMut()>) -> Subscription {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::warn!("keydown listener for {key} skipped: no document");
            return ScopedHandle::noop();
        };
        let listener = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::wrap(Box::new(
            move |ev: web_sys::KeyboardEvent| {
                if ev.key() == key {
                    callback();
                }
            },
        ));
        if let Err(err) = document.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref()) {
            log::warn!("keydown listener for {key} failed: {err:?}");
            return ScopedHandle::noop();
        }
        ScopedHandle::new(move || {
            if let Err(err) =
                document.remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            {
                log::warn!("keydown listener for {key} not removed: {err:?}");
            }
            drop(listener);
        })
    }

    fn attach(&self, mount: Mount) -> Attachment {
        mount.render()
    }

    fn set_style(&self, element_id: &str, property: &str, value: &str) {
        let Some(element) = html_element(element_id) else {
            return;
        };
        if let Err(err) = element.style().set_property(property, value) {
            log::warn!("style {property} on #{element_id} failed: {err:?}");
        }
    }

    fn set_class(&self, element_id: &str, class: &str, enabled: bool) {
        let Some(element) = html_element(element_id) else {
            return;
        };
        if let Err(err) = element.class_list().toggle_with_force(class, enabled) {
            log::warn!("class {class} on #{element_id} failed: {err:?}");
        }
    }
}

/// Element with DOM id `id`, when present and an `HTMLElement`.
pub(crate) fn html_element(id: &str) -> Option<web_sys::HtmlElement> {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))?;
    match element.dyn_into::<web_sys::HtmlElement>() {
        Ok(element) => Some(element),
        Err(element) => {
            log::warn!("#{id} is not an html element: {}", element.tag_name());
            None
        }
    }
}

/// Mount a view as the last child of `<body>`; the handle unmounts it.
pub(crate) fn mount_to_body<F, V>(render: F) -> ScopedHandle
where
    F: FnOnce() -> V + 'static,
    V: IntoView + 'static,
{
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log::warn!("overlay not mounted: document has no body");
        return ScopedHandle::noop();
    };
    let handle = leptos::mount::mount_to(body, render);
    ScopedHandle::new(move || drop(handle))
}
