//! Display environment the overlay controllers run against.
//!
//! ARCHITECTURE
//! ============
//! Controllers never reach for `window` or `document` directly. Everything
//! that depends on the outside world goes through [`Host`]: one-shot and
//! repeating timers, key subscriptions, attaching a root to the page, and
//! style/class writes on elements by id.
//!
//! - [`browser::BrowserHost`] (`hydrate` only) maps these onto gloo-timers,
//!   `keydown` listeners and Leptos mounting.
//! - [`headless::HeadlessHost`] keeps a manual clock and an in-memory record
//!   of what is attached, which drives the controller tests.
//!
//! Every registration returns a [`ScopedHandle`]; dropping or releasing it
//! cancels the timer, removes the listener or detaches the root.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod headless;

use std::fmt;
use std::rc::Rc;

use crate::state::overlay::OverlayId;

/// Scoped registration that runs its release action exactly once.
#[must_use = "dropping the handle releases the registration immediately"]
pub struct ScopedHandle {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScopedHandle {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self { release: Some(Box::new(release)) }
    }

    /// Handle with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release now instead of on drop.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScopedHandle {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for ScopedHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedHandle").field("armed", &self.release.is_some()).finish()
    }
}

/// Pending or running timer; cancelled on drop.
pub type Timer = ScopedHandle;
/// Event listener registration; removed on drop.
pub type Subscription = ScopedHandle;
/// Root attached to the display; detached on drop.
pub type Attachment = ScopedHandle;

/// Deferred attach of one overlay root.
///
/// `render` performs the actual mount and returns the handle that unmounts
/// it. Hosts without a real display drop `render` unrun.
pub struct Mount {
    pub id: OverlayId,
    render: Box<dyn FnOnce() -> Attachment>,
}

impl Mount {
    pub fn new(id: OverlayId, render: impl FnOnce() -> Attachment + 'static) -> Self {
        Self { id, render: Box::new(render) }
    }

    /// Run the mount.
    pub fn render(self) -> Attachment {
        (self.render)()
    }
}

impl fmt::Debug for Mount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount").field("id", &self.id).finish_non_exhaustive()
    }
}

/// Display environment used by the overlay controllers.
///
/// Single-threaded: callbacks run on the UI thread, never re-entrantly from
/// within the registering call.
pub trait Host {
    /// Run `callback` once after `delay_ms`.
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timer;

    /// Run `callback` every `period_ms` until the handle is released.
    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Timer;

    /// Run `callback` on every `keydown` whose `key` equals `key`.
    fn on_key(&self, key: &'static str, callback: Box<dyn FnMut()>) -> Subscription;

    /// Attach an overlay root to the document body.
    fn attach(&self, mount: Mount) -> Attachment;

    /// Set a style property (custom properties included) on the element
    /// with DOM id `element_id`. Missing elements are ignored.
    fn set_style(&self, element_id: &str, property: &str, value: &str);

    /// Add or remove a class on the element with DOM id `element_id`.
    /// Missing elements are ignored.
    fn set_class(&self, element_id: &str, class: &str, enabled: bool);
}

/// Host for the current build: the browser under `hydrate`, otherwise an
/// inert headless host whose clock never advances.
#[must_use]
pub fn default_host() -> Rc<dyn Host> {
    #[cfg(feature = "hydrate")]
    {
        Rc::new(browser::BrowserHost)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Rc::new(headless::HeadlessHost::new())
    }
}
