//! Shared lifecycle controller behind modals and pages.
//!
//! DESIGN
//! ======
//! One `Rc<RefCell<OverlayCore>>` per instance holds the lifecycle record and
//! every handle the instance owns: the attachment, the Escape subscription,
//! repeating timers and the pending removal. Handles are taken out of the
//! core and released after the borrow ends, and user callbacks run last, so
//! re-entrant calls from inside a callback (a second `close()`, a `show()`
//! on another overlay) never hit a live borrow.
//!
//! Close order:
//! 1. `Shown -> Closing` on the record; any other phase is a no-op.
//! 2. Release the Escape subscription and every cleanup handle (color cycle
//!    interval, scrollbar timer).
//! 3. Write the exit animation styles.
//! 4. Schedule removal once, after the exit duration.
//! 5. Invoke `on_close`.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::handler::{Handler, run_optional};
use crate::host::{Attachment, Host, Mount, ScopedHandle, Subscription, Timer};
use crate::state::overlay::{OverlayError, OverlayId, OverlayPhase, OverlayState, OverlayTrigger};

/// Exit animation applied on close.
#[derive(Clone, Debug)]
pub(crate) struct ExitAnimation {
    /// Removal is deferred by this many milliseconds.
    pub duration_ms: u32,
    /// `(element id, animation value)` pairs written to `animation`.
    pub styles: Vec<(String, String)>,
}

/// Static configuration of one overlay instance.
pub(crate) struct OverlaySettings {
    pub kind: &'static str,
    pub close_on_outside: bool,
    pub exit: ExitAnimation,
    pub on_close: Option<Handler>,
}

struct OverlayCore {
    id: OverlayId,
    kind: &'static str,
    state: OverlayState,
    close_on_outside: bool,
    exit: ExitAnimation,
    on_close: Option<Handler>,
    attachment: Option<Attachment>,
    escape: Option<Subscription>,
    cleanups: Vec<ScopedHandle>,
    removal: Option<Timer>,
}

/// Handle to one overlay instance; clones share the instance.
#[derive(Clone)]
pub(crate) struct OverlayController {
    core: Rc<RefCell<OverlayCore>>,
    host: Rc<dyn Host>,
}

/// Non-owning handle used by timer and listener callbacks.
#[derive(Clone)]
pub(crate) struct WeakOverlay {
    core: Weak<RefCell<OverlayCore>>,
    host: Weak<dyn Host>,
}

impl WeakOverlay {
    pub fn upgrade(&self) -> Option<OverlayController> {
        Some(OverlayController { core: self.core.upgrade()?, host: self.host.upgrade()? })
    }
}

impl OverlayController {
    pub fn new(id: OverlayId, settings: OverlaySettings, host: Rc<dyn Host>) -> Self {
        let core = OverlayCore {
            id,
            kind: settings.kind,
            state: OverlayState::default(),
            close_on_outside: settings.close_on_outside,
            exit: settings.exit,
            on_close: settings.on_close,
            attachment: None,
            escape: None,
            cleanups: Vec::new(),
            removal: None,
        };
        Self { core: Rc::new(RefCell::new(core)), host }
    }

    pub fn id(&self) -> OverlayId {
        self.core.borrow().id
    }

    pub fn phase(&self) -> OverlayPhase {
        self.core.borrow().state.phase
    }

    pub fn state(&self) -> OverlayState {
        self.core.borrow().state.clone()
    }

    pub fn is_open(&self) -> bool {
        self.core.borrow().state.is_open()
    }

    pub fn host(&self) -> &Rc<dyn Host> {
        &self.host
    }

    pub fn downgrade(&self) -> WeakOverlay {
        WeakOverlay { core: Rc::downgrade(&self.core), host: Rc::downgrade(&self.host) }
    }

    /// Attach the overlay and, when outside interaction dismisses it, bind
    /// Escape.
    ///
    /// # Errors
    ///
    /// Rejected with [`OverlayError`] unless the overlay is `Unmounted`; the
    /// mount is dropped without rendering.
    pub fn show(&self, mount: Mount) -> Result<(), OverlayError> {
        let (id, kind, close_on_outside) = {
            let mut core = self.core.borrow_mut();
            if let Err(err) = core.state.begin_show() {
                log::warn!("{} {}: show rejected: {err}", core.kind, core.id);
                return Err(err);
            }
            (core.id, core.kind, core.close_on_outside)
        };

        let attachment = self.host.attach(mount);
        let escape = close_on_outside.then(|| {
            // Keeps the instance alive until close releases the subscription.
            let controller = self.clone();
            self.host.on_key(
                "Escape",
                Box::new(move || {
                    controller.dispatch(OverlayTrigger::Escape);
                }),
            )
        });

        let mut core = self.core.borrow_mut();
        core.attachment = Some(attachment);
        core.state.escape_bound = escape.is_some();
        core.escape = escape;
        log::debug!("{kind} {id}: shown");
        Ok(())
    }

    /// Begin closing. Returns `false` when the overlay is not shown.
    pub fn close(&self) -> bool {
        let (escape, cleanups, exit, on_close) = {
            let mut core = self.core.borrow_mut();
            if !core.state.begin_close() {
                log::debug!("{} {}: close ignored in {:?}", core.kind, core.id, core.state.phase);
                return false;
            }
            log::debug!("{} {}: closing", core.kind, core.id);
            (
                core.escape.take(),
                std::mem::take(&mut core.cleanups),
                core.exit.clone(),
                core.on_close.clone(),
            )
        };
        drop(escape);
        drop(cleanups);

        for (element_id, animation) in &exit.styles {
            self.host.set_style(element_id, "animation", animation);
        }

        let weak = self.downgrade();
        let removal = self.host.set_timeout(
            exit.duration_ms,
            Box::new(move || {
                if let Some(controller) = weak.upgrade() {
                    controller.finish_removal();
                }
            }),
        );
        self.core.borrow_mut().removal = Some(removal);

        run_optional(on_close.as_ref(), ());
        true
    }

    /// Route a user interaction. Returns whether it started a close.
    pub fn dispatch(&self, trigger: OverlayTrigger) -> bool {
        let close_on_outside = self.core.borrow().close_on_outside;
        if !trigger.dismisses(close_on_outside) {
            return false;
        }
        self.close()
    }

    /// Hand a timer or listener to the instance; it is released on close.
    /// Handles adopted after close are released immediately.
    pub fn adopt(&self, handle: ScopedHandle) {
        let rejected = {
            let mut core = self.core.borrow_mut();
            if core.state.is_open() {
                core.cleanups.push(handle);
                None
            } else {
                Some(handle)
            }
        };
        drop(rejected);
    }

    /// Adopt a repeating timer and flag it on the record.
    pub fn adopt_timer(&self, timer: Timer) {
        if self.is_open() {
            self.core.borrow_mut().state.has_timer = true;
        }
        self.adopt(timer);
    }

    fn finish_removal(&self) {
        let (attachment, removal) = {
            let mut core = self.core.borrow_mut();
            if !core.state.finish_removal() {
                return;
            }
            log::debug!("{} {}: removed", core.kind, core.id);
            (core.attachment.take(), core.removal.take())
        };
        drop(attachment);
        drop(removal);
    }
}

/// Attach handle for `render`: mounted on `<body>` in the browser, inert
/// elsewhere.
pub(crate) fn mount_view<F, V>(render: F) -> Attachment
where
    F: FnOnce() -> V + 'static,
    V: leptos::prelude::IntoView + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        crate::host::browser::mount_to_body(render)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(render);
        ScopedHandle::noop()
    }
}

/// Root element of a mounted overlay.
#[cfg(feature = "hydrate")]
pub(crate) fn root_element(id: OverlayId) -> Option<web_sys::HtmlElement> {
    crate::host::browser::html_element(&id.root_id())
}
