//! Deterministic host with a manual clock.
//!
//! DESIGN
//! ======
//! Time only moves when [`HeadlessHost::advance`] is called. Due timers fire
//! in `(due, registration)` order, one at a time, with the host borrow
//! released so callbacks may register or cancel timers and listeners
//! freely. Attach/detach, style writes and class toggles are recorded for
//! inspection; no view is ever rendered.

#[cfg(test)]
#[path = "headless_test.rs"]
mod headless_test;

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::rc::{Rc, Weak};

use super::{Attachment, Host, Mount, ScopedHandle, Subscription, Timer};
use crate::state::overlay::OverlayId;

type Repeating = Rc<RefCell<Box<dyn FnMut()>>>;

enum TaskCallback {
    Once(Box<dyn FnOnce()>),
    Repeat(Repeating),
}

struct Task {
    due_ms: u64,
    period_ms: Option<u64>,
    callback: TaskCallback,
}

struct KeyListener {
    key: &'static str,
    callback: Repeating,
}

#[derive(Default)]
struct HeadlessInner {
    now_ms: u64,
    next_id: u64,
    tasks: BTreeMap<u64, Task>,
    listeners: BTreeMap<u64, KeyListener>,
    attached: Vec<OverlayId>,
    styles: HashMap<(String, String), String>,
    style_writes: usize,
    classes: HashMap<String, BTreeSet<String>>,
}

impl HeadlessInner {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn next_due(&self, until_ms: u64) -> Option<u64> {
        self.tasks
            .iter()
            .filter(|(_, task)| task.due_ms <= until_ms)
            .min_by_key(|(id, task)| (task.due_ms, **id))
            .map(|(id, _)| *id)
    }
}

/// In-memory [`Host`] driven by a manual clock.
#[derive(Clone, Default)]
pub struct HeadlessHost {
    inner: Rc<RefCell<HeadlessInner>>,
}

enum Due {
    Once(Box<dyn FnOnce()>),
    Repeat(Repeating),
}

impl HeadlessHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the manual clock.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Move the clock forward, firing every timer that falls due on the way.
    pub fn advance(&self, ms: u64) {
        let until_ms = self.inner.borrow().now_ms.saturating_add(ms);
        loop {
            let due = {
                let mut inner = self.inner.borrow_mut();
                let Some(id) = inner.next_due(until_ms) else {
                    break;
                };
                let Some(mut task) = inner.tasks.remove(&id) else {
                    break;
                };
                inner.now_ms = task.due_ms;
                match task.callback {
                    TaskCallback::Once(callback) => Due::Once(callback),
                    TaskCallback::Repeat(callback) => {
                        let period = task.period_ms.unwrap_or(1).max(1);
                        task.due_ms += period;
                        let running = Rc::clone(&callback);
                        task.callback = TaskCallback::Repeat(callback);
                        inner.tasks.insert(id, task);
                        Due::Repeat(running)
                    }
                }
            };
            match due {
                Due::Once(callback) => callback(),
                Due::Repeat(callback) => {
                    let mut callback = callback.borrow_mut();
                    (*callback)();
                }
            }
        }
        self.inner.borrow_mut().now_ms = until_ms;
    }

    /// Dispatch a `keydown` with the given key to every matching listener.
    pub fn press_key(&self, key: &str) {
        let matching = self
            .inner
            .borrow()
            .listeners
            .iter()
            .filter(|(_, listener)| listener.key == key)
            .map(|(id, listener)| (*id, Rc::clone(&listener.callback)))
            .collect::<Vec<_>>();
        for (id, callback) in matching {
            if !self.inner.borrow().listeners.contains_key(&id) {
                continue;
            }
            let mut callback = callback.borrow_mut();
            (*callback)();
        }
    }

    /// Timers that are scheduled and not yet cancelled or fired.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Registered listeners for `key`.
    #[must_use]
    pub fn key_listeners(&self, key: &str) -> usize {
        self.inner
            .borrow()
            .listeners
            .values()
            .filter(|listener| listener.key == key)
            .count()
    }

    /// How many times `id` is currently attached (0 or 1 when used correctly).
    #[must_use]
    pub fn attach_count(&self, id: OverlayId) -> usize {
        self.inner.borrow().attached.iter().filter(|attached| **attached == id).count()
    }

    #[must_use]
    pub fn is_attached(&self, id: OverlayId) -> bool {
        self.attach_count(id) > 0
    }

    /// Total attached roots.
    #[must_use]
    pub fn attached_len(&self) -> usize {
        self.inner.borrow().attached.len()
    }

    /// Last value written for `property` on `element_id`.
    #[must_use]
    pub fn style(&self, element_id: &str, property: &str) -> Option<String> {
        self.inner
            .borrow()
            .styles
            .get(&(element_id.to_owned(), property.to_owned()))
            .cloned()
    }

    /// Number of style writes across all elements.
    #[must_use]
    pub fn style_writes(&self) -> usize {
        self.inner.borrow().style_writes
    }

    #[must_use]
    pub fn has_class(&self, element_id: &str, class: &str) -> bool {
        self.inner
            .borrow()
            .classes
            .get(element_id)
            .is_some_and(|classes| classes.contains(class))
    }

    fn cancel_task(inner: &Weak<RefCell<HeadlessInner>>, id: u64) -> ScopedHandle {
        let inner = Weak::clone(inner);
        ScopedHandle::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().tasks.remove(&id);
            }
        })
    }
}

impl Host for HeadlessHost {
    fn set_timeout(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timer {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            let due_ms = inner.now_ms + u64::from(delay_ms);
            inner.tasks.insert(id, Task { due_ms, period_ms: None, callback: TaskCallback::Once(callback) });
            id
        };
        Self::cancel_task(&Rc::downgrade(&self.inner), id)
    }

    fn set_interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Timer {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            let period = u64::from(period_ms).max(1);
            let due_ms = inner.now_ms + period;
            inner.tasks.insert(
                id,
                Task {
                    due_ms,
                    period_ms: Some(period),
                    callback: TaskCallback::Repeat(Rc::new(RefCell::new(callback))),
                },
            );
            id
        };
        Self::cancel_task(&Rc::downgrade(&self.inner), id)
    }

    fn on_key(&self, key: &'static str, callback: Box<dyn FnMut()>) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id();
            inner.listeners.insert(id, KeyListener { key, callback: Rc::new(RefCell::new(callback)) });
            id
        };
        let inner = Rc::downgrade(&self.inner);
        ScopedHandle::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.borrow_mut().listeners.remove(&id);
            }
        })
    }

    fn attach(&self, mount: Mount) -> Attachment {
        let id = mount.id;
        self.inner.borrow_mut().attached.push(id);
        let inner = Rc::downgrade(&self.inner);
        ScopedHandle::new(move || {
            if let Some(inner) = inner.upgrade() {
                let mut inner = inner.borrow_mut();
                if let Some(pos) = inner.attached.iter().position(|attached| *attached == id) {
                    inner.attached.remove(pos);
                }
            }
        })
    }

    fn set_style(&self, element_id: &str, property: &str, value: &str) {
        let mut inner = self.inner.borrow_mut();
        inner.style_writes += 1;
        inner
            .styles
            .insert((element_id.to_owned(), property.to_owned()), value.to_owned());
    }

    fn set_class(&self, element_id: &str, class: &str, enabled: bool) {
        let mut inner = self.inner.borrow_mut();
        let classes = inner.classes.entry(element_id.to_owned()).or_default();
        if enabled {
            classes.insert(class.to_owned());
        } else {
            classes.remove(class);
        }
    }
}
