//! Callback handles carried by component option records.
//!
//! DESIGN
//! ======
//! Option records are plain data that both the DOM event closures and the
//! headless controllers read, so callbacks are reference-counted and cheap to
//! clone. Everything runs on the UI thread; no `Send` bound is required.

use std::fmt;
use std::rc::Rc;

/// Shared callback taking a `T`.
pub struct Handler<T = ()>(Rc<dyn Fn(T)>);

impl<T> Handler<T> {
    pub fn new(f: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invoke the callback.
    pub fn run(&self, value: T) {
        (self.0)(value);
    }
}

impl Handler<()> {
    /// Build a handler from a zero-argument closure.
    pub fn action(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(move |()| f()))
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handler(..)")
    }
}

impl<T, F> From<F> for Handler<T>
where
    F: Fn(T) + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// Run an optional handler; absent handlers are a no-op.
pub(crate) fn run_optional<T>(handler: Option<&Handler<T>>, value: T) {
    if let Some(handler) = handler {
        handler.run(value);
    }
}
