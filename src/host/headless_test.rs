use super::*;
use std::cell::Cell;

fn counter() -> (Rc<Cell<u32>>, impl Fn() -> u32) {
    let count = Rc::new(Cell::new(0));
    let read = {
        let count = Rc::clone(&count);
        move || count.get()
    };
    (count, read)
}

// =============================================================
// Timers
// =============================================================

#[test]
fn timeout_fires_once_when_due() {
    let host = HeadlessHost::new();
    let (count, fired) = counter();
    let _timer = host.set_timeout(200, Box::new(move || count.set(count.get() + 1)));

    host.advance(199);
    assert_eq!(fired(), 0);
    host.advance(1);
    assert_eq!(fired(), 1);
    host.advance(10_000);
    assert_eq!(fired(), 1);
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn dropping_timeout_cancels_it() {
    let host = HeadlessHost::new();
    let (count, fired) = counter();
    let timer = host.set_timeout(50, Box::new(move || count.set(count.get() + 1)));
    drop(timer);

    host.advance(100);
    assert_eq!(fired(), 0);
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn interval_fires_once_per_period() {
    let host = HeadlessHost::new();
    let (count, fired) = counter();
    let timer = host.set_interval(3000, Box::new(move || count.set(count.get() + 1)));

    host.advance(2999);
    assert_eq!(fired(), 0);
    host.advance(1);
    assert_eq!(fired(), 1);
    host.advance(9000);
    assert_eq!(fired(), 4);

    timer.release();
    host.advance(30_000);
    assert_eq!(fired(), 4);
}

#[test]
fn timers_fire_in_due_order() {
    let host = HeadlessHost::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    let late = {
        let order = Rc::clone(&order);
        host.set_timeout(300, Box::new(move || order.borrow_mut().push("late")))
    };
    let early = {
        let order = Rc::clone(&order);
        host.set_timeout(100, Box::new(move || order.borrow_mut().push("early")))
    };

    host.advance(1000);
    assert_eq!(*order.borrow(), vec!["early", "late"]);
    drop((late, early));
}

#[test]
fn callbacks_can_schedule_more_work() {
    let host = HeadlessHost::new();
    let (count, fired) = counter();
    let nested = Rc::new(RefCell::new(None::<Timer>));
    let _outer = {
        let host_for_cb = host.clone();
        let nested = Rc::clone(&nested);
        host.set_timeout(
            10,
            Box::new(move || {
                let count = Rc::clone(&count);
                let timer = host_for_cb.set_timeout(10, Box::new(move || count.set(count.get() + 1)));
                *nested.borrow_mut() = Some(timer);
            }),
        )
    };

    host.advance(20);
    assert_eq!(fired(), 1);
    assert_eq!(host.now_ms(), 20);
}

// =============================================================
// Keys
// =============================================================

#[test]
fn key_listener_receives_matching_keys_only() {
    let host = HeadlessHost::new();
    let (count, fired) = counter();
    let subscription = host.on_key("Escape", Box::new(move || count.set(count.get() + 1)));

    host.press_key("Enter");
    assert_eq!(fired(), 0);
    host.press_key("Escape");
    assert_eq!(fired(), 1);
    assert_eq!(host.key_listeners("Escape"), 1);

    drop(subscription);
    host.press_key("Escape");
    assert_eq!(fired(), 1);
    assert_eq!(host.key_listeners("Escape"), 0);
}

#[test]
fn listener_may_release_itself_while_running() {
    let host = HeadlessHost::new();
    let (count, fired) = counter();
    let slot = Rc::new(RefCell::new(None::<Subscription>));
    let subscription = {
        let slot = Rc::clone(&slot);
        host.on_key(
            "Escape",
            Box::new(move || {
                count.set(count.get() + 1);
                slot.borrow_mut().take();
            }),
        )
    };
    *slot.borrow_mut() = Some(subscription);

    host.press_key("Escape");
    host.press_key("Escape");
    assert_eq!(fired(), 1);
    assert_eq!(host.key_listeners("Escape"), 0);
}

// =============================================================
// Attach and styles
// =============================================================

#[test]
fn attach_records_until_handle_dropped() {
    let host = HeadlessHost::new();
    let id = OverlayId::new();
    let attachment = host.attach(Mount::new(id, ScopedHandle::noop));
    assert!(host.is_attached(id));
    assert_eq!(host.attached_len(), 1);

    drop(attachment);
    assert!(!host.is_attached(id));
    assert_eq!(host.attached_len(), 0);
}

#[test]
fn headless_attach_never_runs_render() {
    let host = HeadlessHost::new();
    let (count, rendered) = counter();
    let _attachment = host.attach(Mount::new(OverlayId::new(), move || {
        count.set(count.get() + 1);
        ScopedHandle::noop()
    }));
    assert_eq!(rendered(), 0);
}

#[test]
fn style_writes_are_recorded_per_element() {
    let host = HeadlessHost::new();
    host.set_style("a", "--x", "1");
    host.set_style("a", "--x", "2");
    host.set_style("b", "--x", "3");
    assert_eq!(host.style("a", "--x").as_deref(), Some("2"));
    assert_eq!(host.style("b", "--x").as_deref(), Some("3"));
    assert_eq!(host.style("c", "--x"), None);
    assert_eq!(host.style_writes(), 3);
}

#[test]
fn class_toggles_are_recorded() {
    let host = HeadlessHost::new();
    host.set_class("wrap", "scrolling", true);
    assert!(host.has_class("wrap", "scrolling"));
    host.set_class("wrap", "scrolling", false);
    assert!(!host.has_class("wrap", "scrolling"));
    assert!(!host.has_class("missing", "scrolling"));
}
