use super::*;
use std::cell::Cell;

use crate::host::headless::HeadlessHost;

fn counter() -> Rc<Cell<u32>> {
    Rc::new(Cell::new(0))
}

fn bump(count: &Rc<Cell<u32>>) -> impl Fn() + 'static {
    let count = Rc::clone(count);
    move || count.set(count.get() + 1)
}

fn modal(host: &HeadlessHost, options: ModalOptions) -> ModalController {
    ModalController::with_host(options, Rc::new(host.clone()), Timings::default())
}

// =============================================================
// Layout
// =============================================================

#[test]
fn single_ok_button_layout_has_close_button_and_one_footer_button() {
    let options = ModalOptions::new("Hello", "<p>World</p>").button(ButtonOptions::new("OK"));
    let layout = options.layout();
    assert!(layout.close_button);
    assert_eq!(layout.footer.len(), 1);
    assert_eq!(layout.footer[0].text, "OK");
    assert!(layout.footer[0].auto_close);
    assert_eq!(layout.title, "Hello");
}

#[test]
fn empty_button_list_renders_no_footer() {
    let layout = ModalOptions::new("Hello", "x").layout();
    assert!(!layout.has_footer());
}

#[test]
fn close_button_can_be_hidden() {
    let layout = ModalOptions::new("Hello", "x").show_close_button(false).layout();
    assert!(!layout.close_button);
}

#[test]
fn extra_class_goes_on_content_panel() {
    let options = ModalOptions::new("Hello", "x").class_name("wide");
    assert_eq!(options.content_class(), "blocky-content wide");
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn show_then_close_removes_after_exit_animation() {
    let host = HeadlessHost::new();
    let closes = counter();
    let modal = modal(&host, ModalOptions::new("Hello", "x").on_close(bump(&closes)));

    modal.show().expect("show");
    assert!(host.is_attached(modal.id()));

    assert!(modal.close());
    assert_eq!(closes.get(), 1);
    assert_eq!(
        host.style(&modal.id().root_id(), "animation").as_deref(),
        Some("modalFadeIn 0.2s ease-out reverse")
    );

    host.advance(200);
    assert!(!host.is_attached(modal.id()));
    assert_eq!(modal.phase(), OverlayPhase::Closed);
}

#[test]
fn custom_exit_duration_defers_removal() {
    let host = HeadlessHost::new();
    let timings = Timings { modal_exit_ms: 450, ..Timings::default() };
    let modal = ModalController::with_host(ModalOptions::new("Hi", "x"), Rc::new(host.clone()), timings);

    modal.show().expect("show");
    modal.close();
    assert_eq!(
        host.style(&modal.id().root_id(), "animation").as_deref(),
        Some("modalFadeIn 0.45s ease-out reverse")
    );
    host.advance(449);
    assert!(host.is_attached(modal.id()));
    host.advance(1);
    assert!(!host.is_attached(modal.id()));
}

#[test]
fn backdrop_clicks_in_one_tick_close_once() {
    let host = HeadlessHost::new();
    let closes = counter();
    let modal = modal(&host, ModalOptions::new("Hello", "x").on_close(bump(&closes)));
    modal.show().expect("show");

    modal.dispatch(OverlayTrigger::Backdrop);
    modal.dispatch(OverlayTrigger::Backdrop);
    modal.dispatch(OverlayTrigger::Backdrop);
    assert_eq!(closes.get(), 1);
    assert_eq!(host.pending_timers(), 1);
}

#[test]
fn escape_closes_once() {
    let host = HeadlessHost::new();
    let closes = counter();
    let modal = modal(&host, ModalOptions::new("Hello", "x").on_close(bump(&closes)));
    modal.show().expect("show");

    host.press_key("Escape");
    host.press_key("Escape");
    assert_eq!(closes.get(), 1);
    assert_eq!(host.key_listeners("Escape"), 0);
}

#[test]
fn no_escape_listener_before_show() {
    let host = HeadlessHost::new();
    let _modal = modal(&host, ModalOptions::new("Hello", "x"));
    assert_eq!(host.key_listeners("Escape"), 0);
}

#[test]
fn disabling_overlay_click_disables_backdrop_and_escape() {
    let host = HeadlessHost::new();
    let modal = modal(&host, ModalOptions::new("Hello", "x").close_on_overlay_click(false));
    modal.show().expect("show");

    assert!(!modal.dispatch(OverlayTrigger::Backdrop));
    host.press_key("Escape");
    assert!(modal.is_open());

    assert!(modal.dispatch(OverlayTrigger::CloseButton));
    assert_eq!(modal.phase(), OverlayPhase::Closing);
}

#[test]
fn repeated_show_is_rejected() {
    let host = HeadlessHost::new();
    let modal = modal(&host, ModalOptions::new("Hello", "x"));
    modal.show().expect("show");
    assert_eq!(modal.show(), Err(OverlayError::AlreadyShown));
    assert_eq!(host.attach_count(modal.id()), 1);
}

// =============================================================
// Footer buttons
// =============================================================

#[test]
fn footer_button_runs_handler_then_closes() {
    let host = HeadlessHost::new();
    let clicks = counter();
    let closes = counter();
    let modal = modal(
        &host,
        ModalOptions::new("Hello", "x")
            .button(ButtonOptions::new("OK").on_click(bump(&clicks)))
            .on_close(bump(&closes)),
    );
    modal.show().expect("show");

    assert!(modal.press_button(0));
    assert_eq!(clicks.get(), 1);
    assert_eq!(closes.get(), 1);

    assert!(!modal.press_button(0));
    assert_eq!(clicks.get(), 1);
}

#[test]
fn no_auto_close_button_keeps_modal_open() {
    let host = HeadlessHost::new();
    let clicks = counter();
    let modal = modal(
        &host,
        ModalOptions::new("Hello", "x")
            .button(ButtonOptions::new("Apply").class_name("no-auto-close").on_click(bump(&clicks))),
    );
    modal.show().expect("show");

    assert!(modal.press_button(0));
    assert!(modal.press_button(0));
    assert_eq!(clicks.get(), 2);
    assert!(modal.is_open());
}

#[test]
fn disabled_or_missing_buttons_are_ignored() {
    let host = HeadlessHost::new();
    let clicks = counter();
    let modal = modal(
        &host,
        ModalOptions::new("Hello", "x").button(ButtonOptions::new("Later").disabled(true).on_click(bump(&clicks))),
    );
    modal.show().expect("show");

    assert!(!modal.press_button(0));
    assert!(!modal.press_button(7));
    assert_eq!(clicks.get(), 0);
    assert!(modal.is_open());
}

#[test]
fn buttons_do_nothing_before_show() {
    let host = HeadlessHost::new();
    let clicks = counter();
    let modal = modal(&host, ModalOptions::new("Hello", "x").button(ButtonOptions::new("OK").on_click(bump(&clicks))));
    assert!(!modal.press_button(0));
    assert_eq!(clicks.get(), 0);
}

// =============================================================
// Rendered markup
// =============================================================

#[cfg(feature = "ssr")]
mod rendered {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn render(modal: &ModalController) -> String {
        Owner::new().with(|| modal.view().to_html())
    }

    #[test]
    fn single_ok_modal_renders_one_close_button_and_one_footer_button() {
        let host = HeadlessHost::new();
        let modal = modal(&host, ModalOptions::new("Hello", "<p>World</p>").button(ButtonOptions::new("OK")));
        let html = render(&modal);

        assert_eq!(html.matches(class::CLOSE_BUTTON).count(), 1);
        assert_eq!(html.matches(class::BUTTON_WRAPPER).count(), 1);
        assert_eq!(html.matches(class::MODAL_FOOTER).count(), 1);
        assert!(html.contains(&modal.id().root_id()));
        assert!(html.contains("Hello"));
        assert!(html.contains("<p>World</p>"));
    }

    #[test]
    fn bare_modal_renders_neither_close_button_nor_footer() {
        let host = HeadlessHost::new();
        let modal = modal(&host, ModalOptions::new("Hello", "x").show_close_button(false));
        let html = render(&modal);

        assert_eq!(html.matches(class::CLOSE_BUTTON).count(), 0);
        assert_eq!(html.matches(class::MODAL_FOOTER).count(), 0);
        assert_eq!(html.matches(class::BUTTON_WRAPPER).count(), 0);
    }

    #[test]
    fn footer_renders_every_button_in_order() {
        let host = HeadlessHost::new();
        let options = ModalOptions::new("Delete?", "Sure?")
            .button(ButtonOptions::new("Cancel"))
            .button(ButtonOptions::new("Confirm"));
        let html = render(&modal(&host, options));

        assert_eq!(html.matches(class::BUTTON_WRAPPER).count(), 2);
        let cancel = html.find("Cancel").expect("cancel rendered");
        let confirm = html.find("Confirm").expect("confirm rendered");
        assert!(cancel < confirm);
    }
}
