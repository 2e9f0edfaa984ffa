//! Full-screen page overlay with a cycling border gradient.
//!
//! DESIGN
//! ======
//! A gradient set is picked when the page is created and rendered inline,
//! so the border is colored from the first frame. `show()` writes it again
//! through the host and starts the color cycle: every `color_cycle_ms` a
//! fresh set is picked and written to the content panel. The interval is
//! adopted by the overlay, so `close()` cancels it before removal is even
//! scheduled and a closed page never changes color again.
//!
//! With the custom scrollbar enabled, scrolling the wrapper adds
//! `scrolling` and a timeout removes it once scrolling stops. Only the
//! latest timeout is kept; close cancels it.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::either::Either;
use leptos::prelude::*;

use super::overlay::{ExitAnimation, OverlayController, OverlaySettings, mount_view};
use crate::config::{Timings, css_seconds};
use crate::content::Content;
use crate::handler::Handler;
use crate::host::{Host, Mount, ScopedHandle, Timer, default_host};
use crate::state::gradient::{BORDER_COLOR_VARS, ColorCycle, GradientSet, RandomSource, default_source};
use crate::state::overlay::{OverlayError, OverlayId, OverlayPhase, OverlayState, OverlayTrigger};
use crate::theme::{class, class_list};

#[derive(Clone, Debug)]
pub struct PageOptions {
    pub content: Content,
    pub on_close: Option<Handler>,
    pub class_name: Option<String>,
    /// Thin auto-hiding scrollbar on the wrapper.
    pub custom_scrollbar: bool,
}

impl PageOptions {
    pub fn new(content: impl Into<Content>) -> Self {
        Self { content: content.into(), on_close: None, class_name: None, custom_scrollbar: true }
    }

    #[must_use]
    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Handler::action(f));
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn custom_scrollbar(mut self, enabled: bool) -> Self {
        self.custom_scrollbar = enabled;
        self
    }

    #[must_use]
    pub fn content_class(&self) -> String {
        class_list(&[class::PAGE_CONTENT], self.class_name.as_deref())
    }

    #[must_use]
    pub fn wrapper_class(&self) -> String {
        let scrollbar = if self.custom_scrollbar { class::CUSTOM_SCROLLBAR } else { "" };
        class_list(&[class::PAGE_WRAPPER, scrollbar], None)
    }
}

/// Handle to one page instance. Clones share the instance.
#[derive(Clone)]
pub struct PageController {
    overlay: OverlayController,
    options: Rc<PageOptions>,
    colors: Rc<RefCell<ColorCycle>>,
    scroll_hide: Rc<RefCell<Option<Timer>>>,
    timings: Timings,
}

impl PageController {
    /// Page on the default host with default timings.
    #[must_use]
    pub fn create(options: PageOptions) -> Self {
        Self::with_host(options, default_host(), Timings::default())
    }

    #[must_use]
    pub fn with_host(options: PageOptions, host: Rc<dyn Host>, timings: Timings) -> Self {
        Self::with_source(options, host, timings, default_source())
    }

    /// Page whose gradient picks come from `source`.
    #[must_use]
    pub fn with_source(
        options: PageOptions,
        host: Rc<dyn Host>,
        timings: Timings,
        source: Box<dyn RandomSource>,
    ) -> Self {
        let id = OverlayId::new();
        let exit = css_seconds(timings.page_exit_ms);
        let settings = OverlaySettings {
            kind: "page",
            close_on_outside: true,
            exit: ExitAnimation {
                duration_ms: timings.page_exit_ms,
                styles: vec![
                    (id.root_id(), format!("pageFadeOut {exit} ease-out")),
                    (id.part_id("content"), format!("pageSlideOut {exit} ease-out")),
                ],
            },
            on_close: options.on_close.clone(),
        };
        Self {
            overlay: OverlayController::new(id, settings, host),
            options: Rc::new(options),
            colors: Rc::new(RefCell::new(ColorCycle::new(source))),
            scroll_hide: Rc::new(RefCell::new(None)),
            timings,
        }
    }

    #[must_use]
    pub fn id(&self) -> OverlayId {
        self.overlay.id()
    }

    #[must_use]
    pub fn phase(&self) -> OverlayPhase {
        self.overlay.phase()
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.overlay.state()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    #[must_use]
    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Gradient currently assigned to the border.
    #[must_use]
    pub fn current_gradient(&self) -> &'static GradientSet {
        self.colors.borrow().current()
    }

    /// Color cycle ticks applied so far.
    #[must_use]
    pub fn color_updates(&self) -> u64 {
        self.colors.borrow().updates()
    }

    /// Attach the page, assign its gradient and start the color cycle.
    ///
    /// # Errors
    ///
    /// [`OverlayError::AlreadyShown`] when already shown,
    /// [`OverlayError::Closed`] once closed.
    pub fn show(&self) -> Result<(), OverlayError> {
        let controller = self.clone();
        let mount = Mount::new(self.id(), move || mount_view(move || controller.view()));
        self.overlay.show(mount)?;

        write_gradient(&**self.overlay.host(), self.id(), self.current_gradient());
        self.start_color_cycle();
        if self.options.custom_scrollbar {
            let scroll_hide = Rc::clone(&self.scroll_hide);
            self.overlay.adopt(ScopedHandle::new(move || {
                let pending = scroll_hide.borrow_mut().take();
                drop(pending);
            }));
        }
        Ok(())
    }

    fn start_color_cycle(&self) {
        let overlay = self.overlay.downgrade();
        let colors = Rc::downgrade(&self.colors);
        let timer = self.overlay.host().set_interval(
            self.timings.color_cycle_period_ms(),
            Box::new(move || {
                let (Some(overlay), Some(colors)) = (overlay.upgrade(), colors.upgrade()) else {
                    return;
                };
                if !overlay.is_open() {
                    return;
                }
                let set = colors.borrow_mut().advance();
                log::debug!("page {}: border gradient {}", overlay.id(), set.name);
                write_gradient(&**overlay.host(), overlay.id(), set);
            }),
        );
        self.overlay.adopt_timer(timer);
    }

    /// Stop the color cycle, start the exit animation and run `on_close`.
    /// Returns `false` when the page was not open.
    pub fn close(&self) -> bool {
        self.overlay.close()
    }

    /// Route a backdrop, content, close-button or Escape interaction.
    pub fn dispatch(&self, trigger: OverlayTrigger) -> bool {
        self.overlay.dispatch(trigger)
    }

    /// The wrapper scrolled: show the scrollbar and restart its hide timer.
    pub fn notify_scroll(&self) {
        if !self.options.custom_scrollbar || !self.is_open() {
            return;
        }
        let host = self.overlay.host();
        let wrapper_id = self.id().part_id("wrapper");
        host.set_class(&wrapper_id, class::SCROLLING, true);

        let weak_host = Rc::downgrade(host);
        let hide = host.set_timeout(
            self.timings.scrollbar_hide_ms,
            Box::new(move || {
                if let Some(host) = weak_host.upgrade() {
                    host.set_class(&wrapper_id, class::SCROLLING, false);
                }
            }),
        );
        let previous = self.scroll_hide.borrow_mut().replace(hide);
        drop(previous);
    }

    /// Root element once mounted.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn element(&self) -> Option<web_sys::HtmlElement> {
        super::overlay::root_element(self.id())
    }

    /// Overlay view for this instance.
    pub fn view(&self) -> impl IntoView + use<> {
        let id = self.id();
        let content_class = self.options.content_class();
        let wrapper_class = self.options.wrapper_class();
        let wrapper_id = id.part_id("wrapper");
        let gradient_style = self.current_gradient().style_declaration();
        let backdrop = self.clone();
        let close_button = self.clone();
        let scroller = self.clone();
        let on_scroll = move |_| scroller.notify_scroll();
        let body = match self.options.content.clone() {
            Content::Markup(html) => Either::Left(view! {
                <div id=wrapper_id class=wrapper_class on:scroll=on_scroll inner_html=html></div>
            }),
            Content::View(build) => Either::Right(view! {
                <div id=wrapper_id class=wrapper_class on:scroll=on_scroll>
                    {build.run()}
                </div>
            }),
        };

        view! {
            <div
                id=id.root_id()
                class=class::PAGE_OVERLAY
                on:click=move |_| {
                    backdrop.dispatch(OverlayTrigger::Backdrop);
                }
            >
                <div
                    id=id.part_id("content")
                    class=content_class
                    style=gradient_style
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    <button
                        class=class::CLOSE_BUTTON
                        aria-label="Close"
                        on:click=move |_| {
                            close_button.dispatch(OverlayTrigger::CloseButton);
                        }
                    ></button>
                    {body}
                </div>
            </div>
        }
    }
}

/// Assign the three border variables on the page's content panel.
fn write_gradient(host: &dyn Host, id: OverlayId, set: &GradientSet) {
    let content_id = id.part_id("content");
    for (var, color) in BORDER_COLOR_VARS.iter().zip(set.colors) {
        host.set_style(&content_id, var, color);
    }
}
