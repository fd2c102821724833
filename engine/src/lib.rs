//! Page controllers and state machines for Vitrina.
//!
//! [`Page`] owns a simulated document and the controllers that enhance it:
//! mobile navigation, anchor scrolling, the contact form, the privacy modal,
//! scroll reveal, and the resize-driven layout responder. The embedder feeds
//! [`PageEvent`]s in, drains [`Notice`]s out, and pumps timed work through
//! [`Page::advance`] / [`Page::next_deadline`].
//!
//! Everything is synchronous and takes an explicit `Instant`; the only
//! things that happen "later" (the simulated submission delay, counter
//! ticks, the resize debounce) are deadlines the embedder wakes up for.

mod anchors;
mod debounce;
mod events;
mod form;
mod gate;
mod layout;
mod modal;
mod nav;
mod notices;
mod preload;
mod reveal;
mod selectors;
mod timers;
mod transport;

pub use anchors::AnchorScroller;
pub use debounce::Debouncer;
pub use events::{Key, PageEvent};
pub use form::{FormController, SUBMIT_DELAY};
pub use gate::{MIN_SUBMIT_INTERVAL, SubmitGate};
pub use layout::{LayoutResponder, MOBILE_BREAKPOINT};
pub use modal::ModalController;
pub use nav::NavController;
pub use notices::{Notice, NoticeQueue};
pub use preload::{CRITICAL_IMAGES, preload_critical_images};
pub use reveal::{COUNT_DURATION, COUNT_TICK, RevealController, RevealStatus};
pub use timers::{TimerEntry, TimerKind, TimerQueue};
pub use transport::{Lead, SimulatedTransport, Transport, TransportError};

use std::time::{Duration, Instant};

use vitrina_dom::{Document, NodeId, Viewport};

/// Quiescence window before a resize is applied.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// The enhanced page: document plus controllers.
///
/// Controllers bind to their document fragments at startup and no-op
/// independently when a fragment is missing; one absent element never takes
/// down the rest of the page.
#[derive(Debug)]
pub struct Page<T: Transport = SimulatedTransport> {
    doc: Document,
    notices: NoticeQueue,
    timers: TimerQueue,
    resize_debounce: Debouncer,
    transport: T,
    nav: Option<NavController>,
    modal: Option<ModalController>,
    form: Option<FormController>,
    anchors: AnchorScroller,
    reveal: RevealController,
    layout: LayoutResponder,
    preloaded: Vec<&'static str>,
}

impl Page<SimulatedTransport> {
    /// Open the page with the always-successful simulated transport.
    #[must_use]
    pub fn open(doc: Document, now: Instant) -> Self {
        Self::open_with_transport(doc, SimulatedTransport, now)
    }
}

impl<T: Transport> Page<T> {
    /// Run the startup sequence: preload, bind every controller, take the
    /// initial reveal pass, apply the initial layout, mark the body loaded.
    pub fn open_with_transport(mut doc: Document, transport: T, now: Instant) -> Self {
        tracing::info!("initializing page enhancements");

        let preloaded: Vec<&'static str> = preload_critical_images().to_vec();

        let nav = NavController::bind(&doc);
        let anchors = AnchorScroller::bind(&doc);
        let form = FormController::bind(&doc);
        let modal = ModalController::bind(&doc);
        let mut reveal = RevealController::bind(&doc);
        let layout = LayoutResponder::bind(&doc);

        let mut timers = TimerQueue::new();
        // Elements already inside the trigger zone reveal immediately.
        reveal.evaluate(&mut doc, &mut timers, now);

        let mut page = Self {
            doc,
            notices: NoticeQueue::new(),
            timers,
            resize_debounce: Debouncer::new(RESIZE_DEBOUNCE),
            transport,
            nav,
            modal,
            form,
            anchors,
            reveal,
            layout,
            preloaded,
        };
        page.handle_resize();
        let body = page.doc.body();
        page.doc.add_class(body, "loaded");
        tracing::info!("page ready");
        page
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: PageEvent, now: Instant) {
        match event {
            PageEvent::Click { target } => self.handle_click(target, now),
            PageEvent::Input { target, value } => {
                self.doc.set_value(target, &value);
                if let Some(form) = &self.form
                    && target == form.phone_field()
                {
                    form.reformat_phone(&mut self.doc);
                }
            }
            PageEvent::Submit { target } => {
                if let Some(form) = &mut self.form
                    && form.form() == target
                {
                    form.handle_submit(&mut self.doc, &mut self.notices, &mut self.timers, now);
                }
            }
            PageEvent::KeyDown { key: Key::Escape } => {
                if let Some(modal) = &mut self.modal {
                    modal.handle_escape(&mut self.doc);
                }
            }
            PageEvent::KeyDown { .. } => {}
            PageEvent::Scrolled { y } => {
                self.doc.scroll_to(y);
                self.reveal.evaluate(&mut self.doc, &mut self.timers, now);
            }
            PageEvent::Resized { width, height } => {
                self.doc.set_viewport(Viewport { width, height });
                self.resize_debounce.poke(now);
            }
        }
    }

    /// Fire everything due at or before `now`.
    pub fn advance(&mut self, now: Instant) {
        while let Some(entry) = self.timers.pop_due(now) {
            match entry.kind {
                TimerKind::Delivery { lead } => {
                    let outcome = self.transport.deliver(&lead);
                    if let Some(form) = &mut self.form {
                        form.finish_submission(&mut self.doc, &mut self.notices, &lead, outcome);
                    }
                }
                TimerKind::CountTick { block } => {
                    self.reveal
                        .handle_tick(&mut self.doc, &mut self.timers, entry.at, block);
                }
            }
        }

        if self.resize_debounce.fire_if_due(now) {
            self.handle_resize();
            // A new viewport changes what intersects.
            self.reveal.evaluate(&mut self.doc, &mut self.timers, now);
        }
    }

    /// When [`Page::advance`] next has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.timers.next_deadline(), self.resize_debounce.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, b) => b,
        }
    }

    /// Apply the layout for the current viewport immediately.
    ///
    /// Exposed for external invocation alongside
    /// [`preload_critical_images`]; the resize event path goes through the
    /// debouncer instead.
    pub fn handle_resize(&mut self) {
        self.layout.apply(&mut self.doc, self.nav.as_mut());
    }

    /// Drain pending user notices in arrival order.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.take()
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Image paths requested at startup.
    #[must_use]
    pub fn preloaded_images(&self) -> &[&'static str] {
        &self.preloaded
    }

    /// Reveal record for an observed element.
    #[must_use]
    pub fn reveal_status(&self, node: NodeId) -> RevealStatus {
        self.reveal.status(node)
    }

    fn handle_click(&mut self, target: NodeId, now: Instant) {
        // The menu button handler stops propagation: nothing else on the
        // page sees this click, including the outside-click handling below.
        if let Some(nav) = &mut self.nav
            && nav.is_button(&self.doc, target)
        {
            nav.toggle(&mut self.doc);
            return;
        }

        if let Some(modal) = &mut self.modal {
            modal.handle_click(&mut self.doc, &mut self.notices, target);
        }

        if self.anchors.handle_click(&mut self.doc, target) {
            self.reveal.evaluate(&mut self.doc, &mut self.timers, now);
        }

        if let Some(nav) = &mut self.nav {
            if nav.is_menu_link(&self.doc, target) {
                nav.collapse(&mut self.doc);
            } else if nav.is_expanded() && !nav.is_inside_menu(&self.doc, target) {
                nav.collapse(&mut self.doc);
            }
        }
    }
}
