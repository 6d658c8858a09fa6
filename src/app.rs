//! Page-wide state shared by every handler.
//!
//! Handlers hold an `Rc<App>`. Work that must wait on something (a scroll
//! arriving, an overlay closing, a timeline ending) is stored as a
//! [`Callback`] and run from the frame loop once all borrows are released.

use crate::animator::{Animator, Callback};
use crate::dom;
use crate::overlay::OverlayParts;
use crate::theme::MenuChrome;
use fnv::FnvHashMap;
use site_core::lock::{LockChange, LockOwner, ScrollLock};
use site_core::nav::Page;
use site_core::scroll::{ScrollDriver, ScrollTicket};
use site_core::{Ease, OverlayController, OverlayId, OverlayState, Prop, TargetId, Timeline};
use std::cell::RefCell;
use web_sys as web;

pub struct App {
    pub document: web::Document,
    pub page: Page,
    pub overlays: RefCell<OverlayController>,
    pub driver: RefCell<ScrollDriver>,
    pub animator: RefCell<Animator>,
    pub parts: RefCell<OverlayParts>,
    pub chrome: Option<MenuChrome>,
    lock: RefCell<ScrollLock>,
    scroll_waiters: RefCell<FnvHashMap<ScrollTicket, Callback>>,
    close_waiters: RefCell<Vec<(OverlayId, Callback)>>,
}

impl App {
    pub fn new(document: web::Document, page: Page) -> Self {
        let mut driver = ScrollDriver::new(dom::scroll_limit(&document));
        driver.sync_native(dom::scroll_y());
        let chrome = MenuChrome::find(&document);
        if chrome.is_none() {
            log::warn!("[theme] menu chrome not found; theme switching disabled");
        }
        Self {
            document,
            page,
            overlays: RefCell::new(OverlayController::new()),
            driver: RefCell::new(driver),
            animator: RefCell::new(Animator::new()),
            parts: RefCell::new(OverlayParts::default()),
            chrome,
            lock: RefCell::new(ScrollLock::new()),
            scroll_waiters: RefCell::new(FnvHashMap::default()),
            close_waiters: RefCell::new(Vec::new()),
        }
    }

    pub fn register(&self, elements: Vec<web::HtmlElement>) -> TargetId {
        self.animator.borrow_mut().register(elements)
    }

    pub fn register_each(&self, elements: Vec<web::HtmlElement>) -> Vec<TargetId> {
        self.animator.borrow_mut().register_each(elements)
    }

    pub fn set(&self, targets: &[TargetId], props: &[(Prop, f64)]) {
        self.animator.borrow_mut().set(targets, props);
    }

    pub fn play(&self, timeline: Timeline<Callback>, on_complete: Option<Callback>) {
        self.animator.borrow_mut().play(timeline, on_complete);
    }

    pub fn overlay_state(&self, id: OverlayId) -> OverlayState {
        self.overlays.borrow().state(id)
    }

    /// Programmatic scroll; `then` runs when it arrives or is superseded.
    pub fn scroll_to(&self, y: f64, duration: f64, ease: Ease, force: bool, then: Option<Callback>) {
        let ticket = self.driver.borrow_mut().scroll_to(y, duration, ease, force);
        if let Some(cb) = then {
            self.scroll_waiters.borrow_mut().insert(ticket, cb);
        }
    }

    pub fn take_scroll_waiters(&self, tickets: &[ScrollTicket]) -> Vec<Callback> {
        let mut waiters = self.scroll_waiters.borrow_mut();
        tickets.iter().filter_map(|t| waiters.remove(t)).collect()
    }

    /// Run `then` once `id` reaches Closed. Runs right away if it already is.
    pub fn when_closed(&self, id: OverlayId, then: Callback) {
        if self.overlay_state(id) == OverlayState::Closed {
            then();
        } else {
            self.close_waiters.borrow_mut().push((id, then));
        }
    }

    pub fn take_close_waiters(&self, id: OverlayId) -> Vec<Callback> {
        let mut waiters = self.close_waiters.borrow_mut();
        let (ready, pending): (Vec<_>, Vec<_>) = waiters.drain(..).partition(|(w, _)| *w == id);
        *waiters = pending;
        ready.into_iter().map(|(_, cb)| cb).collect()
    }

    pub fn acquire_lock(&self, owner: LockOwner) {
        let change = self.lock.borrow_mut().acquire(owner);
        if change == LockChange::Engaged {
            log::debug!("[lock] engaged by {:?}", owner);
            dom::set_overflow_locked(&self.document, true);
            self.driver.borrow_mut().stop();
        }
    }

    pub fn release_lock(&self, owner: LockOwner) {
        let change = self.lock.borrow_mut().release(owner);
        if change == LockChange::Released {
            log::debug!("[lock] released by {:?}", owner);
            dom::set_overflow_locked(&self.document, false);
            self.driver.borrow_mut().start();
        }
    }
}

/// Run deferred work outside any `App` borrow.
pub fn run_all(callbacks: Vec<Callback>) {
    for cb in callbacks {
        cb();
    }
}
