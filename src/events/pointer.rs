use crate::app::App;
use crate::constants::*;
use crate::dom;
use crate::overlay;
use site_core::events::{self, UiEvent};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn on_click(app: &Rc<App>, el: &web::Element, event: UiEvent) {
    let app = app.clone();
    dom::add_listener(el, "click", move |ev| {
        ev.prevent_default();
        overlay::dispatch(&app, event);
    });
}

/// Menu toggle, contact CTA and close, contact backdrop, panel button and close.
pub fn wire_overlay_triggers(app: &Rc<App>) {
    let doc = app.document.clone();
    let parts = app.parts.borrow();

    if parts.menu.is_some() {
        if let Some(btn) = dom::query(&doc, SEL_MENU_TOGGLE) {
            on_click(app, &btn, UiEvent::MenuToggle);
        }
    }

    if parts.contact.is_some() {
        if let Some(cta) = doc.get_element_by_id(ID_CONTACT_CTA) {
            on_click(app, &cta, UiEvent::ContactCta);
        } else {
            log::warn!("[contact] #{} missing; overlay can only be closed", ID_CONTACT_CTA);
        }
        if let Some(close) = doc.get_element_by_id(ID_CONTACT_CLOSE) {
            on_click(app, &close, UiEvent::ContactClose);
        }
        if let Some(backdrop) = dom::query(&doc, SEL_CONTACT_OVERLAY) {
            let app = app.clone();
            let target = backdrop.clone();
            dom::add_listener(&backdrop, "click", move |ev| {
                // Only clicks on the overlay itself, not its content.
                let on_backdrop = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web::Element>().ok())
                    .is_some_and(|el| el == target);
                if on_backdrop {
                    overlay::dispatch(&app, UiEvent::ContactBackdrop);
                }
            });
        }
    }

    if parts.panel.is_some() {
        if let Some(btn) = dom::query(&doc, SEL_PANEL_BUTTON) {
            on_click(app, &btn, UiEvent::OverOnsToggle);
        }
        if let Some(close) = dom::query(&doc, SEL_PANEL_CLOSE) {
            on_click(app, &close, UiEvent::OverOnsClose);
        }
    }
}

/// Wheel feeds the scroll driver; both wheel and touch are swallowed while
/// an overlay has the page.
pub fn wire_scroll_input(app: &Rc<App>) {
    let Some(window) = web::window() else {
        return;
    };

    let app_wheel = app.clone();
    dom::add_active_listener(&window, "wheel", move |ev| {
        let Some(wheel) = ev.dyn_ref::<web::WheelEvent>() else {
            return;
        };
        if events::blocks_wheel(&app_wheel.overlays.borrow()) {
            ev.prevent_default();
            return;
        }
        let delta = match wheel.delta_mode() {
            web::WheelEvent::DOM_DELTA_LINE => wheel.delta_y() * WHEEL_LINE_PX,
            web::WheelEvent::DOM_DELTA_PAGE => wheel.delta_y() * dom::viewport().height,
            _ => wheel.delta_y(),
        };
        if app_wheel.driver.borrow_mut().on_wheel(delta) {
            ev.prevent_default();
        }
    });

    let app_touch = app.clone();
    dom::add_active_listener(&window, "touchmove", move |ev| {
        if events::blocks_touch(&app_touch.overlays.borrow()) {
            ev.prevent_default();
        }
    });
}
