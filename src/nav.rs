//! Link handlers: close what is open, then scroll or navigate.

use crate::animator::Callback;
use crate::app::App;
use crate::constants::*;
use crate::dom;
use crate::overlay;
use site_core::constants::NAV_SCROLL_SEC;
use site_core::events::UiEvent;
use site_core::nav::{self, Anchor, NavAction, NavLink};
use site_core::{At, Ease, OverlayState, Prop, Timeline, Tween};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_links(app: &Rc<App>) {
    let doc = app.document.clone();
    let by_id = [
        (ID_HOME_LINK, NavLink::Home),
        (ID_DIENSTEN_LINK, NavLink::Diensten),
        (ID_OVER_ONS_LINK, NavLink::OverOns),
        (ID_CONTACT_LINK, NavLink::Contact),
    ];
    for (id, link) in by_id {
        let app = app.clone();
        if !dom::add_click_listener(&doc, id, move |ev| {
            ev.prevent_default();
            follow(&app, link);
        }) {
            log::debug!("[nav] #{} not on this page", id);
        }
    }

    let by_selector = [
        (SEL_PANEL_DIENSTEN, NavLink::PanelDiensten),
        (SEL_PANEL_CONTACT, NavLink::PanelContact),
        (SEL_BANNER_ARROW, NavLink::BannerArrow),
        (SEL_DIENSTEN_BACK, NavLink::DienstenBack),
    ];
    for (selector, link) in by_selector {
        for el in dom::query_all(&doc, selector) {
            let app = app.clone();
            dom::add_listener(&el, "click", move |ev| {
                ev.prevent_default();
                follow(&app, link);
            });
        }
    }
}

pub fn follow(app: &Rc<App>, link: NavLink) {
    let plan = nav::plan(app.page, link, &app.overlays.borrow());
    log::info!("[nav] {:?} -> {:?}", link, plan);
    let action = plan.action;
    let app_run = app.clone();
    let run: Callback = Box::new(move || perform(&app_run, action));
    match plan.close_first {
        Some(id) => {
            if app.overlay_state(id) == OverlayState::Open {
                overlay::dispatch(app, UiEvent::CloseFor(id));
            }
            app.when_closed(id, run);
        }
        None => run(),
    }
}

fn perform(app: &Rc<App>, action: NavAction) {
    match action {
        NavAction::ScrollTo(anchor) => scroll_to_anchor(app, anchor),
        NavAction::Navigate(url) => fade_out_and_navigate(app, url),
        NavAction::Nothing => {}
    }
}

pub fn scroll_to_anchor(app: &App, anchor: Anchor) {
    let y = match anchor.element_id() {
        None => 0.0,
        Some(id) => match app.document.get_element_by_id(id) {
            Some(el) => dom::document_top(&el) + anchor.offset(),
            None => {
                log::warn!("[nav] #{} missing", id);
                return;
            }
        },
    };
    app.scroll_to(y, NAV_SCROLL_SEC, Ease::ExpoOut, true, None);
}

/// Cover the page with a flat layer, then leave.
pub fn fade_out_and_navigate(app: &App, url: &'static str) {
    let Some(layer) = fade_layer(&app.document) else {
        set_location(url);
        return;
    };
    let id = app.register(vec![layer]);
    app.set(&[id], &[(Prop::Opacity, 0.0)]);
    let tl = Timeline::new().to(
        Tween::one(id, PAGE_FADE_OUT_SEC, Ease::Power2InOut).prop(Prop::Opacity, 1.0),
        At::End,
    );
    app.play(tl, Some(Box::new(move || set_location(url))));
}

fn fade_layer(doc: &web::Document) -> Option<web::HtmlElement> {
    let layer = doc
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    layer.set_class_name("page-fade");
    for (prop, value) in [
        ("position", "fixed"),
        ("inset", "0"),
        ("background-color", PAGE_FADE_COLOR),
        ("opacity", "0"),
        ("pointer-events", "none"),
        ("z-index", "10000"),
    ] {
        dom::set_style(&layer, prop, value);
    }
    doc.body()?.append_child(&layer).ok()?;
    Some(layer)
}

fn set_location(url: &str) {
    if let Some(w) = web::window() {
        if let Err(e) = w.location().set_href(url) {
            log::error!("[nav] navigation to {} failed: {:?}", url, e);
        }
    }
}

/// Body fades in on load.
pub fn fade_in(app: &App) {
    let Some(body) = app.document.body() else {
        return;
    };
    let id = app.register(vec![body]);
    app.set(&[id], &[(Prop::Opacity, 0.0)]);
    app.play(
        Timeline::new().to(
            Tween::one(id, PAGE_FADE_IN_SEC, Ease::Power2Out).prop(Prop::Opacity, 1.0),
            At::End,
        ),
        None,
    );
}
