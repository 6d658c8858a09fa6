use crate::app::App;
use crate::dom;
use crate::overlay;
use site_core::events::UiEvent;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn event_for_key(key: &str) -> Option<UiEvent> {
    match key {
        "Escape" | "Esc" => Some(UiEvent::Escape),
        _ => None,
    }
}

pub fn wire_escape(app: &Rc<App>) {
    let app = app.clone();
    let document = app.document.clone();
    dom::add_listener(&document, "keydown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::KeyboardEvent>() else {
            return;
        };
        if let Some(event) = event_for_key(&ev.key()) {
            log::debug!("[keys] {}", ev.key());
            overlay::dispatch(&app, event);
        }
    });
}
