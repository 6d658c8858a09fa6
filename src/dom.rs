use site_core::SiteError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    query(document, selector).and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Like [`query`], but absence is an error for the calling feature.
pub fn require(document: &web::Document, selector: &'static str) -> Result<web::Element, SiteError> {
    query(document, selector).ok_or(SiteError::MissingElement(selector))
}

pub fn require_id(document: &web::Document, id: &'static str) -> Result<web::Element, SiteError> {
    document
        .get_element_by_id(id)
        .ok_or(SiteError::MissingElement(id))
}

pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    collect_nodes(root.query_selector_all(selector).ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    collect_nodes(document.query_selector_all(selector).ok())
}

pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

fn collect_nodes(list: Option<web::NodeList>) -> Vec<web::Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Non-passive listener so the handler may `prevent_default`.
pub fn add_active_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            add_listener(&el, "click", move |ev| handler(ev));
            true
        }
        None => false,
    }
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

pub fn viewport() -> site_core::Viewport {
    let (w, h) = web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0));
    site_core::Viewport::new(w, h)
}

pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Maximum document scroll offset.
pub fn scroll_limit(document: &web::Document) -> f64 {
    let content = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (content - viewport().height).max(0.0)
}

/// Document-space top of `el`.
pub fn document_top(el: &web::Element) -> f64 {
    el.get_bounding_client_rect().top() + scroll_y()
}

/// Toggle `overflow: hidden` on body and html.
pub fn set_overflow_locked(document: &web::Document, locked: bool) {
    let value = if locked { "hidden" } else { "" };
    if let Some(body) = document.body() {
        set_style(&body, "overflow", value);
    }
    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        set_style(&root, "overflow", value);
    }
}

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
