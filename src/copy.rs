//! Click-to-copy for phone numbers and e-mail addresses.

use crate::constants::*;
use crate::dom;
use gloo_timers::callback::Timeout;
use site_core::constants::COPY_ACK_MS;
use site_core::copy::{copy_with_fallback, CopyAck};
use site_core::SiteError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const COPIED_CLASS: &str = "copied";

/// An element and its acknowledgment state.
type Widget = (web::Element, Rc<RefCell<CopyAck>>);

fn widget(el: web::Element) -> Widget {
    (el, Rc::new(RefCell::new(CopyAck::default())))
}

pub fn wire_copy_widgets(document: &web::Document) {
    let icons: Vec<Widget> = dom::query_all(document, SEL_COPY_ICON)
        .into_iter()
        .map(widget)
        .collect();
    let numbers = dom::query_all(document, SEL_COPY_NUMBER);
    log::info!("[copy] {} icons, {} numbers", icons.len(), numbers.len());

    for (icon, ack) in &icons {
        let Some(text) = icon.get_attribute("data-copy") else {
            continue;
        };
        let targets = vec![(icon.clone(), ack.clone())];
        dom::add_listener(icon, "click", move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            copy_and_acknowledge(text.clone(), targets.clone());
        });
    }

    for number in numbers {
        let Some(text) = number.get_attribute("data-copy") else {
            continue;
        };
        let parent = number.parent_element();
        let mut targets = vec![widget(number.clone())];
        targets.extend(
            icons
                .iter()
                .filter(|(icon, _)| {
                    icon.get_attribute("data-copy").as_deref() == Some(text.as_str())
                        && icon.parent_element() == parent
                })
                .cloned(),
        );
        dom::add_listener(&number, "click", move |ev| {
            ev.prevent_default();
            ev.stop_propagation();
            copy_and_acknowledge(text.clone(), targets.clone());
        });
    }
}

fn copy_and_acknowledge(text: String, targets: Vec<Widget>) {
    spawn_local(async move {
        let primary = write_clipboard(&text).await;
        let outcome = copy_with_fallback(&text, move |_| primary, legacy_copy);
        if outcome.acknowledged() {
            for (el, ack) in &targets {
                acknowledge(el, ack);
            }
        }
    });
}

fn acknowledge(el: &web::Element, ack: &Rc<RefCell<CopyAck>>) {
    let now = dom::now_ms();
    let token = {
        let mut ack = ack.borrow_mut();
        if ack.is_active(now) {
            log::debug!("[copy] acknowledgment extended");
        }
        ack.acknowledge(now, COPY_ACK_MS)
    };
    _ = el.class_list().add_1(COPIED_CLASS);
    let el = el.clone();
    let ack = ack.clone();
    Timeout::new(COPY_ACK_MS, move || {
        if ack.borrow_mut().expire(token) {
            _ = el.class_list().remove_1(COPIED_CLASS);
        }
    })
    .forget();
}

async fn write_clipboard(text: &str) -> Result<(), SiteError> {
    let window = web::window().ok_or_else(|| SiteError::Clipboard("no window".into()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| SiteError::Clipboard(format!("{e:?}")))
}

/// Off-screen textarea + `execCommand("copy")`.
fn legacy_copy(text: &str) -> Result<(), SiteError> {
    let document = dom::window_document().ok_or_else(|| SiteError::Clipboard("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| SiteError::Clipboard("no body".into()))?;
    let area = document
        .create_element("textarea")
        .map_err(|e| SiteError::Js(format!("{e:?}")))?
        .dyn_into::<web::HtmlTextAreaElement>()
        .map_err(|e| SiteError::Js(format!("{e:?}")))?;
    area.set_value(text);
    dom::set_style(&area, "position", "fixed");
    dom::set_style(&area, "left", "-999999px");
    _ = body.append_child(&area);
    area.select();
    let copied = document
        .dyn_into::<web::HtmlDocument>()
        .map_err(|e| SiteError::Js(format!("{e:?}")))
        .and_then(|doc| {
            doc.exec_command("copy")
                .map_err(|e| SiteError::Clipboard(format!("{e:?}")))
        });
    _ = body.remove_child(&area);
    match copied? {
        true => Ok(()),
        false => Err(SiteError::Clipboard("execCommand(copy) returned false".into())),
    }
}
