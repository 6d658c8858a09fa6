#![cfg(target_arch = "wasm32")]
use site_core::nav::Page;
use site_core::SiteError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod animator;
mod app;
mod banner;
mod constants;
mod copy;
mod dom;
mod events;
mod form;
mod frame;
mod nav;
mod overlay;
mod rotator;
mod services;
mod split;
mod theme;

use app::App;

/// A feature whose elements are missing stays inactive; the rest of the
/// page keeps working.
fn report<T>(area: &str, result: Result<T, SiteError>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[{}] disabled: {}", area, e);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nieuwnet-site starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let path = window.location().pathname().map_err(dom::js_err)?;
    let page = Page::from_path(&path);
    log::info!("[page] {:?}", page);

    let app = Rc::new(App::new(document.clone(), page));
    nav::fade_in(&app);

    overlay::setup_page_targets(&app);
    report("menu", overlay::setup_menu(&app));
    report("contact", overlay::setup_contact(&app));
    report("over-ons", overlay::setup_panel(&app));
    events::wire_overlay_triggers(&app);
    events::wire_escape(&app);
    events::wire_scroll_input(&app);

    nav::wire_links(&app);
    copy::wire_copy_widgets(&document);
    report("form", form::setup(&app));

    let banner = match page {
        Page::Home => {
            let rotator = report("rotator", rotator::Rotator::setup(&app));
            report("banner", banner::Banner::setup(&app, rotator))
        }
        Page::Diensten => {
            report("diensten", services::setup(&app));
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app, banner)));
    frame::start_loop(frame_ctx);
    Ok(())
}
