//! Main menu, contact overlay and Over Ons panel.
//!
//! `site_core::OverlayController` decides which transitions run; this module
//! owns the elements, builds one timeline per transition and reports the
//! timeline's completion back as `UiEvent::TransitionFinished`.

use crate::animator::Callback;
use crate::app::{run_all, App};
use crate::constants::*;
use crate::dom;
use crate::split;
use crate::theme;
use site_core::events::{self, UiEvent};
use site_core::lock::LockOwner;
use site_core::{At, Direction, Ease, OverlayId, Prop, SiteError, TargetId, Timeline, Transition, Tween};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page sections the menus push out of the way. Shared so both menus
/// drive the same transform.
#[derive(Default)]
pub struct PageTargets {
    pub banner: Option<TargetId>,
    pub main: Option<TargetId>,
    pub outro: Option<TargetId>,
}

pub struct MenuParts {
    label: TargetId,
    overlay: TargetId,
    content: TargetId,
    media: TargetId,
    columns: TargetId,
    lines: Vec<Vec<TargetId>>,
    hamburger: Option<web::Element>,
}

pub struct ContactParts {
    overlay: TargetId,
    content: TargetId,
    media: TargetId,
    columns: TargetId,
    lines: Vec<Vec<TargetId>>,
    close_button: Option<web::Element>,
}

pub struct PanelParts {
    panel: TargetId,
    section: web::Element,
    button: Option<web::Element>,
    button_target: Option<TargetId>,
    button_text: Option<(web::HtmlElement, TargetId)>,
}

#[derive(Default)]
pub struct OverlayParts {
    pub page: PageTargets,
    pub menu: Option<MenuParts>,
    pub contact: Option<ContactParts>,
    pub panel: Option<PanelParts>,
}

fn all_lines(lines: &[Vec<TargetId>]) -> Vec<TargetId> {
    lines.iter().flatten().copied().collect()
}

fn present(ids: &[Option<TargetId>]) -> Vec<TargetId> {
    ids.iter().flatten().copied().collect()
}

fn register_lines(app: &App, columns: &[web::Element]) -> Vec<Vec<TargetId>> {
    split::mask_columns(&app.document, columns)
        .into_iter()
        .map(|col| app.register_each(col))
        .collect()
}

pub fn setup_page_targets(app: &App) {
    let doc = &app.document;
    let mut parts = app.parts.borrow_mut();
    parts.page.banner = dom::query_html(doc, SEL_BANNER).map(|el| app.register(vec![el]));
    parts.page.main = dom::query_html(doc, SEL_MAIN_CONTENT).map(|el| app.register(vec![el]));
    parts.page.outro = dom::query_html(doc, SEL_OUTRO).map(|el| app.register(vec![el]));
}

pub fn setup_menu(app: &App) -> Result<(), SiteError> {
    let doc = &app.document;
    dom::require(doc, SEL_MENU_TOGGLE)?;
    let overlay = dom::query_html(doc, SEL_MENU_OVERLAY).ok_or(SiteError::MissingElement(SEL_MENU_OVERLAY))?;
    let content = dom::query_html(doc, SEL_MENU_CONTENT).ok_or(SiteError::MissingElement(SEL_MENU_CONTENT))?;
    let label = dom::query_html(doc, SEL_MENU_LABEL).ok_or(SiteError::MissingElement(SEL_MENU_LABEL))?;
    let media = dom::query_html(doc, SEL_MENU_MEDIA).map(|m| vec![m]).unwrap_or_default();
    let columns = dom::query_all(doc, SEL_MENU_COLUMNS);
    let lines = register_lines(app, &columns);

    let parts = MenuParts {
        label: app.register(vec![label]),
        overlay: app.register(vec![overlay]),
        content: app.register(vec![content]),
        media: app.register(media),
        columns: app.register(dom::query_all_html(doc, SEL_MENU_COLUMNS)),
        lines,
        hamburger: dom::query(doc, SEL_HAMBURGER),
    };
    app.set(&[parts.overlay], &[(Prop::ClipTop, 0.0), (Prop::ClipBottom, 0.0)]);
    app.set(&[parts.content], &[(Prop::YPercent, MENU_CONTENT_HIDDEN_PCT)]);
    app.set(&[parts.media], &[(Prop::Opacity, 0.0)]);
    app.set(&all_lines(&parts.lines), &[(Prop::YPercent, MENU_LINES_HIDDEN_PCT)]);
    log::info!("[menu] ready, {} columns", parts.lines.len());
    app.parts.borrow_mut().menu = Some(parts);
    Ok(())
}

pub fn setup_contact(app: &App) -> Result<(), SiteError> {
    let doc = &app.document;
    let overlay = dom::query_html(doc, SEL_CONTACT_OVERLAY)
        .ok_or(SiteError::MissingElement(SEL_CONTACT_OVERLAY))?;
    let content = dom::query_html(doc, SEL_CONTACT_CONTENT)
        .ok_or(SiteError::MissingElement(SEL_CONTACT_CONTENT))?;
    let media = dom::query_html(doc, SEL_CONTACT_MEDIA).map(|m| vec![m]).unwrap_or_default();
    let columns = dom::query_all(doc, SEL_CONTACT_COLUMNS);
    let lines = register_lines(app, &columns);

    let parts = ContactParts {
        overlay: app.register(vec![overlay]),
        content: app.register(vec![content]),
        media: app.register(media),
        columns: app.register(dom::query_all_html(doc, SEL_CONTACT_COLUMNS)),
        lines,
        close_button: doc.get_element_by_id(ID_CONTACT_CLOSE),
    };
    app.set(&[parts.overlay], &[(Prop::ClipTop, 100.0), (Prop::ClipBottom, 100.0)]);
    app.set(&[parts.content], &[(Prop::YPercent, CONTACT_CONTENT_HIDDEN_PCT)]);
    app.set(&[parts.media], &[(Prop::Opacity, 0.0)]);
    app.set(&all_lines(&parts.lines), &[(Prop::YPercent, CONTACT_LINES_HIDDEN_PCT)]);
    log::info!("[contact] ready, {} columns", parts.lines.len());
    app.parts.borrow_mut().contact = Some(parts);
    Ok(())
}

pub fn setup_panel(app: &App) -> Result<(), SiteError> {
    let doc = &app.document;
    let panel = dom::query_html(doc, SEL_PANEL).ok_or(SiteError::MissingElement(SEL_PANEL))?;
    let section = dom::require(doc, SEL_PANEL_SECTION)?;
    let button = dom::query(doc, SEL_PANEL_BUTTON);
    let button_target = dom::query_html(doc, SEL_PANEL_BUTTON).map(|b| app.register(vec![b]));
    let button_text = doc
        .get_element_by_id(ID_PANEL_BUTTON_TEXT)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| {
            let id = app.register(vec![el.clone()]);
            (el, id)
        });
    let parts = PanelParts {
        panel: app.register(vec![panel]),
        section,
        button,
        button_target,
        button_text,
    };
    app.set(&[parts.panel], &[(Prop::XPercent, -100.0)]);
    log::info!("[over-ons] ready");
    app.parts.borrow_mut().panel = Some(parts);
    Ok(())
}

/// Feed a UI event to the controller and start whatever it hands back.
pub fn dispatch(app: &Rc<App>, event: UiEvent) {
    let transitions = events::dispatch(&mut app.overlays.borrow_mut(), event);
    for t in transitions {
        begin(app, t);
    }
}

fn finish_callback(app: &Rc<App>, t: Transition) -> Callback {
    let app = app.clone();
    Box::new(move || finished(&app, t))
}

fn begin(app: &Rc<App>, t: Transition) {
    log::info!("[{}] {:?} started", t.overlay.label(), t.direction);
    if t.direction == Direction::Open {
        app.acquire_lock(LockOwner::Overlay(t.overlay));
    }
    let done = finish_callback(app, t);
    let planned = match t.overlay {
        OverlayId::MainMenu => begin_menu(app, t.direction, done),
        OverlayId::ContactMenu => begin_contact(app, t.direction, done),
        OverlayId::OverOnsPanel => begin_panel(app, t.direction, done),
    };
    if let Err(done) = planned {
        log::warn!("[{}] no elements; settling immediately", t.overlay.label());
        done();
    }
}

fn finished(app: &Rc<App>, t: Transition) {
    log::info!("[{}] {:?} finished", t.overlay.label(), t.direction);
    match t.direction {
        Direction::Open => {
            if t.overlay == OverlayId::OverOnsPanel {
                swap_panel_label(app, PANEL_LABEL_OPEN);
            }
        }
        Direction::Close => {
            reset_after_close(app, t.overlay);
            app.release_lock(LockOwner::Overlay(t.overlay));
        }
    }
    dispatch(app, UiEvent::TransitionFinished(t.overlay));
    if t.direction == Direction::Close {
        run_all(app.take_close_waiters(t.overlay));
    }
}

/// Put an overlay's inner content back to its hidden start values.
fn reset_after_close(app: &App, id: OverlayId) {
    let parts = app.parts.borrow();
    match id {
        OverlayId::MainMenu => {
            if let Some(m) = &parts.menu {
                app.set(&all_lines(&m.lines), &[(Prop::YPercent, MENU_LINES_HIDDEN_PCT)]);
                app.set(&[m.columns], &[(Prop::Opacity, 1.0)]);
                app.set(&[m.media], &[(Prop::Opacity, 0.0)]);
            }
            drop(parts);
            theme::restore(app);
        }
        OverlayId::ContactMenu => {
            if let Some(c) = &parts.contact {
                app.set(&all_lines(&c.lines), &[(Prop::YPercent, CONTACT_LINES_HIDDEN_PCT)]);
                app.set(&[c.columns], &[(Prop::Opacity, 1.0)]);
                app.set(&[c.media], &[(Prop::Opacity, 0.0)]);
            }
        }
        OverlayId::OverOnsPanel => {
            drop(parts);
            swap_panel_label(app, PANEL_LABEL_CLOSED);
        }
    }
}

fn lines_in(mut tl: Timeline<Callback>, lines: &[Vec<TargetId>]) -> Timeline<Callback> {
    for col in lines.iter().filter(|c| !c.is_empty()) {
        tl = tl.to(
            Tween::new(col.clone(), LINES_SEC, Ease::Hop)
                .prop(Prop::YPercent, 0.0)
                .stagger(LINES_STAGGER_SEC),
            At::FromPreviousStart(LINES_OFFSET_SEC),
        );
    }
    tl
}

pub fn menu_open_timeline(m: &MenuParts, page: &PageTargets) -> Timeline<Callback> {
    let slide = |targets: Vec<TargetId>| Tween::new(targets, MENU_SLIDE_SEC, Ease::Power2Out);
    let tl = Timeline::new()
        .to(slide(vec![m.label]).prop(Prop::YPercent, MENU_LABEL_HIDDEN_PCT), At::End)
        .to(
            slide(present(&[page.banner, page.outro])).prop(Prop::YVh, 100.0),
            At::WithPrevious,
        )
        .to(
            slide(vec![m.overlay])
                .prop(Prop::ClipTop, 0.0)
                .prop(Prop::ClipBottom, 100.0),
            At::WithPrevious,
        )
        .to(slide(vec![m.content]).prop(Prop::YPercent, 0.0), At::WithPrevious)
        .to(
            Tween::one(m.media, MENU_MEDIA_SEC, Ease::Power2Out)
                .prop(Prop::Opacity, 1.0)
                .delay(MENU_MEDIA_DELAY_SEC),
            At::WithPrevious,
        );
    lines_in(tl, &m.lines)
}

pub fn menu_close_timeline(m: &MenuParts, page: &PageTargets) -> Timeline<Callback> {
    let slide = |targets: Vec<TargetId>| Tween::new(targets, MENU_SLIDE_SEC, Ease::Power2Out);
    Timeline::new()
        .to(
            slide(present(&[page.banner, page.outro])).prop(Prop::YVh, 0.0),
            At::End,
        )
        .to(
            slide(vec![m.overlay])
                .prop(Prop::ClipTop, 0.0)
                .prop(Prop::ClipBottom, 0.0),
            At::WithPrevious,
        )
        .to(
            slide(vec![m.content]).prop(Prop::YPercent, MENU_CONTENT_HIDDEN_PCT),
            At::WithPrevious,
        )
        .to(slide(vec![m.label]).prop(Prop::YPercent, 0.0), At::WithPrevious)
        .to(
            Tween::one(m.columns, MENU_DIM_SEC, Ease::Hop).prop(Prop::Opacity, COLUMNS_DIMMED_OPACITY),
            At::WithPrevious,
        )
}

pub fn contact_open_timeline(c: &ContactParts, page: &PageTargets, reveal_close: Callback) -> Timeline<Callback> {
    let push = |targets: Vec<TargetId>| Tween::new(targets, CONTACT_SLIDE_SEC, Ease::Hop);
    let tl = Timeline::new()
        .to(
            push(present(&[page.main, page.outro])).prop(Prop::YVh, CONTACT_PUSH_VH),
            At::End,
        )
        .to(
            push(vec![c.overlay])
                .prop(Prop::ClipTop, 0.0)
                .prop(Prop::ClipBottom, 100.0),
            At::WithPrevious,
        )
        .to(push(vec![c.content]).prop(Prop::YPercent, 0.0), At::WithPrevious)
        .to(
            Tween::one(c.media, CONTACT_MEDIA_SEC, Ease::Power2Out)
                .prop(Prop::Opacity, 1.0)
                .delay(CONTACT_MEDIA_DELAY_SEC),
            At::WithPrevious,
        );
    let tl = lines_in(tl, &c.lines);
    tl.cue(reveal_close, At::Time(CONTACT_CLOSE_BUTTON_AT_SEC))
}

pub fn contact_close_timeline(c: &ContactParts, page: &PageTargets) -> Timeline<Callback> {
    let pull = |targets: Vec<TargetId>| Tween::new(targets, CONTACT_SLIDE_SEC, Ease::Hop);
    Timeline::new()
        .to(pull(present(&[page.main, page.outro])).prop(Prop::YVh, 0.0), At::End)
        .to(
            pull(vec![c.overlay])
                .prop(Prop::ClipTop, 100.0)
                .prop(Prop::ClipBottom, 100.0),
            At::WithPrevious,
        )
        .to(
            pull(vec![c.content]).prop(Prop::YPercent, CONTACT_CONTENT_HIDDEN_PCT),
            At::WithPrevious,
        )
        .to(
            pull(vec![c.columns]).prop(Prop::Opacity, COLUMNS_DIMMED_OPACITY),
            At::WithPrevious,
        )
}

pub fn panel_slide_timeline(p: &PanelParts, direction: Direction) -> Timeline<Callback> {
    let x = match direction {
        Direction::Open => 0.0,
        Direction::Close => -100.0,
    };
    Timeline::new().to(
        Tween::one(p.panel, PANEL_SLIDE_SEC, Ease::Hop).prop(Prop::XPercent, x),
        At::End,
    )
}

fn begin_menu(app: &Rc<App>, direction: Direction, done: Callback) -> Result<(), Callback> {
    let parts = app.parts.borrow();
    let Some(m) = &parts.menu else {
        return Err(done);
    };
    let tl = match direction {
        Direction::Open => {
            if let Some(h) = &m.hamburger {
                _ = h.class_list().add_1("active");
            }
            menu_open_timeline(m, &parts.page)
        }
        Direction::Close => {
            if let Some(h) = &m.hamburger {
                _ = h.class_list().remove_1("active");
            }
            menu_close_timeline(m, &parts.page)
        }
    };
    drop(parts);
    if direction == Direction::Open {
        theme::force_light(app);
    }
    app.play(tl, Some(done));
    Ok(())
}

fn begin_contact(app: &Rc<App>, direction: Direction, done: Callback) -> Result<(), Callback> {
    let parts = app.parts.borrow();
    let Some(c) = &parts.contact else {
        return Err(done);
    };
    let tl = match direction {
        Direction::Open => {
            let button = c.close_button.clone();
            let reveal: Callback = Box::new(move || {
                if let Some(b) = button {
                    _ = b.class_list().add_1("visible");
                }
            });
            contact_open_timeline(c, &parts.page, reveal)
        }
        Direction::Close => {
            if let Some(b) = &c.close_button {
                _ = b.class_list().remove_1("visible");
            }
            contact_close_timeline(c, &parts.page)
        }
    };
    drop(parts);
    app.play(tl, Some(done));
    Ok(())
}

fn begin_panel(app: &Rc<App>, direction: Direction, done: Callback) -> Result<(), Callback> {
    let parts = app.parts.borrow();
    let Some(p) = &parts.panel else {
        return Err(done);
    };
    let desktop = !dom::viewport().is_compact();
    match direction {
        Direction::Open => {
            if let (true, Some(b)) = (desktop, &p.button) {
                _ = b.class_list().add_1("panel-open");
            }
            let section = p.section.clone();
            let top = dom::document_top(&section);
            drop(parts);
            let app_slide = app.clone();
            let slide_in: Callback = Box::new(move || {
                _ = section.class_list().add_1("panel-active");
                let tl = match &app_slide.parts.borrow().panel {
                    Some(p) => panel_slide_timeline(p, Direction::Open),
                    None => Timeline::new(),
                };
                app_slide.play(tl, Some(done));
            });
            app.scroll_to(top, PANEL_SCROLL_SEC, Ease::ExpoOut, true, Some(slide_in));
        }
        Direction::Close => {
            if let Some(b) = &p.button {
                _ = b.class_list().remove_1("panel-open");
            }
            _ = p.section.class_list().remove_1("panel-active");
            let tl = panel_slide_timeline(p, Direction::Close);
            drop(parts);
            app.play(tl, Some(done));
        }
    }
    Ok(())
}

/// Desktop-only label swap on the panel button: fade out, swap text,
/// squeeze the button and fade back in.
fn swap_panel_label(app: &App, text: &'static str) {
    if dom::viewport().is_compact() {
        return;
    }
    let parts = app.parts.borrow();
    let Some(PanelParts {
        button_target: Some(button),
        button_text: Some((label, label_id)),
        ..
    }) = &parts.panel
    else {
        return;
    };
    let label_el = label.clone();
    let swap: Callback = Box::new(move || label_el.set_text_content(Some(text)));
    let tl = Timeline::new()
        .to(
            Tween::one(*label_id, PANEL_LABEL_FADE_SEC, Ease::Power2Out).prop(Prop::Opacity, 0.0),
            At::End,
        )
        .cue(swap, At::End)
        .to(
            Tween::one(*button, PANEL_BUTTON_SQUEEZE_SEC, Ease::Power2Out).prop(Prop::ScaleX, 0.8),
            At::End,
        )
        .to(
            Tween::one(*label_id, PANEL_LABEL_FADE_SEC, Ease::Power2Out).prop(Prop::Opacity, 1.0),
            At::WithPrevious,
        )
        .to(
            Tween::one(*button, PANEL_BUTTON_SQUEEZE_SEC, Ease::BackOut(1.7)).prop(Prop::ScaleX, 1.0),
            At::Time(PANEL_LABEL_FADE_SEC + PANEL_BUTTON_SQUEEZE_SEC),
        );
    drop(parts);
    app.play(tl, None);
}
