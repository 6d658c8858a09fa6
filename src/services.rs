//! Diensten page: service cards, the floating "Wij bouwen" label and the
//! description panel.

use crate::animator::Callback;
use crate::app::App;
use crate::constants::*;
use crate::dom;
use site_core::services::{Selection, Service, ServiceSelector, SERVICES};
use site_core::{At, Ease, Prop, SiteError, TargetId, Timeline, Tween};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Description {
    panel: Option<web::Element>,
    title: web::Element,
    text: web::Element,
    logos: Option<web::Element>,
    fade: TargetId,
}

struct ServicesPage {
    items: Vec<web::Element>,
    selector: RefCell<ServiceSelector>,
    description: Description,
    label: Option<(TargetId, web::Element)>,
}

pub fn setup(app: &Rc<App>) -> Result<(), SiteError> {
    let doc = &app.document;
    let items = dom::query_all(doc, SEL_DIENST_ITEMS);
    if items.is_empty() {
        return Err(SiteError::MissingElement(SEL_DIENST_ITEMS));
    }
    let title = dom::require(doc, SEL_DIENST_TITLE)?;
    let text = dom::require(doc, SEL_DIENST_TEXT)?;
    let logos = dom::query(doc, SEL_DIENST_LOGOS);
    let mut faded = vec![];
    for el in [Some(&title), Some(&text), logos.as_ref()].into_iter().flatten() {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            faded.push(html.clone());
        }
    }
    let description = Description {
        panel: dom::query(doc, SEL_DIENST_DESCRIPTION),
        title,
        text,
        logos,
        fade: app.register(faded),
    };
    let label = match (
        dom::query_html(doc, SEL_FLOATING_LABEL),
        dom::query(doc, SEL_DIENSTEN_HEADER),
    ) {
        (Some(label), Some(header)) => Some((app.register(vec![label]), header)),
        _ => None,
    };

    let count = items.len().min(SERVICES.len());
    let page = Rc::new(ServicesPage {
        items,
        selector: RefCell::new(ServiceSelector::new(count)),
        description,
        label,
    });
    page.init(app);

    for (index, item) in page.items.iter().enumerate().take(count) {
        let app = app.clone();
        let page = page.clone();
        dom::add_listener(item, "click", move |_| page.select(&app, index));
    }

    if let Some(w) = web::window() {
        let app = app.clone();
        let page = page.clone();
        dom::add_listener(&w, "resize", move |_| page.place_label(&app));
    }
    log::info!("[diensten] {} services", count);
    Ok(())
}

impl ServicesPage {
    fn init(&self, app: &App) {
        let Some(active) = self.selector.borrow().active() else {
            return;
        };
        self.mark_active(Some(active));
        fill_description(&self.description, &SERVICES[active]);
        if let Some((label, _)) = &self.label {
            if !dom::viewport().is_mobile() {
                self.place_label(app);
                app.set(&[*label], &[(Prop::Opacity, 1.0)]);
            }
        }
    }

    fn select(&self, app: &App, index: usize) {
        let mobile = dom::viewport().is_mobile();
        let selection = self.selector.borrow_mut().select(index, mobile);
        log::debug!("[diensten] {:?}", selection);
        match selection {
            Selection::Unchanged => {}
            Selection::Activated(i) => {
                self.mark_active(Some(i));
                self.move_label(app, i);
                self.crossfade(app, i);
            }
            Selection::Expanded(i) => {
                self.mark_active(Some(i));
                if let Some(panel) = &self.description.panel {
                    _ = panel.class_list().add_1("active");
                }
                self.crossfade(app, i);
            }
            Selection::Collapsed => {
                self.mark_active(None);
                if let Some(panel) = &self.description.panel {
                    _ = panel.class_list().remove_1("active");
                }
            }
        }
    }

    fn mark_active(&self, active: Option<usize>) {
        for (i, item) in self.items.iter().enumerate() {
            _ = if Some(i) == active {
                item.class_list().add_1("active")
            } else {
                item.class_list().remove_1("active")
            };
        }
    }

    /// Offset of card `index` inside the diensten header.
    fn label_offset(&self, index: usize) -> Option<(f64, f64)> {
        let (_, header) = self.label.as_ref()?;
        let item = self.items.get(index)?;
        let r = item.get_bounding_client_rect();
        let h = header.get_bounding_client_rect();
        Some((r.left() - h.left(), r.top() - h.top()))
    }

    fn place_label(&self, app: &App) {
        if dom::viewport().is_mobile() {
            return;
        }
        let active = self.selector.borrow().active();
        if let (Some((label, _)), Some((x, y))) = (&self.label, active.and_then(|i| self.label_offset(i))) {
            app.set(&[*label], &[(Prop::X, x), (Prop::Y, y)]);
        }
    }

    /// Desktop moves the label vertically only.
    fn move_label(&self, app: &App, index: usize) {
        if let (Some((label, _)), Some((_, y))) = (&self.label, self.label_offset(index)) {
            app.play(
                Timeline::new().to(
                    Tween::one(*label, DIENST_LABEL_MOVE_SEC, Ease::Power2Out).prop(Prop::Y, y),
                    At::End,
                ),
                None,
            );
        }
    }

    fn crossfade(&self, app: &App, index: usize) {
        let fade = self.description.fade;
        let title = self.description.title.clone();
        let text = self.description.text.clone();
        let logos = self.description.logos.clone();
        let fill: Callback = Box::new(move || {
            fill_parts(&title, &text, logos.as_ref(), &SERVICES[index]);
        });
        let tl = Timeline::new()
            .to(
                Tween::one(fade, DIENST_FADE_OUT_SEC, Ease::Power2InOut).prop(Prop::Opacity, 0.0),
                At::End,
            )
            .cue(fill, At::End)
            .to(
                Tween::one(fade, DIENST_FADE_IN_SEC, Ease::Power2Out).prop(Prop::Opacity, 1.0),
                At::End,
            );
        app.play(tl, None);
    }
}

fn fill_description(d: &Description, service: &Service) {
    fill_parts(&d.title, &d.text, d.logos.as_ref(), service);
}

fn fill_parts(title: &web::Element, text: &web::Element, logos: Option<&web::Element>, service: &Service) {
    title.set_text_content(Some(service.title));
    text.set_text_content(Some(service.text));
    let Some(container) = logos else {
        return;
    };
    container.set_inner_html("");
    let Some(doc) = dom::window_document() else {
        return;
    };
    for logo in service.logos {
        let Some(img) = doc
            .create_element("img")
            .ok()
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        else {
            continue;
        };
        img.set_src(logo.src);
        img.set_alt(logo.alt);
        img.set_class_name(&logo.class_name());
        _ = container.append_child(&img);
    }
}
