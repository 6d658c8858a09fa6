//! Contact form: intent buttons, inline validation and the thank-you title.

use crate::app::App;
use crate::constants::*;
use crate::dom;
use site_core::form::{
    thank_you_font_size, thank_you_html, validate_form, FieldError, FieldInput, FieldKind, FormIntent,
    FormOutcome, FORM_TITLE,
};
use site_core::lock::LockOwner;
use site_core::SiteError;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const REQUIRED_FIELDS: &str = "input[required], textarea[required]";
const ALL_FIELDS: &str = "input, textarea";
const HIDDEN_ON_THANKS: &str = ".form-group, button[type=\"submit\"]";

struct ContactForm {
    section: web::Element,
    form: web::HtmlFormElement,
}

pub fn setup(app: &Rc<App>) -> Result<(), SiteError> {
    let doc = &app.document;
    let section = dom::require_id(doc, ID_FORM_SECTION)?;
    let form = dom::require_id(doc, ID_FORM)?
        .dyn_into::<web::HtmlFormElement>()
        .map_err(|_| SiteError::MissingElement(ID_FORM))?;
    let cf = Rc::new(ContactForm { section, form });

    for (id, intent) in [
        (ID_FORM_OFFERTE, FormIntent::Offerte),
        (ID_FORM_GESPREK, FormIntent::Gesprek),
        (ID_FORM_ANDERE, FormIntent::AndereVraag),
    ] {
        let app = app.clone();
        let cf = cf.clone();
        dom::add_click_listener(doc, id, move |ev| {
            ev.prevent_default();
            log::info!("[form] open for {:?}", intent);
            cf.show(&app, intent);
        });
    }

    {
        let app = app.clone();
        let cf = cf.clone();
        dom::add_click_listener(doc, ID_FORM_CANCEL, move |_| cf.hide(&app));
    }

    {
        let cf_submit = cf.clone();
        dom::add_listener(&cf.form, "submit", move |ev| {
            ev.prevent_default();
            cf_submit.submit();
        });
    }

    for field in dom::query_all_in(&cf.form, ALL_FIELDS) {
        let target = field.clone();
        dom::add_listener(&field, "input", move |_| clear_error(&target));
    }

    log::info!("[form] ready");
    Ok(())
}

impl ContactForm {
    fn show(&self, app: &App, intent: FormIntent) {
        if let (Some(subject), Some(select)) = (
            intent.preset_subject(),
            app.document
                .get_element_by_id(ID_FORM_SUBJECT)
                .and_then(|el| el.dyn_into::<web::HtmlSelectElement>().ok()),
        ) {
            select.set_value(subject);
        }
        _ = self.section.class_list().add_1("show");
        app.acquire_lock(LockOwner::ContactForm);
    }

    fn hide(&self, app: &App) {
        log::info!("[form] closed");
        _ = self.section.class_list().remove_1("show");
        app.release_lock(LockOwner::ContactForm);
        self.reset();
    }

    fn submit(&self) {
        self.clear_errors();
        let fields = dom::query_all_in(&self.form, REQUIRED_FIELDS);
        let inputs: Vec<FieldInput> = fields.iter().map(field_input).collect();
        match validate_form(&inputs) {
            FormOutcome::Rejected(errors) => {
                log::info!("[form] {} invalid field(s)", errors.len());
                for (index, err) in errors {
                    if let Some(field) = fields.get(index) {
                        show_error(field, err);
                    }
                }
            }
            FormOutcome::Accepted { name } => {
                let name = if name.is_empty() {
                    self.value_of("[name=\"name\"]").unwrap_or_default()
                } else {
                    name
                };
                log::info!("[form] accepted");
                self.thank(&name);
            }
        }
    }

    fn thank(&self, name: &str) {
        let title = self.title();
        if let Some(title) = &title {
            title.set_inner_html(&thank_you_html(name));
            for prop in ["padding-left", "padding-right", "text-align", "line-height"] {
                dom::clear_style(title, prop);
            }
            dom::set_style(title, "font-size", thank_you_font_size(dom::viewport().class()));
        }
        for el in dom::query_all_in(&self.form, HIDDEN_ON_THANKS) {
            if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                dom::set_style(&el, "display", "none");
            }
        }
    }

    fn reset(&self) {
        if let Some(title) = self.title() {
            title.set_text_content(Some(FORM_TITLE));
            for prop in ["color", "font-size", "text-align", "line-height"] {
                dom::clear_style(&title, prop);
            }
        }
        for el in dom::query_all_in(&self.form, HIDDEN_ON_THANKS) {
            if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                dom::clear_style(&el, "display");
            }
        }
        self.form.reset();
        self.clear_errors();
    }

    fn title(&self) -> Option<web::HtmlElement> {
        self.form
            .query_selector("h2")
            .ok()
            .flatten()
            .or_else(|| {
                self.form
                    .parent_element()
                    .and_then(|p| p.query_selector("h2").ok().flatten())
            })
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    }

    fn value_of(&self, selector: &str) -> Option<String> {
        let el = self.form.query_selector(selector).ok().flatten()?;
        Some(field_value(&el))
    }

    fn clear_errors(&self) {
        for field in dom::query_all_in(&self.form, ALL_FIELDS) {
            clear_error(&field);
        }
    }
}

fn field_value(el: &web::Element) -> String {
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn field_input(el: &web::Element) -> FieldInput {
    let kind = match el.dyn_ref::<web::HtmlInputElement>() {
        Some(input) => FieldKind::from_input_type(&input.type_()),
        None => FieldKind::TextArea,
    };
    let name = el
        .get_attribute("name")
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| el.id());
    FieldInput {
        name,
        kind,
        value: field_value(el),
    }
}

fn error_slot(field: &web::Element) -> Option<web::HtmlElement> {
    field
        .next_element_sibling()
        .filter(|el| el.class_list().contains("error-message"))
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn show_error(field: &web::Element, err: FieldError) {
    _ = field.class_list().add_1("error");
    if let Some(slot) = error_slot(field) {
        slot.set_text_content(Some(err.message()));
        dom::set_style(&slot, "display", "block");
    }
}

fn clear_error(field: &web::Element) {
    _ = field.class_list().remove_1("error");
    if let Some(slot) = error_slot(field) {
        dom::set_style(&slot, "display", "none");
    }
}
