//! Text splitting for word fades and masked line reveals.

use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

fn span(document: &web::Document, class: &str) -> Option<web::HtmlElement> {
    let el = document
        .create_element("span")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    el.set_class_name(class);
    Some(el)
}

/// Replace `el`'s text with one inline-block span per word.
pub fn split_words(document: &web::Document, el: &web::Element) -> Vec<web::HtmlElement> {
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(None);
    let mut words = Vec::new();
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            _ = el.append_child(&document.create_text_node(" "));
        }
        let Some(w) = span(document, "word") else {
            continue;
        };
        dom::set_style(&w, "display", "inline-block");
        w.set_text_content(Some(word));
        _ = el.append_child(&w);
        words.push(w);
    }
    words
}

/// Wrap the children of `el` in an overflow mask and return the inner line,
/// which can then slide in and out of view.
pub fn mask_line(document: &web::Document, el: &web::Element) -> Option<web::HtmlElement> {
    let mask = span(document, "line-mask")?;
    dom::set_style(&mask, "display", "block");
    dom::set_style(&mask, "overflow", "hidden");
    let line = span(document, "line")?;
    dom::set_style(&line, "display", "block");
    while let Some(child) = el.first_child() {
        _ = line.append_child(&child);
    }
    _ = mask.append_child(&line);
    _ = el.append_child(&mask);
    Some(line)
}

/// Masked lines for every `a, p` inside each column, grouped per column.
pub fn mask_columns(document: &web::Document, columns: &[web::Element]) -> Vec<Vec<web::HtmlElement>> {
    columns
        .iter()
        .map(|col| {
            dom::query_all_in(col, "a, p")
                .iter()
                .filter_map(|el| mask_line(document, el))
                .collect()
        })
        .collect()
}
