//! Contact form rules: subject presets, field validation, thank-you text.

use crate::viewport::ViewportClass;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormIntent {
    Offerte,
    Gesprek,
    AndereVraag,
}

impl FormIntent {
    /// Subject option selected when the form opens, if any.
    pub fn preset_subject(self) -> Option<&'static str> {
        match self {
            FormIntent::Offerte => Some("Offerte aanvraag"),
            FormIntent::Gesprek => Some("Gesprek inplannen"),
            FormIntent::AndereVraag => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    pub fn from_input_type(ty: &str) -> FieldKind {
        match ty {
            "email" => FieldKind::Email,
            "textarea" => FieldKind::TextArea,
            _ => FieldKind::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required => "Dit veld is verplicht",
            FieldError::InvalidEmail => "Voer een geldig e-mailadres in",
        }
    }
}

/// Check one required field.
pub fn validate_required(kind: FieldKind, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if kind == FieldKind::Email && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInput {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Accepted { name: String },
    /// Index into the validated fields, with that field's error.
    Rejected(Vec<(usize, FieldError)>),
}

/// Validate all required fields; `name` is taken from the field called "name".
pub fn validate_form(required: &[FieldInput]) -> FormOutcome {
    let errors: Vec<(usize, FieldError)> = required
        .iter()
        .enumerate()
        .filter_map(|(i, f)| validate_required(f.kind, &f.value).err().map(|e| (i, e)))
        .collect();
    if !errors.is_empty() {
        return FormOutcome::Rejected(errors);
    }
    let name = required
        .iter()
        .find(|f| f.name == "name")
        .map(|f| f.value.trim().to_string())
        .unwrap_or_default();
    FormOutcome::Accepted { name }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn thank_you_html(name: &str) -> String {
    let name = name.trim();
    let who = if name.is_empty() { "je".to_string() } else { escape_html(name) };
    format!(
        "Bedankt voor je<br>bericht, {}!<br><br><span style=\"font-weight: normal; font-size: 0.5em; line-height: 1.4; padding-left: 2rem; padding-right: 2rem; display: block;\">We nemen zo snel mogelijk contact met je op.</span>",
        who
    )
}

/// Thank-you title size, 20% above the regular title for each viewport class.
pub fn thank_you_font_size(class: ViewportClass) -> &'static str {
    match class {
        ViewportClass::Mobile => "2.6rem",
        ViewportClass::Tablet => "3.4rem",
        ViewportClass::Desktop => "4.2rem",
    }
}

pub const FORM_TITLE: &str = "Vertel ons wat je wil!";
