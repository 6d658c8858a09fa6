// Host-side tests for navigation plans, the contact form, the diensten
// selector, menu theming and the scroll lock.
// The main crate is wasm-only, so these drive the platform-free core directly.

use site_core::form::{
    is_valid_email, thank_you_font_size, thank_you_html, validate_form, FieldError, FieldInput,
    FieldKind, FormIntent, FormOutcome,
};
use site_core::lock::{LockChange, LockOwner, ScrollLock};
use site_core::nav::{plan, Anchor, NavAction, NavLink, Page};
use site_core::services::{Selection, ServiceSelector, SERVICES};
use site_core::theme::MenuTheme;
use site_core::{OverlayController, OverlayId, ViewportClass};

fn field(name: &str, kind: FieldKind, value: &str) -> FieldInput {
    FieldInput {
        name: name.to_string(),
        kind,
        value: value.to_string(),
    }
}

fn with_open(id: OverlayId) -> OverlayController {
    let mut ctrl = OverlayController::new();
    let _ = ctrl.open(id);
    let _ = ctrl.complete(id);
    ctrl
}

#[test]
fn page_from_path() {
    assert_eq!(Page::from_path("/"), Page::Home);
    assert_eq!(Page::from_path("/index.html"), Page::Home);
    assert_eq!(Page::from_path("/diensten.html"), Page::Diensten);
}

#[test]
fn home_links_scroll_in_place() {
    let ctrl = OverlayController::new();
    let p = plan(Page::Home, NavLink::Contact, &ctrl);
    assert_eq!(p.close_first, None);
    assert_eq!(p.action, NavAction::ScrollTo(Anchor::OutroSection));
    assert_eq!(Anchor::OutroSection.offset(), -20.0);
    assert_eq!(
        plan(Page::Home, NavLink::OverOns, &ctrl).action,
        NavAction::ScrollTo(Anchor::OverOnsSection)
    );
    assert_eq!(Anchor::Top.element_id(), None);
}

#[test]
fn links_from_the_open_menu_close_it_first() {
    let ctrl = with_open(OverlayId::MainMenu);
    for link in [NavLink::Home, NavLink::Diensten, NavLink::OverOns, NavLink::Contact] {
        assert_eq!(plan(Page::Home, link, &ctrl).close_first, Some(OverlayId::MainMenu));
    }
}

#[test]
fn diensten_page_links_navigate_home() {
    let ctrl = OverlayController::new();
    assert_eq!(
        plan(Page::Diensten, NavLink::Contact, &ctrl).action,
        NavAction::Navigate("/index.html#outro-section")
    );
    assert_eq!(
        plan(Page::Diensten, NavLink::Diensten, &ctrl).action,
        NavAction::Nothing
    );
    assert_eq!(
        plan(Page::Diensten, NavLink::DienstenBack, &ctrl).action,
        NavAction::Navigate("/index.html#services")
    );
}

#[test]
fn panel_contact_closes_the_panel_then_scrolls() {
    let ctrl = with_open(OverlayId::OverOnsPanel);
    let p = plan(Page::Home, NavLink::PanelContact, &ctrl);
    assert_eq!(p.close_first, Some(OverlayId::OverOnsPanel));
    assert_eq!(p.action, NavAction::ScrollTo(Anchor::ContactSection));
    assert_eq!(
        plan(Page::Home, NavLink::PanelDiensten, &ctrl).action,
        NavAction::Navigate("/diensten.html")
    );
}

#[test]
fn empty_required_field_is_rejected() {
    let outcome = validate_form(&[
        field("name", FieldKind::Text, "  "),
        field("email", FieldKind::Email, "a@b.nl"),
    ]);
    assert_eq!(
        outcome,
        FormOutcome::Rejected(vec![(0, FieldError::Required)])
    );
}

#[test]
fn malformed_email_is_rejected() {
    for bad in ["plain", "a@b", "a b@c.nl", "@c.nl"] {
        assert!(!is_valid_email(bad), "{bad}");
    }
    assert!(is_valid_email(" jan@nieuwnet.nl "));
    let outcome = validate_form(&[field("email", FieldKind::Email, "jan@")]);
    assert_eq!(
        outcome,
        FormOutcome::Rejected(vec![(0, FieldError::InvalidEmail)])
    );
}

#[test]
fn errors_point_at_fields_by_position() {
    let outcome = validate_form(&[
        field("", FieldKind::Text, "ok"),
        field("", FieldKind::Text, ""),
        field("", FieldKind::Email, "nope"),
    ]);
    assert_eq!(
        outcome,
        FormOutcome::Rejected(vec![(1, FieldError::Required), (2, FieldError::InvalidEmail)])
    );
}

#[test]
fn accepted_form_reports_the_trimmed_name() {
    let outcome = validate_form(&[
        field("name", FieldKind::Text, " Jan "),
        field("email", FieldKind::Email, "jan@nieuwnet.nl"),
        field("message", FieldKind::TextArea, "Hoi"),
    ]);
    assert_eq!(
        outcome,
        FormOutcome::Accepted {
            name: "Jan".to_string()
        }
    );
}

#[test]
fn thank_you_escapes_the_name() {
    let html = thank_you_html("<b>Jan</b>");
    assert!(html.contains("&lt;b&gt;Jan&lt;/b&gt;"));
    assert!(thank_you_html("").contains("bericht, je!"));
    assert_eq!(thank_you_font_size(ViewportClass::Desktop), "4.2rem");
}

#[test]
fn intents_preset_the_subject() {
    assert_eq!(FormIntent::Offerte.preset_subject(), Some("Offerte aanvraag"));
    assert_eq!(FormIntent::Gesprek.preset_subject(), Some("Gesprek inplannen"));
    assert_eq!(FormIntent::AndereVraag.preset_subject(), None);
    assert_eq!(FieldKind::from_input_type("email"), FieldKind::Email);
}

#[test]
fn desktop_selection_activates_once() {
    let mut s = ServiceSelector::new(SERVICES.len());
    assert_eq!(s.active(), Some(0));
    assert_eq!(s.select(0, false), Selection::Unchanged);
    assert_eq!(s.select(3, false), Selection::Activated(3));
    assert_eq!(s.select(99, false), Selection::Unchanged);
    assert_eq!(s.active(), Some(3));
}

#[test]
fn mobile_selection_toggles_cards() {
    let mut s = ServiceSelector::new(SERVICES.len());
    assert_eq!(s.select(0, true), Selection::Collapsed);
    assert_eq!(s.active(), None);
    assert_eq!(s.select(2, true), Selection::Expanded(2));
    assert_eq!(s.select(4, true), Selection::Expanded(4));
}

#[test]
fn every_service_has_logos() {
    assert_eq!(SERVICES.len(), 5);
    for service in SERVICES.iter() {
        assert!(!service.title.is_empty());
        assert!(!service.logos.is_empty());
    }
    assert_eq!(SERVICES[0].logos[3].class_name(), "dienst-logo vercel-logo");
}

#[test]
fn menu_theme_follows_the_dark_section() {
    assert_eq!(MenuTheme::for_section(0.0, 900.0), MenuTheme::OnDark);
    assert_eq!(MenuTheme::for_section(200.0, 900.0), MenuTheme::OnLight);
    assert_eq!(MenuTheme::for_section(-900.0, 10.0), MenuTheme::OnLight);
    assert_eq!(MenuTheme::OnDark.colors().label, "#FFFFFF");
}

#[test]
fn scroll_lock_holds_until_last_owner_releases() {
    let mut lock = ScrollLock::new();
    let menu = LockOwner::Overlay(OverlayId::MainMenu);
    assert_eq!(lock.acquire(menu), LockChange::Engaged);
    assert_eq!(lock.acquire(LockOwner::ContactForm), LockChange::Unchanged);
    assert_eq!(lock.release(menu), LockChange::Unchanged);
    assert!(lock.is_locked());
    assert_eq!(lock.release(LockOwner::ContactForm), LockChange::Released);
    assert_eq!(lock.release(LockOwner::ContactForm), LockChange::Unchanged);
    assert!(!lock.is_locked());
}
