//! Menu chrome colors: white over the dark section, blue elsewhere.

use crate::app::App;
use crate::constants::*;
use crate::dom;
use site_core::theme::MenuTheme;
use site_core::{OverlayId, OverlayState};
use std::cell::Cell;
use web_sys as web;

pub struct MenuChrome {
    label: web::HtmlElement,
    bars: Vec<web::HtmlElement>,
    icon: web::HtmlElement,
    dark_section: Option<web::Element>,
    applied: Cell<Option<MenuTheme>>,
}

impl MenuChrome {
    pub fn find(document: &web::Document) -> Option<Self> {
        let label = dom::query_html(document, SEL_MENU_LABEL)?;
        let icon = dom::query_html(document, SEL_HAMBURGER)?;
        let bars = dom::query_all_html(document, SEL_HAMBURGER_BARS);
        if bars.is_empty() {
            return None;
        }
        Some(Self {
            label,
            bars,
            icon,
            dark_section: document.get_element_by_id(ID_DARK_SECTION),
            applied: Cell::new(None),
        })
    }

    /// Theme implied by where the dark section sits right now.
    pub fn theme_for_scroll(&self) -> MenuTheme {
        match &self.dark_section {
            Some(section) => {
                let rect = section.get_bounding_client_rect();
                MenuTheme::for_section(rect.top(), rect.bottom())
            }
            None => MenuTheme::OnLight,
        }
    }

    pub fn apply(&self, theme: MenuTheme) {
        if self.applied.get() == Some(theme) {
            return;
        }
        let colors = theme.colors();
        dom::set_style(&self.label, "color", colors.label);
        for bar in &self.bars {
            dom::set_style(bar, "background-color", colors.bars);
        }
        dom::set_style(&self.icon, "border-color", colors.border);
        self.applied.set(Some(theme));
    }
}

/// Opening the menu always shows the blue chrome.
pub fn force_light(app: &App) {
    if let Some(chrome) = &app.chrome {
        chrome.apply(MenuTheme::OnLight);
    }
}

/// Recompute from the section position; used after the menu closes.
pub fn restore(app: &App) {
    if let Some(chrome) = &app.chrome {
        chrome.apply(chrome.theme_for_scroll());
    }
}

/// Per-frame update. The open menu owns the chrome until it has closed.
pub fn refresh(app: &App) {
    if app.overlay_state(OverlayId::MainMenu) == OverlayState::Closed {
        restore(app);
    }
}
