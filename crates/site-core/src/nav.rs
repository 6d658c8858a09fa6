//! Where each navigation link goes, and what has to close first.

use crate::constants::CONTACT_SCROLL_OFFSET_PX;
use crate::overlay::{OverlayController, OverlayId, OverlayState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Diensten,
}

impl Page {
    pub fn from_path(path: &str) -> Page {
        if path.contains("diensten.html") {
            Page::Diensten
        } else {
            Page::Home
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLink {
    Home,
    Diensten,
    OverOns,
    Contact,
    PanelDiensten,
    PanelContact,
    BannerArrow,
    DienstenBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Top,
    OverOnsSection,
    OutroSection,
    ContactSection,
}

impl Anchor {
    pub fn element_id(self) -> Option<&'static str> {
        match self {
            Anchor::Top => None,
            Anchor::OverOnsSection => Some("banner-background-section"),
            Anchor::OutroSection => Some("outro-section"),
            Anchor::ContactSection => Some("contact"),
        }
    }

    /// Added to the anchor's document offset.
    pub fn offset(self) -> f64 {
        match self {
            Anchor::OutroSection => CONTACT_SCROLL_OFFSET_PX,
            _ => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    ScrollTo(Anchor),
    Navigate(&'static str),
    Nothing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavPlan {
    /// Overlay whose close must complete before `action` runs.
    pub close_first: Option<OverlayId>,
    pub action: NavAction,
}

fn closing_needed(overlays: &OverlayController, id: OverlayId) -> Option<OverlayId> {
    matches!(overlays.state(id), OverlayState::Open | OverlayState::Closing).then_some(id)
}

pub fn plan(page: Page, link: NavLink, overlays: &OverlayController) -> NavPlan {
    let menu = closing_needed(overlays, OverlayId::MainMenu);
    let (close_first, action) = match (page, link) {
        (Page::Home, NavLink::Home) => (menu, NavAction::ScrollTo(Anchor::Top)),
        (Page::Home, NavLink::OverOns) => (menu, NavAction::ScrollTo(Anchor::OverOnsSection)),
        (Page::Home, NavLink::Contact) => (menu, NavAction::ScrollTo(Anchor::OutroSection)),
        (Page::Home, NavLink::Diensten) => (menu, NavAction::Navigate("/diensten.html")),
        (Page::Diensten, NavLink::Home) => (menu, NavAction::Navigate("/index.html")),
        (Page::Diensten, NavLink::OverOns) => {
            (menu, NavAction::Navigate("/index.html#banner-background-section"))
        }
        (Page::Diensten, NavLink::Contact) => (menu, NavAction::Navigate("/index.html#outro-section")),
        (Page::Diensten, NavLink::Diensten) => (menu, NavAction::Nothing),
        (_, NavLink::PanelDiensten) | (_, NavLink::BannerArrow) => {
            (None, NavAction::Navigate("/diensten.html"))
        }
        (_, NavLink::PanelContact) => (
            closing_needed(overlays, OverlayId::OverOnsPanel),
            NavAction::ScrollTo(Anchor::ContactSection),
        ),
        (_, NavLink::DienstenBack) => (None, NavAction::Navigate("/index.html#services")),
    };
    NavPlan {
        close_first,
        action,
    }
}
