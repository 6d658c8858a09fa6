//! UI event dispatch into the overlay controller.
//!
//! Trigger sources (clicks, keys, timeline completions) only produce
//! [`UiEvent`]s; the transition rules live in [`dispatch`].

use crate::overlay::{Dispatch, OverlayController, OverlayId, OverlayState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    MenuToggle,
    ContactCta,
    ContactClose,
    ContactBackdrop,
    OverOnsToggle,
    OverOnsClose,
    Escape,
    /// Close an overlay ahead of a navigation action.
    CloseFor(OverlayId),
    TransitionFinished(OverlayId),
}

pub fn dispatch(overlays: &mut OverlayController, event: UiEvent) -> Dispatch {
    match event {
        UiEvent::MenuToggle => overlays.toggle(OverlayId::MainMenu),
        UiEvent::ContactCta => overlays.open(OverlayId::ContactMenu),
        UiEvent::ContactClose | UiEvent::ContactBackdrop => overlays.close(OverlayId::ContactMenu),
        UiEvent::OverOnsToggle => overlays.toggle(OverlayId::OverOnsPanel),
        UiEvent::OverOnsClose => overlays.close(OverlayId::OverOnsPanel),
        UiEvent::Escape => {
            if overlays.is_open(OverlayId::ContactMenu) {
                overlays.close(OverlayId::ContactMenu)
            } else {
                overlays.close(OverlayId::OverOnsPanel)
            }
        }
        UiEvent::CloseFor(id) => overlays.close(id),
        UiEvent::TransitionFinished(id) => overlays.complete(id),
    }
}

/// Wheel input is swallowed while the panel or the main menu is fully open.
pub fn blocks_wheel(overlays: &OverlayController) -> bool {
    overlays.is_open(OverlayId::OverOnsPanel) || overlays.is_open(OverlayId::MainMenu)
}

/// Touch scrolling is swallowed while any overlay is fully open.
pub fn blocks_touch(overlays: &OverlayController) -> bool {
    OverlayId::ALL
        .iter()
        .any(|id| overlays.state(*id) == OverlayState::Open)
}
