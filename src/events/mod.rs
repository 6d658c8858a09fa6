//! DOM listeners that turn user input into `UiEvent`s.

mod keyboard;
mod pointer;

pub use keyboard::wire_escape;
pub use pointer::{wire_overlay_triggers, wire_scroll_input};
