//! Platform-free behavior for the NieuwNet site.
//!
//! Nothing in this crate touches the DOM. The web front-end feeds it scroll
//! positions, elapsed time and UI events, and applies what comes back.

pub mod constants;
pub mod copy;
pub mod easing;
pub mod error;
pub mod events;
pub mod form;
pub mod lock;
pub mod nav;
pub mod overlay;
pub mod rotator;
pub mod scroll;
pub mod services;
pub mod telescope;
pub mod theme;
pub mod timeline;
pub mod viewport;

pub use easing::Ease;
pub use error::SiteError;
pub use overlay::{Direction, OverlayController, OverlayId, OverlayState, Transition};
pub use timeline::{At, Playback, Player, Prop, Stage, TargetId, Timeline, Tween};
pub use viewport::{Viewport, ViewportClass};
