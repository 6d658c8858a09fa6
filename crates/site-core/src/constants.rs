//! Behavior thresholds shared by the web front-end and the tests.
//!
//! Timings are in seconds unless the name says otherwise.

// Viewport breakpoints (CSS px, inclusive upper bounds)
pub const MOBILE_MAX_WIDTH: f64 = 600.0;
pub const TABLET_MAX_WIDTH: f64 = 1000.0;

// Telescope hero
pub const TELESCOPE_SPAN_VIEWPORTS: f64 = 4.0;
pub const LAYER_SETTLE_PROGRESS: f64 = 0.9; // masks reach full scale here
pub const LAYER_BASE_SCALE: f64 = 0.9;
pub const LAYER_SCALE_STEP: f64 = 0.2;
pub const INTRO_TRAVEL_FRACTION: f64 = 0.8; // of viewport width
pub const INTRO_SPEED_DESKTOP: f64 = 1.3;
pub const INTRO_SPEED_MOBILE: f64 = 2.5;
pub const INTRO_LATCH_PROGRESS: f64 = 0.8;

pub const WORDS_BAND_START: f64 = 0.2;
pub const WORDS_BAND_END: f64 = 0.9;
pub const WORDS_MOBILE_START: f64 = 0.05;
pub const WORDS_MOBILE_OFFSET: f64 = 0.02;
pub const WORDS_MOBILE_SPAN: f64 = 0.95;
pub const WORDS_MOBILE_HEAD_START: f64 = 0.5;
pub const WORDS_MOBILE_GAIN: f64 = 3.0;

// Pinned banner (drives the rotator and the banner call-to-action)
pub const PIN_SPAN_VIEWPORTS: f64 = 5.0;
pub const HEADER_VISIBLE_PROGRESS: f64 = 0.25;
pub const BANNER_CTA_PROGRESS: f64 = 0.85;
pub const SCRUB_LAG_SEC: f64 = 1.0;

// Scroll driver
pub const SCROLL_LERP: f64 = 0.1;
pub const SCROLL_SETTLE_PX: f64 = 0.5;
pub const NAV_SCROLL_SEC: f64 = 1.5;
pub const PANEL_SCROLL_SEC: f64 = 0.8;
pub const CONTACT_SCROLL_OFFSET_PX: f64 = -20.0;

// Text rotator
pub const ROTATOR_PERIOD_MS: u32 = 3000;
pub const ROTATOR_WORDS: [&str; 5] = ["Websites", "Webshops", "Apps", "Platforms", "Webtools"];

// Copy widget
pub const COPY_ACK_MS: u32 = 2000;

// Menu chrome switches theme when the dark section crosses this line
pub const MENU_LINE_PX: f64 = 80.0;
