/// DOM hooks and timeline tuning for the web front-end.
///
/// Selectors match the site's markup; durations are seconds. Behavior
/// thresholds shared with the tests live in `site_core::constants`.

// Main menu
pub const SEL_MENU_TOGGLE: &str = ".menu-toggle-btn";
pub const SEL_MENU_OVERLAY: &str = ".menu-overlay";
pub const SEL_MENU_CONTENT: &str = ".menu-overlay-content";
pub const SEL_MENU_MEDIA: &str = ".menu-media-wrapper";
pub const SEL_MENU_COLUMNS: &str = ".menu-col";
pub const SEL_MENU_LABEL: &str = ".menu-toggle-label p";
pub const SEL_HAMBURGER: &str = ".menu-hamburger-icon";
pub const SEL_HAMBURGER_BARS: &str = ".menu-hamburger-icon span";

// Page sections moved aside by the overlays
pub const SEL_MAIN_CONTENT: &str = ".main-content";
pub const SEL_OUTRO: &str = ".outro-content";
pub const SEL_BANNER: &str = ".banner";

// Contact overlay
pub const SEL_CONTACT_OVERLAY: &str = ".contact-menu-overlay";
pub const SEL_CONTACT_CONTENT: &str = ".contact-menu-overlay-content";
pub const SEL_CONTACT_MEDIA: &str = ".contact-menu-media-wrapper";
pub const SEL_CONTACT_COLUMNS: &str = ".contact-menu-col";
pub const ID_CONTACT_CTA: &str = "contactCtaBtn";
pub const ID_CONTACT_CLOSE: &str = "contactMenuCloseBtn";

// Over Ons panel
pub const SEL_PANEL: &str = ".over-ons-panel";
pub const SEL_PANEL_SECTION: &str = ".banner-background-section";
pub const SEL_PANEL_CLOSE: &str = ".over-ons-close-btn";
pub const SEL_PANEL_BUTTON: &str = ".banner-bg-cta-button";
pub const ID_PANEL_BUTTON_TEXT: &str = "bannerBgBtnText";
pub const SEL_PANEL_DIENSTEN: &str = ".over-ons-btn-primary";
pub const SEL_PANEL_CONTACT: &str = ".over-ons-btn-secondary";
pub const PANEL_LABEL_OPEN: &str = "Minder over ons";
pub const PANEL_LABEL_CLOSED: &str = "Meer over ons";

// Telescope banner
pub const SEL_BANNER_CONTAINER: &str = ".banner-img-container";
pub const SEL_BANNER_INTRO: &str = ".banner-intro-text";
pub const SEL_BANNER_MASKS: &str = ".mask";
pub const SEL_BANNER_WORDS: &str = ".services-list h1";
pub const SEL_SERVICES_LIST: &str = ".services-list";
pub const SEL_BANNER_HEADER: &str = ".banner-header";
pub const SEL_BANNER_ARROW: &str = ".banner-arrow-btn";
pub const SEL_BANNER_FAVICON: &str = ".banner-favicon";
pub const SEL_ROTATING_TEXT: &str = ".rotating-text";
pub const ID_DARK_SECTION: &str = "banner-background-section";

// Navigation
pub const ID_HOME_LINK: &str = "homeLink";
pub const ID_DIENSTEN_LINK: &str = "dienstenLink";
pub const ID_OVER_ONS_LINK: &str = "overOnsLink";
pub const ID_CONTACT_LINK: &str = "contactLink";
pub const SEL_DIENSTEN_BACK: &str = ".diensten-back-btn";

// Copy widgets
pub const SEL_COPY_ICON: &str = ".copy-icon";
pub const SEL_COPY_NUMBER: &str = ".copyable-number";

// Contact form
pub const ID_FORM_SECTION: &str = "contactFormSection";
pub const ID_FORM: &str = "contactForm";
pub const ID_FORM_SUBJECT: &str = "subject";
pub const ID_FORM_CANCEL: &str = "cancelForm";
pub const ID_FORM_OFFERTE: &str = "offerteBtn";
pub const ID_FORM_GESPREK: &str = "gesprekBtn";
pub const ID_FORM_ANDERE: &str = "andereVraagBtn";

// Diensten page
pub const SEL_DIENST_ITEMS: &str = ".dienst-item";
pub const SEL_DIENST_DESCRIPTION: &str = ".dienst-beschrijving";
pub const SEL_DIENST_TITLE: &str = ".dienst-beschrijving-titel";
pub const SEL_DIENST_TEXT: &str = ".dienst-beschrijving-tekst";
pub const SEL_DIENST_LOGOS: &str = ".dienst-logos";
pub const SEL_FLOATING_LABEL: &str = ".floating-wij-bouwen";
pub const SEL_DIENSTEN_HEADER: &str = ".diensten-header";

// Main menu timing
pub const MENU_SLIDE_SEC: f64 = 0.8;
pub const MENU_MEDIA_SEC: f64 = 0.6;
pub const MENU_MEDIA_DELAY_SEC: f64 = 0.5;
pub const MENU_DIM_SEC: f64 = 1.0;
pub const MENU_LINES_HIDDEN_PCT: f64 = -110.0;
pub const MENU_LABEL_HIDDEN_PCT: f64 = -110.0;
pub const MENU_CONTENT_HIDDEN_PCT: f64 = -50.0;

// Contact overlay timing
pub const CONTACT_SLIDE_SEC: f64 = 1.0;
pub const CONTACT_MEDIA_SEC: f64 = 0.75;
pub const CONTACT_MEDIA_DELAY_SEC: f64 = 0.5;
pub const CONTACT_CLOSE_BUTTON_AT_SEC: f64 = 0.5;
pub const CONTACT_LINES_HIDDEN_PCT: f64 = 110.0;
pub const CONTACT_CONTENT_HIDDEN_PCT: f64 = 50.0;
pub const CONTACT_PUSH_VH: f64 = -200.0;

// Shared by both menus
pub const LINES_SEC: f64 = 2.0;
pub const LINES_STAGGER_SEC: f64 = -0.075;
pub const LINES_OFFSET_SEC: f64 = -0.15;
pub const COLUMNS_DIMMED_OPACITY: f64 = 0.25;

// Over Ons panel timing
pub const PANEL_SLIDE_SEC: f64 = 0.6;
pub const PANEL_LABEL_FADE_SEC: f64 = 0.2;
pub const PANEL_BUTTON_SQUEEZE_SEC: f64 = 0.15;

// Banner
pub const BANNER_FADE_SEC: f64 = 0.3;
pub const BANNER_CTA_SHOW_SEC: f64 = 0.25;
pub const BANNER_CTA_HIDE_SEC: f64 = 0.05;
pub const BANNER_CTA_HIDDEN_SCALE: f64 = 0.8;

// Rotator swap
pub const ROTATE_OUT_SEC: f64 = 0.2;
pub const ROTATE_IN_SEC: f64 = 0.3;
pub const ROTATE_TRAVEL_PX: f64 = 50.0;

// Wheel deltas reported in lines
pub const WHEEL_LINE_PX: f64 = 16.0;

// Page transitions
pub const PAGE_FADE_IN_SEC: f64 = 0.6;
pub const PAGE_FADE_OUT_SEC: f64 = 0.5;
pub const PAGE_FADE_COLOR: &str = "#F5F5F5";

// Diensten page
pub const DIENST_FADE_OUT_SEC: f64 = 0.2;
pub const DIENST_FADE_IN_SEC: f64 = 0.3;
pub const DIENST_LABEL_MOVE_SEC: f64 = 0.4;
