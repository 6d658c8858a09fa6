// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use site_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn breakpoints_are_ordered() {
    assert!(MOBILE_MAX_WIDTH > 0.0);
    assert!(MOBILE_MAX_WIDTH < TABLET_MAX_WIDTH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn telescope_thresholds_are_progress_values() {
    for p in [
        LAYER_SETTLE_PROGRESS,
        INTRO_LATCH_PROGRESS,
        WORDS_BAND_START,
        WORDS_BAND_END,
        WORDS_MOBILE_START,
        HEADER_VISIBLE_PROGRESS,
        BANNER_CTA_PROGRESS,
    ] {
        assert!((0.0..=1.0).contains(&p), "{p} outside 0..1");
    }
    assert!(WORDS_BAND_START < WORDS_BAND_END);
    assert!(HEADER_VISIBLE_PROGRESS < BANNER_CTA_PROGRESS);
    // the smallest layer still has a visible scale
    assert!(LAYER_BASE_SCALE - 3.0 * LAYER_SCALE_STEP > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pin_spans_cover_the_telescope() {
    assert!(TELESCOPE_SPAN_VIEWPORTS > 0.0);
    assert!(PIN_SPAN_VIEWPORTS >= TELESCOPE_SPAN_VIEWPORTS);
    assert!(SCRUB_LAG_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn durations_are_positive() {
    for d in [
        MENU_SLIDE_SEC,
        MENU_MEDIA_SEC,
        MENU_DIM_SEC,
        CONTACT_SLIDE_SEC,
        CONTACT_MEDIA_SEC,
        LINES_SEC,
        PANEL_SLIDE_SEC,
        PANEL_LABEL_FADE_SEC,
        PANEL_BUTTON_SQUEEZE_SEC,
        BANNER_FADE_SEC,
        BANNER_CTA_SHOW_SEC,
        BANNER_CTA_HIDE_SEC,
        ROTATE_OUT_SEC,
        ROTATE_IN_SEC,
        PAGE_FADE_IN_SEC,
        PAGE_FADE_OUT_SEC,
        DIENST_FADE_OUT_SEC,
        DIENST_FADE_IN_SEC,
        DIENST_LABEL_MOVE_SEC,
        NAV_SCROLL_SEC,
        PANEL_SCROLL_SEC,
    ] {
        assert!(d > 0.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn line_stagger_runs_back_to_front() {
    assert!(LINES_STAGGER_SEC < 0.0);
    assert!(LINES_OFFSET_SEC < 0.0);
    assert!(MENU_LINES_HIDDEN_PCT < -100.0);
    // the toggle label leaves its mask completely
    assert!(MENU_LABEL_HIDDEN_PCT <= -100.0);
    assert!(CONTACT_LINES_HIDDEN_PCT > 100.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rotator_swap_fits_inside_its_period() {
    let swap_ms = (ROTATE_OUT_SEC + ROTATE_IN_SEC) * 1000.0;
    assert!(swap_ms < ROTATOR_PERIOD_MS as f64);
    assert_eq!(ROTATOR_WORDS.len(), 5);
}

#[test]
fn contact_close_button_appears_during_the_slide() {
    assert!(CONTACT_CLOSE_BUTTON_AT_SEC < CONTACT_SLIDE_SEC);
    assert_eq!(COPY_ACK_MS, 2000);
}
