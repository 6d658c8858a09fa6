// Host-side tests for the telescope hero mapping.
// The main crate is wasm-only, so these drive the platform-free core directly.

use site_core::constants::*;
use site_core::telescope::{
    banner_cta_visible, header_visible, initial_layer_scale, word_band_opacity, TelescopeMapper,
};
use site_core::Viewport;

const LAYERS: usize = 4;
const WORDS: usize = 5;

fn desktop() -> Viewport {
    Viewport::new(1440.0, 900.0)
}

fn mobile() -> Viewport {
    Viewport::new(390.0, 844.0)
}

#[test]
fn initial_frame_is_closed_down() {
    let m = TelescopeMapper::new(LAYERS, WORDS);
    let f = m.initial_frame();
    assert_eq!(f.container_scale, 0.0);
    assert_eq!(f.mask_scales.len(), LAYERS);
    for (i, s) in f.mask_scales.iter().enumerate() {
        assert!((s - (0.9 - 0.2 * i as f64)).abs() < 1e-12);
    }
    assert_eq!(f.intro_offsets, [0.0, 0.0]);
    assert!(f.word_opacity.iter().all(|o| *o == 0.0));
}

#[test]
fn layers_reach_full_scale_at_settle_point() {
    let mut m = TelescopeMapper::new(LAYERS, WORDS);
    let f = m.map(LAYER_SETTLE_PROGRESS, desktop());
    assert!(f.mask_scales.iter().all(|s| (*s - 1.0).abs() < 1e-12));
    let f = m.map(1.0, desktop());
    assert_eq!(f.container_scale, 1.0);
    assert!(f.mask_scales.iter().all(|s| (*s - 1.0).abs() < 1e-12));
}

#[test]
fn layer_scales_grow_monotonically() {
    let mut m = TelescopeMapper::new(LAYERS, WORDS);
    let mut prev = m.map(0.0, desktop()).mask_scales;
    for i in 1..=100 {
        let next = m.map(i as f64 / 100.0, desktop()).mask_scales;
        for (a, b) in prev.iter().zip(next.iter()) {
            assert!(b >= a);
        }
        prev = next;
    }
    for i in 0..LAYERS {
        assert!(initial_layer_scale(i) > 0.0);
    }
}

#[test]
fn intro_text_splits_symmetrically() {
    let vp = desktop();
    let mut m = TelescopeMapper::new(LAYERS, WORDS);
    let f = m.map(0.2, vp);
    assert!(f.intro_offsets[0] < 0.0);
    assert_eq!(f.intro_offsets[0], -f.intro_offsets[1]);
    assert!(f.intro_offsets[1] <= vp.width * INTRO_TRAVEL_FRACTION);
}

#[test]
fn intro_latch_survives_scrolling_back() {
    let vp = desktop();
    let travel = vp.width * INTRO_TRAVEL_FRACTION;
    let mut m = TelescopeMapper::new(LAYERS, WORDS);
    m.map(0.7, vp);
    assert!(m.intro_shown());
    let back = m.map(0.0, vp);
    assert_eq!(back.intro_offsets, [-travel, travel]);
}

#[test]
fn mobile_intro_travels_faster() {
    let p = 0.2;
    let d = TelescopeMapper::new(LAYERS, WORDS).map(p, desktop());
    let m = TelescopeMapper::new(LAYERS, WORDS).map(p, mobile());
    let d_frac = d.intro_offsets[1] / (desktop().width * INTRO_TRAVEL_FRACTION);
    let m_frac = m.intro_offsets[1] / (mobile().width * INTRO_TRAVEL_FRACTION);
    assert!(m_frac > d_frac);
}

#[test]
fn word_bands_fill_in_order() {
    assert_eq!(word_band_opacity(0.0, 0, 5), 0.0);
    assert!((word_band_opacity(0.1, 0, 5) - 0.5).abs() < 1e-12);
    assert_eq!(word_band_opacity(0.1, 1, 5), 0.0);
    assert_eq!(word_band_opacity(1.0, 4, 5), 1.0);
    assert_eq!(word_band_opacity(0.5, 0, 0), 0.0);
}

#[test]
fn words_hidden_before_the_band_on_desktop() {
    let mut m = TelescopeMapper::new(LAYERS, WORDS);
    let f = m.map(WORDS_BAND_START - 0.01, desktop());
    assert!(f.word_opacity.iter().all(|o| *o == 0.0));
    assert!(!m.words_shown());
}

#[test]
fn words_latch_once_the_first_word_has_shown() {
    let vp = desktop();
    let mut m = TelescopeMapper::new(LAYERS, WORDS);
    let band = WORDS_BAND_END - WORDS_BAND_START;
    // first word complete: header progress 1/5
    m.map(WORDS_BAND_START + band / WORDS as f64 + 1e-6, vp);
    assert!(m.words_shown());
    let back = m.map(0.0, vp);
    assert!(back.word_opacity.iter().all(|o| *o == 1.0));
}

#[test]
fn words_past_the_band_are_all_visible() {
    let mut m = TelescopeMapper::new(LAYERS, WORDS);
    let f = m.map(0.95, desktop());
    assert!(f.word_opacity.iter().all(|o| *o == 1.0));
    assert!(m.words_shown());
}

#[test]
fn mobile_words_start_early() {
    let mut m = TelescopeMapper::new(LAYERS, WORDS);
    let f = m.map(WORDS_MOBILE_START, mobile());
    assert!(f.word_opacity[0] > 0.0);
}

#[test]
fn mapping_is_deterministic() {
    let mut a = TelescopeMapper::new(LAYERS, WORDS);
    let mut b = TelescopeMapper::new(LAYERS, WORDS);
    for i in 0..=50 {
        let p = i as f64 / 50.0;
        assert_eq!(a.map(p, desktop()), b.map(p, desktop()));
    }
}

#[test]
fn jump_to_end_matches_a_full_sweep() {
    let vp = desktop();
    let mut jump = TelescopeMapper::new(LAYERS, WORDS);
    jump.map(0.0, vp);
    let jumped = jump.map(1.0, vp);

    let mut sweep = TelescopeMapper::new(LAYERS, WORDS);
    let mut swept = sweep.map(0.0, vp);
    for i in 1..=1000 {
        swept = sweep.map(i as f64 / 1000.0, vp);
    }
    assert_eq!(jumped, swept);
    assert_eq!(jump.intro_shown(), sweep.intro_shown());
    assert_eq!(jump.words_shown(), sweep.words_shown());
}

#[test]
fn progress_outside_unit_range_is_clamped() {
    let vp = desktop();
    let mut a = TelescopeMapper::new(LAYERS, WORDS);
    let mut b = TelescopeMapper::new(LAYERS, WORDS);
    assert_eq!(a.map(-3.0, vp), b.map(0.0, vp));
    assert_eq!(a.map(7.0, vp), b.map(1.0, vp));
}

#[test]
fn pin_visibility_thresholds() {
    assert!(!header_visible(HEADER_VISIBLE_PROGRESS - 0.01));
    assert!(header_visible(HEADER_VISIBLE_PROGRESS));
    assert!(!banner_cta_visible(0.5));
    assert!(banner_cta_visible(BANNER_CTA_PROGRESS));
}
