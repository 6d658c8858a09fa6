//! Scroll progress -> telescope hero parameters.
//!
//! The mapping is a pure function of progress and viewport, except for two
//! one-way latches: once the intro text has travelled out, or the header
//! words have shown, they stay that way for the rest of the page lifetime.

use crate::constants::*;
use crate::viewport::Viewport;
use smallvec::{smallvec, SmallVec};

/// A flag that can be set but never cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Latch(bool);

impl Latch {
    #[inline]
    pub fn set(&mut self) {
        self.0 = true;
    }

    #[inline]
    pub fn set_if(&mut self, cond: bool) {
        self.0 |= cond;
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TelescopeFrame {
    pub container_scale: f64,
    pub mask_scales: SmallVec<[f64; 4]>,
    /// Horizontal offsets in px for the left and right intro text.
    pub intro_offsets: [f64; 2],
    pub word_opacity: SmallVec<[f64; 8]>,
}

#[inline]
pub fn initial_layer_scale(index: usize) -> f64 {
    LAYER_BASE_SCALE - LAYER_SCALE_STEP * index as f64
}

/// Opacity of word `index` of `count` at header progress `progress`.
pub fn word_band_opacity(progress: f64, index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let start = index as f64 / count as f64;
    let end = (index + 1) as f64 / count as f64;
    if progress >= end {
        1.0
    } else if progress >= start {
        (progress - start) / (end - start)
    } else {
        0.0
    }
}

#[derive(Clone, Debug)]
pub struct TelescopeMapper {
    layer_count: usize,
    word_count: usize,
    intro_shown: Latch,
    words_shown: Latch,
}

impl TelescopeMapper {
    pub fn new(layer_count: usize, word_count: usize) -> Self {
        Self {
            layer_count,
            word_count,
            intro_shown: Latch::default(),
            words_shown: Latch::default(),
        }
    }

    pub fn intro_shown(&self) -> bool {
        self.intro_shown.is_set()
    }

    pub fn words_shown(&self) -> bool {
        self.words_shown.is_set()
    }

    /// Frame shown before any scroll has been observed.
    pub fn initial_frame(&self) -> TelescopeFrame {
        TelescopeFrame {
            container_scale: 0.0,
            mask_scales: (0..self.layer_count).map(initial_layer_scale).collect(),
            intro_offsets: [0.0, 0.0],
            word_opacity: smallvec![0.0; self.word_count],
        }
    }

    pub fn map(&mut self, progress: f64, viewport: Viewport) -> TelescopeFrame {
        let p = progress.clamp(0.0, 1.0);
        let layer_progress = (p / LAYER_SETTLE_PROGRESS).min(1.0);

        let mask_scales = (0..self.layer_count)
            .map(|i| {
                let initial = initial_layer_scale(i);
                initial + layer_progress * (1.0 - initial)
            })
            .collect();

        let speed = if viewport.is_mobile() {
            INTRO_SPEED_MOBILE
        } else {
            INTRO_SPEED_DESKTOP
        };
        let intro = (layer_progress * speed).min(1.0);
        self.intro_shown.set_if(intro >= INTRO_LATCH_PROGRESS);
        let reach = if self.intro_shown.is_set() { 1.0 } else { intro };
        let travel = viewport.width * INTRO_TRAVEL_FRACTION;

        TelescopeFrame {
            container_scale: p,
            mask_scales,
            intro_offsets: [-reach * travel, reach * travel],
            word_opacity: self.word_opacities(p, viewport),
        }
    }

    fn word_opacities(&mut self, p: f64, viewport: Viewport) -> SmallVec<[f64; 8]> {
        let n = self.word_count;
        let mobile = viewport.is_mobile();
        let in_band =
            (WORDS_BAND_START..=WORDS_BAND_END).contains(&p) || (mobile && p >= WORDS_MOBILE_START);

        let mut out: SmallVec<[f64; 8]> = if in_band {
            let header = if mobile {
                let m = ((p - WORDS_MOBILE_OFFSET) / WORDS_MOBILE_SPAN).max(0.0);
                ((m + WORDS_MOBILE_HEAD_START) * WORDS_MOBILE_GAIN).min(1.0)
            } else {
                (p - WORDS_BAND_START) / (WORDS_BAND_END - WORDS_BAND_START)
            };
            // the first word completing its band is enough
            self.words_shown.set_if(n > 0 && header >= 1.0 / n as f64);
            (0..n).map(|i| word_band_opacity(header, i, n)).collect()
        } else if p > WORDS_BAND_END {
            self.words_shown.set();
            smallvec![1.0; n]
        } else {
            smallvec![0.0; n]
        };

        if self.words_shown.is_set() {
            out.iter_mut().for_each(|o| *o = 1.0);
        }
        out
    }
}

/// Banner header and services list are shown from this pin progress on.
#[inline]
pub fn header_visible(pin_progress: f64) -> bool {
    pin_progress >= HEADER_VISIBLE_PROGRESS
}

/// Arrow button and favicon are shown from this pin progress on.
#[inline]
pub fn banner_cta_visible(pin_progress: f64) -> bool {
    pin_progress >= BANNER_CTA_PROGRESS
}
