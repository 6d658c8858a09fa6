use crate::constants::{MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

/// Inner window size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn class(&self) -> ViewportClass {
        if self.width <= MOBILE_MAX_WIDTH {
            ViewportClass::Mobile
        } else if self.width <= TABLET_MAX_WIDTH {
            ViewportClass::Tablet
        } else {
            ViewportClass::Desktop
        }
    }

    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.class() == ViewportClass::Mobile
    }

    /// Tablet and mobile share the compact Over Ons button behavior.
    #[inline]
    pub fn is_compact(&self) -> bool {
        self.class() != ViewportClass::Desktop
    }
}
