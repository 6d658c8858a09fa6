//! Named easing curves used by every timeline and by the scroll driver.

/// Control points of the site's custom "hop" curve.
const HOP: [f64; 4] = [0.87, 0.0, 0.13, 1.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
    Power2InOut,
    /// cubic-bezier(.87, 0, .13, 1)
    Hop,
    BackOut(f64),
    /// Exponential deceleration used for programmatic scrolls.
    ExpoOut,
}

impl Ease {
    /// Map linear time `t` in [0, 1] to eased progress. Endpoints are exact.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Ease::Linear => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Ease::Hop => cubic_bezier(HOP[0], HOP[1], HOP[2], HOP[3], t),
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u * u * u + s * u * u
            }
            Ease::ExpoOut => (1.001 - 2f64.powf(-10.0 * t)).min(1.0),
        }
    }
}

#[inline]
fn bezier_axis(a1: f64, a2: f64, t: f64) -> f64 {
    ((1.0 - 3.0 * a2 + 3.0 * a1) * t + (3.0 * a2 - 6.0 * a1)) * t * t + 3.0 * a1 * t
}

#[inline]
fn bezier_slope(a1: f64, a2: f64, t: f64) -> f64 {
    3.0 * (1.0 - 3.0 * a2 + 3.0 * a1) * t * t + 2.0 * (3.0 * a2 - 6.0 * a1) * t + 3.0 * a1
}

/// CSS-style cubic bezier: solve x(t) = x with Newton, fall back to bisection.
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    const EPS: f64 = 1e-7;
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut t = x;
    for _ in 0..8 {
        let err = bezier_axis(x1, x2, t) - x;
        if err.abs() < EPS {
            return bezier_axis(y1, y2, t);
        }
        let d = bezier_slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    t = x;
    for _ in 0..64 {
        let v = bezier_axis(x1, x2, t);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }
    bezier_axis(y1, y2, t.clamp(0.0, 1.0))
}
