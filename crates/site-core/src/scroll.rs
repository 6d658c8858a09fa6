//! Inertial scroll driver, pinned-range progress and scrub smoothing.

use crate::constants::{SCROLL_LERP, SCROLL_SETTLE_PX};
use crate::easing::Ease;
use smallvec::SmallVec;

/// Frame-rate independent exponential approach of `from` toward `to`.
#[inline]
pub fn damp(from: f64, to: f64, lambda: f64, dt: f64) -> f64 {
    from + (to - from) * (1.0 - (-lambda * dt).exp())
}

/// Identifies one programmatic scroll; reported back exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScrollTicket(pub u32);

#[derive(Clone, Copy, Debug)]
struct ScrollAnim {
    from: f64,
    to: f64,
    duration: f64,
    elapsed: f64,
    ease: Ease,
    force: bool,
    ticket: ScrollTicket,
}

#[derive(Debug, Default)]
pub struct ScrollFrame {
    pub position: f64,
    pub moved: bool,
    /// Programmatic scrolls that arrived or were superseded this frame.
    pub completed: SmallVec<[ScrollTicket; 2]>,
}

/// Smooths wheel input into a per-frame scroll position.
#[derive(Debug)]
pub struct ScrollDriver {
    position: f64,
    target: f64,
    limit: f64,
    stopped: bool,
    anim: Option<ScrollAnim>,
    next_ticket: u32,
    finished: SmallVec<[ScrollTicket; 2]>,
}

impl ScrollDriver {
    pub fn new(limit: f64) -> Self {
        Self {
            position: 0.0,
            target: 0.0,
            limit: limit.max(0.0),
            stopped: false,
            anim: None,
            next_ticket: 0,
            finished: SmallVec::new(),
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_animating(&self) -> bool {
        self.anim.is_some()
    }

    /// Idle: no programmatic scroll and no pending inertia.
    pub fn is_idle(&self) -> bool {
        self.anim.is_none() && (self.target - self.position).abs() < SCROLL_SETTLE_PX
    }

    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
    }

    /// Freeze at the current position; wheel input is ignored until `start`.
    pub fn stop(&mut self) {
        self.stopped = true;
        self.target = self.position;
        if let Some(a) = self.anim {
            if !a.force {
                self.finished.push(a.ticket);
                self.anim = None;
            }
        }
    }

    pub fn start(&mut self) {
        self.stopped = false;
        self.target = self.position;
    }

    /// Feed a wheel delta. Returns false when the input was not consumed.
    pub fn on_wheel(&mut self, delta: f64) -> bool {
        if self.stopped {
            return false;
        }
        if let Some(a) = self.anim {
            if a.force {
                return true;
            }
            self.finished.push(a.ticket);
            self.anim = None;
            self.target = self.position;
        }
        self.target = (self.target + delta).clamp(0.0, self.limit);
        true
    }

    /// Adopt a position set outside the driver (touch, anchors, keyboard).
    pub fn sync_native(&mut self, y: f64) {
        if self.is_idle() && (y - self.position).abs() >= SCROLL_SETTLE_PX {
            self.position = y.clamp(0.0, self.limit);
            self.target = self.position;
        }
    }

    /// Start an eased scroll to `y`. A stopped driver only honors `force`d
    /// scrolls; an unforced one is reported complete without moving.
    pub fn scroll_to(&mut self, y: f64, duration: f64, ease: Ease, force: bool) -> ScrollTicket {
        let ticket = ScrollTicket(self.next_ticket);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        if let Some(prev) = self.anim.take() {
            self.finished.push(prev.ticket);
        }
        if self.stopped && !force {
            self.finished.push(ticket);
            return ticket;
        }
        self.anim = Some(ScrollAnim {
            from: self.position,
            to: y.clamp(0.0, self.limit),
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
            force,
            ticket,
        });
        ticket
    }

    pub fn frame(&mut self, dt: f64) -> ScrollFrame {
        let before = self.position;
        if let Some(mut a) = self.anim {
            a.elapsed += dt.max(0.0);
            let t = if a.duration <= 0.0 {
                1.0
            } else {
                a.elapsed / a.duration
            };
            if t >= 1.0 {
                self.position = a.to;
                self.target = a.to;
                self.finished.push(a.ticket);
                self.anim = None;
            } else {
                self.position = a.from + (a.to - a.from) * a.ease.apply(t);
                self.target = self.position;
                self.anim = Some(a);
            }
        } else if !self.stopped {
            self.position = damp(self.position, self.target, SCROLL_LERP * 60.0, dt);
            if (self.target - self.position).abs() < SCROLL_SETTLE_PX {
                self.position = self.target;
            }
        }
        ScrollFrame {
            position: self.position,
            moved: self.position != before,
            completed: std::mem::take(&mut self.finished),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinPhase {
    Before,
    Pinned,
    After,
}

/// Scroll span `[start, start + length]` mapped onto progress 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinnedRange {
    pub start: f64,
    pub length: f64,
}

impl PinnedRange {
    pub fn new(start: f64, length: f64) -> Self {
        Self {
            start,
            length: length.max(0.0),
        }
    }

    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.length <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / self.length).clamp(0.0, 1.0)
    }

    pub fn phase(&self, scroll_y: f64) -> PinPhase {
        if scroll_y <= self.start {
            PinPhase::Before
        } else if scroll_y >= self.start + self.length {
            PinPhase::After
        } else {
            PinPhase::Pinned
        }
    }
}

/// Lags a raw progress value by roughly `lag` seconds.
#[derive(Clone, Copy, Debug)]
pub struct Scrub {
    value: f64,
    lag: f64,
    primed: bool,
}

impl Scrub {
    pub fn new(lag: f64) -> Self {
        Self {
            value: 0.0,
            lag: lag.max(0.0),
            primed: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn follow(&mut self, raw: f64, dt: f64) -> f64 {
        if !self.primed || self.lag <= 0.0 {
            self.value = raw;
            self.primed = true;
            return self.value;
        }
        // ~95% of the way after `lag` seconds
        self.value = damp(self.value, raw, 3.0 / self.lag, dt);
        if (raw - self.value).abs() < 1e-4 {
            self.value = raw;
        }
        self.value
    }
}
