//! Open/close state machine for the three page overlays.
//!
//! Every overlay walks Closed -> Opening -> Open -> Closing -> Closed. The
//! web layer starts a timeline for each [`Transition`] handed back and calls
//! [`OverlayController::complete`] from that timeline's completion, which is
//! the only way a state settles. The main menu and the Over Ons panel exclude
//! each other: opening one while the other is open first closes the other and
//! opens the requested one from the close's completion.

use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayId {
    MainMenu,
    ContactMenu,
    OverOnsPanel,
}

impl OverlayId {
    pub const ALL: [OverlayId; 3] = [
        OverlayId::MainMenu,
        OverlayId::ContactMenu,
        OverlayId::OverOnsPanel,
    ];

    #[inline]
    fn index(self) -> usize {
        match self {
            OverlayId::MainMenu => 0,
            OverlayId::ContactMenu => 1,
            OverlayId::OverOnsPanel => 2,
        }
    }

    /// Short tag used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            OverlayId::MainMenu => "menu",
            OverlayId::ContactMenu => "contact",
            OverlayId::OverOnsPanel => "over-ons",
        }
    }

    /// The overlay that may never be open at the same time as this one.
    pub fn excludes(self) -> Option<OverlayId> {
        match self {
            OverlayId::MainMenu => Some(OverlayId::OverOnsPanel),
            OverlayId::OverOnsPanel => Some(OverlayId::MainMenu),
            OverlayId::ContactMenu => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl OverlayState {
    #[inline]
    pub fn is_transitioning(self) -> bool {
        matches!(self, OverlayState::Opening | OverlayState::Closing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Open,
    Close,
}

/// A transition the web layer must animate and then report back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub overlay: OverlayId,
    pub direction: Direction,
}

impl Transition {
    pub fn open(overlay: OverlayId) -> Self {
        Self {
            overlay,
            direction: Direction::Open,
        }
    }

    pub fn close(overlay: OverlayId) -> Self {
        Self {
            overlay,
            direction: Direction::Close,
        }
    }
}

pub type Dispatch = SmallVec<[Transition; 2]>;

/// Pending "open `then` once `after` has closed".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Deferred {
    after: OverlayId,
    then: OverlayId,
}

#[derive(Debug, Default)]
pub struct OverlayController {
    states: [OverlayState; 3],
    deferred: Option<Deferred>,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self, id: OverlayId) -> OverlayState {
        self.states[id.index()]
    }

    #[inline]
    pub fn is_open(&self, id: OverlayId) -> bool {
        self.state(id) == OverlayState::Open
    }

    /// Transitioning, or reserved to open after another overlay closes.
    pub fn is_busy(&self, id: OverlayId) -> bool {
        self.state(id).is_transitioning() || self.deferred_open() == Some(id)
    }

    pub fn deferred_open(&self) -> Option<OverlayId> {
        self.deferred.map(|d| d.then)
    }

    fn set(&mut self, id: OverlayId, state: OverlayState) {
        log::debug!("[{}] {:?} -> {:?}", id.label(), self.state(id), state);
        self.states[id.index()] = state;
    }

    pub fn open(&mut self, id: OverlayId) -> Dispatch {
        if self.is_busy(id) || self.state(id) != OverlayState::Closed {
            log::debug!("[{}] open ignored in {:?}", id.label(), self.state(id));
            return Dispatch::new();
        }
        if let Some(other) = id.excludes() {
            match self.state(other) {
                OverlayState::Open => {
                    self.deferred = Some(Deferred {
                        after: other,
                        then: id,
                    });
                    self.set(other, OverlayState::Closing);
                    return smallvec![Transition::close(other)];
                }
                OverlayState::Closing => {
                    self.deferred = Some(Deferred {
                        after: other,
                        then: id,
                    });
                    return Dispatch::new();
                }
                // Cannot interrupt an opening transition.
                OverlayState::Opening => return Dispatch::new(),
                OverlayState::Closed => {}
            }
        }
        self.set(id, OverlayState::Opening);
        smallvec![Transition::open(id)]
    }

    pub fn close(&mut self, id: OverlayId) -> Dispatch {
        if self.state(id) != OverlayState::Open {
            log::debug!("[{}] close ignored in {:?}", id.label(), self.state(id));
            return Dispatch::new();
        }
        self.set(id, OverlayState::Closing);
        smallvec![Transition::close(id)]
    }

    pub fn toggle(&mut self, id: OverlayId) -> Dispatch {
        match self.state(id) {
            OverlayState::Closed => self.open(id),
            OverlayState::Open => self.close(id),
            _ => Dispatch::new(),
        }
    }

    /// Settle `id` after its transition finished; may start a deferred open.
    pub fn complete(&mut self, id: OverlayId) -> Dispatch {
        let settled = match self.state(id) {
            OverlayState::Opening => OverlayState::Open,
            OverlayState::Closing => OverlayState::Closed,
            other => {
                log::warn!("[{}] completion while {:?}", id.label(), other);
                return Dispatch::new();
            }
        };
        self.set(id, settled);
        if settled == OverlayState::Closed {
            if let Some(d) = self.deferred {
                if d.after == id {
                    self.deferred = None;
                    return self.open(d.then);
                }
            }
        }
        Dispatch::new()
    }
}
