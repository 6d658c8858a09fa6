use crate::overlay::OverlayId;
use fnv::FnvHashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LockOwner {
    Overlay(OverlayId),
    ContactForm,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockChange {
    Engaged,
    Released,
    Unchanged,
}

/// Page scroll lock shared by every overlay and the contact form.
///
/// The page stays locked while at least one owner holds it.
#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: FnvHashSet<LockOwner>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

    pub fn acquire(&mut self, owner: LockOwner) -> LockChange {
        let was_locked = self.is_locked();
        self.holders.insert(owner);
        if was_locked {
            LockChange::Unchanged
        } else {
            LockChange::Engaged
        }
    }

    pub fn release(&mut self, owner: LockOwner) -> LockChange {
        if self.holders.remove(&owner) && self.holders.is_empty() {
            LockChange::Released
        } else {
            LockChange::Unchanged
        }
    }
}
