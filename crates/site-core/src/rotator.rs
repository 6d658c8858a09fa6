use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotatorState {
    Idle,
    Rotating,
}

/// What the caller must do with its interval timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerCommand {
    Arm,
    Clear,
    Keep,
}

pub type Swap = SmallVec<[(usize, &'static str); 4]>;

/// Round-robin word rotation over several display slots.
///
/// Slot `s` shows `words[(s + index) % len]`, so slots never show the same
/// word at once. A tick that arrives while the previous swap is still
/// animating is dropped.
#[derive(Debug)]
pub struct TextRotator {
    words: &'static [&'static str],
    slots: usize,
    index: usize,
    state: RotatorState,
    busy: bool,
}

impl TextRotator {
    pub fn new(words: &'static [&'static str], slots: usize) -> Self {
        Self {
            words,
            slots,
            index: 0,
            state: RotatorState::Idle,
            busy: false,
        }
    }

    pub fn state(&self) -> RotatorState {
        self.state
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn word_for(&self, slot: usize) -> Option<&'static str> {
        if self.words.is_empty() {
            return None;
        }
        Some(self.words[(slot + self.index) % self.words.len()])
    }

    pub fn set_visible(&mut self, visible: bool) -> TimerCommand {
        match (self.state, visible) {
            (RotatorState::Idle, true) => {
                self.state = RotatorState::Rotating;
                TimerCommand::Arm
            }
            (RotatorState::Rotating, false) => {
                self.state = RotatorState::Idle;
                TimerCommand::Clear
            }
            _ => TimerCommand::Keep,
        }
    }

    /// Advance one word. Returns the per-slot words to animate in, or `None`
    /// when idle or mid-swap.
    pub fn tick(&mut self) -> Option<Swap> {
        if self.state == RotatorState::Idle || self.busy || self.words.is_empty() {
            return None;
        }
        self.busy = true;
        self.index = (self.index + 1) % self.words.len();
        let len = self.words.len();
        Some(
            (0..self.slots)
                .map(|s| (s, self.words[(s + self.index) % len]))
                .collect(),
        )
    }

    pub fn finish_swap(&mut self) {
        self.busy = false;
    }
}
