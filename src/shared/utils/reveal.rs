//! Entrance animation state machine: Idle -> Entering -> Visible
//!
//! Driven by visibility events from the element, independent of any
//! animation library; CSS transitions key off `RevealPhase::class()`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Idle,
    Entering,
    Visible,
}

impl RevealPhase {
    pub fn class(&self) -> &'static str {
        match self {
            RevealPhase::Idle => "c-reveal--idle",
            RevealPhase::Entering => "c-reveal--entering",
            RevealPhase::Visible => "c-reveal--visible",
        }
    }
}

/// Duration of the entering transition
pub const ENTER_DURATION_MS: u64 = 600;
/// Default delay between siblings in a staggered list
pub const DEFAULT_STAGGER_MS: u64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealMachine {
    phase: RevealPhase,
    /// Fire once: never return to Idle after the first reveal
    once: bool,
}

impl RevealMachine {
    pub fn new(once: bool) -> Self {
        Self {
            phase: RevealPhase::Idle,
            once,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Element entered or left the viewport. Returns true if the phase changed.
    pub fn on_visibility(&mut self, visible: bool) -> bool {
        let next = match (self.phase, visible) {
            (RevealPhase::Idle, true) => RevealPhase::Entering,
            (RevealPhase::Entering | RevealPhase::Visible, false) if !self.once => {
                RevealPhase::Idle
            }
            (phase, _) => phase,
        };
        let changed = next != self.phase;
        self.phase = next;
        changed
    }

    /// Entering transition finished
    pub fn on_enter_complete(&mut self) -> bool {
        if self.phase == RevealPhase::Entering {
            self.phase = RevealPhase::Visible;
            return true;
        }
        false
    }
}

impl Default for RevealMachine {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Transition delay for the `index`-th item of a staggered list
pub fn stagger_delay_ms(index: usize, step_ms: u64) -> u64 {
    (index as u64).saturating_mul(step_ms)
}
