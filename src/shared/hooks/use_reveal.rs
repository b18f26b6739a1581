use dioxus::prelude::*;

use crate::shared::utils::reveal::ENTER_DURATION_MS;
use crate::shared::utils::{timer, RevealMachine, RevealPhase};

#[derive(Clone, Copy, PartialEq)]
pub struct RevealHandle {
    pub machine: Signal<RevealMachine>,
}

impl RevealHandle {
    pub fn phase(&self) -> RevealPhase {
        self.machine.read().phase()
    }

    /// Feed a visibility change; schedules the Entering -> Visible step
    pub fn on_visibility(&mut self, visible: bool, delay_ms: u64) {
        let changed = self.machine.write().on_visibility(visible);
        if changed && self.machine.peek().phase() == RevealPhase::Entering {
            let mut machine = self.machine;
            spawn(async move {
                timer::sleep_ms(delay_ms + ENTER_DURATION_MS).await;
                machine.write().on_enter_complete();
            });
        }
    }
}

pub fn use_reveal(once: bool) -> RevealHandle {
    let machine = use_signal(|| RevealMachine::new(once));
    RevealHandle { machine }
}
