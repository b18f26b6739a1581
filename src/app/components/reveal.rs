use dioxus::prelude::*;

use crate::shared::hooks::use_reveal;
use crate::shared::utils::reveal::{stagger_delay_ms, DEFAULT_STAGGER_MS};

/// Scroll-triggered entrance wrapper. `index` staggers siblings.
#[component]
pub fn Reveal(
    #[props(default = true)] once: bool,
    #[props(default)] index: usize,
    #[props(default = DEFAULT_STAGGER_MS)] stagger_ms: u64,
    children: Element,
) -> Element {
    let mut reveal = use_reveal(once);
    let delay = stagger_delay_ms(index, stagger_ms);
    let phase_class = reveal.phase().class();

    rsx! {
        div {
            class: "c-reveal {phase_class}",
            style: "transition-delay: {delay}ms;",
            onvisible: move |evt| {
                if let Ok(visible) = evt.data().is_intersecting() {
                    reveal.on_visibility(visible, delay);
                }
            },
            {children}
        }
    }
}
