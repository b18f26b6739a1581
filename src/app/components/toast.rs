use dioxus::prelude::*;

use crate::shared::hooks::use_toasts;

/// Renders the toast queue from context (mounted once in `App`)
#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_toasts();
    let queue = toasts.queue.read().toasts().to_vec();

    rsx! {
        div { class: "c-toast-host", role: "status", aria_live: "polite",
            for toast in queue {
                div { key: "{toast.id}", class: "c-toast {toast.kind.class()}",
                    p { class: "c-toast__message", "{toast.message}" }
                    button {
                        class: "c-toast__close",
                        aria_label: "Fermer",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
