use dioxus::prelude::*;

// Skeleton placeholder grid shown while data loads (BEM: c-skeleton)
#[component]
pub fn LoadingSkeleton(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div { class: "c-skeleton-grid", aria_busy: "true",
            for index in 0..count {
                div { key: "{index}", class: "c-skeleton",
                    div { class: "c-skeleton__media" }
                    div { class: "c-skeleton__line c-skeleton__line--title" }
                    div { class: "c-skeleton__line" }
                    div { class: "c-skeleton__line c-skeleton__line--short" }
                }
            }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String, #[props(default)] on_retry: Option<EventHandler>) -> Element {
    rsx! {
        div { class: "c-error",
            span { class: "c-error__icon", "⚠️" }
            p { class: "c-error__text", "{message}" }
            if let Some(handler) = on_retry {
                button {
                    class: "c-button c-button--secondary",
                    onclick: move |_| handler.call(()),
                    "Réessayer"
                }
            }
        }
    }
}

// Reusable Empty State Component
#[component]
pub fn EmptyState(icon: String, title: String, description: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon", "{icon}" }
            h3 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__description", "{description}" }
        }
    }
}
