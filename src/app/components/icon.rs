use dioxus::prelude::*;

use crate::shared::icons::IconName;

#[component]
pub fn Icon(name: IconName, #[props(default)] class: String) -> Element {
    rsx! {
        span {
            class: "c-icon {class}",
            "data-icon": "{name.key()}",
            aria_hidden: "true",
            "{name.glyph()}"
        }
    }
}
