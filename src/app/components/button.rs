use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Secondary => "c-button--secondary",
            ButtonVariant::Ghost => "c-button--ghost",
        }
    }
}

/// Action button. `busy` disables it and shows an inline spinner.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] busy: bool,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let busy_class = if busy { "c-button--busy" } else { "" };

    rsx! {
        button {
            class: "c-button {variant.class()} {busy_class}",
            r#type: "button",
            disabled: busy,
            aria_busy: "{busy}",
            aria_label,
            onclick: move |evt| onclick.call(evt),
            if busy {
                span { class: "c-button__spinner", aria_hidden: "true" }
            }
            {children}
        }
    }
}
