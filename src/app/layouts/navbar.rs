use dioxus::prelude::*;

use crate::app::pages::Route;
use crate::shared::hooks::{use_session, use_toasts};
use crate::shared::session::demo_client_session;

#[component]
pub fn Navbar() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();

    rsx! {
        nav { class: "c-navbar",
            Link { to: Route::Home {}, class: "c-navbar__brand",
                span { class: "c-navbar__logo", "✦" }
                "Khidma"
            }
            div { class: "c-navbar__actions",
                if let Some(user) = session.user() {
                    span { class: "c-navbar__role", "{user.role.display_name()}" }
                    span { class: "c-navbar__avatar", title: "{user.full_name()}", "{user.initials()}" }
                    button {
                        class: "c-button c-button--ghost",
                        onclick: move |_| {
                            session.logout();
                            toasts.info("Vous êtes déconnecté.");
                        },
                        "Se déconnecter"
                    }
                } else {
                    Link { to: Route::RegisterPage {}, class: "c-button c-button--ghost",
                        "Créer un compte"
                    }
                    button {
                        class: "c-button c-button--primary",
                        onclick: move |_| {
                            let demo = demo_client_session();
                            let greeting = format!("Bienvenue, {} !", demo.user.first_name);
                            session.login(demo);
                            toasts.success(greeting);
                        },
                        "Se connecter"
                    }
                }
            }
        }
    }
}
