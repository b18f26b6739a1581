use dioxus::prelude::*;

use crate::app::components::ToastHost;
use crate::app::layouts::Navbar;
use crate::app::pages::{Home, RegisterPage, SearchPage};
use crate::config::AppConfig;
use crate::shared::hooks::{use_app_context_provider, use_session_provider, use_toast_provider};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/recherche?:q")]
    SearchPage { q: String },

    #[route("/inscription")]
    RegisterPage {},
}

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        AppConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!("Invalid configuration, using defaults: {}", e);
            AppConfig::default()
        })
    });

    // Provider order matters: data sources read the session token
    use_session_provider();
    use_toast_provider();
    use_app_context_provider(config);

    use_effect(|| {
        tracing::info!("Khidma app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-layout",
            Navbar {}
            main { class: "c-layout__main",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}
