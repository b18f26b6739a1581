//! Khidma web - Main Entry Point
//!
//! Fullstack server (Dioxus app + mock marketplace API) or WASM client.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use khidma_web::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Khidma web...");

    dioxus::serve(|| async move {
        let router = dioxus::server::router(App).merge(khidma_web::handlers::api_routes());
        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Khidma web - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
