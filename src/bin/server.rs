//! Standalone mock API server (without the Dioxus frontend)
//! Use this to run the client against the API data sources.
//!
//! Run with: cargo run --bin server --features server -- --port 3401

use std::net::SocketAddr;

use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Debug, Parser)]
#[command(name = "khidma-server", about = "Mock marketplace API for khidma-web")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3401)]
    port: u16,

    /// Bind address
    #[arg(long, default_value = "127.0.0.1")]
    host: std::net::IpAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    tracing::info!("Starting Khidma mock API server (standalone)...");

    let app = khidma_web::handlers::api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::new(args.host, args.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
