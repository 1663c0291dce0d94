use gingr_dashboard::config::Config;
use gingr_dashboard::{AppState, server};
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gingr_dashboard=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env();

    let missing = config.missing_gingr_settings();
    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "Gingr is not configured; set GINGR_BASE_URL and GINGR_API_KEY (a .env file works)"
        );
    }

    let addr = config.listen_addr();
    let state = AppState::new(config, reqwest::Client::new());
    let app = server::router(state);

    info!(%addr, "Gingr operations dashboard API is listening");
    info!("dashboard API available at http://{addr}/api");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
