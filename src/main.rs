mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::HostConfig::from_env().expect("invalid host configuration");
    let app = routes::app(&config).expect("router setup failed");

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .expect("failed to bind");

    tracing::info!(
        port = config.port,
        site_root = %config.site_root.display(),
        "firstcabs listening"
    );
    axum::serve(listener, app).await.expect("server failed");
}
