use std::net::SocketAddr;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use buzon::config::Config;
use buzon::sinks::SinkPaths;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env().expect("Failed to load configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting buzon");

    // Bootstrap the flat-file sinks before serving any request.
    let sinks = SinkPaths::new(&config.data_dir);
    sinks.ensure().expect("Failed to initialize sink files");

    let pool = buzon::db::connect(&config.database_path)
        .await
        .expect("Failed to open database");

    buzon::db::usuario::bootstrap(&pool)
        .await
        .expect("Failed to create tables");

    tracing::info!("Storage ready under {}", config.data_dir.display());

    let addr = SocketAddr::new(config.host, config.port);
    let app = buzon::build_app(pool, &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
