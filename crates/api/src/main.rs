use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use medici_api::config::ServerConfig;
use medici_api::router::build_app_router;
use medici_api::state::AppState;
use medici_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "medici_api=debug,medici_db=info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        studentform_origin = %config.studentform_origin,
        scorecard_configured = config.scorecard_api_key.is_some(),
        static_dir = %config.static_dir,
        "Configuration loaded"
    );

    let pool = prepare_database(&config).await;

    let host: IpAddr = config
        .host
        .parse()
        .unwrap_or_else(|e| panic!("HOST '{}' is not an IP address: {e}", config.host));
    let addr = SocketAddr::new(host, config.port);
    let drain_timeout = Duration::from_secs(config.shutdown_timeout_secs);

    let app = build_app_router(AppState::new(pool.clone(), config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot bind {addr}: {e}"));
    tracing::info!(%addr, "Listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }

    tracing::info!("No longer accepting connections, closing database pool");
    if tokio::time::timeout(drain_timeout, pool.close()).await.is_err() {
        tracing::warn!(timeout_secs = drain_timeout.as_secs(), "Timed out closing database pool");
    }
    tracing::info!("Shutdown complete");
}

/// `RUST_LOG` filters; `LOG_FORMAT=json` emits one JSON object per line.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let json = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Connect, probe and migrate. Any failure aborts startup.
async fn prepare_database(config: &ServerConfig) -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = medici_db::create_pool(&url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");
    medici_db::health_check(&pool)
        .await
        .expect("Database is not answering queries");
    medici_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database ready"
    );
    pool
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down gracefully");
}
