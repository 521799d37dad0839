// Framework bootstrap for the song server runtime.

use crate::frameworks::{config, db, seed};
use crate::interface_adapters::pg_store::PostgresSongStore;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

use std::io::Result;
use std::net::SocketAddr;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the song API on an already bound listener with the given state.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

// Build state from the environment and serve on the given listener.
pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let state = build_state().await?;
    serve(listener, state).await
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let address = SocketAddr::from(([0, 0, 0, 0], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

async fn build_state() -> Result<AppState> {
    let seed_enabled = config::seed_enabled();

    let Some(database_url) = config::database_url() else {
        tracing::info!(seed_enabled, "DATABASE_URL not set, using in-memory song store");
        let songs = if seed_enabled {
            seed::seed_songs()
        } else {
            Vec::new()
        };
        return Ok(AppState::in_memory(songs));
    };

    let pool = db::connect_pool(&database_url, config::database_max_connections())
        .await
        .map_err(|e| std::io::Error::other(format!("failed to connect to database: {e}")))?;
    db::run_migrations(&pool)
        .await
        .map_err(|e| std::io::Error::other(format!("failed to run migrations: {e}")))?;
    tracing::debug!("database migrations applied");

    let store = PostgresSongStore { db: pool };
    if seed_enabled {
        let seeded = store
            .seed_if_empty(&seed::seed_songs())
            .await
            .map_err(|e| std::io::Error::other(format!("failed to seed songs: {e}")))?;
        tracing::info!(seeded, "song seed checked");
    }

    Ok(AppState::new(store))
}
