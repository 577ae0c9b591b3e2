use std::net::SocketAddr;
use std::sync::Arc;

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use student_intake::config::{Config, RunMode};
use student_intake::state::{AppState, SharedState};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.mode {
        // CloudWatch stamps each line already
        RunMode::Lambda => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init(),
        RunMode::Local => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    tracing::info!(table = %config.table_name, mode = ?config.mode, "Starting student intake");

    let mode = config.mode.clone();
    let store = student_intake::build_store(&config).await;
    let state: SharedState = Arc::new(AppState { config, store });

    match mode {
        RunMode::Lambda => run_lambda(state).await,
        RunMode::Local => run_local(state).await,
    }
}

async fn run_lambda(state: SharedState) -> Result<(), lambda_runtime::Error> {
    let state = &state;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        student_intake::handler::handle(state, event)
    }))
    .await
}

async fn run_local(state: SharedState) -> Result<(), lambda_runtime::Error> {
    let addr = SocketAddr::new(state.config.host, state.config.port);
    let app = student_intake::build_app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
