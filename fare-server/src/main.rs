use std::net::SocketAddr;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fare_server::config::ServerConfig;
use fare_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    // Serve without a planner rather than exit, so /health still answers
    let state = match config.build_planner() {
        Ok(planner) => AppState::new(planner),
        Err(e) => {
            error!(
                error = %e,
                distance_file = %config.distance_file.display(),
                "Fare data unavailable, fare endpoints will answer 503"
            );
            AppState::unavailable()
        }
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(%addr, resolver = %config.resolver, "Fare server listening");
    info!("  GET /health          - Health check");
    info!("  GET /hankyu/stations - List stations");
    info!("  GET /hankyu/calc     - Price a journey (start, goal, stops)");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
