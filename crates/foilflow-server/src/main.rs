//! Binary entrypoint for the Foil Flow HTTP server.
//!
//! Configuration comes from environment variables, see
//! [`foilflow_server::config`].

use foilflow_server::config::ServerConfig;
use foilflow_server::router::build_router;
use foilflow_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let state = match AppState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("failed to initialize application state: {}", e);
            std::process::exit(1);
        }
    };

    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!("foilflow server starting on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
