use std::net::SocketAddr;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use direct_server::dataset;
use direct_server::web::{AppState, create_router};

/// Port served when DIRECT_PORT is not set.
const DEFAULT_PORT: u16 = 8088;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(data_path) = std::env::args().nth(1) else {
        error!("usage: direct-server <dataset-file>");
        std::process::exit(1);
    };

    let port = match std::env::var("DIRECT_PORT") {
        Ok(raw) => match raw.parse() {
            Ok(port) => port,
            Err(_) => {
                error!("DIRECT_PORT is not a valid port number: {raw}");
                std::process::exit(1);
            }
        },
        Err(_) => DEFAULT_PORT,
    };

    // The index must be fully built before the listener binds; a fatal
    // load error means we never serve a query.
    info!("loading route dataset from {data_path}");
    let (index, report) = match dataset::load_path(&data_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("failed to load dataset: {e}");
            std::process::exit(1);
        }
    };
    for warning in &report.warnings {
        warn!("{warning}");
    }
    info!(
        stations = index.station_count(),
        entries = report.entries_loaded,
        "route index built"
    );

    let state = AppState::new(index);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("direct bus route service listening on http://{addr}");
    info!("  GET /health                              - health check");
    info!("  GET /api/direct?dep_sid={{}}&arr_sid={{}} - connectivity query");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
