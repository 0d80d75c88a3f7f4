use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use configuration::{PointRateTable, ServerConfig};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
/// The rate table is read-only for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    pub rates: Arc<PointRateTable>,
}

impl AppState {
    pub fn new(rates: PointRateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }
}

/// Builds the application routes.
pub fn build_router(state: AppState, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/dashboard", post(handlers::post_dashboard))
        .route("/api/owners", post(handlers::post_owners))
        .with_state(Arc::new(state))
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(body_limit))
}

/// The main function to configure and run the web server.
pub async fn run_server(config: &ServerConfig, rates: PointRateTable) -> anyhow::Result<()> {
    // Tracing is initialized by the binary before this is called.
    let app = build_router(AppState::new(rates), config.body_limit);

    tracing::info!("Web server listening on http://{}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
