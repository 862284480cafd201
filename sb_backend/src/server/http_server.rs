use crate::error::{ErrorBackend, Result};
use crate::interfaces::{home, prediction};
use crate::server::app_state::AppState;
use crate::server::config::ServerConfig;
use axum::http::StatusCode;
use sb_core::server::routes::print_all_backend_api_paths;
use sb_inference::Predictor;
use std::sync::Arc;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Builds the application router over an already loaded predictor.
pub fn router(app_state: Arc<AppState>, request_timeout: Duration) -> axum::Router {
    axum::Router::new()
        .merge(home::route::routes())
        .merge(prediction::route::routes())
        .with_state(app_state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

/// Starts the prediction service.
///
/// # Arguments
/// * `predictor` - The loaded encoder/classifier pair, shared read-only by every handler.
/// * `config` - Bind address and request timeout.
///
/// # Returns
/// * `Result<()>` - `Ok` once the server shuts down, or an `ErrorBackend` if binding fails.
#[tokio::main]
pub async fn http_server_backend(predictor: Predictor, config: ServerConfig) -> Result<()> {
    let ServerConfig {
        host,
        port,
        protocol,
        request_timeout,
        ..
    } = config;

    let app_state = Arc::new(AppState::new(Arc::new(predictor)));
    let router = router(app_state, request_timeout);

    print_all_backend_api_paths();

    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
