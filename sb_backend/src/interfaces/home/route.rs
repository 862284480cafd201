use crate::{interfaces::home::controller::welcome_handler, server::app_state::AppState};
use axum::routing::get;
use sb_core::server::routes::BackendApiHome;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiHome::Welcome.path().as_str(),
        get(welcome_handler),
    )
}
