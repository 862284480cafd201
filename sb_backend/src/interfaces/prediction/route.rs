use crate::{
    interfaces::prediction::controller::predict_handler, server::app_state::AppState,
};
use axum::routing::post;
use sb_core::server::routes::BackendApiPrediction;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiPrediction::Predict.path().as_str(),
        post(predict_handler),
    )
}
