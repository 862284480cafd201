use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use sb_core::server::payload::backend::predict_response::PredictResponse;
use sb_core::types::prediction_request::PredictionRequest;
use serde_json::json;
use std::sync::Arc;

pub async fn predict_handler(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<PredictionRequest>, JsonRejection>,
) -> ResultAPI {
    let request = payload?.0;
    let verdict = state.service_prediction.predict(&request)?;
    Ok(Json(json!(PredictResponse {
        result: verdict.to_string(),
    })))
}
