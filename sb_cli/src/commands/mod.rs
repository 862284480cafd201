pub mod form;
pub mod health;
pub mod predict;

use crate::client::CliClient;
use crate::utils::banner::{error_banner, verdict_banner};
use sb_core::types::prediction_request::PredictionRequest;

/// Sends one request and renders whatever came back as a banner line.
/// A failed prediction never aborts the session.
pub(crate) async fn submit(cli_client: &CliClient, request: &PredictionRequest) -> String {
    match cli_client.predict(request).await {
        Ok(result) => verdict_banner(&result),
        Err(e) => error_banner(e),
    }
}
