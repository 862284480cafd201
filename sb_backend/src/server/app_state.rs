use crate::application::prediction::service::PredictionService;
use sb_inference::Predictor;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub service_prediction: PredictionService,
}
impl AppState {
    pub fn new(predictor: Arc<Predictor>) -> Self {
        AppState {
            service_prediction: PredictionService::new(predictor),
        }
    }
}
