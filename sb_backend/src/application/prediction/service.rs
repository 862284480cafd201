use crate::error::Result;
use sb_core::types::prediction_request::PredictionRequest;
use sb_core::types::verdict::Verdict;
use sb_inference::Predictor;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct PredictionService {
    predictor: Arc<Predictor>,
}

impl PredictionService {
    pub fn new(predictor: Arc<Predictor>) -> Self {
        Self { predictor }
    }

    pub fn predict(&self, req: &PredictionRequest) -> Result<Verdict> {
        let verdict = self.predictor.predict(req)?;
        info!(
            "Prediction for '{}' (allergens: '{}'): {}",
            req.food_product, req.allergens, verdict
        );
        Ok(verdict)
    }
}
