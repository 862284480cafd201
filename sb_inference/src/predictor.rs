use crate::classifier::{Classifier, RandomForest};
use crate::encoder::{CategoricalEncoder, LeaveOneOutEncoder};
use crate::error::{Error, Result};
use sb_core::types::prediction_request::{CATEGORICAL_COLUMNS, FEATURE_COLUMNS, PredictionRequest};
use sb_core::types::verdict::Verdict;
use std::path::Path;
use tracing::debug;

/// Encoder and classifier pair serving allergen predictions.
///
/// Built once at startup and only read afterwards, so a single instance can be
/// shared by every request handler.
pub struct Predictor {
    encoder: Box<dyn CategoricalEncoder>,
    classifier: Box<dyn Classifier>,
}

impl Predictor {
    /// Pairs an encoder with a classifier after checking both agree with the
    /// request schema.
    pub fn new(
        encoder: impl CategoricalEncoder + 'static,
        classifier: impl Classifier + 'static,
    ) -> Result<Self> {
        let encoder_columns = encoder.columns();
        if let Some(missing) = CATEGORICAL_COLUMNS
            .iter()
            .find(|col| !encoder_columns.contains(*col))
        {
            return Err(Error::SchemaMismatch(format!(
                "encoder was not fitted on column '{missing}'"
            )));
        }

        if classifier.n_features() != FEATURE_COLUMNS.len() {
            return Err(Error::SchemaMismatch(format!(
                "model expects {} features, requests provide {}",
                classifier.n_features(),
                FEATURE_COLUMNS.len()
            )));
        }
        if let Some(names) = classifier.feature_names() {
            if names.iter().map(String::as_str).ne(FEATURE_COLUMNS) {
                return Err(Error::SchemaMismatch(format!(
                    "model feature order {names:?} differs from {FEATURE_COLUMNS:?}"
                )));
            }
        }

        Ok(Self {
            encoder: Box::new(encoder),
            classifier: Box::new(classifier),
        })
    }

    /// Loads both artifacts from disk. Any failure here is fatal for the service.
    pub fn load(encoder_path: &Path, model_path: &Path) -> Result<Self> {
        let encoder = LeaveOneOutEncoder::load(encoder_path)?;
        let classifier = RandomForest::load(model_path)?;
        Self::new(encoder, classifier)
    }

    /// Builds the feature row for `request`: numeric columns as given, then the
    /// encoded categorical columns.
    pub fn features(&self, request: &PredictionRequest) -> Result<Vec<f64>> {
        let encoded = self.encoder.transform(&request.categorical_values())?;
        let mut row: Vec<f64> = request.numeric_values().iter().map(|(_, v)| *v).collect();
        row.extend(encoded);
        Ok(row)
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<Verdict> {
        let row = self.features(request)?;
        let label = self.classifier.predict(&row)?;
        debug!("Feature row {:?} classified as {}", row, label);
        Ok(Verdict::from_class(label))
    }
}
