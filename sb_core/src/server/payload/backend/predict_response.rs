use serde::{Deserialize, Serialize};

/// Body of a successful `POST /predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub result: String,
}

/// Body of a failed request, returned with HTTP 500.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Either shape the service may answer `POST /predict` with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PredictOutcome {
    Result(PredictResponse),
    Error(ErrorResponse),
}
