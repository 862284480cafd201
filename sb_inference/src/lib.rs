pub mod artifact;
pub mod classifier;
pub mod encoder;
pub mod error;
pub mod predictor;

pub use crate::predictor::Predictor;
