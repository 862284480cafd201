pub(crate) mod random_forest;
pub(crate) mod tree;

pub use crate::classifier::random_forest::RandomForest;
pub use crate::classifier::tree::{DecisionTree, Node};

use crate::error::Result;

/// A model mapping one numeric feature row to a class label.
pub trait Classifier: Send + Sync {
    fn n_features(&self) -> usize;

    /// Column names the model was trained on, when the artifact records them.
    fn feature_names(&self) -> Option<&[String]>;

    fn predict(&self, row: &[f64]) -> Result<i64>;
}
