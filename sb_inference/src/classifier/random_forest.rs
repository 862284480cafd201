use crate::artifact;
use crate::classifier::Classifier;
use crate::classifier::tree::DecisionTree;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Random forest classifier.
///
/// Each tree votes with the normalised class distribution of the leaf a row
/// lands in; the forest averages the votes and picks the most probable class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    pub n_features: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    pub classes: Vec<i64>,
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn load(path: &Path) -> Result<Self> {
        let forest: RandomForest = artifact::from_file(path)?;
        forest.validate()?;
        info!(
            "Model loaded from {} ({} trees, {} features, classes {:?})",
            path.display(),
            forest.trees.len(),
            forest.n_features,
            forest.classes
        );
        Ok(forest)
    }

    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(Error::InvalidModel("no classes".into()));
        }
        if self.trees.is_empty() {
            return Err(Error::InvalidModel("no trees".into()));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.n_features {
                return Err(Error::InvalidModel(format!(
                    "{} feature names for {} features",
                    names.len(),
                    self.n_features
                )));
            }
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, self.classes.len())
                .map_err(|reason| Error::InvalidModel(format!("tree {i}: {reason}")))?;
        }
        Ok(())
    }

    pub fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>> {
        if row.len() != self.n_features {
            return Err(Error::FeatureCountMismatch {
                expected: self.n_features,
                found: row.len(),
            });
        }
        let mut proba = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            for (acc, p) in proba.iter_mut().zip(tree.predict_proba(row)?) {
                *acc += p;
            }
        }
        let n_trees = self.trees.len() as f64;
        proba.iter_mut().for_each(|p| *p /= n_trees);
        Ok(proba)
    }
}

impl Classifier for RandomForest {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict(&self, row: &[f64]) -> Result<i64> {
        let proba = self.predict_proba(row)?;
        // First maximum wins on ties.
        let mut best = 0;
        for (i, p) in proba.iter().enumerate().skip(1) {
            if *p > proba[best] {
                best = i;
            }
        }
        self.classes
            .get(best)
            .copied()
            .ok_or_else(|| Error::InvalidModel("no classes".into()))
    }
}
