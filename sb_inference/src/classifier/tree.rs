use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Samples with `row[feature] <= threshold` go to `left`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Per-class weights of the training samples that reached this leaf.
    Leaf { value: Vec<f64> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<Node>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Checks the node layout. Children must come after their parent, which
    /// rules out cycles and bounds every walk by the node count.
    pub fn validate(&self, n_features: usize, n_classes: usize) -> std::result::Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }
        let len = self.nodes.len();
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= n_features {
                        return Err(format!(
                            "node {idx} splits on feature {feature}, model has {n_features}"
                        ));
                    }
                    if threshold.is_nan() {
                        return Err(format!("node {idx} has a NaN threshold"));
                    }
                    for child in [left, right] {
                        if *child <= idx || *child >= len {
                            return Err(format!("node {idx} has invalid child {child}"));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(format!(
                            "leaf {idx} has {} class weights, expected {n_classes}",
                            value.len()
                        ));
                    }
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) {
                        return Err(format!("leaf {idx} has a negative or non-finite weight"));
                    }
                    if value.iter().sum::<f64>() <= 0.0 {
                        return Err(format!("leaf {idx} has no weight"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Walks the tree for `row` and returns the weights of the leaf reached.
    pub fn leaf(&self, row: &[f64]) -> Result<&[f64]> {
        let mut idx = 0;
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = row.get(*feature).ok_or(Error::FeatureCountMismatch {
                        expected: feature + 1,
                        found: row.len(),
                    })?;
                    // NaN compares false and goes right.
                    idx = if x <= threshold { *left } else { *right };
                }
                Some(Node::Leaf { value }) => return Ok(value.as_slice()),
                None => break,
            }
        }
        Err(Error::InvalidModel(format!("walk did not reach a leaf (stopped at node {idx})")))
    }

    /// Class distribution of the leaf reached by `row`, normalised to sum to 1.
    pub fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>> {
        let value = self.leaf(row)?;
        let total: f64 = value.iter().sum();
        Ok(value.iter().map(|v| v / total).collect())
    }
}
