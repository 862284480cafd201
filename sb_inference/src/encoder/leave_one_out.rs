use crate::artifact;
use crate::encoder::CategoricalEncoder;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tracing::info;

/// What to emit for a category the encoder never saw during fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// The global target mean.
    #[default]
    Value,
    ReturnNan,
    Error,
}

/// Target statistics of one category, as accumulated while fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub sum: f64,
    pub count: u64,
}

/// Leave-one-out target encoder, inference side only.
///
/// Without a target column the "leave one out" part does not apply and a known
/// category seen more than once is replaced by the mean target observed for it;
/// a category seen exactly once gets the global mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveOneOutEncoder {
    pub cols: Vec<String>,
    pub mean: f64,
    #[serde(default)]
    pub handle_unknown: HandleUnknown,
    pub mapping: BTreeMap<String, BTreeMap<String, CategoryStats>>,
}

impl LeaveOneOutEncoder {
    pub fn load(path: &Path) -> Result<Self> {
        let encoder: LeaveOneOutEncoder = artifact::from_file(path)?;
        encoder.validate()?;
        info!(
            "Encoder loaded from {} ({} columns)",
            path.display(),
            encoder.cols.len()
        );
        Ok(encoder)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cols.is_empty() {
            return Err(Error::InvalidEncoder("no columns".into()));
        }
        if !self.mean.is_finite() {
            return Err(Error::InvalidEncoder(format!(
                "global mean is not finite: {}",
                self.mean
            )));
        }
        let mut seen = HashSet::new();
        for col in &self.cols {
            if !seen.insert(col.as_str()) {
                return Err(Error::InvalidEncoder(format!("duplicate column '{col}'")));
            }
            let categories = self
                .mapping
                .get(col)
                .ok_or_else(|| Error::InvalidEncoder(format!("no mapping for column '{col}'")))?;
            if let Some((category, _)) = categories.iter().find(|(_, s)| !s.sum.is_finite()) {
                return Err(Error::InvalidEncoder(format!(
                    "non-finite sum for '{category}' in column '{col}'"
                )));
            }
        }
        Ok(())
    }

    fn encode(&self, column: &str, category: &str) -> Result<f64> {
        let categories = self
            .mapping
            .get(column)
            .ok_or_else(|| Error::UnknownColumn(column.to_string()))?;

        match categories.get(category).filter(|stats| stats.count > 0) {
            // Categories seen once encode as the global mean.
            Some(stats) if stats.count == 1 => Ok(self.mean),
            Some(stats) => Ok(stats.sum / stats.count as f64),
            None => match self.handle_unknown {
                HandleUnknown::Value => Ok(self.mean),
                HandleUnknown::ReturnNan => Ok(f64::NAN),
                HandleUnknown::Error => Err(Error::UnknownCategory {
                    column: column.to_string(),
                    category: category.to_string(),
                }),
            },
        }
    }
}

impl CategoricalEncoder for LeaveOneOutEncoder {
    fn columns(&self) -> Vec<&str> {
        self.cols.iter().map(String::as_str).collect()
    }

    fn transform(&self, row: &[(&str, &str)]) -> Result<Vec<f64>> {
        row.iter()
            .map(|(column, category)| self.encode(column, category))
            .collect()
    }
}
