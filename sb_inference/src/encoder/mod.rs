pub(crate) mod leave_one_out;

pub use crate::encoder::leave_one_out::{CategoryStats, HandleUnknown, LeaveOneOutEncoder};

use crate::error::Result;

/// Turns text categories into numeric columns for the classifier.
pub trait CategoricalEncoder: Send + Sync {
    /// Columns the encoder was fitted on.
    fn columns(&self) -> Vec<&str>;

    /// Encodes one row given as `(column, category)` pairs. The output keeps the
    /// order of `row`.
    fn transform(&self, row: &[(&str, &str)]) -> Result<Vec<f64>>;
}
