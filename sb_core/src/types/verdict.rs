use std::fmt;

pub const CONTAINS_ALLERGENS: &str = "This product contains allergens";
pub const NO_ALLERGENS: &str = "This product does not contain allergens";

/// Phrase the client looks for in a verdict to decide which banner to show.
pub const CONTAINS_MARKER: &str = "contains allergens";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    ContainsAllergens,
    NoAllergens,
}

impl Verdict {
    /// Class `0` of the trained model means the product contains allergens.
    /// Every other label is read as allergen-free.
    pub fn from_class(label: i64) -> Self {
        if label == 0 {
            Verdict::ContainsAllergens
        } else {
            Verdict::NoAllergens
        }
    }

    /// Classifies verdict text as returned by the service.
    pub fn from_message(message: &str) -> Self {
        if message.contains(CONTAINS_MARKER) {
            Verdict::ContainsAllergens
        } else {
            Verdict::NoAllergens
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::ContainsAllergens => CONTAINS_ALLERGENS,
            Verdict::NoAllergens => NO_ALLERGENS,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
