use sb_core::types::verdict::Verdict;
use std::fmt::Display;

/// Success banner for a verdict string returned by the service.
pub fn verdict_banner(result: &str) -> String {
    match Verdict::from_message(result) {
        Verdict::ContainsAllergens => format!("✅ {result}. Please proceed with caution! 🚨"),
        Verdict::NoAllergens => format!("❌ {result}. It's safe to consume! 🎉"),
    }
}

pub fn error_banner(err: impl Display) -> String {
    format!("Error during prediction: {err}")
}
