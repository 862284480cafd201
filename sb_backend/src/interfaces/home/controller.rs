pub const WELCOME_MESSAGE: &str = "Welcome to the SafeBite - AI-powered Allergen Detection API!";

/// Liveness check.
pub async fn welcome_handler() -> &'static str {
    WELCOME_MESSAGE
}
