use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Invalid environment value for {key}: {value}")]
    InvalidEnvValue { key: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_env_value_message() {
        let err = ErrorCore::InvalidEnvValue {
            key: "PORT".into(),
            value: "five thousand".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid environment value for PORT: five thousand"
        );
    }
}
