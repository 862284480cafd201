use std::env;
use std::str::FromStr;

use tracing::info;

use crate::error::{ErrorCore, Result};

pub const DEFAULT_SERVER_BACKEND_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "5000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: &str = "30";

pub const DEFAULT_ENCODER_PATH: &str = "model/leave_one_out_encoder.json";
pub const DEFAULT_MODEL_PATH: &str = "model/random_forest_model.json";

pub const DEFAULT_CLIENT_API_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 30;

/// Reads `key` from the environment, falling back to `default` when unset.
pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        String::from(default)
    })
}

/// Like [`env_or`] but parses the value. A value that does not parse is an error,
/// not a silent fallback.
pub fn env_parse_or<T: FromStr>(key: &str, default: &str) -> Result<T> {
    let value = env_or(key, default);
    value.parse::<T>().map_err(|_| ErrorCore::InvalidEnvValue {
        key: key.to_string(),
        value,
    })
}
