use crate::error::Result;
use sb_core::server::default_config::{
    DEFAULT_ENCODER_PATH, DEFAULT_MODEL_PATH, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
    env_or, env_parse_or,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub protocol: String,
    pub encoder_path: PathBuf,
    pub model_path: PathBuf,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let timeout_secs: u64 =
            env_parse_or("SAFEBITE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        Ok(Self {
            host: env_or("HOST", DEFAULT_SERVER_BACKEND_HOST),
            port: env_parse_or("PORT", DEFAULT_SERVER_BACKEND_PORT)?,
            protocol: String::from(DEFAULT_SERVER_BACKEND_PROTOCOL),
            encoder_path: PathBuf::from(env_or("SAFEBITE_ENCODER_PATH", DEFAULT_ENCODER_PATH)),
            model_path: PathBuf::from(env_or("SAFEBITE_MODEL_PATH", DEFAULT_MODEL_PATH)),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
