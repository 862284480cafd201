use sb_core::logger::init_tracing;
use sb_inference::Predictor;
use tracing::{error, info};

use crate::error::Result;
use crate::server::config::ServerConfig;

mod application;
mod error;
mod interfaces;
mod server;

fn run() -> Result<()> {
    init_tracing();
    let config = ServerConfig::from_env()?;

    // Both artifacts must load before anything binds.
    let predictor = match Predictor::load(&config.encoder_path, &config.model_path) {
        Ok(predictor) => predictor,
        Err(e) => {
            error!(
                "Failed to load artifacts (encoder: {}, model: {}): {e}",
                config.encoder_path.display(),
                config.model_path.display()
            );
            return Err(e.into());
        }
    };
    info!("Predictor ready");

    server::http_server::http_server_backend(predictor, config)
}

fn main() {
    if let Err(e) = run() {
        error!("Application error: {e}");
        std::process::exit(1);
    }
}
