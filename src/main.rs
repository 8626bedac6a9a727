use std::error::Error;

use api::{AppConfig, AppState, core::telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file if present; defaults cover the rest.
    let dotenv = dotenvy::dotenv();

    telemetry::init()?;

    if let Err(err) = dotenv {
        info!(reason = %err, ".env not loaded, using process environment");
    }

    let config = AppConfig::from_env()?;
    info!(
        addr = %config.api_address,
        service = %config.service_name,
        "starting chat backend"
    );

    let state = AppState::from_config(config)?;
    api::start(state).await?;

    Ok(())
}
