use anyhow::Result;

use gateway_server::infrastructure::logging::init_logging;
use gateway_server::infrastructure::settings::Settings;
use gateway_server::{AppState, run_http};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level, settings.log_format)?;

    run_http(&settings, AppState::default()).await
}
