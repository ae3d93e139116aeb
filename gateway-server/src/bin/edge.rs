//! Edge entry point: one JSON event per stdin line, one JSON response per stdout line.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use gateway_server::AppState;
use gateway_server::edge::{EdgeDispatcher, EdgeError, EdgeRequest, EdgeResponse};
use gateway_server::infrastructure::logging::init_logging;
use gateway_server::infrastructure::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;

    init_logging(&settings.log_level, settings.log_format)?;

    let dispatcher = EdgeDispatcher::new(&settings, AppState::default());
    info!(environment = settings.environment.as_str(), "edge dispatcher ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<EdgeRequest>(&line) {
            Ok(event) => match dispatcher.dispatch(event).await {
                Ok(response) => response,
                Err(err) => {
                    warn!(error = %err, "edge event rejected");
                    EdgeResponse::rejected(&err)
                }
            },
            Err(err) => {
                let err = EdgeError::from(err);
                warn!(error = %err, "edge event rejected");
                EdgeResponse::rejected(&err)
            }
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        stdout.write_all(&out).await?;
        stdout.flush().await?;
    }

    Ok(())
}
