use anyhow::Result;
use homework_bot::{app, telemetry, BotConfig, StartupError};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let cfg = BotConfig::from_env();
    let started_at = chrono::Utc::now().timestamp();
    let poller = match app::startup(&cfg, started_at) {
        Ok(poller) => poller,
        Err(StartupError::Config(e)) => {
            error!("{}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    info!("settings: {}", serde_json::to_string(&cfg.settings)?);

    poller.run().await;
    Ok(())
}
