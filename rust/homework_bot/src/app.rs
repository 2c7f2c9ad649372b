use crate::{
    config::{check_tokens, BotConfig},
    error::StartupError,
    notify::TelegramNotifier,
    poller::Poller,
    practicum::PracticumClient,
};

pub type HomeworkPoller = Poller<PracticumClient, TelegramNotifier>;

/// Checks the tokens, then builds the clients and the poller. No client exists if the check fails.
pub fn startup(cfg: &BotConfig, started_at: i64) -> Result<HomeworkPoller, StartupError> {
    check_tokens(&cfg.credentials)?;

    let api = PracticumClient::new(
        cfg.settings.endpoint.clone(),
        cfg.credentials.practicum_token.clone(),
        cfg.settings.http_timeout(),
    )?;
    let notifier = TelegramNotifier::new(
        cfg.credentials.telegram_token.clone(),
        &cfg.credentials.telegram_chat_id,
    );
    Ok(Poller::new(api, notifier, cfg.settings.retry_period(), started_at))
}
