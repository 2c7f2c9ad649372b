use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, Recipient},
};
use tracing::{debug, error};

/// Delivers plain-text messages to the one configured chat.
#[async_trait]
pub trait Notifier {
    async fn notify(&self, message: &str) -> anyhow::Result<()>;
}

pub struct TelegramNotifier {
    bot: Bot,
    chat: Recipient,
}

impl TelegramNotifier {
    pub fn new(token: impl Into<String>, chat_id: &str) -> Self {
        Self { bot: Bot::new(token), chat: parse_recipient(chat_id) }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> anyhow::Result<()> {
        self.bot.send_message(self.chat.clone(), message).await?;
        Ok(())
    }
}

/// Numeric ids address users and groups; anything else is a channel username.
pub fn parse_recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) if chat_id.starts_with('@') => Recipient::ChannelUsername(chat_id.to_string()),
        Err(_) => Recipient::ChannelUsername(format!("@{}", chat_id)),
    }
}

/// Sends `message`, logging the result. Delivery failures stop here.
pub async fn send_message<N>(notifier: &N, message: &str)
where
    N: Notifier + ?Sized + Sync,
{
    match notifier.notify(message).await {
        Ok(()) => debug!("Message sent: {}", message),
        Err(e) => error!("Can not send message: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_chat_id_is_a_chat() {
        assert_eq!(parse_recipient("123456"), Recipient::Id(ChatId(123456)));
        assert_eq!(parse_recipient("-1001234"), Recipient::Id(ChatId(-1001234)));
    }

    #[test]
    fn non_numeric_chat_id_is_a_channel() {
        assert_eq!(parse_recipient("@reviews"), Recipient::ChannelUsername("@reviews".into()));
        assert_eq!(parse_recipient("reviews"), Recipient::ChannelUsername("@reviews".into()));
    }
}
