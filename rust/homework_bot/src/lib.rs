pub mod app;
pub mod config;
pub mod error;
pub mod notify;
pub mod poller;
pub mod practicum;
pub mod response;
pub mod telemetry;
pub mod verdict;

pub use config::{check_tokens, BotConfig, Credentials, Settings};
pub use error::{ConfigError, FailureKind, PollError, StartupError};
pub use notify::{send_message, Notifier, TelegramNotifier};
pub use poller::{Outcome, Poller};
pub use practicum::{HomeworkApi, PracticumClient};
pub use response::{check_response, ApiAnswer};
pub use verdict::{parse_status, Verdict};
