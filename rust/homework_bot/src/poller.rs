use std::time::Duration;
use tracing::{debug, error, info};

use crate::{
    error::{FailureKind, PollError},
    notify::{send_message, Notifier},
    practicum::HomeworkApi,
    response::check_response,
    verdict::parse_status,
};

/// What one iteration ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// New verdicts were sent to the chat.
    Delivered,
    /// No new homeworks since the watermark.
    NothingNew,
    /// An API failure inside an already reported streak.
    Suppressed,
    /// A failure was sent to the chat.
    Reported,
}

pub struct Poller<A, N> {
    api: A,
    notifier: N,
    retry_period: Duration,
    watermark: i64,
    api_error_streak: bool,
}

impl<A, N> Poller<A, N>
where
    A: HomeworkApi + Send + Sync,
    N: Notifier + Send + Sync,
{
    pub fn new(api: A, notifier: N, retry_period: Duration, watermark: i64) -> Self {
        Self { api, notifier, retry_period, watermark, api_error_streak: false }
    }

    pub fn watermark(&self) -> i64 {
        self.watermark
    }

    pub fn in_error_streak(&self) -> bool {
        self.api_error_streak
    }

    /// Polls forever.
    pub async fn run(mut self) {
        info!("polling every {:?} from {}", self.retry_period, self.watermark);
        loop {
            self.step().await;
        }
    }

    /// One iteration followed by the fixed pause, whatever the iteration did.
    pub async fn step(&mut self) -> Outcome {
        let outcome = self.tick().await;
        tokio::time::sleep(self.retry_period).await;
        outcome
    }

    /// One fetch / validate / format / notify pass. Never fails; every error is handled here.
    pub async fn tick(&mut self) -> Outcome {
        match self.poll_once().await {
            Ok(message) => {
                self.api_error_streak = false;
                send_message(&self.notifier, &message).await;
                Outcome::Delivered
            }
            Err(e) => self.handle_failure(e).await,
        }
    }

    async fn poll_once(&mut self) -> Result<String, PollError> {
        let response = self.api.fetch(self.watermark).await?;
        let answer = match check_response(&response) {
            Ok(answer) => answer,
            Err(e) => {
                if let PollError::NothingNew { current_date } = e {
                    self.watermark = current_date;
                }
                return Err(e);
            }
        };
        // A batch with a bad record is reported once and not fetched again.
        self.watermark = answer.current_date;

        let message = answer
            .homeworks
            .iter()
            .map(parse_status)
            .collect::<Result<Vec<_>, _>>()?
            .join("\n");
        Ok(message)
    }

    async fn handle_failure(&mut self, e: PollError) -> Outcome {
        match e.kind() {
            FailureKind::Empty => {
                debug!("New statuses are not present");
                Outcome::NothingNew
            }
            FailureKind::Api => {
                error!("{}", e);
                if self.api_error_streak {
                    return Outcome::Suppressed;
                }
                self.api_error_streak = true;
                send_message(&self.notifier, &failure_message(&e)).await;
                Outcome::Reported
            }
            FailureKind::Other => {
                error!("unexpected failure: {:#}", e);
                send_message(&self.notifier, &failure_message(&e)).await;
                Outcome::Reported
            }
        }
    }
}

pub fn failure_message(e: &PollError) -> String {
    format!("Сбой в работе программы: {}", e)
}
