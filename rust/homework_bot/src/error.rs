use thiserror::Error;

/// Startup configuration problems. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required tokens are missing: {}", .0.join(", "))]
    MissingTokens(Vec<&'static str>),
}

/// Failures before the loop starts.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Fatal: the process exits with status 1.
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] anyhow::Error),
}

/// Everything that can go wrong inside one poll iteration.
#[derive(Debug, Error)]
pub enum PollError {
    /// Transport failure: connect, timeout, body read.
    #[error("API request failed: {0}")]
    Request(String),

    #[error("API error. Status code: {0}")]
    Status(u16),

    /// The response, or one of its homework records, does not look like the API docs say.
    #[error("API response is of wrong type: {0}")]
    Shape(String),

    /// `homeworks` came back empty. Expected steady state, not a failure.
    #[error("API response is empty")]
    NothingNew { current_date: i64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// How the loop reacts to a [`PollError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Notified once per streak.
    Api,
    /// Logged at debug, never notified.
    Empty,
    /// Always notified.
    Other,
}

impl PollError {
    pub fn shape(reason: impl Into<String>) -> Self {
        PollError::Shape(reason.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            PollError::Request(_) | PollError::Status(_) | PollError::Shape(_) => FailureKind::Api,
            PollError::NothingNew { .. } => FailureKind::Empty,
            PollError::Other(_) => FailureKind::Other,
        }
    }
}
