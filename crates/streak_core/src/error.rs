use thiserror::Error;

#[derive(Error, Debug)]
pub enum StreakError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown match outcome code: {code}")]
    UnknownOutcome { code: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StreakError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        StreakError::InvalidArgument(msg.into())
    }

    /// Whether the caller can fix the problem by changing its input.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            StreakError::InvalidArgument(_) | StreakError::UnknownOutcome { .. } | StreakError::Config(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, StreakError>;
