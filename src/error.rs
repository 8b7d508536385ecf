/// Application-level errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// Transport failure, non-success status, or unparsable payload.
    #[error("{message}")]
    RequestFailed { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl AppError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        AppError::RequestFailed {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_connect() {
            format!("Could not reach the recommendation service: {}", err)
        } else if err.is_decode() {
            format!("Malformed recommendation payload: {}", err)
        } else {
            format!("Recommendation request failed: {}", err)
        };
        AppError::RequestFailed { message }
    }
}

pub type AppResult<T> = Result<T, AppError>;
