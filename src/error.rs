use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Request rejected ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("You must be logged in")]
    NotLoggedIn,
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl AppError {
    /// Message shown to the viewer. Server-provided messages are surfaced
    /// verbatim when present, otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Api { message, .. } if !message.is_empty() => message.clone(),
            AppError::Api { .. } | AppError::Network(_) => "Something went wrong".to_string(),
            other => other.to_string(),
        }
    }
}
