use thiserror::Error;

/// Checks that fail before anything is sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please select 1-3 categories")]
    SelectionSize,
    #[error("Authentication error: CSRF token missing")]
    MissingCsrfToken,
    #[error("Please sign in first")]
    NotSignedIn,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Network unreachable or a body that is not JSON. `cause` is for logs only.
    #[error("Network error. Please check your connection and try again.")]
    Transport { cause: String },

    /// Non-2xx response.
    #[error("{}", .message.as_deref().unwrap_or("Request failed"))]
    Rejected { status: u16, message: Option<String> },
}

impl AppError {
    pub(crate) fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport {
            cause: cause.to_string(),
        }
    }

    /// Text for the notification channel. Server rejections without a message
    /// fall back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::Rejected { message: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, AppError>;
