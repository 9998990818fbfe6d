use std::time::Duration;

use thiserror::Error;

pub const GENERIC_FAILURE_MESSAGE: &str =
    "Oops! Something went wrong while generating scenarios. Please try again.";

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("no API credential was supplied")]
    MissingCredential,
    #[error("provider error: {0}")]
    Provider(#[from] ProviderFailure),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl GenerationError {
    /// Text that is safe to show an end user. Provider and parsing failures
    /// collapse to the same message; the detail goes to the log instead.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::MissingCredential => "An API key is required to generate scenarios.",
            GenerationError::Provider(_) | GenerationError::MalformedResponse(_) => GENERIC_FAILURE_MESSAGE,
        }
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, GenerationError::MissingCredential)
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        GenerationError::MalformedResponse(msg.into())
    }
}

/// Why the outbound provider call did not yield a text payload.
#[derive(Error, Debug)]
pub enum ProviderFailure {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("API reported {code}: {message}")]
    Api { code: String, message: String },
    #[error("prompt was blocked: {0}")]
    Blocked(String),
    #[error("response contained no text")]
    Empty,
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("request was cancelled")]
    Cancelled,
}
