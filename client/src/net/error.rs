//! Error taxonomy for calls against the wall backend.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// An action that requires the Telegram host to identify the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    Like,
    Delete,
}

impl std::fmt::Display for GuardedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Like => f.write_str("like photos"),
            Self::Delete => f.write_str("delete photos"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    /// The backend answered `success: false`.
    #[error("{0}")]
    Rejected(String),
    #[error("open the wall through the Telegram bot to {0}")]
    NotSignedIn(GuardedAction),
    #[error("network calls are only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a rejection from the backend's optional `error` field.
    #[must_use]
    pub fn rejected(message: Option<String>) -> Self {
        Self::Rejected(message.filter(|m| !m.is_empty()).unwrap_or_else(|| "request was rejected".to_owned()))
    }

    /// Text for a `window.alert`, prefixed the way the wall flags problems.
    #[must_use]
    pub fn alert_text(&self) -> String {
        match self {
            Self::NotSignedIn(_) => format!("⚠️ {self}"),
            _ => format!("❌ {self}"),
        }
    }
}
