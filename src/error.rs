// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type shared by the session, engine and stores.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required registration field was missing.
    #[error("Invalid registration: {0}")]
    Validation(String),

    /// Login email does not match the locally persisted user.
    #[error("No local account matches that email")]
    AuthMismatch,

    /// The operation needs a signed-in user and there is none.
    #[error("No active session")]
    NoSession,

    /// The store rejected a read or a write.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl AppError {
    /// Whether the error came from the durable store.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, AppError::Persistence(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort_unstable();
        AppError::Validation(format!("missing {}", fields.join(", ")))
    }
}

/// Result type alias for session and store operations
pub type Result<T> = std::result::Result<T, AppError>;
