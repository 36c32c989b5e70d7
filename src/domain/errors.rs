use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{store} store unavailable: {reason}")]
    StoreUnavailable { store: &'static str, reason: String },

    #[error("{store} store timed out")]
    StoreTimeout { store: &'static str },

    #[error("Internal error: {0}")]
    Internal(String),
}
